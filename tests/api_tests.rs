//! Integration tests for the resource services.
//!
//! Each service is exercised against a wiremock server that mimics the
//! Bank Account Data endpoints.
//!
//! Run with: cargo test --test api_tests

use std::sync::Once;

use chrono::{NaiveDate, TimeZone, Utc};
use rust_decimal_macros::dec;
use serde_json::json;
use tracing_subscriber::EnvFilter;
use wiremock::matchers::{body_json, method, path, query_param, query_param_is_missing};
use wiremock::{Mock, MockServer, ResponseTemplate};

use bankdata_rs::prelude::*;

static INIT: Once = Once::new();

/// Initialize logging for tests
fn init_logging() {
    INIT.call_once(|| {
        tracing_subscriber::fmt()
            .with_env_filter(EnvFilter::from_default_env())
            .with_test_writer()
            .try_init()
            .ok();
    });
}

async fn setup_with(config: ClientConfig) -> (MockServer, BankDataClient) {
    init_logging();
    let server = MockServer::start().await;

    Mock::given(method("POST"))
        .and(path("/api/v2/token/new/"))
        .respond_with(ResponseTemplate::new(200).set_body_json(json!({"access": "tok123"})))
        .expect(1)
        .mount(&server)
        .await;

    let client = BankDataClient::with_config(
        Credentials::new("abc", "xyz"),
        config.with_base_url(server.uri()),
    )
    .expect("client should build");
    (server, client)
}

async fn setup() -> (MockServer, BankDataClient) {
    setup_with(ClientConfig::default()).await
}

// ============================================================================
// INSTITUTIONS SERVICE TESTS
// ============================================================================

mod institutions_tests {
    use super::*;

    #[tokio::test]
    async fn test_list_by_country() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/institutions/"))
            .and(query_param("country", "gb"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!([
                {
                    "id": "MONZO_MONZGB2L",
                    "name": "Monzo",
                    "bic": "MONZGB2L",
                    "transaction_total_days": "540",
                    "countries": ["GB"],
                    "logo": "https://cdn.example/monzo.png"
                },
                {"id": "REVOLUT_REVOGB21", "name": "Revolut", "countries": ["GB"]}
            ])))
            .expect(1)
            .mount(&server)
            .await;

        let banks = client.institutions().list("gb").await.unwrap();
        assert_eq!(banks.len(), 2);
        assert_eq!(banks[0].id.as_str(), "MONZO_MONZGB2L");
        assert_eq!(banks[0].history_days(), Some(540));
        assert!(banks[1].bic.is_none());
    }

    #[tokio::test]
    async fn test_get_institution() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/institutions/SANDBOXFINANCE_SFIN0000/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "SANDBOXFINANCE_SFIN0000",
                "name": "Sandbox Finance",
                "countries": ["XX"]
            })))
            .mount(&server)
            .await;

        let bank = client
            .institutions()
            .get(&InstitutionId::new("SANDBOXFINANCE_SFIN0000"))
            .await
            .unwrap()
            .expect("institution body");
        assert_eq!(bank.name, "Sandbox Finance");
    }

    #[tokio::test]
    async fn test_unknown_institution_is_http_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/institutions/NOPE/"))
            .respond_with(ResponseTemplate::new(404).set_body_json(json!({"detail": "Not found."})))
            .mount(&server)
            .await;

        let err = client
            .institutions()
            .get(&InstitutionId::new("NOPE"))
            .await
            .unwrap_err();
        assert!(matches!(err, Error::Http(_)));
        assert_eq!(err.status(), Some(404));
    }
}

// ============================================================================
// AGREEMENTS SERVICE TESTS
// ============================================================================

mod agreements_tests {
    use super::*;

    fn agreement_json(accepted: Option<&str>) -> serde_json::Value {
        json!({
            "id": "ag-1",
            "created": "2024-02-01T09:30:00.000Z",
            "institution_id": "SANDBOXFINANCE_SFIN0000",
            "max_historical_days": 180,
            "access_valid_for_days": 30,
            "access_scope": ["balances", "transactions"],
            "accepted": accepted
        })
    }

    #[tokio::test]
    async fn test_create_agreement() {
        let (server, client) = setup().await;

        Mock::given(method("POST"))
            .and(path("/api/v2/agreements/enduser/"))
            .and(body_json(json!({
                "institutionId": "SANDBOXFINANCE_SFIN0000",
                "maxHistoricalDays": 180,
                "accessValidForDays": 30,
                "accessScope": ["balances", "transactions"]
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(agreement_json(None)))
            .expect(1)
            .mount(&server)
            .await;

        let request = NewAgreement::new("SANDBOXFINANCE_SFIN0000")
            .max_historical_days(180)
            .access_valid_for_days(30)
            .access_scope(vec![AccessScope::Balances, AccessScope::Transactions]);

        let agreement = client.agreements().create(&request).await.unwrap().unwrap();
        assert_eq!(agreement.id.as_str(), "ag-1");
        assert_eq!(agreement.max_historical_days, 180);
        assert!(!agreement.is_accepted());
    }

    #[tokio::test]
    async fn test_accept_agreement() {
        let (server, client) = setup().await;

        Mock::given(method("PUT"))
            .and(path("/api/v2/agreements/enduser/ag-1/accept/"))
            .and(body_json(json!({"userAgent": "Mozilla/5.0", "ipAddress": "203.0.113.7"})))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(agreement_json(Some("2024-02-02T10:00:00Z"))),
            )
            .expect(1)
            .mount(&server)
            .await;

        let accepted = client
            .agreements()
            .accept(
                &AgreementId::new("ag-1"),
                &AcceptAgreement {
                    user_agent: "Mozilla/5.0".to_string(),
                    ip_address: "203.0.113.7".to_string(),
                },
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(
            accepted.accepted,
            Some(Utc.with_ymd_and_hms(2024, 2, 2, 10, 0, 0).unwrap())
        );
    }

    #[tokio::test]
    async fn test_accept_rejected_keeps_body() {
        let (server, client) = setup().await;

        Mock::given(method("PUT"))
            .and(path("/api/v2/agreements/enduser/ag-1/accept/"))
            .respond_with(ResponseTemplate::new(403).set_body_string("Agreement already accepted"))
            .mount(&server)
            .await;

        let err = client
            .agreements()
            .accept(
                &AgreementId::new("ag-1"),
                &AcceptAgreement {
                    user_agent: "ua".to_string(),
                    ip_address: "127.0.0.1".to_string(),
                },
            )
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(403));
        assert_eq!(err.response_body(), Some("Agreement already accepted"));
    }

    #[tokio::test]
    async fn test_list_and_delete_agreements() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/agreements/enduser/"))
            .and(query_param("limit", "100"))
            .and(query_param("offset", "0"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "count": 1,
                "next": null,
                "previous": null,
                "results": [agreement_json(None)]
            })))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/v2/agreements/enduser/ag-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "summary": "End User Agreement deleted",
                "detail": "End User Agreement ag-1 deleted"
            })))
            .expect(1)
            .mount(&server)
            .await;

        let agreements = client.agreements().list(None).collect_all().await.unwrap();
        assert_eq!(agreements.len(), 1);

        client.agreements().delete(&agreements[0].id).await.unwrap();
    }
}

// ============================================================================
// REQUISITIONS SERVICE TESTS
// ============================================================================

mod requisitions_tests {
    use super::*;

    #[tokio::test]
    async fn test_create_get_delete_requisition() {
        let (server, client) = setup().await;
        let body = json!({
            "id": "req-1",
            "created": "2024-05-04T10:00:00Z",
            "redirect": "https://app.example/cb",
            "status": "CR",
            "institution_id": "SANDBOXFINANCE_SFIN0000",
            "agreement": "ag-1",
            "reference": "user-42",
            "accounts": [],
            "link": "https://ob.example/psd2/start/req-1/SANDBOXFINANCE_SFIN0000"
        });

        Mock::given(method("POST"))
            .and(path("/api/v2/requisitions/"))
            .and(body_json(json!({
                "redirect": "https://app.example/cb",
                "institutionId": "SANDBOXFINANCE_SFIN0000",
                "reference": "user-42",
                "agreement": "ag-1"
            })))
            .respond_with(ResponseTemplate::new(201).set_body_json(body.clone()))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("GET"))
            .and(path("/api/v2/requisitions/req-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(body))
            .expect(1)
            .mount(&server)
            .await;

        Mock::given(method("DELETE"))
            .and(path("/api/v2/requisitions/req-1/"))
            .respond_with(ResponseTemplate::new(204))
            .expect(1)
            .mount(&server)
            .await;

        let created = client
            .requisitions()
            .create(
                &NewRequisition::new("https://app.example/cb", "SANDBOXFINANCE_SFIN0000")
                    .reference("user-42")
                    .agreement("ag-1"),
            )
            .await
            .unwrap()
            .unwrap();
        assert_eq!(created.status, RequisitionStatus::Created);
        assert!(created.link.is_some());

        let fetched = client.requisitions().get(&created.id).await.unwrap().unwrap();
        assert_eq!(fetched.reference.as_deref(), Some("user-42"));

        client.requisitions().delete(&created.id).await.unwrap();
    }

    #[tokio::test]
    async fn test_duplicate_reference_is_request_failed() {
        let (server, client) = setup().await;
        let error_body = r#"{"reference":{"summary":"Client reference must be unique","detail":"Client reference 'user-42' already exists"},"status_code":400}"#;

        Mock::given(method("POST"))
            .and(path("/api/v2/requisitions/"))
            .respond_with(ResponseTemplate::new(400).set_body_string(error_body))
            .mount(&server)
            .await;

        let err = client
            .requisitions()
            .create(&NewRequisition::new("https://app.example/cb", "X").reference("user-42"))
            .await
            .unwrap_err();

        match err {
            Error::RequestFailed { status, body } => {
                assert_eq!(status, 400);
                assert_eq!(body, error_body);
            }
            other => panic!("expected RequestFailed, got {:?}", other),
        }
    }
}

// ============================================================================
// ACCOUNTS SERVICE TESTS
// ============================================================================

mod accounts_tests {
    use super::*;

    fn account() -> AccountId {
        AccountId::new("acc-1")
    }

    #[tokio::test]
    async fn test_account_metadata() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "id": "acc-1",
                "created": "2024-01-10T11:00:00.000Z",
                "last_accessed": null,
                "iban": "GL0865354374424724",
                "institution_id": "SANDBOXFINANCE_SFIN0000",
                "status": "READY",
                "owner_name": "Jane Doe"
            })))
            .mount(&server)
            .await;

        let metadata = client.accounts().get(&account()).await.unwrap().unwrap();
        assert_eq!(metadata.status, AccountStatus::Ready);
        assert!(metadata.last_accessed.is_none());
        assert_eq!(metadata.iban.as_deref(), Some("GL0865354374424724"));
    }

    #[tokio::test]
    async fn test_balances() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/balances/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "balances": [
                    {
                        "balanceAmount": {"amount": "1913.12", "currency": "EUR"},
                        "balanceType": "expected",
                        "referenceDate": "2024-03-02"
                    }
                ]
            })))
            .mount(&server)
            .await;

        let balances = client.accounts().balances(&account()).await.unwrap();
        assert_eq!(balances.len(), 1);
        assert_eq!(balances[0].balance_type, BalanceType::Expected);
        assert_eq!(balances[0].balance_amount.amount, dec!(1913.12));
    }

    #[tokio::test]
    async fn test_empty_balances_body() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/balances/"))
            .respond_with(ResponseTemplate::new(200))
            .mount(&server)
            .await;

        assert!(client.accounts().balances(&account()).await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_details() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/details/"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "account": {
                    "resourceId": "01F3NS4YV94RA29YCH8R0F6BMF",
                    "iban": "GL3510230000010234",
                    "currency": "EUR",
                    "ownerName": "Jane Doe",
                    "product": "Current Account"
                }
            })))
            .mount(&server)
            .await;

        let details = client.accounts().details(&account()).await.unwrap().unwrap();
        assert_eq!(details.product.as_deref(), Some("Current Account"));
    }

    #[tokio::test]
    async fn test_transactions_with_date_range() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/transactions/"))
            .and(query_param("date_from", "2024-01-01"))
            .and(query_param("date_to", "2024-01-31"))
            .respond_with(ResponseTemplate::new(200).set_body_json(json!({
                "transactions": {
                    "booked": [{
                        "transactionId": "t-1",
                        "bookingDate": "2024-01-15",
                        "transactionAmount": {"amount": "-42.00", "currency": "EUR"},
                        "creditorName": "Grocer"
                    }],
                    "pending": []
                }
            })))
            .expect(1)
            .mount(&server)
            .await;

        let query = TransactionsQuery::between(
            NaiveDate::from_ymd_opt(2024, 1, 1).unwrap(),
            NaiveDate::from_ymd_opt(2024, 1, 31).unwrap(),
        );
        let transactions = client
            .accounts()
            .transactions(&account(), Some(query))
            .await
            .unwrap();

        assert_eq!(transactions.booked.len(), 1);
        assert!(!transactions.booked[0].is_credit());
        assert!(transactions.pending.is_empty());
    }

    #[tokio::test]
    async fn test_transactions_without_query() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/transactions/"))
            .and(query_param_is_missing("date_from"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"transactions": {"booked": [], "pending": []}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let transactions = client.accounts().transactions(&account(), None).await.unwrap();
        assert!(transactions.is_empty());
    }

    #[tokio::test]
    async fn test_transactions_since_uses_configured_timezone() {
        let (server, client) =
            setup_with(ClientConfig::default().with_timezone(chrono_tz::Europe::Berlin)).await;

        // 23:30 UTC on 30 June is already 1 July in Berlin
        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/transactions/"))
            .and(query_param("date_from", "2024-07-01"))
            .and(query_param_is_missing("date_to"))
            .respond_with(
                ResponseTemplate::new(200)
                    .set_body_json(json!({"transactions": {"booked": [], "pending": []}})),
            )
            .expect(1)
            .mount(&server)
            .await;

        let instant = Utc.with_ymd_and_hms(2024, 6, 30, 23, 30, 0).unwrap();
        client
            .accounts()
            .transactions_since(&account(), instant)
            .await
            .unwrap();
    }

    #[tokio::test]
    async fn test_expired_access_is_http_error() {
        let (server, client) = setup().await;

        Mock::given(method("GET"))
            .and(path("/api/v2/accounts/acc-1/transactions/"))
            .respond_with(ResponseTemplate::new(401).set_body_json(json!({
                "summary": "Access has expired or it has been revoked.",
                "status_code": 401
            })))
            .mount(&server)
            .await;

        let err = client
            .accounts()
            .transactions(&account(), None)
            .await
            .unwrap_err();
        assert_eq!(err.status(), Some(401));
    }
}
