//! Shared JSON codec for request and response bodies.
//!
//! Every body that crosses the wire goes through one [`JsonCodec`]. Models
//! declare camelCase names and enum-by-name rules on their serde derives;
//! this module owns the parts that need a single, central definition: body
//! encoding/decoding with empty-body handling, case-insensitive property
//! names on read, the instant format, and the timezone used to turn instants
//! into calendar dates.

use chrono::{DateTime, NaiveDate, NaiveDateTime, SecondsFormat, TimeZone, Utc};
use chrono_tz::Tz;
use serde::de::DeserializeOwned;
use serde::Serialize;
use serde_json::{Map, Value};

use crate::Result;

/// JSON codec configuration shared by all requests issued from one client.
///
/// Immutable after construction; cloned cheaply into pagination streams.
///
/// The timezone only decides which calendar day an instant falls on (see
/// [`local_date`](Self::local_date)). Instants on the wire are always UTC.
///
/// # Example
///
/// ```
/// use bankdata_rs::client::JsonCodec;
/// use chrono::{TimeZone, Utc};
///
/// let codec = JsonCodec::new(chrono_tz::Europe::Berlin);
/// let instant = Utc.with_ymd_and_hms(2024, 3, 31, 23, 30, 0).unwrap();
/// assert_eq!(codec.local_date(&instant).to_string(), "2024-04-01");
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct JsonCodec {
    timezone: Tz,
}

impl Default for JsonCodec {
    fn default() -> Self {
        Self { timezone: Tz::UTC }
    }
}

impl JsonCodec {
    /// Create a codec bound to the given timezone.
    pub fn new(timezone: Tz) -> Self {
        Self { timezone }
    }

    /// The timezone used for calendar-date conversions.
    pub fn timezone(&self) -> Tz {
        self.timezone
    }

    /// Serialize a request body.
    pub fn encode<T: Serialize + ?Sized>(&self, value: &T) -> Result<Vec<u8>> {
        Ok(serde_json::to_vec(value)?)
    }

    /// Deserialize a response body.
    ///
    /// An empty (or whitespace-only) body and a literal `null` both decode to
    /// `None`; anything else must parse as `T`. Object keys are folded to
    /// camelCase first, so `transaction_amount`, `TransactionAmount` and
    /// `transactionAmount` all read the same field.
    pub fn decode<T: DeserializeOwned>(&self, body: &[u8]) -> Result<Option<T>> {
        if body.iter().all(u8::is_ascii_whitespace) {
            return Ok(None);
        }
        let value: Value = serde_json::from_slice(body)?;
        Ok(serde_json::from_value::<Option<T>>(fold_keys(value))?)
    }

    /// Convert an instant into the codec's timezone.
    pub fn to_local(&self, instant: &DateTime<Utc>) -> DateTime<Tz> {
        instant.with_timezone(&self.timezone)
    }

    /// The calendar date an instant falls on in the codec's timezone.
    pub fn local_date(&self, instant: &DateTime<Utc>) -> NaiveDate {
        self.to_local(instant).date_naive()
    }

    /// Format a calendar date the way the API expects it in query strings.
    pub fn format_date(date: NaiveDate) -> String {
        date.format("%Y-%m-%d").to_string()
    }
}

/// Rewrite every object key in `value` to its camelCase form.
fn fold_keys(value: Value) -> Value {
    match value {
        Value::Object(map) => Value::Object(
            map.into_iter()
                .map(|(key, value)| (camel_case(&key), fold_keys(value)))
                .collect::<Map<String, Value>>(),
        ),
        Value::Array(items) => Value::Array(items.into_iter().map(fold_keys).collect()),
        other => other,
    }
}

/// `snake_case`, `PascalCase` and all-caps segments to `camelCase`.
fn camel_case(key: &str) -> String {
    let mut out = String::with_capacity(key.len());
    for (i, part) in key.split('_').filter(|p| !p.is_empty()).enumerate() {
        let shouting = !part.chars().any(char::is_lowercase);
        let mut chars = part.chars();
        let Some(first) = chars.next() else {
            continue;
        };
        let rest = chars.as_str();

        if i == 0 {
            out.extend(first.to_lowercase());
        } else {
            out.extend(first.to_uppercase());
        }
        if shouting {
            out.push_str(&rest.to_lowercase());
        } else {
            out.push_str(rest);
        }
    }
    out
}

/// Render an instant in the canonical wire form (RFC 3339, UTC, `Z` suffix).
pub fn format_instant(instant: &DateTime<Utc>) -> String {
    instant.to_rfc3339_opts(SecondsFormat::AutoSi, true)
}

/// Parse an instant from RFC 3339 with any offset, or from an ISO timestamp
/// without offset (taken as UTC).
pub fn parse_instant(raw: &str) -> std::result::Result<DateTime<Utc>, String> {
    if let Ok(dt) = DateTime::parse_from_rfc3339(raw) {
        return Ok(dt.with_timezone(&Utc));
    }
    NaiveDateTime::parse_from_str(raw, "%Y-%m-%dT%H:%M:%S%.f")
        .map(|naive| Utc.from_utc_datetime(&naive))
        .map_err(|e| format!("invalid timestamp `{}`: {}", raw, e))
}

/// Serde adapter for `DateTime<Utc>` fields.
///
/// Use as `#[serde(with = "crate::client::codec::datetime")]`.
pub mod datetime {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize an instant in the canonical wire form.
    pub fn serialize<S: Serializer>(
        value: &DateTime<Utc>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        serializer.serialize_str(&super::format_instant(value))
    }

    /// Deserialize an instant, normalizing it to UTC.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<DateTime<Utc>, D::Error> {
        let raw = String::deserialize(deserializer)?;
        super::parse_instant(&raw).map_err(de::Error::custom)
    }
}

/// Serde adapter for `Option<DateTime<Utc>>` fields.
///
/// Pair with `#[serde(default)]` so a missing field reads as `None`.
pub mod datetime_opt {
    use chrono::{DateTime, Utc};
    use serde::{de, Deserialize, Deserializer, Serializer};

    /// Serialize an optional instant.
    pub fn serialize<S: Serializer>(
        value: &Option<DateTime<Utc>>,
        serializer: S,
    ) -> Result<S::Ok, S::Error> {
        match value {
            Some(v) => serializer.serialize_some(&super::format_instant(v)),
            None => serializer.serialize_none(),
        }
    }

    /// Deserialize an optional instant; `null` reads as `None`.
    pub fn deserialize<'de, D: Deserializer<'de>>(
        deserializer: D,
    ) -> Result<Option<DateTime<Utc>>, D::Error> {
        Option::<String>::deserialize(deserializer)?
            .map(|raw| super::parse_instant(&raw))
            .transpose()
            .map_err(de::Error::custom)
    }
}
