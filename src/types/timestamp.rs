//! Serde adapter for the server's timestamps.
//!
//! The API always sends a timestamp, using `0001-01-01T00:00:00Z` for
//! "never". That instant, `null`, `""` and a missing field all decode to
//! `None`, and `None` encodes back to the zero instant.

use chrono::{DateTime, SecondsFormat, Utc};
use serde::de::Error as _;
use serde::{Deserialize, Deserializer, Serializer};

pub const ZERO_TIME: &str = "0001-01-01T00:00:00Z";

/// Unix seconds of `0001-01-01T00:00:00Z`
const ZERO_TIME_UNIX: i64 = -62_135_596_800;

pub fn serialize<S>(value: &Option<DateTime<Utc>>, serializer: S) -> Result<S::Ok, S::Error>
where
    S: Serializer,
{
    match value {
        Some(t) => serializer.serialize_str(&t.to_rfc3339_opts(SecondsFormat::AutoSi, true)),
        None => serializer.serialize_str(ZERO_TIME),
    }
}

pub fn deserialize<'de, D>(deserializer: D) -> Result<Option<DateTime<Utc>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<String>::deserialize(deserializer)?;
    let raw = match raw.as_deref().map(str::trim) {
        None | Some("") => return Ok(None),
        Some(raw) => raw,
    };

    let parsed = DateTime::parse_from_rfc3339(raw)
        .map_err(|e| D::Error::custom(format!("invalid timestamp {:?}: {}", raw, e)))?
        .with_timezone(&Utc);

    if parsed.timestamp() == ZERO_TIME_UNIX && parsed.timestamp_subsec_nanos() == 0 {
        Ok(None)
    } else {
        Ok(Some(parsed))
    }
}
