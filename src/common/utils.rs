//! Utility functions for storageos-client

use percent_encoding::{utf8_percent_encode, AsciiSet, CONTROLS};
use std::time::Duration;

/// Characters that cannot appear raw inside a single path segment
const SEGMENT_ENCODE_SET: &AsciiSet = &CONTROLS
    .add(b'/')
    .add(b'%')
    .add(b' ')
    .add(b'?')
    .add(b'#')
    .add(b'&');

/// Encode a resource name so it stays one path segment
pub fn encode_segment(name: &str) -> String {
    utf8_percent_encode(name, SEGMENT_ENCODE_SET).to_string()
}

/// Milliseconds per unit accepted in timeout strings
const DURATION_UNITS: &[(&str, u64)] = &[
    ("ms", 1),
    ("s", 1_000),
    ("m", 60_000),
    ("h", 3_600_000),
    ("d", 86_400_000),
];

/// Parse a timeout such as "500ms", "30s", "5m", "1h" or "7d".
///
/// The amount is a whole number of units; values that do not fit in a
/// `u64` of milliseconds are rejected.
pub fn parse_duration(s: &str) -> crate::Result<Duration> {
    let s = s.trim();
    let digits = s.find(|c: char| !c.is_ascii_digit()).unwrap_or(s.len());
    let (amount, unit) = s.split_at(digits);
    if amount.is_empty() {
        return Err(crate::Error::InvalidConfig(format!("invalid duration: {:?}", s)));
    }

    let per_unit = DURATION_UNITS
        .iter()
        .find(|(name, _)| *name == unit)
        .map(|(_, millis)| *millis)
        .ok_or_else(|| crate::Error::InvalidConfig(format!("unknown duration unit: {:?}", unit)))?;

    let millis = amount
        .parse::<u64>()
        .ok()
        .and_then(|n| n.checked_mul(per_unit))
        .ok_or_else(|| crate::Error::InvalidConfig(format!("duration too large: {}", s)))?;

    Ok(Duration::from_millis(millis))
}

/// Validate a resource name used in a request path
pub fn validate_name(kind: crate::ResourceKind, name: &str) -> crate::Result<()> {
    if name.trim().is_empty() {
        return Err(crate::Error::InvalidArgument(format!(
            "{} name cannot be empty",
            kind
        )));
    }

    if name.chars().any(|c| c.is_control()) {
        return Err(crate::Error::InvalidArgument(format!(
            "{} name contains invalid characters",
            kind
        )));
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::ResourceKind;

    #[test]
    fn test_encode_segment() {
        assert_eq!(encode_segment("test01"), "test01");
        assert_eq!(encode_segment("a/b"), "a%2Fb");
        assert_eq!(encode_segment("my vol?"), "my%20vol%3F");
        assert_eq!(encode_segment("test:"), "test:");
    }

    #[test]
    fn test_parse_duration() {
        assert_eq!(parse_duration("500ms").unwrap(), Duration::from_millis(500));
        assert_eq!(parse_duration("30s").unwrap(), Duration::from_secs(30));
        assert_eq!(parse_duration(" 5m ").unwrap(), Duration::from_secs(300));
        assert_eq!(parse_duration("1h").unwrap(), Duration::from_secs(3600));
        assert_eq!(parse_duration("7d").unwrap(), Duration::from_secs(604800));
        assert_eq!(parse_duration("0s").unwrap(), Duration::ZERO);
    }

    #[test]
    fn test_parse_duration_invalid() {
        assert!(parse_duration("").is_err());
        assert!(parse_duration("abc").is_err());
        assert!(parse_duration("10x").is_err());
        assert!(parse_duration("s").is_err());
        assert!(parse_duration("30").is_err());
        assert!(parse_duration("-5s").is_err());
        assert!(parse_duration("1.5s").is_err());
    }

    #[test]
    fn test_parse_duration_overflow() {
        for input in ["300000000000000d", "18446744073709551615s", "99999999999999999999ms"] {
            match parse_duration(input) {
                Err(crate::Error::InvalidConfig(msg)) => assert!(msg.contains("too large"), "{}", msg),
                other => panic!("{} parsed as {:?}", input, other),
            }
        }
    }

    #[test]
    fn test_validate_name() {
        assert!(validate_name(ResourceKind::Volume, "test01").is_ok());
        assert!(validate_name(ResourceKind::Volume, "").is_err());
        assert!(validate_name(ResourceKind::Pool, "   ").is_err());
        assert!(validate_name(ResourceKind::Node, "bad\nname").is_err());
    }
}
