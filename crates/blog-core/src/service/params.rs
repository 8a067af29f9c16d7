//! Parsing of raw form and query values.

use chrono::{DateTime, NaiveDateTime, Utc};

use crate::error::DomainError;

/// Rows returned by a listing when no `limit` is given.
pub const DEFAULT_LIMIT: u64 = 50;

/// Upper clamp for `limit`.
pub const MAX_LIMIT: u64 = 500;

const NAIVE_FORMATS: [&str; 2] = ["%Y-%m-%dT%H:%M:%S%.f", "%Y-%m-%d %H:%M:%S%.f"];

/// Parse a required `post_id` field.
pub fn parse_post_id(raw: Option<&str>) -> Result<i32, DomainError> {
    let raw = raw.ok_or_else(|| DomainError::Validation("post_id is required".to_string()))?;

    raw.trim()
        .parse()
        .map_err(|_| DomainError::Validation(format!("post_id '{}' is not an integer", raw)))
}

/// Parse an optional `limit`, clamped to `1..=MAX_LIMIT`.
pub fn parse_limit(raw: Option<&str>) -> Result<u64, DomainError> {
    let Some(raw) = raw else {
        return Ok(DEFAULT_LIMIT);
    };

    let limit: u64 = raw.trim().parse().map_err(|_| {
        DomainError::Validation(format!("limit '{}' is not a non-negative integer", raw))
    })?;

    Ok(limit.clamp(1, MAX_LIMIT))
}

/// Parse a `time` value: RFC 3339, or a naive datetime taken as UTC.
pub fn parse_time(raw: &str) -> Result<DateTime<Utc>, DomainError> {
    let raw = raw.trim();

    if let Ok(time) = DateTime::parse_from_rfc3339(raw) {
        return Ok(time.with_timezone(&Utc));
    }

    NAIVE_FORMATS
        .iter()
        .find_map(|format| NaiveDateTime::parse_from_str(raw, format).ok())
        .map(|naive| naive.and_utc())
        .ok_or_else(|| DomainError::Validation(format!("time '{}' is not a valid datetime", raw)))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::TimeZone;

    #[test]
    fn test_post_id_required_and_numeric() {
        assert_eq!(parse_post_id(Some("42")).unwrap(), 42);
        assert_eq!(parse_post_id(Some(" 7 ")).unwrap(), 7);
        assert!(matches!(
            parse_post_id(None),
            Err(DomainError::Validation(_))
        ));
        assert!(matches!(
            parse_post_id(Some("abc")),
            Err(DomainError::Validation(_))
        ));
    }

    #[test]
    fn test_limit_defaults_and_clamps() {
        assert_eq!(parse_limit(None).unwrap(), DEFAULT_LIMIT);
        assert_eq!(parse_limit(Some("1")).unwrap(), 1);
        assert_eq!(parse_limit(Some("0")).unwrap(), 1);
        assert_eq!(parse_limit(Some("100000")).unwrap(), MAX_LIMIT);
        assert!(parse_limit(Some("-3")).is_err());
        assert!(parse_limit(Some("ten")).is_err());
    }

    #[test]
    fn test_time_accepts_rfc3339_and_naive() {
        let expected = Utc.with_ymd_and_hms(2024, 5, 1, 12, 30, 0).unwrap();

        assert_eq!(parse_time("2024-05-01T12:30:00Z").unwrap(), expected);
        assert_eq!(parse_time("2024-05-01T14:30:00+02:00").unwrap(), expected);
        assert_eq!(parse_time("2024-05-01T12:30:00").unwrap(), expected);
        assert_eq!(parse_time("2024-05-01 12:30:00.000").unwrap(), expected);
        assert!(parse_time("yesterday").is_err());
    }
}
