//! Date helpers for request parameters

use chrono::{NaiveDate, NaiveDateTime};
use shared::{AppError, AppResult};

/// Parse an optional `YYYY-MM-DD` query value, falling back to the date of `now`
pub fn parse_date_or_today(raw: Option<&str>, now: NaiveDateTime) -> AppResult<NaiveDate> {
    match raw.map(str::trim).filter(|s| !s.is_empty()) {
        Some(s) => NaiveDate::parse_from_str(s, "%Y-%m-%d").map_err(|_| {
            AppError::validation(format!("Invalid date '{}', expected YYYY-MM-DD", s)).with_detail("field", "date")
        }),
        None => Ok(now.date()),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use shared::ErrorCode;

    fn now() -> NaiveDateTime {
        NaiveDate::from_ymd_opt(2024, 3, 9)
            .unwrap()
            .and_hms_opt(19, 30, 0)
            .unwrap()
    }

    #[test]
    fn test_defaults_to_today() {
        assert_eq!(parse_date_or_today(None, now()).ok(), Some(now().date()));
        assert_eq!(parse_date_or_today(Some(" "), now()).ok(), Some(now().date()));
    }

    #[test]
    fn test_explicit_and_invalid_dates() {
        assert_eq!(
            parse_date_or_today(Some("2024-01-01"), now()).ok(),
            NaiveDate::from_ymd_opt(2024, 1, 1)
        );
        let err = parse_date_or_today(Some("01/02/2024"), now()).unwrap_err();
        assert_eq!(err.code, ErrorCode::ValidationFailed);
    }
}
