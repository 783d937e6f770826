use chrono::{DateTime, NaiveDate, NaiveDateTime};

/// Parses a caller-supplied date into the instant a day window starts from.
///
/// Accepts an RFC 3339 timestamp (the time-of-day is kept as-is) or a plain
/// `YYYY-MM-DD` date (midnight). Returns `None` for anything unparsable;
/// the caller treats that as "no window", not as an error.
pub fn parse_date_input(value: &str) -> Option<NaiveDateTime> {
    if value.is_empty() {
        return None;
    }

    if let Ok(dt) = DateTime::parse_from_rfc3339(value) {
        return Some(dt.naive_utc());
    }

    NaiveDate::parse_from_str(value, "%Y-%m-%d")
        .ok()
        .and_then(|date| date.and_hms_opt(0, 0, 0))
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::NaiveDate;

    #[test]
    fn parses_plain_dates_at_midnight() {
        let parsed = parse_date_input("2024-03-15").unwrap();
        assert_eq!(parsed.date(), NaiveDate::from_ymd_opt(2024, 3, 15).unwrap());
        assert_eq!(parsed.and_utc().timestamp() % 86_400, 0);
    }

    #[test]
    fn parses_rfc3339_keeping_time_of_day() {
        let parsed = parse_date_input("2024-03-15T08:00:00Z").unwrap();
        assert_eq!(parsed, NaiveDate::from_ymd_opt(2024, 3, 15).unwrap().and_hms_opt(8, 0, 0).unwrap());
    }

    #[test]
    fn rejects_garbage_and_empty_input() {
        assert!(parse_date_input("").is_none());
        assert!(parse_date_input("not-a-date").is_none());
        assert!(parse_date_input("2024-13-40").is_none());
    }
}
