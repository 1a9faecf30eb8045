//! Calendar date encoding shared by storage and listings.
//!
//! Dates are stored as `%m/%d/%y` text, the format the seed data uses.
//! chrono maps two-digit years onto 1969-2068, so round-trips are lossless
//! across a 100-year window.

use chrono::NaiveDate;

use crate::domain::DomainError;

pub const DATE_FMT: &str = "%m/%d/%y";

pub fn format_date(date: NaiveDate) -> String {
    date.format(DATE_FMT).to_string()
}

pub fn parse_date(text: &str) -> Result<NaiveDate, DomainError> {
    NaiveDate::parse_from_str(text, DATE_FMT)
        .map_err(|e| DomainError::InvalidInput(format!("invalid date '{}': {}", text, e)))
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn round_trips_within_the_century_window() {
        for (y, m, d) in [(2025, 6, 1), (1969, 1, 1), (2068, 12, 31)] {
            let date = NaiveDate::from_ymd_opt(y, m, d).unwrap();
            assert_eq!(parse_date(&format_date(date)).unwrap(), date);
        }
    }

    #[test]
    fn rejects_malformed_text() {
        assert!(parse_date("not a date").is_err());
        assert!(parse_date("2025-06-01").is_err());
    }
}
