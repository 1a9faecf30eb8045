//! Late-fine computation.
//!
//! The fine is a pure function of the due date and the current date; the
//! current date is passed in so callers and tests control the clock. The
//! result is frozen into the borrow record at creation time and never
//! recomputed for open records, so a record entered with an already-lapsed
//! due date carries its fine from day one.

use chrono::NaiveDate;

/// Fine charged per whole day late, in currency units
pub const FINE_PER_DAY: f64 = 5.0;

/// Compute the fine owed for a due date as of `today`, rounded to cents.
/// Zero when the due date has not lapsed.
pub fn fine_for_due_date(due_date: NaiveDate, today: NaiveDate) -> f64 {
    if due_date >= today {
        return 0.0;
    }
    let days_late = (today - due_date).num_days();
    (days_late as f64 * FINE_PER_DAY * 100.0).round() / 100.0
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn zero_when_due_date_has_not_lapsed() {
        let today = date(2025, 6, 15);
        assert_eq!(fine_for_due_date(today, today), 0.0);
        assert_eq!(fine_for_due_date(date(2025, 6, 20), today), 0.0);
        assert_eq!(fine_for_due_date(date(2026, 1, 1), today), 0.0);
    }

    #[test]
    fn charges_per_whole_day_late() {
        let today = date(2025, 6, 15);
        assert_eq!(fine_for_due_date(date(2025, 6, 14), today), 5.0);
        assert_eq!(fine_for_due_date(date(2025, 6, 12), today), 15.0);
    }

    #[test]
    fn deterministic_for_equal_inputs() {
        let today = date(2025, 6, 15);
        let due = date(2025, 5, 15);
        assert_eq!(
            fine_for_due_date(due, today),
            fine_for_due_date(due, today)
        );
        assert_eq!(fine_for_due_date(due, today), 155.0);
    }
}
