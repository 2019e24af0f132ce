//! Time utilities

use chrono::{DateTime, NaiveDate, Utc};

/// Get current UTC time
pub fn now_utc() -> DateTime<Utc> {
    Utc::now()
}

/// Current UTC calendar date; streaks are tracked against this
pub fn today_utc() -> NaiveDate {
    Utc::now().date_naive()
}

/// Check whether `earlier` is the calendar day before `later`
pub fn is_day_before(earlier: NaiveDate, later: NaiveDate) -> bool {
    later.pred_opt() == Some(earlier)
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn test_is_day_before() {
        assert!(is_day_before(date(2024, 3, 14), date(2024, 3, 15)));
        // Month and year boundaries
        assert!(is_day_before(date(2024, 2, 29), date(2024, 3, 1)));
        assert!(is_day_before(date(2023, 12, 31), date(2024, 1, 1)));

        assert!(!is_day_before(date(2024, 3, 15), date(2024, 3, 15)));
        assert!(!is_day_before(date(2024, 3, 13), date(2024, 3, 15)));
    }
}
