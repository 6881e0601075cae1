//! Month windows on the year timeline.

use chrono::{Datelike, NaiveDate, Weekday};

/// Month names as shown in month-row headers.
pub const MONTH_NAMES: [&str; 12] = [
    "January",
    "February",
    "March",
    "April",
    "May",
    "June",
    "July",
    "August",
    "September",
    "October",
    "November",
    "December",
];

/// The inclusive `[first, last]` date bounds of one month.
///
/// Derived from a `(year, month0)` pair and never stored; the layout
/// engine clips event ranges against these bounds.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct MonthWindow {
    year: i32,
    month0: u32,
    first: NaiveDate,
    last: NaiveDate,
}

impl MonthWindow {
    /// Build the window for `month0` (0 = January) in `year`.
    /// Returns `None` for an out-of-range month index.
    pub fn new(year: i32, month0: u32) -> Option<Self> {
        let first = NaiveDate::from_ymd_opt(year, month0 + 1, 1)?;
        let next_first = if month0 == 11 {
            NaiveDate::from_ymd_opt(year + 1, 1, 1)?
        } else {
            NaiveDate::from_ymd_opt(year, month0 + 2, 1)?
        };
        let last = next_first.pred_opt()?;

        Some(MonthWindow {
            year,
            month0,
            first,
            last,
        })
    }

    pub fn year(&self) -> i32 {
        self.year
    }

    /// Zero-based month index (0 = January).
    pub fn month0(&self) -> u32 {
        self.month0
    }

    pub fn name(&self) -> &'static str {
        MONTH_NAMES[self.month0 as usize]
    }

    /// First day of the month.
    pub fn first(&self) -> NaiveDate {
        self.first
    }

    /// Last day of the month.
    pub fn last(&self) -> NaiveDate {
        self.last
    }

    pub fn days(&self) -> u32 {
        self.last.day()
    }

    /// Weekday of day 1, as an offset from Sunday (0 = Sunday .. 6 = Saturday).
    pub fn first_weekday_offset(&self) -> u32 {
        self.first.weekday().num_days_from_sunday()
    }

    /// The date of `day` within this month, if it exists.
    pub fn date_of(&self, day: u32) -> Option<NaiveDate> {
        NaiveDate::from_ymd_opt(self.year, self.month0 + 1, day)
    }
}

/// Whether a date falls on Saturday or Sunday.
pub fn is_weekend(date: NaiveDate) -> bool {
    matches!(date.weekday(), Weekday::Sat | Weekday::Sun)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn window_bounds() {
        let window = MonthWindow::new(2026, 1).unwrap();
        assert_eq!(window.first(), NaiveDate::from_ymd_opt(2026, 2, 1).unwrap());
        assert_eq!(window.last(), NaiveDate::from_ymd_opt(2026, 2, 28).unwrap());
        assert_eq!(window.days(), 28);
        assert_eq!(window.name(), "February");
    }

    #[test]
    fn window_bounds_leap_february() {
        let window = MonthWindow::new(2028, 1).unwrap();
        assert_eq!(window.days(), 29);
    }

    #[test]
    fn window_bounds_december() {
        let window = MonthWindow::new(2026, 11).unwrap();
        assert_eq!(window.last(), NaiveDate::from_ymd_opt(2026, 12, 31).unwrap());
    }

    #[test]
    fn rejects_out_of_range_month() {
        assert!(MonthWindow::new(2026, 12).is_none());
    }

    #[test]
    fn first_weekday_offset_is_sunday_based() {
        // 2026-02-01 is a Sunday, 2026-03-01 is also a Sunday, 2026-05-01 a Friday.
        assert_eq!(MonthWindow::new(2026, 1).unwrap().first_weekday_offset(), 0);
        assert_eq!(MonthWindow::new(2026, 4).unwrap().first_weekday_offset(), 5);
    }

    #[test]
    fn weekend_detection() {
        assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 2, 7).unwrap())); // Saturday
        assert!(is_weekend(NaiveDate::from_ymd_opt(2026, 2, 8).unwrap())); // Sunday
        assert!(!is_weekend(NaiveDate::from_ymd_opt(2026, 2, 9).unwrap())); // Monday
    }
}
