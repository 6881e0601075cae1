//! Day-to-column grids for month rows.
//!
//! Every month row occupies the same fixed number of grid cells so rows
//! align vertically across the year. The alignment mode decides where
//! day 1 lands; the layout engine only ever consumes the finished
//! day-to-column lookup.

use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::month::MonthWindow;

/// Total cells in every month row: 6 leading blanks at most, plus 31 days.
pub const GRID_CELLS: u32 = 37;

/// How day 1 of each month is positioned in its row.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum AlignMode {
    /// Day 1 sits under its weekday column (Sunday-first), so weekdays
    /// line up vertically across months.
    #[default]
    Weekday,
    /// Day 1 of every month occupies column 1.
    FirstDay,
}

impl FromStr for AlignMode {
    type Err = String;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s {
            "weekday" => Ok(AlignMode::Weekday),
            "first-day" => Ok(AlignMode::FirstDay),
            _ => Err(format!(
                "Unknown alignment mode '{s}'. Expected 'weekday' or 'first-day'"
            )),
        }
    }
}

/// The day-to-column mapping for one month under one alignment mode.
///
/// Columns are 1-indexed and contiguous: day `d` maps to column
/// `leading + d`, where `leading` is the number of blank cells before
/// day 1.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DayGrid {
    leading: u32,
    days: u32,
}

impl DayGrid {
    pub fn for_month(window: &MonthWindow, mode: AlignMode) -> Self {
        let leading = match mode {
            AlignMode::Weekday => window.first_weekday_offset(),
            AlignMode::FirstDay => 0,
        };

        DayGrid {
            leading,
            days: window.days(),
        }
    }

    /// Grid column of a day-of-month, or `None` when the day is not part
    /// of this month.
    pub fn column_of(&self, day: u32) -> Option<u32> {
        (1..=self.days).contains(&day).then(|| self.leading + day)
    }

    /// Blank cells before day 1.
    pub fn leading_blanks(&self) -> u32 {
        self.leading
    }

    pub fn days(&self) -> u32 {
        self.days
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn weekday_mode_offsets_by_starting_weekday() {
        // 2026-05-01 is a Friday (offset 5 from Sunday).
        let window = MonthWindow::new(2026, 4).unwrap();
        let grid = DayGrid::for_month(&window, AlignMode::Weekday);
        assert_eq!(grid.leading_blanks(), 5);
        assert_eq!(grid.column_of(1), Some(6));
        assert_eq!(grid.column_of(31), Some(36));
    }

    #[test]
    fn first_day_mode_pins_day_one_to_column_one() {
        let window = MonthWindow::new(2026, 4).unwrap();
        let grid = DayGrid::for_month(&window, AlignMode::FirstDay);
        assert_eq!(grid.leading_blanks(), 0);
        assert_eq!(grid.column_of(1), Some(1));
        assert_eq!(grid.column_of(31), Some(31));
    }

    #[test]
    fn columns_are_contiguous() {
        let window = MonthWindow::new(2026, 1).unwrap();
        let grid = DayGrid::for_month(&window, AlignMode::Weekday);
        for day in 2..=grid.days() {
            assert_eq!(grid.column_of(day), grid.column_of(day - 1).map(|c| c + 1));
        }
    }

    #[test]
    fn out_of_month_days_have_no_column() {
        let window = MonthWindow::new(2026, 1).unwrap();
        let grid = DayGrid::for_month(&window, AlignMode::Weekday);
        assert_eq!(grid.column_of(0), None);
        assert_eq!(grid.column_of(29), None); // 2026 is not a leap year
    }

    #[test]
    fn grid_never_overflows_fixed_cells() {
        // Worst case: a 31-day month starting on Saturday.
        // 2026-08-01 is a Saturday.
        let window = MonthWindow::new(2026, 7).unwrap();
        let grid = DayGrid::for_month(&window, AlignMode::Weekday);
        assert_eq!(grid.column_of(31), Some(GRID_CELLS));
    }

    #[test]
    fn align_mode_from_str() {
        assert_eq!("weekday".parse::<AlignMode>().unwrap(), AlignMode::Weekday);
        assert_eq!("first-day".parse::<AlignMode>().unwrap(), AlignMode::FirstDay);
        assert!("monday".parse::<AlignMode>().is_err());
    }
}
