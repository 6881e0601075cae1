//! Date-range events.
//!
//! An event covers an inclusive `[start, end]` range of local calendar
//! dates. Dates cross the snapshot and CLI boundaries as `YYYY-MM-DD`
//! text, which is chrono's serde form for `NaiveDate`.

use std::fmt;

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;
use crate::error::{YearlineError, YearlineResult};

/// A date-range event on the timeline.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Event {
    pub id: String,
    pub title: String,
    /// First day of the event (inclusive).
    pub start: NaiveDate,
    /// Last day of the event (inclusive). Never before `start`.
    pub end: NaiveDate,
    /// Display color. Kept on the event even when a category is set, so
    /// deleting the category leaves the event looking the same.
    pub color: Color,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub category_id: Option<String>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub description: Option<String>,
}

impl Event {
    /// Create a new event with a fresh id.
    pub fn new(title: impl Into<String>, start: NaiveDate, end: NaiveDate, color: Color) -> Self {
        Event {
            id: Uuid::new_v4().to_string(),
            title: title.into(),
            start,
            end,
            color,
            category_id: None,
            description: None,
        }
    }

    /// Check the event invariants: non-empty title, start not after end.
    pub fn validate(&self) -> YearlineResult<()> {
        if self.title.trim().is_empty() {
            return Err(YearlineError::InvalidEvent("title is required".into()));
        }
        if self.start > self.end {
            return Err(YearlineError::InvalidEvent(format!(
                "start date {} is after end date {}",
                self.start, self.end
            )));
        }
        Ok(())
    }

    /// Whether the event's range intersects `[first, last]` (all inclusive).
    pub fn intersects(&self, first: NaiveDate, last: NaiveDate) -> bool {
        self.start <= last && self.end >= first
    }

    /// Number of days the event covers, counting both endpoints.
    pub fn duration_days(&self) -> i64 {
        (self.end - self.start).num_days() + 1
    }
}

impl fmt::Display for Event {
    fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
        write!(f, "{}", self.title)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_event(start: NaiveDate, end: NaiveDate) -> Event {
        Event::new("Trip", start, end, Color::new(0x4c, 0xaf, 0x50))
    }

    #[test]
    fn validate_accepts_single_day() {
        let event = make_event(date(2026, 3, 20), date(2026, 3, 20));
        assert!(event.validate().is_ok());
    }

    #[test]
    fn validate_rejects_inverted_range() {
        let event = make_event(date(2026, 3, 21), date(2026, 3, 20));
        assert!(event.validate().is_err());
    }

    #[test]
    fn validate_rejects_blank_title() {
        let mut event = make_event(date(2026, 3, 20), date(2026, 3, 22));
        event.title = "   ".to_string();
        assert!(event.validate().is_err());
    }

    #[test]
    fn intersects_inclusive_bounds() {
        let event = make_event(date(2026, 3, 10), date(2026, 3, 15));
        assert!(event.intersects(date(2026, 3, 15), date(2026, 3, 31)));
        assert!(event.intersects(date(2026, 3, 1), date(2026, 3, 10)));
        assert!(!event.intersects(date(2026, 3, 16), date(2026, 3, 31)));
    }

    #[test]
    fn duration_counts_both_endpoints() {
        assert_eq!(make_event(date(2026, 3, 20), date(2026, 3, 20)).duration_days(), 1);
        assert_eq!(make_event(date(2026, 3, 20), date(2026, 3, 22)).duration_days(), 3);
    }

    #[test]
    fn dates_serialize_as_ymd_text() {
        let event = make_event(date(2026, 3, 5), date(2026, 3, 7));
        let json = serde_json::to_string(&event).unwrap();
        assert!(json.contains("\"start\":\"2026-03-05\""));
        assert!(json.contains("\"end\":\"2026-03-07\""));
    }
}
