//! Month event layout engine.
//!
//! Given the events touching a month, assigns each one a display row so
//! that no two events overlapping in time share a row, and emits the
//! grid span to render. Pure and stateless: the same inputs always
//! produce the same markers, and nothing is kept between calls.

use chrono::{Datelike, NaiveDate};

use crate::event::Event;
use crate::grid::DayGrid;
use crate::month::MonthWindow;

/// One event placed on the month grid.
///
/// Recomputed on every render, never persisted. `start_column` is
/// 1-indexed; the marker covers `[start_column, start_column + column_span - 1]`.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct PlacedMarker {
    pub event_id: String,
    pub start_column: u32,
    pub column_span: u32,
    pub row: usize,
}

/// Column intervals occupied in one display row.
#[derive(Debug, Default)]
struct RowOccupancy {
    spans: Vec<(u32, u32)>,
}

impl RowOccupancy {
    fn is_free(&self, start: u32, end: u32) -> bool {
        self.spans.iter().all(|&(s, e)| end < s || start > e)
    }

    fn occupy(&mut self, start: u32, end: u32) {
        self.spans.push((start, end));
    }
}

/// Lay out the events of one month.
///
/// Filters `events` down to those intersecting the window, clips each to
/// the window bounds, sorts by clipped start (ties: longer event first,
/// which packs wide bars into early rows), then assigns rows greedily
/// first-fit. The row count is not guaranteed minimal, but no two
/// overlapping events ever share a row.
///
/// An event whose clipped start day is missing from the grid is skipped;
/// a grid built for the same window always covers every day.
pub fn layout_month(events: &[Event], window: &MonthWindow, grid: &DayGrid) -> Vec<PlacedMarker> {
    let mut clipped: Vec<(&Event, NaiveDate, NaiveDate)> = events
        .iter()
        .filter(|event| event.intersects(window.first(), window.last()))
        .map(|event| {
            (
                event,
                event.start.max(window.first()),
                event.end.min(window.last()),
            )
        })
        .collect();

    clipped.sort_by(|a, b| a.1.cmp(&b.1).then(b.2.cmp(&a.2)));

    let mut rows: Vec<RowOccupancy> = Vec::new();
    let mut markers = Vec::new();

    for (event, display_start, display_end) in clipped {
        let start_day = display_start.day();
        let Some(start_column) = grid.column_of(start_day) else {
            continue;
        };

        let column_span = display_end.day() - start_day + 1;
        let end_column = start_column + column_span - 1;

        let row = rows
            .iter()
            .position(|row| row.is_free(start_column, end_column))
            .unwrap_or_else(|| {
                rows.push(RowOccupancy::default());
                rows.len() - 1
            });
        rows[row].occupy(start_column, end_column);

        markers.push(PlacedMarker {
            event_id: event.id.clone(),
            start_column,
            column_span,
            row,
        });
    }

    markers
}
