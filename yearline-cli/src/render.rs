//! Terminal rendering of the year timeline.
//!
//! Each month is one header line of day numbers followed by one line per
//! layout row, with event markers drawn as colored bars spanning their
//! grid columns. All view state (year, alignment) arrives through
//! `ViewOptions`; nothing here is ambient.

use chrono::NaiveDate;
use owo_colors::OwoColorize;
use yearline_core::{
    AlignMode, DayGrid, Event, GRID_CELLS, Library, MonthWindow, PlacedMarker, is_weekend,
    layout_month,
};

/// The view state for one render: which year, which alignment mode.
#[derive(Debug, Clone, Copy)]
pub struct ViewOptions {
    pub year: i32,
    pub align: AlignMode,
}

/// Character cells per grid column ("dd " for day numbers).
const CELL_WIDTH: usize = 3;

/// Width of the month-label gutter on the left.
const GUTTER_WIDTH: usize = 4;

/// Render the full year: twelve month blocks stacked vertically.
pub fn render_year(library: &Library, view: &ViewOptions, today: NaiveDate) -> String {
    let mut lines = vec![view.year.to_string().bold().to_string()];

    for month0 in 0..12 {
        let Some(window) = MonthWindow::new(view.year, month0) else {
            continue;
        };
        let grid = DayGrid::for_month(&window, view.align);
        lines.extend(render_month(library.events(), &window, &grid, today));
    }

    lines.join("\n")
}

fn render_month(
    events: &[Event],
    window: &MonthWindow,
    grid: &DayGrid,
    today: NaiveDate,
) -> Vec<String> {
    let mut lines = vec![render_day_header(window, grid, today)];

    let markers = layout_month(events, window, grid);
    let row_count = markers.iter().map(|m| m.row + 1).max().unwrap_or(0);

    for row in 0..row_count {
        let in_row: Vec<&PlacedMarker> = markers.iter().filter(|m| m.row == row).collect();
        lines.push(render_marker_row(&in_row, events));
    }

    lines
}

/// The month label and one numbered cell per day, padded to the fixed
/// grid width so month rows line up whatever the alignment mode.
fn render_day_header(window: &MonthWindow, grid: &DayGrid, today: NaiveDate) -> String {
    let mut line = format!("{:<width$}", &window.name()[..3], width = GUTTER_WIDTH);

    for column in 1..=GRID_CELLS {
        let day = column
            .checked_sub(grid.leading_blanks())
            .filter(|d| (1..=grid.days()).contains(d));

        match day {
            Some(day) => {
                let cell = format!("{day:>2}");
                let date = window.date_of(day);

                if date == Some(today) {
                    line.push_str(&cell.reversed().bold().to_string());
                } else if date.is_some_and(is_weekend) {
                    line.push_str(&cell.dimmed().to_string());
                } else {
                    line.push_str(&cell);
                }
                line.push(' ');
            }
            None => line.push_str("   "),
        }
    }

    line
}

/// One layout row: colored bars over a blank line, one bar per marker.
fn render_marker_row(markers: &[&PlacedMarker], events: &[Event]) -> String {
    let mut sorted = markers.to_vec();
    sorted.sort_by_key(|m| m.start_column);

    let mut line = " ".repeat(GUTTER_WIDTH);
    let mut cursor = 0usize;

    for marker in sorted {
        let Some(event) = events.iter().find(|e| e.id == marker.event_id) else {
            continue;
        };

        let start = (marker.start_column as usize - 1) * CELL_WIDTH;
        // Leave the last cell's trailing space as a gutter between bars.
        let width = marker.column_span as usize * CELL_WIDTH - 1;

        line.push_str(&" ".repeat(start - cursor));
        let color = event.color;
        line.push_str(
            &bar_label(&event.title, width)
                .on_truecolor(color.r, color.g, color.b)
                .to_string(),
        );
        cursor = start + width;
    }

    line
}

/// Fit a title into a bar of `width` character cells.
fn bar_label(title: &str, width: usize) -> String {
    let mut label: String = title.chars().take(width).collect();
    let used = label.chars().count();
    label.extend(std::iter::repeat_n(' ', width - used));
    label
}
