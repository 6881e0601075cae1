use anyhow::Result;
use chrono::{Datelike, Local};
use owo_colors::OwoColorize;
use yearline_core::Library;

use super::add::format_range;

pub fn run(library: &Library, year: Option<i32>) -> Result<()> {
    let today = Local::now().date_naive();
    let year = year.unwrap_or_else(|| today.year());

    let upcoming = library.upcoming_events(today, year);

    if upcoming.is_empty() {
        println!("{}", "No upcoming events. Add one with: yearline add".dimmed());
        return Ok(());
    }

    for event in upcoming {
        let color = event.color;
        let dot = "●".truecolor(color.r, color.g, color.b).to_string();

        let category = event
            .category_id
            .as_deref()
            .and_then(|id| library.category(id))
            .map(|c| format!(" [{}]", c.name))
            .unwrap_or_default();

        let days = event.duration_days();
        let duration = if days > 1 {
            format!(" ({days} days)")
        } else {
            String::new()
        };

        println!(
            "{} {}{}  {}{}  {}",
            dot,
            format_range(event),
            duration.dimmed(),
            event.title.bold(),
            category.dimmed(),
            event.id.dimmed()
        );

        if let Some(description) = &event.description {
            println!("    {}", description.dimmed());
        }
    }

    Ok(())
}
