use anyhow::Result;
use owo_colors::OwoColorize;
use yearline_core::Library;

use super::add::{format_range, parse_date, resolve_color};

pub fn run(
    library: &mut Library,
    id: &str,
    title: Option<String>,
    start: Option<String>,
    end: Option<String>,
    category: Option<String>,
    color: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let Some(event) = library.event(id) else {
        anyhow::bail!("Event not found: {}", id);
    };
    let mut event = event.clone();

    if let Some(title) = title {
        event.title = title;
    }
    if let Some(start) = start {
        event.start = parse_date(&start)?;
        // Keep the range well-formed when only the start moves forward.
        if event.end < event.start && end.is_none() {
            event.end = event.start;
        }
    }
    if let Some(end) = end {
        event.end = parse_date(&end)?;
    }
    if category.is_some() || color.is_some() {
        let (color, category_id) = resolve_color(library, category.as_deref(), color.as_deref())?;
        event.color = color;
        event.category_id = category_id;
    }
    if let Some(description) = description {
        event.description = (!description.is_empty()).then_some(description);
    }

    let updated = format!("  Updated: {} ({})", event.title, format_range(&event));
    library.update_event(event)?;

    println!("{}", updated.green());
    Ok(())
}
