use anyhow::{Context, Result};
use chrono::NaiveDate;
use owo_colors::OwoColorize;
use yearline_core::{Color, Event, Library};

pub fn run(
    library: &mut Library,
    title: String,
    start: String,
    end: Option<String>,
    category: Option<String>,
    color: Option<String>,
    description: Option<String>,
) -> Result<()> {
    let start = parse_date(&start)?;
    // The end date follows the start date unless given explicitly.
    let end = match end {
        Some(s) => parse_date(&s)?,
        None => start,
    };

    let (color, category_id) = resolve_color(library, category.as_deref(), color.as_deref())?;

    let mut event = Event::new(title, start, end, color);
    event.category_id = category_id;
    event.description = description.filter(|d| !d.is_empty());

    let created = format!("  Created: {} ({})", event.title, format_range(&event));
    library.add_event(event)?;

    println!("{}", created.green());
    Ok(())
}

/// Parse a `YYYY-MM-DD` argument as a local calendar date.
pub fn parse_date(s: &str) -> Result<NaiveDate> {
    NaiveDate::parse_from_str(s, "%Y-%m-%d")
        .with_context(|| format!("Invalid date '{}'. Expected YYYY-MM-DD", s))
}

/// Pick the event's color and category reference.
///
/// An explicit color detaches the event from any category, mirroring the
/// "custom color" path; a category supplies both its id and its color.
/// With neither, the first category is the default, falling back to a
/// plain green when no categories exist.
pub fn resolve_color(
    library: &Library,
    category: Option<&str>,
    color: Option<&str>,
) -> Result<(Color, Option<String>)> {
    if let Some(hex) = color {
        return Ok((hex.parse()?, None));
    }

    if let Some(name) = category {
        let Some(category) = library.category_named(name) else {
            let available: Vec<&str> = library.categories().iter().map(|c| c.name.as_str()).collect();
            anyhow::bail!(
                "Category '{}' not found. Available: {}",
                name,
                available.join(", ")
            );
        };
        return Ok((category.color, Some(category.id.clone())));
    }

    match library.categories().first() {
        Some(category) => Ok((category.color, Some(category.id.clone()))),
        None => Ok((Color::new(0x4c, 0xaf, 0x50), None)),
    }
}

pub fn format_range(event: &Event) -> String {
    if event.start == event.end {
        event.start.format("%a %b %-d %Y").to_string()
    } else {
        format!(
            "{} - {}",
            event.start.format("%a %b %-d %Y"),
            event.end.format("%a %b %-d %Y")
        )
    }
}
