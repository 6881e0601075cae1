use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use yearline_core::Library;

pub fn run(library: &mut Library, id: &str) -> Result<()> {
    let Some(event) = library.event(id) else {
        anyhow::bail!("Event not found: {}", id);
    };

    let confirmed = Confirm::new()
        .with_prompt(format!("  Delete event '{}'?", event.title))
        .default(false)
        .interact()?;

    if !confirmed {
        println!("{}", "  Cancelled".dimmed());
        return Ok(());
    }

    let removed = library.remove_event(id)?;
    println!("{}", format!("  Deleted: {}", removed.title).red());
    Ok(())
}
