use anyhow::Result;
use dialoguer::Confirm;
use owo_colors::OwoColorize;
use yearline_core::{Category, Color, Library};

pub fn list(library: &Library) -> Result<()> {
    if library.categories().is_empty() {
        println!("{}", "No categories. Add one with: yearline category add".dimmed());
        return Ok(());
    }

    for category in library.categories() {
        let color = category.color;
        let count = library.events_referencing(&category.id);
        let label = format!("{} event{}", count, if count == 1 { "" } else { "s" });

        println!(
            "{} {}  {}  {}",
            "●".truecolor(color.r, color.g, color.b),
            format!("{:<12}", category.name).bold(),
            color.to_string().dimmed(),
            label.dimmed()
        );
    }

    Ok(())
}

pub fn add(library: &mut Library, name: String, color: String) -> Result<()> {
    let color: Color = color.parse()?;
    let category = Category::new(name, color);

    let created = format!("  Created category: {}", category.name);
    library.add_category(category)?;

    println!("{}", created.green());
    Ok(())
}

pub fn edit(
    library: &mut Library,
    name: &str,
    new_name: Option<String>,
    color: Option<String>,
) -> Result<()> {
    let mut category = resolve(library, name)?.clone();

    if let Some(new_name) = new_name {
        category.name = new_name;
    }
    if let Some(color) = color {
        category.color = color.parse()?;
    }

    let updated = format!("  Updated category: {}", category.name);
    library.update_category(category)?;

    println!("{}", updated.green());
    Ok(())
}

pub fn remove(library: &mut Library, name: &str) -> Result<()> {
    let category = resolve(library, name)?.clone();
    let referencing = library.events_referencing(&category.id);

    let prompt = if referencing > 0 {
        format!(
            "  '{}' is used by {} event{}. Deleting it will detach them (colors are kept). Continue?",
            category.name,
            referencing,
            if referencing == 1 { "" } else { "s" }
        )
    } else {
        format!("  Delete category '{}'?", category.name)
    };

    let confirmed = Confirm::new().with_prompt(prompt).default(false).interact()?;
    if !confirmed {
        println!("{}", "  Cancelled".dimmed());
        return Ok(());
    }

    let detached = library.remove_category(&category.id)?;
    if detached > 0 {
        println!(
            "{}",
            format!("  Deleted: {} ({} events detached)", category.name, detached).red()
        );
    } else {
        println!("{}", format!("  Deleted: {}", category.name).red());
    }

    Ok(())
}

/// Find a category by name (case-insensitive) or by id.
fn resolve<'a>(library: &'a Library, name: &str) -> Result<&'a Category> {
    library
        .category_named(name)
        .or_else(|| library.category(name))
        .ok_or_else(|| {
            let available: Vec<&str> = library.categories().iter().map(|c| c.name.as_str()).collect();
            anyhow::anyhow!(
                "Category '{}' not found. Available: {}",
                name,
                available.join(", ")
            )
        })
}
