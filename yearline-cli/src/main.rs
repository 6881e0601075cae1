mod commands;
mod render;

use anyhow::Result;
use clap::{Parser, Subcommand};
use yearline_core::{AlignMode, AppConfig, Library, Storage};

use crate::render::ViewOptions;

#[derive(Parser)]
#[command(name = "yearline")]
#[command(about = "Record date-range events and view them on a year timeline")]
struct Cli {
    #[command(subcommand)]
    command: Commands,
}

#[derive(Subcommand)]
enum Commands {
    /// Render the year timeline
    Show {
        /// Year to render (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,

        /// Alignment mode: "weekday" or "first-day"
        #[arg(long)]
        align: Option<String>,
    },
    /// Add an event
    Add {
        title: String,

        /// First day (YYYY-MM-DD)
        #[arg(short, long)]
        start: String,

        /// Last day (YYYY-MM-DD, defaults to the start day)
        #[arg(short, long)]
        end: Option<String>,

        /// Category name supplying the event's color
        #[arg(short, long, conflicts_with = "color")]
        category: Option<String>,

        /// Custom color (#rrggbb); leaves the event uncategorized
        #[arg(long)]
        color: Option<String>,

        #[arg(short, long)]
        description: Option<String>,
    },
    /// Edit an event
    Edit {
        /// Event id (a unique prefix is enough)
        id: String,

        #[arg(long)]
        title: Option<String>,

        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: Option<String>,

        /// Last day (YYYY-MM-DD)
        #[arg(long)]
        end: Option<String>,

        /// Category name supplying the event's color
        #[arg(long, conflicts_with = "color")]
        category: Option<String>,

        /// Custom color (#rrggbb); leaves the event uncategorized
        #[arg(long)]
        color: Option<String>,

        /// New description (empty string clears it)
        #[arg(long)]
        description: Option<String>,
    },
    /// Delete an event
    Rm {
        /// Event id (a unique prefix is enough)
        id: String,
    },
    /// List upcoming events
    Agenda {
        /// Year whose past events stay listed (defaults to the current year)
        #[arg(short, long)]
        year: Option<i32>,
    },
    /// Manage categories
    #[command(subcommand)]
    Category(CategoryCommands),
    /// Show paths and defaults, or change them
    Config {
        /// Persist a new default alignment mode: "weekday" or "first-day"
        #[arg(long)]
        align: Option<String>,
    },
}

#[derive(Subcommand)]
enum CategoryCommands {
    /// List categories with their event counts
    List,
    /// Add a category
    Add {
        name: String,

        /// Color (#rrggbb)
        color: String,
    },
    /// Edit a category
    Edit {
        /// Current name (or id)
        name: String,

        #[arg(long = "name")]
        new_name: Option<String>,

        /// Color (#rrggbb)
        #[arg(long)]
        color: Option<String>,
    },
    /// Delete a category, detaching its events
    Rm {
        /// Name (or id)
        name: String,
    },
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    let config = AppConfig::load()?;
    let storage = Storage::new(config.data_path()?);
    let mut library = Library::load(storage)?;

    match cli.command {
        Commands::Show { year, align } => {
            let view = ViewOptions {
                year: year.unwrap_or_else(current_year),
                align: resolve_align(align.as_deref(), &config)?,
            };
            commands::show::run(&library, view)
        }
        Commands::Add {
            title,
            start,
            end,
            category,
            color,
            description,
        } => commands::add::run(&mut library, title, start, end, category, color, description),
        Commands::Edit {
            id,
            title,
            start,
            end,
            category,
            color,
            description,
        } => {
            let id = resolve_event_id(&library, &id)?;
            commands::edit::run(
                &mut library,
                &id,
                title,
                start,
                end,
                category,
                color,
                description,
            )
        }
        Commands::Rm { id } => {
            let id = resolve_event_id(&library, &id)?;
            commands::remove::run(&mut library, &id)
        }
        Commands::Agenda { year } => commands::agenda::run(&library, year),
        Commands::Category(command) => match command {
            CategoryCommands::List => commands::category::list(&library),
            CategoryCommands::Add { name, color } => {
                commands::category::add(&mut library, name, color)
            }
            CategoryCommands::Edit {
                name,
                new_name,
                color,
            } => commands::category::edit(&mut library, &name, new_name, color),
            CategoryCommands::Rm { name } => commands::category::remove(&mut library, &name),
        },
        Commands::Config { align } => commands::config::run(config, align),
    }
}

fn current_year() -> i32 {
    use chrono::Datelike;
    chrono::Local::now().year()
}

/// The per-invocation alignment mode: flag first, then config default.
fn resolve_align(flag: Option<&str>, config: &AppConfig) -> Result<AlignMode> {
    match flag {
        Some(s) => s.parse().map_err(|e: String| anyhow::anyhow!(e)),
        None => Ok(config.align),
    }
}

/// Resolve a full event id from a possibly-abbreviated one.
fn resolve_event_id(library: &Library, needle: &str) -> Result<String> {
    if library.event(needle).is_some() {
        return Ok(needle.to_string());
    }

    let matches: Vec<&str> = library
        .events()
        .iter()
        .filter(|e| e.id.starts_with(needle))
        .map(|e| e.id.as_str())
        .collect();

    match matches.as_slice() {
        [id] => Ok(id.to_string()),
        [] => anyhow::bail!("No event matches id '{}'", needle),
        _ => anyhow::bail!(
            "Event id '{}' is ambiguous ({} matches)",
            needle,
            matches.len()
        ),
    }
}
