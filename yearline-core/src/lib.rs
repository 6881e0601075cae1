//! Core library for yearline.
//!
//! This crate provides everything the CLI builds on:
//! - `Event` and `Category` types with their snapshot persistence
//! - `Library` for the in-memory collections and their cascade rules
//! - the month layout engine: `MonthWindow` + `DayGrid` in, placed
//!   markers out, as a pure function with no state between calls

pub mod category;
pub mod color;
pub mod config;
pub mod error;
pub mod event;
pub mod grid;
pub mod layout;
pub mod library;
pub mod month;
pub mod snapshot;

pub use category::{Category, default_categories};
pub use color::Color;
pub use config::AppConfig;
pub use error::{YearlineError, YearlineResult};
pub use event::Event;
pub use grid::{AlignMode, DayGrid, GRID_CELLS};
pub use layout::{PlacedMarker, layout_month};
pub use library::Library;
pub use month::{MONTH_NAMES, MonthWindow, is_weekend};
pub use snapshot::Storage;
