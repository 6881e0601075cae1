//! Event categories.

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::color::Color;
use crate::error::{YearlineError, YearlineResult};

/// A named color preset that events can reference.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Category {
    pub id: String,
    pub name: String,
    pub color: Color,
}

impl Category {
    /// Create a new category with a fresh id.
    pub fn new(name: impl Into<String>, color: Color) -> Self {
        Category {
            id: Uuid::new_v4().to_string(),
            name: name.into(),
            color,
        }
    }

    pub fn validate(&self) -> YearlineResult<()> {
        if self.name.trim().is_empty() {
            return Err(YearlineError::InvalidCategory("name is required".into()));
        }
        Ok(())
    }
}

/// The categories seeded on first run, before any snapshot exists.
pub fn default_categories() -> Vec<Category> {
    [
        ("Personal", Color::new(0x4c, 0xaf, 0x50)),
        ("Work", Color::new(0x21, 0x96, 0xf3)),
        ("Important", Color::new(0xff, 0x98, 0x00)),
        ("Family", Color::new(0x9c, 0x27, 0xb0)),
        ("Urgent", Color::new(0xf4, 0x43, 0x36)),
        ("Event", Color::new(0x00, 0xbc, 0xd4)),
    ]
    .into_iter()
    .map(|(name, color)| Category::new(name, color))
    .collect()
}
