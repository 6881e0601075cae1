//! The in-memory event and category collections.
//!
//! `Library` owns both collections, enforces their invariants, and keeps
//! the snapshots on disk in sync after every mutation. Cross-collection
//! rules (category deletion cascades, recoloring) live here so callers
//! never patch the two collections independently.

use chrono::{Datelike, NaiveDate};

use crate::category::{Category, default_categories};
use crate::error::{YearlineError, YearlineResult};
use crate::event::Event;
use crate::snapshot::Storage;

pub struct Library {
    storage: Storage,
    events: Vec<Event>,
    categories: Vec<Category>,
}

impl Library {
    /// Load both snapshots. A missing category snapshot seeds the default
    /// categories; a missing event snapshot starts empty. Events carrying
    /// a color but no category are linked to the matching category, as
    /// older snapshots predate category references.
    pub fn load(storage: Storage) -> YearlineResult<Self> {
        let events = storage.load_events()?.unwrap_or_default();
        let categories = storage.load_categories()?.unwrap_or_else(default_categories);

        let mut library = Library {
            storage,
            events,
            categories,
        };

        if library.link_legacy_events() {
            library.storage.save_events(&library.events)?;
        }

        Ok(library)
    }

    pub fn events(&self) -> &[Event] {
        &self.events
    }

    pub fn categories(&self) -> &[Category] {
        &self.categories
    }

    pub fn event(&self, id: &str) -> Option<&Event> {
        self.events.iter().find(|e| e.id == id)
    }

    pub fn category(&self, id: &str) -> Option<&Category> {
        self.categories.iter().find(|c| c.id == id)
    }

    pub fn category_named(&self, name: &str) -> Option<&Category> {
        self.categories
            .iter()
            .find(|c| c.name.eq_ignore_ascii_case(name))
    }

    /// How many events reference a category. Surfaced in deletion
    /// confirmation prompts before the cascade runs.
    pub fn events_referencing(&self, category_id: &str) -> usize {
        self.events
            .iter()
            .filter(|e| e.category_id.as_deref() == Some(category_id))
            .count()
    }

    // EVENT OPERATIONS:

    pub fn add_event(&mut self, event: Event) -> YearlineResult<()> {
        event.validate()?;
        self.events.push(event);
        self.storage.save_events(&self.events)
    }

    /// Replace the stored event carrying `event.id`.
    pub fn update_event(&mut self, event: Event) -> YearlineResult<()> {
        event.validate()?;

        let Some(stored) = self.events.iter_mut().find(|e| e.id == event.id) else {
            return Err(YearlineError::EventNotFound(event.id));
        };
        *stored = event;

        self.storage.save_events(&self.events)
    }

    pub fn remove_event(&mut self, id: &str) -> YearlineResult<Event> {
        let Some(index) = self.events.iter().position(|e| e.id == id) else {
            return Err(YearlineError::EventNotFound(id.to_string()));
        };

        let removed = self.events.remove(index);
        self.storage.save_events(&self.events)?;
        Ok(removed)
    }

    // CATEGORY OPERATIONS:

    pub fn add_category(&mut self, category: Category) -> YearlineResult<()> {
        category.validate()?;
        self.categories.push(category);
        self.storage.save_categories(&self.categories)
    }

    /// Replace the stored category carrying `category.id`.
    ///
    /// A color change propagates to the category's events, and adopts
    /// uncategorized events still carrying the old color (snapshots from
    /// before category references identify their category only by color).
    pub fn update_category(&mut self, category: Category) -> YearlineResult<()> {
        category.validate()?;

        let Some(stored) = self.categories.iter_mut().find(|c| c.id == category.id) else {
            return Err(YearlineError::CategoryNotFound(category.id));
        };
        let old_color = stored.color;
        *stored = category.clone();

        let mut events_changed = false;
        for event in &mut self.events {
            if event.category_id.as_deref() == Some(category.id.as_str()) {
                if event.color != category.color {
                    event.color = category.color;
                    events_changed = true;
                }
            } else if event.category_id.is_none() && event.color == old_color {
                event.category_id = Some(category.id.clone());
                event.color = category.color;
                events_changed = true;
            }
        }

        self.storage.save_categories(&self.categories)?;
        if events_changed {
            self.storage.save_events(&self.events)?;
        }
        Ok(())
    }

    /// Delete a category, clearing the reference on its events.
    ///
    /// The events keep their color (soft cascade). Returns how many
    /// events were detached.
    pub fn remove_category(&mut self, id: &str) -> YearlineResult<usize> {
        let Some(index) = self.categories.iter().position(|c| c.id == id) else {
            return Err(YearlineError::CategoryNotFound(id.to_string()));
        };

        let mut detached = 0;
        for event in &mut self.events {
            if event.category_id.as_deref() == Some(id) {
                event.category_id = None;
                detached += 1;
            }
        }

        self.categories.remove(index);
        self.storage.save_categories(&self.categories)?;
        if detached > 0 {
            self.storage.save_events(&self.events)?;
        }
        Ok(detached)
    }

    // QUERIES:

    /// Events still relevant from `today`'s perspective: not yet over, or
    /// ending within the viewed `year`. Sorted by start date.
    pub fn upcoming_events(&self, today: NaiveDate, year: i32) -> Vec<&Event> {
        let mut upcoming: Vec<&Event> = self
            .events
            .iter()
            .filter(|e| e.end >= today || e.end.year() == year)
            .collect();

        upcoming.sort_by_key(|e| e.start);
        upcoming
    }

    /// Link legacy color-only events to the category matching their
    /// color. Returns whether anything changed.
    fn link_legacy_events(&mut self) -> bool {
        let categories = &self.categories;
        let mut changed = false;

        for event in &mut self.events {
            if event.category_id.is_some() {
                continue;
            }
            if let Some(category) = categories.iter().find(|c| c.color == event.color) {
                event.category_id = Some(category.id.clone());
                changed = true;
            }
        }

        changed
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::color::Color;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn make_library() -> (Library, tempfile::TempDir) {
        let dir = tempfile::tempdir().unwrap();
        let library = Library::load(Storage::new(dir.path().join("data"))).unwrap();
        (library, dir)
    }

    fn make_event(title: &str, color: Color) -> Event {
        Event::new(title, date(2026, 3, 20), date(2026, 3, 22), color)
    }

    #[test]
    fn first_load_seeds_default_categories() {
        let (library, _dir) = make_library();
        assert_eq!(library.categories().len(), 6);
        assert!(library.category_named("Work").is_some());
        assert!(library.events().is_empty());
    }

    #[test]
    fn add_event_rejects_invalid() {
        let (mut library, _dir) = make_library();
        let mut event = make_event("Backwards", Color::new(1, 2, 3));
        event.end = date(2026, 3, 1);
        assert!(library.add_event(event).is_err());
        assert!(library.events().is_empty());
    }

    #[test]
    fn update_event_replaces_by_id() {
        let (mut library, _dir) = make_library();
        let event = make_event("Draft", Color::new(1, 2, 3));
        let id = event.id.clone();
        library.add_event(event).unwrap();

        let mut updated = library.event(&id).unwrap().clone();
        updated.title = "Final".to_string();
        library.update_event(updated).unwrap();

        assert_eq!(library.event(&id).unwrap().title, "Final");
        assert_eq!(library.events().len(), 1);
    }

    #[test]
    fn update_unknown_event_fails() {
        let (mut library, _dir) = make_library();
        let event = make_event("Ghost", Color::new(1, 2, 3));
        assert!(matches!(
            library.update_event(event),
            Err(YearlineError::EventNotFound(_))
        ));
    }

    #[test]
    fn remove_category_detaches_events_but_keeps_colors() {
        let (mut library, _dir) = make_library();
        let work = library.category_named("Work").unwrap().clone();

        let mut event = make_event("Standup", work.color);
        event.category_id = Some(work.id.clone());
        let id = event.id.clone();
        library.add_event(event).unwrap();

        let detached = library.remove_category(&work.id).unwrap();
        assert_eq!(detached, 1);
        assert!(library.category(&work.id).is_none());

        let event = library.event(&id).unwrap();
        assert_eq!(event.category_id, None);
        assert_eq!(event.color, work.color);
    }

    #[test]
    fn update_category_recolors_its_events() {
        let (mut library, _dir) = make_library();
        let work = library.category_named("Work").unwrap().clone();

        let mut event = make_event("Standup", work.color);
        event.category_id = Some(work.id.clone());
        let id = event.id.clone();
        library.add_event(event).unwrap();

        let mut renamed = work.clone();
        renamed.color = Color::new(0x11, 0x22, 0x33);
        library.update_category(renamed).unwrap();

        assert_eq!(library.event(&id).unwrap().color, Color::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn update_category_adopts_color_matching_strays() {
        let (mut library, _dir) = make_library();
        let work = library.category_named("Work").unwrap().clone();

        let mut stray = make_event("Stray", work.color);
        stray.category_id = None;
        let id = stray.id.clone();
        // Bypass load-time linking by adding after load.
        library.add_event(stray).unwrap();

        let mut recolored = work.clone();
        recolored.color = Color::new(0x11, 0x22, 0x33);
        library.update_category(recolored).unwrap();

        let adopted = library.event(&id).unwrap();
        assert_eq!(adopted.category_id.as_deref(), Some(work.id.as_str()));
        assert_eq!(adopted.color, Color::new(0x11, 0x22, 0x33));
    }

    #[test]
    fn load_links_legacy_color_only_events() {
        let dir = tempfile::tempdir().unwrap();
        let storage = Storage::new(dir.path());

        let categories = default_categories();
        let personal = categories[0].clone();
        storage.save_categories(&categories).unwrap();
        storage.save_events(&[make_event("Legacy", personal.color)]).unwrap();

        let library = Library::load(storage.clone()).unwrap();
        assert_eq!(
            library.events()[0].category_id.as_deref(),
            Some(personal.id.as_str())
        );

        // The linked snapshot was written back.
        let reloaded = storage.load_events().unwrap().unwrap();
        assert_eq!(reloaded[0].category_id.as_deref(), Some(personal.id.as_str()));
    }

    #[test]
    fn upcoming_is_filtered_and_sorted() {
        let (mut library, _dir) = make_library();

        let mut past = make_event("Past", Color::new(1, 2, 3));
        past.start = date(2025, 1, 5);
        past.end = date(2025, 1, 6);

        let mut this_year = make_event("ThisYear", Color::new(1, 2, 3));
        this_year.start = date(2026, 1, 1);
        this_year.end = date(2026, 1, 2);

        let mut future = make_event("Future", Color::new(1, 2, 3));
        future.start = date(2026, 9, 1);
        future.end = date(2026, 9, 3);

        library.add_event(future).unwrap();
        library.add_event(past).unwrap();
        library.add_event(this_year).unwrap();

        let today = date(2026, 6, 1);
        let titles: Vec<&str> = library
            .upcoming_events(today, 2026)
            .iter()
            .map(|e| e.title.as_str())
            .collect();

        // "Past" ended in another year and before today; the January event
        // is over but belongs to the viewed year.
        assert_eq!(titles, vec!["ThisYear", "Future"]);
    }
}
