//! Category projection of the exhibition collection (public browsing pages).
//!
//! A [`CategoryView`] is derived from one load of the collection and is never
//! refreshed in place: callers rebuild it from a fresh load whenever a page
//! is opened. Each entry keeps its position in the full collection so an
//! editor can map a filtered item back to the record it came from.

use crate::error::CoreError;
use crate::exhibition::{Category, ExhibitionRecord};

/// A record together with its position in the full collection.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IndexedExhibition {
    pub index: usize,
    pub record: ExhibitionRecord,
}

/// Records of `category`, in collection order, paired with their original
/// positions.
pub fn for_category(collection: &[ExhibitionRecord], category: Category) -> Vec<IndexedExhibition> {
    collection
        .iter()
        .enumerate()
        .filter(|(_, record)| record.belongs_to(category))
        .map(|(index, record)| IndexedExhibition {
            index,
            record: record.clone(),
        })
        .collect()
}

// ---------------------------------------------------------------------------
// CategoryView
// ---------------------------------------------------------------------------

/// What a browsing page shows for its current cursor.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ActiveExhibition<'a> {
    /// The category has no records; nothing to select.
    Empty { category: Category },
    /// The record under the cursor.
    Showing {
        position: usize,
        entry: &'a IndexedExhibition,
    },
}

/// One entry of the tab bar above the gallery.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Tab<'a> {
    pub position: usize,
    pub title: &'a str,
    pub active: bool,
}

/// Filtered records of one category plus the gallery cursor.
#[derive(Debug, Clone)]
pub struct CategoryView {
    category: Category,
    entries: Vec<IndexedExhibition>,
    cursor: usize,
}

impl CategoryView {
    /// Build the view with the cursor on the first record.
    pub fn new(collection: &[ExhibitionRecord], category: Category) -> Self {
        Self {
            category,
            entries: for_category(collection, category),
            cursor: 0,
        }
    }

    pub fn category(&self) -> Category {
        self.category
    }

    pub fn entries(&self) -> &[IndexedExhibition] {
        &self.entries
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Cursor position within the filtered sequence.
    pub fn cursor(&self) -> usize {
        self.cursor
    }

    /// Move the cursor. Positions are relative to the filtered sequence.
    pub fn select(&mut self, position: usize) -> Result<(), CoreError> {
        if position >= self.entries.len() {
            return Err(CoreError::OutOfRange {
                index: position,
                len: self.entries.len(),
            });
        }
        self.cursor = position;
        Ok(())
    }

    /// The record under the cursor, or the explicit empty state.
    pub fn active(&self) -> ActiveExhibition<'_> {
        match self.entries.get(self.cursor) {
            Some(entry) => ActiveExhibition::Showing {
                position: self.cursor,
                entry,
            },
            None => ActiveExhibition::Empty {
                category: self.category,
            },
        }
    }

    pub fn tabs(&self) -> Vec<Tab<'_>> {
        self.entries
            .iter()
            .enumerate()
            .map(|(position, entry)| Tab {
                position,
                title: &entry.record.title,
                active: position == self.cursor,
            })
            .collect()
    }

    /// Re-filter for another category. The cursor always starts over at 0.
    pub fn switch_category(&mut self, collection: &[ExhibitionRecord], category: Category) {
        *self = Self::new(collection, category);
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;

    use super::*;

    fn record(title: &str, category: Category) -> ExhibitionRecord {
        ExhibitionRecord::new(title, format!("{title} description"), category)
    }

    fn sample() -> Vec<ExhibitionRecord> {
        vec![
            record("A", Category::Permanent),
            record("B", Category::Temporary),
            record("C", Category::Permanent),
        ]
    }

    // -- for_category --------------------------------------------------------

    #[test]
    fn filter_keeps_original_positions() {
        let permanent = for_category(&sample(), Category::Permanent);
        let pairs: Vec<(usize, &str)> = permanent
            .iter()
            .map(|e| (e.index, e.record.title.as_str()))
            .collect();
        assert_eq!(pairs, vec![(0, "A"), (2, "C")]);
    }

    #[test]
    fn every_record_lands_in_exactly_one_category() {
        let collection = vec![
            record("A", Category::Permanent),
            record("B", Category::Temporary),
            record("C", Category::Archive),
            record("D", Category::Temporary),
        ];
        for (index, _) in collection.iter().enumerate() {
            let hits = Category::ALL
                .iter()
                .filter(|c| for_category(&collection, **c).iter().any(|e| e.index == index))
                .count();
            assert_eq!(hits, 1, "record {index} should appear in exactly one view");
        }
    }

    #[test]
    fn filter_of_empty_collection_is_empty() {
        assert!(for_category(&[], Category::Archive).is_empty());
    }

    // -- CategoryView --------------------------------------------------------

    #[test]
    fn cursor_defaults_to_first_record() {
        let view = CategoryView::new(&sample(), Category::Permanent);
        assert_eq!(view.cursor(), 0);
        assert_matches!(
            view.active(),
            ActiveExhibition::Showing { position: 0, entry } if entry.record.title == "A"
        );
    }

    #[test]
    fn empty_category_shows_empty_state() {
        let view = CategoryView::new(&sample(), Category::Archive);
        assert!(view.is_empty());
        assert_eq!(
            view.active(),
            ActiveExhibition::Empty {
                category: Category::Archive
            }
        );
        assert!(view.tabs().is_empty());
    }

    #[test]
    fn empty_collection_never_dereferences_cursor() {
        for category in Category::ALL {
            let view = CategoryView::new(&[], category);
            assert_matches!(view.active(), ActiveExhibition::Empty { .. });
        }
    }

    #[test]
    fn select_moves_cursor_within_filtered_sequence() {
        let mut view = CategoryView::new(&sample(), Category::Permanent);
        view.select(1).unwrap();
        assert_matches!(
            view.active(),
            ActiveExhibition::Showing { position: 1, entry } if entry.index == 2
        );
    }

    #[test]
    fn select_out_of_range_keeps_cursor() {
        let mut view = CategoryView::new(&sample(), Category::Permanent);
        view.select(1).unwrap();
        let result = view.select(2);
        assert_matches!(result, Err(CoreError::OutOfRange { index: 2, len: 2 }));
        assert_eq!(view.cursor(), 1);
    }

    #[test]
    fn tabs_mark_the_active_record() {
        let mut view = CategoryView::new(&sample(), Category::Permanent);
        view.select(1).unwrap();
        let tabs = view.tabs();
        assert_eq!(tabs.len(), 2);
        assert_eq!(tabs[0].title, "A");
        assert!(!tabs[0].active);
        assert_eq!(tabs[1].title, "C");
        assert!(tabs[1].active);
    }

    #[test]
    fn switching_category_resets_cursor() {
        let collection = sample();
        let mut view = CategoryView::new(&collection, Category::Permanent);
        view.select(1).unwrap();
        view.switch_category(&collection, Category::Temporary);
        assert_eq!(view.category(), Category::Temporary);
        assert_eq!(view.cursor(), 0);
        view.switch_category(&collection, Category::Permanent);
        assert_eq!(view.cursor(), 0);
    }
}
