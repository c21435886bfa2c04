//! Admin page: list every exhibition, create new ones, edit or delete
//! existing ones.
//!
//! The controller owns the session's [`ExhibitionStore`] plus the form
//! state. Form edits only touch the draft; nothing is persisted until
//! [`AdminController::submit`] or [`AdminController::delete`].

use museu_core::admin::{AdminMode, Draft};
use museu_core::error::CoreError;
use museu_core::exhibition::{Category, ExhibitionRecord};
use museu_db::{ExhibitionStore, KeyValueStorage};

use crate::error::SiteResult;

/// What a successful submit did.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Submitted {
    Created { index: usize },
    Updated { index: usize },
}

/// One row of the admin listing.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ListingRow<'a> {
    pub index: usize,
    pub title: &'a str,
    pub category: Category,
    /// Non-blank image URLs only.
    pub images: Vec<&'a str>,
    /// Whether this row is the record currently loaded into the form.
    pub editing: bool,
}

pub struct AdminController<S> {
    store: ExhibitionStore<S>,
    draft: Draft,
    mode: AdminMode,
}

impl<S: KeyValueStorage> AdminController<S> {
    /// Open the admin page over `storage` with a blank form.
    pub fn open(storage: S) -> Self {
        Self::with_store(ExhibitionStore::open(storage))
    }

    pub fn with_store(store: ExhibitionStore<S>) -> Self {
        Self {
            store,
            draft: Draft::blank(),
            mode: AdminMode::Create,
        }
    }

    pub fn store(&self) -> &ExhibitionStore<S> {
        &self.store
    }

    pub fn draft(&self) -> &Draft {
        &self.draft
    }

    pub fn mode(&self) -> AdminMode {
        self.mode
    }

    pub fn records(&self) -> &[ExhibitionRecord] {
        self.store.list()
    }

    pub fn listing(&self) -> Vec<ListingRow<'_>> {
        let editing = self.mode.editing_index();
        self.store
            .list()
            .iter()
            .enumerate()
            .map(|(index, record)| ListingRow {
                index,
                title: &record.title,
                category: record.category,
                images: record.visible_images().collect(),
                editing: editing == Some(index),
            })
            .collect()
    }

    // -- Form fields ---------------------------------------------------------

    pub fn set_title(&mut self, title: impl Into<String>) {
        self.draft.title = title.into();
    }

    pub fn set_description(&mut self, html: impl Into<String>) {
        self.draft.description = html.into();
    }

    pub fn set_category(&mut self, category: Category) {
        self.draft.category = category;
    }

    pub fn append_image_slot(&mut self) {
        self.draft.images.append();
    }

    /// Remove an image slot. Returns `false` when it was the last one.
    pub fn remove_image_slot(&mut self, position: usize) -> SiteResult<bool> {
        Ok(self.draft.images.remove(position)?)
    }

    pub fn set_image_slot(&mut self, position: usize, url: impl Into<String>) -> SiteResult<()> {
        Ok(self.draft.images.set(position, url)?)
    }

    // -- Mode ----------------------------------------------------------------

    /// Load the record at `index` into the form and switch to edit mode.
    pub fn begin_edit(&mut self, index: usize) -> SiteResult<()> {
        let record = self.store.get(index).ok_or_else(|| {
            tracing::warn!(index, len = self.store.len(), "Cannot edit missing exhibition");
            CoreError::OutOfRange {
                index,
                len: self.store.len(),
            }
        })?;
        self.draft = Draft::from_record(record);
        self.mode = AdminMode::Edit { index };
        tracing::debug!(index, "Editing exhibition");
        Ok(())
    }

    /// Drop the draft and go back to creating a new record.
    pub fn cancel_edit(&mut self) {
        self.reset();
    }

    // -- Commands ------------------------------------------------------------

    /// Validate the draft and create or update the record.
    ///
    /// On success the form is reset to a blank draft in create mode. On any
    /// error the draft and mode are left as they were.
    pub fn submit(&mut self) -> SiteResult<Submitted> {
        let record = self.draft.to_record().map_err(CoreError::from)?;

        let outcome = match self.mode {
            AdminMode::Create => Submitted::Created {
                index: self.store.create(record)?,
            },
            AdminMode::Edit { index } => {
                self.store.update(index, record)?;
                Submitted::Updated { index }
            }
        };

        self.reset();
        Ok(outcome)
    }

    /// Delete the record at `index`.
    ///
    /// Deleting the record being edited resets the form; deleting an earlier
    /// record keeps the edit pointed at the same record.
    pub fn delete(&mut self, index: usize) -> SiteResult<ExhibitionRecord> {
        let removed = self.store.delete(index)?;

        let next = self.mode.after_delete(index);
        if self.mode.editing_index().is_some() && next == AdminMode::Create {
            self.draft = Draft::blank();
        }
        self.mode = next;
        Ok(removed)
    }

    fn reset(&mut self) {
        self.draft = Draft::blank();
        self.mode = AdminMode::Create;
    }
}

#[cfg(test)]
mod tests {
    use assert_matches::assert_matches;
    use museu_db::{MemoryStorage, StoreError};

    use super::*;
    use crate::error::SiteError;

    fn controller_with(titles: &[&str]) -> AdminController<MemoryStorage> {
        let mut admin = AdminController::open(MemoryStorage::new());
        for title in titles {
            admin.set_title(*title);
            admin.set_description(format!("<p>{title}</p>"));
            admin.submit().unwrap();
        }
        admin
    }

    #[test]
    fn starts_blank_in_create_mode() {
        let admin = controller_with(&[]);
        assert_eq!(admin.mode(), AdminMode::Create);
        assert_eq!(admin.draft(), &Draft::blank());
    }

    #[test]
    fn submit_in_create_mode_appends_and_resets() {
        let mut admin = controller_with(&["A"]);
        admin.set_title("B");
        admin.set_description("<p>B</p>");
        admin.set_category(Category::Temporary);

        assert_eq!(admin.submit().unwrap(), Submitted::Created { index: 1 });
        assert_eq!(admin.records()[1].category, Category::Temporary);
        assert_eq!(admin.draft(), &Draft::blank());
    }

    #[test]
    fn invalid_draft_is_not_submitted() {
        let mut admin = controller_with(&[]);
        admin.set_title("Only a title");

        assert_matches!(
            admin.submit(),
            Err(SiteError::Core(CoreError::Validation(fields))) if fields.contains("description")
        );
        assert!(admin.records().is_empty());
        assert_eq!(admin.draft().title, "Only a title");
    }

    #[test]
    fn begin_edit_out_of_range_keeps_create_mode() {
        let mut admin = controller_with(&["A"]);
        assert_matches!(
            admin.begin_edit(1),
            Err(SiteError::Core(CoreError::OutOfRange { index: 1, len: 1 }))
        );
        assert_eq!(admin.mode(), AdminMode::Create);
    }

    #[test]
    fn update_out_of_range_keeps_draft() {
        let mut admin = controller_with(&["A", "B"]);
        admin.begin_edit(1).unwrap();
        admin.set_title("B2");

        // Another session shrank the collection underneath us.
        admin.store.delete(1).unwrap();
        assert_matches!(
            admin.submit(),
            Err(SiteError::Store(StoreError::OutOfRange { index: 1, len: 1 }))
        );
        assert_eq!(admin.mode(), AdminMode::Edit { index: 1 });
        assert_eq!(admin.draft().title, "B2");
    }

    #[test]
    fn cancel_edit_discards_changes() {
        let mut admin = controller_with(&["A"]);
        admin.begin_edit(0).unwrap();
        admin.set_title("changed");
        admin.cancel_edit();
        assert_eq!(admin.mode(), AdminMode::Create);
        assert_eq!(admin.draft(), &Draft::blank());
        assert_eq!(admin.records()[0].title, "A");
    }

    #[test]
    fn listing_marks_edited_row_and_hides_blank_images() {
        let mut admin = controller_with(&[]);
        admin.set_title("A");
        admin.set_description("<p>A</p>");
        admin.append_image_slot();
        admin.set_image_slot(1, "https://img.example/a.jpg").unwrap();
        admin.submit().unwrap();
        admin.begin_edit(0).unwrap();

        let rows = admin.listing();
        assert_eq!(rows.len(), 1);
        assert!(rows[0].editing);
        assert_eq!(rows[0].images, vec!["https://img.example/a.jpg"]);
    }
}
