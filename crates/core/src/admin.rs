//! Admin form state: the exhibition draft, its image-URL slots, and the
//! create/edit mode.
//!
//! Everything here is pure; the controller that commits drafts to the store
//! lives in the site crate.

use validator::{Validate, ValidationError};

use crate::error::CoreError;
use crate::exhibition::{Category, ExhibitionRecord};
use crate::validation::{require_text, validate_form, FieldErrors};

// ---------------------------------------------------------------------------
// ImageSlots
// ---------------------------------------------------------------------------

/// Editable image-URL slots. Never holds fewer than one slot.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ImageSlots {
    slots: Vec<String>,
}

impl ImageSlots {
    /// A single empty slot.
    pub fn new() -> Self {
        Self {
            slots: vec![String::new()],
        }
    }

    /// Load slots from a stored record; a record without images still gets
    /// one empty slot.
    pub fn from_images(images: &[String]) -> Self {
        if images.is_empty() {
            Self::new()
        } else {
            Self {
                slots: images.to_vec(),
            }
        }
    }

    pub fn as_slice(&self) -> &[String] {
        &self.slots
    }

    pub fn len(&self) -> usize {
        self.slots.len()
    }

    /// Whether no slot exists. The one-slot floor keeps this `false`.
    pub fn is_empty(&self) -> bool {
        self.slots.is_empty()
    }

    /// Add one empty slot at the end.
    pub fn append(&mut self) {
        self.slots.push(String::new());
    }

    /// Remove the slot at `position`.
    ///
    /// Returns `Ok(false)` without touching anything when only one slot is
    /// left.
    pub fn remove(&mut self, position: usize) -> Result<bool, CoreError> {
        self.check(position)?;
        if self.slots.len() == 1 {
            return Ok(false);
        }
        self.slots.remove(position);
        Ok(true)
    }

    /// Replace the URL in the slot at `position`.
    pub fn set(&mut self, position: usize, url: impl Into<String>) -> Result<(), CoreError> {
        self.check(position)?;
        self.slots[position] = url.into();
        Ok(())
    }

    pub fn into_images(self) -> Vec<String> {
        self.slots
    }

    fn check(&self, position: usize) -> Result<(), CoreError> {
        if position < self.slots.len() {
            Ok(())
        } else {
            Err(CoreError::OutOfRange {
                index: position,
                len: self.slots.len(),
            })
        }
    }
}

impl Default for ImageSlots {
    fn default() -> Self {
        Self::new()
    }
}

// ---------------------------------------------------------------------------
// Draft
// ---------------------------------------------------------------------------

fn validate_title(title: &str) -> Result<(), ValidationError> {
    require_text(title, "Title is required")
}

fn validate_description(description: &str) -> Result<(), ValidationError> {
    require_text(description, "Description is required")
}

/// In-progress exhibition record held by the admin form.
#[derive(Debug, Clone, PartialEq, Eq, Validate)]
pub struct Draft {
    #[validate(custom(function = "validate_title"))]
    pub title: String,
    /// Rich-text HTML from the editor widget; stored verbatim.
    #[validate(custom(function = "validate_description"))]
    pub description: String,
    pub images: ImageSlots,
    pub category: Category,
}

impl Draft {
    /// Empty title and description, one empty image slot, `permanent`.
    pub fn blank() -> Self {
        Self {
            title: String::new(),
            description: String::new(),
            images: ImageSlots::new(),
            category: Category::Permanent,
        }
    }

    /// Pre-populate the form with every field of a stored record.
    pub fn from_record(record: &ExhibitionRecord) -> Self {
        Self {
            title: record.title.clone(),
            description: record.description.clone(),
            images: ImageSlots::from_images(&record.images),
            category: record.category,
        }
    }

    /// Validate and convert into the record that will be stored.
    ///
    /// Image slots are kept as entered, blank ones included.
    pub fn to_record(&self) -> Result<ExhibitionRecord, FieldErrors> {
        validate_form(self)?;
        Ok(ExhibitionRecord {
            title: self.title.clone(),
            description: self.description.clone(),
            images: self.images.as_slice().to_vec(),
            category: self.category,
        })
    }
}

impl Default for Draft {
    fn default() -> Self {
        Self::blank()
    }
}

// ---------------------------------------------------------------------------
// AdminMode
// ---------------------------------------------------------------------------

/// Whether submitting the form creates a record or updates one.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum AdminMode {
    #[default]
    Create,
    /// Editing the record at `index` of the current collection.
    Edit { index: usize },
}

impl AdminMode {
    pub fn editing_index(self) -> Option<usize> {
        match self {
            Self::Create => None,
            Self::Edit { index } => Some(index),
        }
    }

    /// Mode after the record at `deleted` was removed from the collection.
    ///
    /// Removing the edited record ends the edit; removing an earlier record
    /// moves the edited index down by one.
    pub fn after_delete(self, deleted: usize) -> Self {
        match self {
            Self::Edit { index } if index == deleted => Self::Create,
            Self::Edit { index } if index > deleted => Self::Edit { index: index - 1 },
            other => other,
        }
    }
}
