//! Exhibition record schema and the closed set of display categories.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::CoreError;
use crate::validation::FieldErrors;

// ---------------------------------------------------------------------------
// Category
// ---------------------------------------------------------------------------

/// Partition of the collection used by the public browsing pages.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Category {
    #[default]
    Permanent,
    Temporary,
    Archive,
}

impl Category {
    /// Every category, in navigation order.
    pub const ALL: [Category; 3] = [Category::Permanent, Category::Temporary, Category::Archive];

    /// Persisted name.
    pub fn name(self) -> &'static str {
        match self {
            Self::Permanent => "permanent",
            Self::Temporary => "temporary",
            Self::Archive => "archive",
        }
    }

    /// Human-readable label.
    pub fn label(self) -> &'static str {
        match self {
            Self::Permanent => "Permanent",
            Self::Temporary => "Temporary",
            Self::Archive => "Archive",
        }
    }

    /// Parse from the persisted name. Case-sensitive.
    pub fn from_name(name: &str) -> Result<Self, CoreError> {
        match name {
            "permanent" => Ok(Self::Permanent),
            "temporary" => Ok(Self::Temporary),
            "archive" => Ok(Self::Archive),
            other => {
                let mut errors = FieldErrors::new();
                errors.add(
                    "category",
                    format!("Unknown category '{other}'. Must be one of: permanent, temporary, archive"),
                );
                Err(CoreError::Validation(errors))
            }
        }
    }

    /// Parse a public page path segment. The archive page is also reachable
    /// as `previous`.
    pub fn from_path(segment: &str) -> Result<Self, CoreError> {
        match segment {
            "previous" => Ok(Self::Archive),
            other => Self::from_name(other),
        }
    }
}

impl fmt::Display for Category {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}

impl FromStr for Category {
    type Err = CoreError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        Self::from_name(s)
    }
}

// ---------------------------------------------------------------------------
// ExhibitionRecord
// ---------------------------------------------------------------------------

/// One entry of the exhibition collection.
///
/// There is no identifier: a record is addressed by its position in the
/// collection, and that position is only meaningful for one load.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct ExhibitionRecord {
    pub title: String,
    #[serde(default)]
    pub description: String,
    /// Image URLs in display order. Blank entries are kept as entered.
    #[serde(default)]
    pub images: Vec<String>,
    pub category: Category,
}

impl ExhibitionRecord {
    pub fn new(
        title: impl Into<String>,
        description: impl Into<String>,
        category: Category,
    ) -> Self {
        Self {
            title: title.into(),
            description: description.into(),
            images: Vec::new(),
            category,
        }
    }

    pub fn with_image(mut self, url: impl Into<String>) -> Self {
        self.images.push(url.into());
        self
    }

    pub fn belongs_to(&self, category: Category) -> bool {
        self.category == category
    }

    /// Image URLs that should actually be rendered (blank slots skipped).
    pub fn visible_images(&self) -> impl Iterator<Item = &str> {
        self.images
            .iter()
            .map(|url| url.trim())
            .filter(|url| !url.is_empty())
    }
}
