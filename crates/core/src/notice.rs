//! User-facing outcome of a form submission.

use crate::validation::FieldErrors;

/// What the page shows after the visitor pressed submit.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Notice {
    /// Accepted; the form was cleared.
    Success(String),
    /// Rejected locally; nothing was sent and the form is unchanged.
    Invalid(FieldErrors),
    /// The endpoint refused or could not be reached; the form is unchanged.
    Failure(String),
}

impl Notice {
    pub fn is_success(&self) -> bool {
        matches!(self, Notice::Success(_))
    }

    /// Text for a transient toast. Field errors are rendered inline instead.
    pub fn toast(&self) -> Option<&str> {
        match self {
            Notice::Success(message) | Notice::Failure(message) => Some(message),
            Notice::Invalid(_) => None,
        }
    }
}
