//! Museum site layer: configuration, the admin page controller, the public
//! exhibition browser and visitor form submission.
//!
//! The `museu` binary in this crate wires these over a file-backed storage
//! scope.

pub mod admin;
pub mod browse;
pub mod config;
pub mod error;
pub mod submission;

pub use admin::{AdminController, ListingRow, Submitted};
pub use browse::{ExhibitionBrowser, Showcase};
pub use config::SiteConfig;
pub use error::{SiteError, SiteResult};
pub use submission::{FormSession, HttpSubmissionEndpoint, SubmissionEndpoint, SubmissionError};
