//! Domain types and pure logic for the museum site: the exhibition record
//! schema, category projections, admin form state, and visitor forms.
//!
//! Nothing in this crate touches storage or the network.

pub mod admin;
pub mod error;
pub mod exhibition;
pub mod forms;
pub mod notice;
pub mod validation;
pub mod view;
