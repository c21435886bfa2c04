//! Visitor request forms (volunteer, event, group tour, donation).
//!
//! Each form knows its validation rules, the endpoint path it is sent to,
//! the acknowledgment shown after a successful send, and how to flatten
//! itself into the field map the endpoint receives.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};
use validator::{Validate, ValidationError};

use crate::validation::{invalid, require_text, validate_form, FieldErrors};

/// Flat field map handed to the submission endpoint.
pub type FieldMap = BTreeMap<String, String>;

/// Minimum length of the free-text parts of the volunteer and event forms.
pub const MIN_RICH_TEXT_CHARS: usize = 50;

/// Smallest group accepted for a guided tour.
pub const MIN_TOUR_PARTY_SIZE: u32 = 10;

// ---------------------------------------------------------------------------
// RichText
// ---------------------------------------------------------------------------

/// HTML fragment produced by the rich-text editor widget.
///
/// The markup is never interpreted; only its length is checked.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RichText(String);

impl RichText {
    pub fn new(html: impl Into<String>) -> Self {
        Self(html.into())
    }

    pub fn as_html(&self) -> &str {
        &self.0
    }

    pub fn char_len(&self) -> usize {
        self.0.chars().count()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

impl From<&str> for RichText {
    fn from(html: &str) -> Self {
        Self::new(html)
    }
}

impl From<String> for RichText {
    fn from(html: String) -> Self {
        Self(html)
    }
}

fn min_rich_text(text: &RichText, message: &'static str) -> Result<(), ValidationError> {
    if text.char_len() < MIN_RICH_TEXT_CHARS {
        Err(invalid("length", message))
    } else {
        Ok(())
    }
}

// ---------------------------------------------------------------------------
// VisitorForm
// ---------------------------------------------------------------------------

/// A form that is sent to the outbound submission endpoint.
pub trait VisitorForm: Validate + Default + Clone {
    /// Endpoint path, appended to the configured base URL.
    const ENDPOINT: &'static str;

    /// Message shown once the endpoint accepted the submission.
    const ACKNOWLEDGMENT: &'static str;

    fn field_map(&self) -> FieldMap;

    /// Field-level messages for everything that would block sending.
    fn check(&self) -> Result<(), FieldErrors> {
        validate_form(self)
    }
}

fn insert(map: &mut FieldMap, key: &str, value: &str) {
    map.insert(key.to_string(), value.to_string());
}

// ---------------------------------------------------------------------------
// Volunteer application
// ---------------------------------------------------------------------------

fn validate_interests(interests: &RichText) -> Result<(), ValidationError> {
    min_rich_text(
        interests,
        "Please tell us more about your interests (at least 50 characters)",
    )
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct VolunteerApplication {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    pub phone: Option<String>,
    #[validate(custom(function = "validate_interests"))]
    pub interests: RichText,
}

impl VisitorForm for VolunteerApplication {
    const ENDPOINT: &'static str = "/smtp/volunteer-application";
    const ACKNOWLEDGMENT: &'static str = "Thank you for your interest! We will contact you soon.";

    fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        insert(&mut map, "name", &self.name);
        insert(&mut map, "email", &self.email);
        if let Some(phone) = self.phone.as_deref().filter(|p| !p.trim().is_empty()) {
            insert(&mut map, "phone", phone);
        }
        insert(&mut map, "message", self.interests.as_html());
        map
    }
}

// ---------------------------------------------------------------------------
// Event submission
// ---------------------------------------------------------------------------

fn validate_event_description(description: &RichText) -> Result<(), ValidationError> {
    min_rich_text(description, "Description must be at least 50 characters")
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct EventSubmission {
    #[validate(length(min = 1, message = "Event title is required"))]
    pub title: String,
    #[validate(length(min = 1, message = "Event date is required"))]
    pub date: String,
    #[validate(length(min = 1, message = "Organizer name is required"))]
    pub organizer: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(custom(function = "validate_event_description"))]
    pub description: RichText,
}

impl VisitorForm for EventSubmission {
    const ENDPOINT: &'static str = "/smtp/event-submission";
    const ACKNOWLEDGMENT: &'static str =
        "Event submitted successfully! We will review it shortly.";

    fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        insert(&mut map, "title", &self.title);
        insert(&mut map, "date", &self.date);
        insert(&mut map, "organizer", &self.organizer);
        insert(&mut map, "email", &self.email);
        insert(&mut map, "description", self.description.as_html());
        map
    }
}

// ---------------------------------------------------------------------------
// Group tour request
// ---------------------------------------------------------------------------

fn validate_tour_date(date: &str) -> Result<(), ValidationError> {
    require_text(date, "Tour date is required")?;
    chrono::NaiveDate::parse_from_str(date.trim(), "%Y-%m-%d")
        .map(|_| ())
        .map_err(|_| invalid("date", "Tour date must be a valid date (YYYY-MM-DD)"))
}

#[derive(Debug, Clone, Default, PartialEq, Eq, Validate)]
pub struct TourRequest {
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    #[validate(length(min = 1, message = "Phone is required"))]
    pub phone: String,
    #[validate(custom(function = "validate_tour_date"))]
    pub date: String,
    #[validate(range(min = 10, message = "Minimum 10 people required for group tours"))]
    pub people: u32,
    pub message: String,
}

impl VisitorForm for TourRequest {
    const ENDPOINT: &'static str = "/smtp/tour-request";
    const ACKNOWLEDGMENT: &'static str =
        "Thank you! Your tour request was sent and we will confirm the date by email.";

    fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        insert(&mut map, "name", &self.name);
        insert(&mut map, "email", &self.email);
        insert(&mut map, "phone", &self.phone);
        insert(&mut map, "date", self.date.trim());
        insert(&mut map, "people", &self.people.to_string());
        if !self.message.trim().is_empty() {
            insert(&mut map, "message", &self.message);
        }
        map
    }
}

// ---------------------------------------------------------------------------
// Donation
// ---------------------------------------------------------------------------

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum DonationKind {
    #[default]
    Money,
    Item,
}

impl DonationKind {
    pub fn name(self) -> &'static str {
        match self {
            Self::Money => "money",
            Self::Item => "item",
        }
    }
}

#[derive(Debug, Clone, Default, PartialEq, Validate)]
pub struct Donation {
    pub kind: DonationKind,
    /// Euros; only used for monetary donations.
    pub amount: Option<f64>,
    /// Only used for item donations.
    pub item_description: String,
    #[validate(length(min = 1, message = "Name is required"))]
    pub name: String,
    #[validate(email(message = "Valid email is required"))]
    pub email: String,
    pub message: String,
}

impl Donation {
    /// Rules that depend on `kind`, reported against the field they concern.
    fn add_detail_errors(&self, errors: &mut FieldErrors) {
        match self.kind {
            DonationKind::Money => {
                if !self.amount.is_some_and(|a| a.is_finite() && a > 0.0) {
                    errors.add("amount", "Please enter a donation amount");
                }
            }
            DonationKind::Item => {
                if self.item_description.trim().is_empty() {
                    errors.add(
                        "item_description",
                        "Please describe the item you would like to donate",
                    );
                }
            }
        }
    }
}

impl VisitorForm for Donation {
    const ENDPOINT: &'static str = "/smtp/donation";
    const ACKNOWLEDGMENT: &'static str = "Thank you for supporting the museum!";

    fn field_map(&self) -> FieldMap {
        let mut map = FieldMap::new();
        insert(&mut map, "type", self.kind.name());
        match self.kind {
            DonationKind::Money => {
                if let Some(amount) = self.amount {
                    insert(&mut map, "amount", &format!("{amount:.2}"));
                }
            }
            DonationKind::Item => {
                insert(&mut map, "itemDescription", &self.item_description);
            }
        }
        insert(&mut map, "name", &self.name);
        insert(&mut map, "email", &self.email);
        if !self.message.trim().is_empty() {
            insert(&mut map, "message", &self.message);
        }
        map
    }

    fn check(&self) -> Result<(), FieldErrors> {
        let mut errors = validate_form(self).err().unwrap_or_default();
        self.add_detail_errors(&mut errors);
        errors.into_result()
    }
}
