//! Sending visitor forms to the outbound submission endpoint.
//!
//! [`FormSession`] drives one form through validate → send → acknowledge.
//! The transport sits behind [`SubmissionEndpoint`]; the HTTP implementation
//! posts the form's field map as JSON to `{api_url}{path}`.

use async_trait::async_trait;
use museu_core::forms::{FieldMap, VisitorForm};
use museu_core::notice::Notice;

use crate::config::SiteConfig;
use crate::error::{SiteError, SiteResult};

// ---------------------------------------------------------------------------
// Error
// ---------------------------------------------------------------------------

/// Why a submission did not go through. The display text is what the
/// visitor sees.
#[derive(Debug, thiserror::Error)]
pub enum SubmissionError {
    /// The request never got a response (network, DNS, timeout, etc.).
    #[error("{0}")]
    Request(#[from] reqwest::Error),

    /// The endpoint answered with a non-2xx status code.
    #[error("Request failed: {0}")]
    HttpStatus(u16),
}

// ---------------------------------------------------------------------------
// Endpoint
// ---------------------------------------------------------------------------

#[async_trait]
pub trait SubmissionEndpoint: Send + Sync {
    /// Deliver `fields` to the endpoint at `path`.
    async fn submit(&self, path: &str, fields: &FieldMap) -> Result<(), SubmissionError>;
}

/// Posts field maps to the museum API.
pub struct HttpSubmissionEndpoint {
    client: reqwest::Client,
    base_url: String,
    token: Option<String>,
}

impl HttpSubmissionEndpoint {
    pub fn new(config: &SiteConfig) -> SiteResult<Self> {
        let client = reqwest::Client::builder()
            .timeout(config.request_timeout())
            .build()
            .map_err(|e| SiteError::Submission(format!("HTTP client setup failed: {e}")))?;
        Ok(Self {
            client,
            base_url: config.api_url.clone(),
            token: config.api_token.clone(),
        })
    }

    pub fn url_for(&self, path: &str) -> String {
        format!("{}{}", self.base_url, path)
    }
}

#[async_trait]
impl SubmissionEndpoint for HttpSubmissionEndpoint {
    async fn submit(&self, path: &str, fields: &FieldMap) -> Result<(), SubmissionError> {
        let url = self.url_for(path);
        let mut request = self.client.post(&url).json(fields);
        if let Some(token) = &self.token {
            request = request.bearer_auth(token);
        }

        let response = request.send().await?;
        let status = response.status();
        if status.is_success() {
            tracing::debug!(url = %url, status = status.as_u16(), "Submission accepted");
            Ok(())
        } else {
            Err(SubmissionError::HttpStatus(status.as_u16()))
        }
    }
}

// ---------------------------------------------------------------------------
// FormSession
// ---------------------------------------------------------------------------

/// One visitor form and its submit cycle.
#[derive(Debug, Clone, Default)]
pub struct FormSession<F> {
    form: F,
}

impl<F: VisitorForm> FormSession<F> {
    pub fn new() -> Self {
        Self { form: F::default() }
    }

    pub fn with_form(form: F) -> Self {
        Self { form }
    }

    pub fn form(&self) -> &F {
        &self.form
    }

    pub fn form_mut(&mut self) -> &mut F {
        &mut self.form
    }

    /// Validate and send the form once.
    ///
    /// Invalid forms are not sent. A successful send clears the form; a
    /// failed one leaves it intact so the visitor can try again.
    pub async fn submit<E>(&mut self, endpoint: &E) -> Notice
    where
        E: SubmissionEndpoint + ?Sized,
    {
        if let Err(errors) = self.form.check() {
            tracing::debug!(endpoint = F::ENDPOINT, fields = %errors, "Form rejected locally");
            return Notice::Invalid(errors);
        }

        match endpoint.submit(F::ENDPOINT, &self.form.field_map()).await {
            Ok(()) => {
                tracing::info!(endpoint = F::ENDPOINT, "Form submitted");
                self.form = F::default();
                Notice::Success(F::ACKNOWLEDGMENT.to_string())
            }
            Err(e) => {
                tracing::warn!(endpoint = F::ENDPOINT, error = %e, "Form submission failed");
                Notice::Failure(e.to_string())
            }
        }
    }
}
