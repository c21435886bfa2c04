use museu_core::error::CoreError;
use museu_db::StoreError;

/// Application-level error type for the site layer.
///
/// Wraps [`CoreError`] for domain errors and [`StoreError`] for persistence,
/// and adds the variants only the site needs.
#[derive(Debug, thiserror::Error)]
pub enum SiteError {
    /// A domain-level error from `museu_core`.
    #[error(transparent)]
    Core(#[from] CoreError),

    /// A store mutation was refused or could not be persisted.
    #[error(transparent)]
    Store(#[from] StoreError),

    /// An environment variable held a value that could not be used.
    #[error("Invalid configuration: {0}")]
    Config(String),

    /// The submission endpoint could not be set up or refused a form.
    #[error("Submission failed: {0}")]
    Submission(String),
}

/// Convenience alias for site operations.
pub type SiteResult<T> = Result<T, SiteError>;

impl SiteError {
    /// Message suitable for a transient notification.
    ///
    /// Internal details of storage failures are logged, not shown.
    pub fn user_message(&self) -> String {
        match self {
            SiteError::Core(CoreError::Validation(fields)) => fields.to_string(),
            SiteError::Store(StoreError::Storage(err)) => {
                tracing::error!(error = %err, "Storage error");
                "Changes could not be saved".to_string()
            }
            other => other.to_string(),
        }
    }
}
