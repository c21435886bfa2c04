use std::path::PathBuf;
use std::time::Duration;

use crate::error::{SiteError, SiteResult};

const DEFAULT_DATA_DIR: &str = ".museu";
const DEFAULT_API_URL: &str = "https://api.example.com";
const DEFAULT_REQUEST_TIMEOUT_SECS: u64 = 30;

/// Site configuration loaded from environment variables.
///
/// All fields have defaults suitable for local use.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct SiteConfig {
    /// Directory backing the durable storage scope (default: `.museu`).
    pub data_dir: PathBuf,
    /// Base URL of the submission endpoint, without a trailing slash.
    pub api_url: String,
    /// Bearer token sent with submissions, if any.
    pub api_token: Option<String>,
    /// HTTP timeout for one submission attempt, in seconds (default: `30`).
    pub request_timeout_secs: u64,
}

impl SiteConfig {
    /// Load configuration from environment variables with defaults.
    ///
    /// | Env Var                | Default                   |
    /// |------------------------|---------------------------|
    /// | `MUSEU_DATA_DIR`       | `.museu`                  |
    /// | `MUSEU_API_URL`        | `https://api.example.com` |
    /// | `MUSEU_API_TOKEN`      | unset                     |
    /// | `REQUEST_TIMEOUT_SECS` | `30`                      |
    pub fn from_env() -> SiteResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// Same as [`SiteConfig::from_env`], reading variables through `lookup`.
    pub fn from_lookup<F>(lookup: F) -> SiteResult<Self>
    where
        F: Fn(&str) -> Option<String>,
    {
        let data_dir = lookup("MUSEU_DATA_DIR")
            .filter(|s| !s.trim().is_empty())
            .map(PathBuf::from)
            .unwrap_or_else(|| PathBuf::from(DEFAULT_DATA_DIR));

        let api_url = lookup("MUSEU_API_URL").unwrap_or_else(|| DEFAULT_API_URL.into());
        let api_url = api_url.trim().trim_end_matches('/').to_string();
        if !(api_url.starts_with("http://") || api_url.starts_with("https://")) {
            return Err(SiteError::Config(format!(
                "MUSEU_API_URL must be an http(s) URL, got '{api_url}'"
            )));
        }

        let api_token = lookup("MUSEU_API_TOKEN")
            .map(|s| s.trim().to_string())
            .filter(|s| !s.is_empty());

        let request_timeout_secs = match lookup("REQUEST_TIMEOUT_SECS") {
            None => DEFAULT_REQUEST_TIMEOUT_SECS,
            Some(raw) => raw.trim().parse::<u64>().map_err(|_| {
                SiteError::Config(format!(
                    "REQUEST_TIMEOUT_SECS must be a valid u64, got '{raw}'"
                ))
            })?,
        };

        Ok(Self {
            data_dir,
            api_url,
            api_token,
            request_timeout_secs,
        })
    }

    pub fn request_timeout(&self) -> Duration {
        Duration::from_secs(self.request_timeout_secs)
    }
}

impl Default for SiteConfig {
    fn default() -> Self {
        Self {
            data_dir: PathBuf::from(DEFAULT_DATA_DIR),
            api_url: DEFAULT_API_URL.to_string(),
            api_token: None,
            request_timeout_secs: DEFAULT_REQUEST_TIMEOUT_SECS,
        }
    }
}
