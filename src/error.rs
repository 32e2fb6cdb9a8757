//! Error types shared across the pipeline.
//!
//! - [`InputError`] - invalid menu selection, reported to the user and never fatal
//! - [`FetchError`] - any failure retrieving or decoding an upstream resource
//! - [`AppError`] - everything that can abort a run, including rendering and file output

use std::path::PathBuf;

/// Rejected menu selection.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum InputError {
    #[error("Invalid option '{0}'. Must be 1–4.")]
    NotANumber(String),

    #[error("Invalid option {0}. Must be 1–4.")]
    OutOfRange(i64),
}

/// Failure to obtain a structured resource from the API.
///
/// Required resources (pokemon, species, evolution chain, type) propagate this
/// to the top level. Per-ability failures are caught in
/// [`crate::application::services::AbilityService`] and never escape it.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum FetchError {
    #[error("Invalid resource URL '{url}': {reason}")]
    InvalidUrl { url: String, reason: String },

    #[error("Request to {url} timed out")]
    Timeout { url: String },

    #[error("Request to {url} failed: {reason}")]
    Network { url: String, reason: String },

    #[error("{url} responded with HTTP {status}")]
    Status { url: String, status: u16 },

    #[error("Could not decode response from {url}: {reason}")]
    Decode { url: String, reason: String },

    #[error("Resource '{resource}' has no {field}")]
    MissingField {
        resource: String,
        field: &'static str,
    },
}

impl FetchError {
    pub fn invalid_url(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::InvalidUrl {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn network(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Network {
            url: url.into(),
            reason: reason.to_string(),
        }
    }

    pub fn decode(url: impl Into<String>, reason: impl ToString) -> Self {
        Self::Decode {
            url: url.into(),
            reason: reason.to_string(),
        }
    }
}

/// Any failure that stops a run before the page is written.
#[derive(Debug, thiserror::Error)]
pub enum AppError {
    #[error(transparent)]
    Fetch(#[from] FetchError),

    #[error("Failed to render page: {0}")]
    Render(#[from] askama::Error),

    #[error("Failed to write {}: {source}", .path.display())]
    Io {
        path: PathBuf,
        #[source]
        source: std::io::Error,
    },
}

impl AppError {
    pub fn io(path: impl Into<PathBuf>, source: std::io::Error) -> Self {
        Self::Io {
            path: path.into(),
            source,
        }
    }
}
