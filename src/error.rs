//! Error types for the catalog viewer.
//!
//! `ApiError` describes what went wrong talking to the catalog API.
//! `LoadError` is what the view sees: it collapses every API failure into
//! either a network failure or an unclassified one, and is `Clone` so it can
//! travel inside iced messages.

use reqwest::StatusCode;
use thiserror::Error;

/// Failures from a single request against the catalog API.
#[derive(Debug, Error)]
pub enum ApiError {
    #[error("could not build HTTP client: {0}")]
    Build(#[source] reqwest::Error),
    #[error("invalid catalog URL {url}: {reason}")]
    InvalidUrl { url: String, reason: String },
    #[error("request to {url} failed: {source}")]
    Transport {
        url: String,
        #[source]
        source: reqwest::Error,
    },
    #[error("{url} responded with {status}")]
    Status { url: String, status: StatusCode },
    #[error("could not decode response from {url}: {source}")]
    Decode {
        url: String,
        #[source]
        source: serde_json::Error,
    },
}

/// Failure of the whole load sequence, as shown to the user.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum LoadError {
    /// Any rejected request, on the list or on a single detail.
    #[error("Network error: {0}")]
    Network(String),
    #[error("Unexpected error: {0}")]
    Unclassified(String),
    /// The load was torn down or superseded. Never rendered.
    #[error("load cancelled")]
    Cancelled,
}

impl From<ApiError> for LoadError {
    fn from(err: ApiError) -> Self {
        match err {
            ApiError::Transport { .. } | ApiError::Status { .. } => {
                LoadError::Network(err.to_string())
            }
            ApiError::Build(_) | ApiError::InvalidUrl { .. } | ApiError::Decode { .. } => {
                LoadError::Unclassified(err.to_string())
            }
        }
    }
}

/// Failures while fetching or caching a sprite image.
#[derive(Debug, Error)]
pub enum SpriteError {
    #[error(transparent)]
    Fetch(#[from] ApiError),
    #[error("could not decode sprite: {0}")]
    Image(#[from] image::ImageError),
    #[error("sprite cache I/O failed: {0}")]
    Io(#[from] std::io::Error),
    #[error("sprite worker failed: {0}")]
    Join(String),
}

/// Top-level failures that abort startup.
#[derive(Debug, Error)]
pub enum AppError {
    #[error("could not load configuration: {0}")]
    Config(#[from] config::ConfigError),
    #[error(transparent)]
    Client(#[from] ApiError),
    #[error("UI failed: {0}")]
    Ui(#[from] iced::Error),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_failures_are_network_errors() {
        let err = ApiError::Status {
            url: "https://pokeapi.co/api/v2/pokemon/1".to_string(),
            status: StatusCode::INTERNAL_SERVER_ERROR,
        };

        let load_err = LoadError::from(err);

        assert!(matches!(load_err, LoadError::Network(_)));
        assert!(load_err.to_string().contains("500"));
    }

    #[test]
    fn invalid_url_is_unclassified() {
        let err = ApiError::InvalidUrl {
            url: "not a url".to_string(),
            reason: "relative URL without a base".to_string(),
        };

        assert!(matches!(LoadError::from(err), LoadError::Unclassified(_)));
    }
}
