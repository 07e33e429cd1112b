//! Error types for the bot core.
//!
//! [`FlipbotError`] is the top-level error; [`HandlerError`] is used for handler failures.

use thiserror::Error;

/// Top-level error for flipbot (platform transport, Web API, image, handler, config, IO).
#[derive(Error, Debug)]
pub enum FlipbotError {
    #[error("Slack error: {0}")]
    Slack(String),

    #[error("Slack API {method} failed: {error}")]
    Api { method: String, error: String },

    #[error("HTTP error: {0}")]
    Http(String),

    #[error("Image error: {0}")]
    Image(String),

    #[error("Handler error: {0}")]
    Handler(#[from] HandlerError),

    #[error("Config error: {0}")]
    Config(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Unknown error: {0}")]
    Unknown(String),
}

impl FlipbotError {
    /// Builds an [`FlipbotError::Api`] from a method name and Slack's `error` field.
    pub fn api(method: impl Into<String>, error: impl Into<String>) -> Self {
        FlipbotError::Api {
            method: method.into(),
            error: error.into(),
        }
    }
}

/// Errors produced by handlers while flipping one event.
#[derive(Error, Debug)]
pub enum HandlerError {
    #[error("No text in message")]
    NoText,

    #[error("File share without a file")]
    MissingFile,

    #[error("Event without a channel")]
    MissingChannel,

    #[error("Download failed with status {status}")]
    DownloadFailed { status: u16 },

    #[error("Unsupported image: {0}")]
    UnsupportedImage(String),
}

/// Result type for core operations; uses [`FlipbotError`].
pub type Result<T> = std::result::Result<T, FlipbotError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_api_error_display() {
        let e = FlipbotError::api("chat.postMessage", "channel_not_found");
        assert_eq!(
            e.to_string(),
            "Slack API chat.postMessage failed: channel_not_found"
        );
    }

    #[test]
    fn test_handler_error_converts() {
        let e: FlipbotError = HandlerError::DownloadFailed { status: 404 }.into();
        assert_eq!(
            e.to_string(),
            "Handler error: Download failed with status 404"
        );
    }
}
