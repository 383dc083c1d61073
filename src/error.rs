//! Error types for adblock2clash.

use thiserror::Error;

/// Error type for adblock2clash operations.
///
/// Malformed source lines are never reported here; they are skipped during
/// extraction.
#[derive(Error, Debug)]
pub enum Error {
    /// IO error (creating output directories, writing rule files)
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// YAML parsing error in a config file
    #[error("YAML parsing error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    /// Network, timeout or body read failure while downloading a source
    #[error("download error: {0}")]
    Fetch(#[from] reqwest::Error),

    /// Source responded with a non-success status
    #[error("download error: {url} returned HTTP {status}")]
    HttpStatus { url: String, status: u16 },

    /// Configuration error
    #[error("configuration error: {0}")]
    Config(String),

    /// Timestamp formatting error
    #[error("timestamp formatting error: {0}")]
    Format(#[from] time::error::Format),
}

/// Result type alias for adblock2clash operations.
pub type Result<T> = std::result::Result<T, Error>;
