//! Error types for the Kinostar scraper
//!
//! This module defines all error types used throughout the library.
//! KinostarError implements Serialize so a presentation layer can show it
//! as a plain message.

use serde::{Serialize, Serializer};
use thiserror::Error;

/// Broad category of a failure, independent of the concrete cause.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub enum ErrorKind {
    /// A listing or detail page could not be retrieved
    FetchFailure,
    /// An expected structural marker is unusable or missing
    MarkupMismatch,
    /// A showtime or price did not match the expected grammar
    FormatParseFailure,
    /// The scraper was set up with unusable settings
    Configuration,
}

/// Error type for Kinostar scraper operations
#[derive(Error, Debug)]
pub enum KinostarError {
    /// HTTP request failed (network, DNS, timeout, body decoding)
    #[error("HTTP request failed: {0}")]
    Http(#[from] reqwest::Error),

    /// Server answered with a non-success status
    #[error("HTTP {status} for {url}")]
    HttpStatus { url: String, status: u16 },

    /// URL could not be built or resolved
    #[error("Invalid URL: {0}")]
    InvalidUrl(String),

    /// A marker in the selector table is not a valid CSS selector
    #[error("Invalid selector for {region}: {reason}")]
    InvalidSelector { region: String, reason: String },

    /// Client settings rejected (e.g. a header value)
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    /// Show time text is not a time of day
    #[error("Invalid show time: {0:?}")]
    InvalidTime(String),

    /// Price text contains no usable number
    #[error("Invalid price: {0:?}")]
    InvalidPrice(String),

    /// Summarizing error for one failed extraction run
    #[error("{message}: {source}")]
    Extraction {
        message: String,
        #[source]
        source: Box<KinostarError>,
    },
}

impl KinostarError {
    /// Wrap an error into the single summarizing error of a run.
    pub fn extraction(message: impl Into<String>, source: KinostarError) -> Self {
        KinostarError::Extraction {
            message: message.into(),
            source: Box::new(source),
        }
    }

    /// Category of this error; `Extraction` reports the category of its cause.
    pub fn kind(&self) -> ErrorKind {
        match self {
            KinostarError::Http(_)
            | KinostarError::HttpStatus { .. }
            | KinostarError::InvalidUrl(_) => ErrorKind::FetchFailure,
            KinostarError::InvalidSelector { .. } => ErrorKind::MarkupMismatch,
            KinostarError::InvalidConfig(_) => ErrorKind::Configuration,
            KinostarError::InvalidTime(_) | KinostarError::InvalidPrice(_) => {
                ErrorKind::FormatParseFailure
            }
            KinostarError::Extraction { source, .. } => source.kind(),
        }
    }
}

/// Serialize KinostarError as its display string
impl Serialize for KinostarError {
    fn serialize<S>(&self, serializer: S) -> std::result::Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        serializer.serialize_str(&self.to_string())
    }
}

/// Result type alias for Kinostar scraper operations
pub type Result<T> = std::result::Result<T, KinostarError>;
