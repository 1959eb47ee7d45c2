//! Error type for store operations.

use crate::store::regions::RegionParseError;

/// Errors returned by listing and detail retrieval.
///
/// Region validation happens before any request is sent. Transport failures
/// are passed through without retry or classification.
#[derive(Debug, thiserror::Error)]
pub enum StoreError {
    #[error(transparent)]
    InvalidRegion(#[from] RegionParseError),

    #[error(transparent)]
    Transport(#[from] wreq::Error),

    #[error("Request to {url} failed with status: {status}")]
    HttpStatus { url: String, status: u16 },

    #[error("Required element not found: {0}")]
    MissingElement(&'static str),

    #[error("Invalid page counter: '{0}'")]
    InvalidPageCount(String),
}

impl StoreError {
    /// True for network and HTTP status failures.
    pub fn is_transport(&self) -> bool {
        matches!(self, StoreError::Transport(_) | StoreError::HttpStatus { .. })
    }

    /// True when the page markup lacks a structurally required element.
    pub fn is_markup(&self) -> bool {
        matches!(self, StoreError::MissingElement(_) | StoreError::InvalidPageCount(_))
    }
}
