//! Error types for the catalog crate.
//!
//! These cover everything that can go wrong while turning an OMDb response
//! body into domain types. Callers higher up (the gateway) decide whether an
//! error is reported or quietly degraded to "no data".

use thiserror::Error;

/// Errors that can occur while decoding movie database responses
#[derive(Error, Debug)]
pub enum CatalogError {
    /// Body was not valid JSON, or did not have the expected shape
    #[error("Malformed response body: {0}")]
    Json(#[from] serde_json::Error),

    /// The API answered, but reported a failure (`"Response": "False"`)
    ///
    /// OMDb uses this both for "Movie not found!" and for key problems,
    /// so the message is kept verbatim.
    #[error("Movie database reported an error: {message}")]
    Api { message: String },

    /// A field the record cannot exist without was missing or empty
    #[error("Missing required field: {field}")]
    MissingField { field: String },
}

/// Convenience type alias for Results in this crate
pub type Result<T> = std::result::Result<T, CatalogError>;
