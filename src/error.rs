//! Structured error types for the galley layout core.
//!
//! Only construction validation can fail in this crate: everything past
//! construction is a pure computation over already-valid in-memory state.
//! Selection queries on unselected units and pagination without a page
//! context are normal states with defined results, not errors.

use thiserror::Error;

/// The unified error type returned by galley's fallible constructors.
#[derive(Debug, Error)]
pub enum GalleyError {
    /// A markup tag was constructed with an empty name.
    #[error("tag name must not be empty")]
    EmptyTagName,

    /// Page geometry was constructed with a height that cannot host content.
    #[error("page height must be finite and positive, got {0}")]
    InvalidPageHeight(f64),
}
