//! Error types

use thiserror::Error;

/// Errors produced by scroll operations.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ScrollError {
    /// The request named none of item, position, or delta.
    #[error("no parameter to indicate scroll position")]
    InvalidRequest,

    /// A smooth scroll was superseded before reaching its end position.
    ///
    /// Callers that do not care about cancellation outcomes should treat
    /// this as a no-op, not a failure.
    #[error("smooth scroll cancelled before completion")]
    Cancelled,
}
