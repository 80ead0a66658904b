//! Error types for overlay positioning.

use thiserror::Error;

/// Top-level error type for overlay positioning.
#[derive(Debug, Error)]
pub enum PositionError {
    #[error(transparent)]
    Align(#[from] AlignError),

    #[error(transparent)]
    Geometry(#[from] GeometryError),

    #[error("Pin element is not attached to a document")]
    DetachedPin,
}

/// Errors while reading alignment codes.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum AlignError {
    #[error("Malformed alignment {input:?}: expected two codes like \"tl bl\"")]
    Malformed { input: String },

    #[error("Unknown alignment direction '{found}'")]
    UnknownDirection { found: char },
}

/// Errors raised by a geometry adapter.
#[derive(Debug, Clone, PartialEq, Error)]
pub enum GeometryError {
    #[error("Failed to write style '{property}': {reason}")]
    StyleWrite { property: String, reason: String },

    #[error("Unknown element: {id}")]
    UnknownElement { id: String },
}
