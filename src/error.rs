// created = "2026-10-19"
// modified = "2026-10-19"
// driver = "marginalia contributors"

//! Error types.
//!
//! Every error here is a missing required input, reported before the value
//! it would have produced exists. Queries never fail.

use thiserror::Error;

/// Crate-wide result type.
pub type Result<T> = std::result::Result<T, Error>;

/// A required input was not supplied.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `AnnotationSetBuilder::build` was called without a document.
    #[error("document reference is required")]
    MissingDocument,

    /// `AnnotationBuilder::build` was called without a type.
    #[error("type is required")]
    MissingType,

    /// `AnnotationBuilder::build` was called without offsets.
    #[error("start and end offsets are required")]
    MissingOffsets,
}
