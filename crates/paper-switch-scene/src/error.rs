//! Error types for the scene crate.

use thiserror::Error;

/// Errors that can occur when manipulating the layer tree.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum SceneError {
    /// The layer ID is invalid or the layer has been removed.
    #[error("invalid or removed layer ID")]
    InvalidLayer,

    /// Attempted to insert a layer into itself or one of its descendants.
    #[error("cannot insert a layer into itself or its descendants")]
    CircularHierarchy,

    /// A sublayer index was outside the valid range.
    #[error("sublayer index {index} out of bounds (len {len})")]
    IndexOutOfBounds {
        /// The requested index.
        index: usize,
        /// The number of sublayers at the time of the call.
        len: usize,
    },
}

/// A specialized Result type for scene operations.
pub type SceneResult<T> = std::result::Result<T, SceneError>;
