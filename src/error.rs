// Copyright 2025 Lars Brubaker
// License: SGI Free Software License B (MIT-compatible)
//
// Error types for tessellation. Failures are returned, never panicked, so a
// rendering pipeline can skip a bad polygon and keep going.

use thiserror::Error;

/// Errors that can occur while tessellating a polygon.
///
/// ```rust
/// use ear_tessellator::{tessellate, TessError};
///
/// match tessellate(&[[0.0, 0.0, 0.0], [1.0, 0.0, 0.0]]) {
///     Err(TessError::InputUnsupported(reason)) => assert!(reason.contains("3 vertices")),
///     other => panic!("unexpected result: {:?}", other),
/// }
/// ```
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum TessError {
    /// The input cannot be handled by the ear clipper at all: too few
    /// vertices, indexed attribute arrays, more than one contour, a malformed
    /// flat vertex buffer or a non-finite coordinate.
    #[error("unsupported input: {0}")]
    InputUnsupported(String),

    /// A full sweep of the remaining ring found no ear of any kind. The
    /// polygon is self-intersecting or otherwise not simple.
    #[error("tessellation exhausted: no ear found with {remaining} vertices remaining")]
    TessellationExhausted {
        /// Number of ring vertices left when the sweep failed.
        remaining: usize,
    },
}

/// Result type alias for tessellation operations.
pub type TessResult<T> = Result<T, TessError>;

impl TessError {
    pub(crate) fn unsupported(reason: impl Into<String>) -> Self {
        TessError::InputUnsupported(reason.into())
    }
}
