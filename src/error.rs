//! Error types for descriptor construction and encoding.
//!
//! Construction failures surface as [`ValidationError`] at the point a value
//! is built (or decoded), so no half-valid entry escapes. Encoding failures
//! surface as [`SerializationError`] and are passed through untouched.

use crate::variant::ResizingMode;

/// A descriptor value was rejected while being constructed or decoded.
#[derive(Debug, Clone, PartialEq, thiserror::Error)]
pub enum ValidationError {
    /// Image entries must name a file; blank names are rejected.
    #[error("image filename must not be empty")]
    EmptyFilename,

    /// Inset and extent values are pixel counts and cannot be negative.
    #[error("{field} must not be negative, got {value}")]
    NegativeInset { field: &'static str, value: f64 },

    /// NaN and infinities have no JSON number representation.
    #[error("{field} must be a finite number")]
    NonFiniteInset { field: &'static str },

    /// The center extent does not apply to the selected resizing mode.
    #[error("center {extent} is not applicable to resizing mode {mode}")]
    InapplicableCenterExtent {
        mode: ResizingMode,
        extent: &'static str,
    },
}

/// The JSON encoder failed to produce descriptor text.
#[derive(Debug, thiserror::Error)]
#[error("failed to encode asset descriptor: {0}")]
pub struct SerializationError(#[from] pub serde_json::Error);

/// Reject empty or whitespace-only filenames.
pub(crate) fn check_filename(filename: &str) -> Result<(), ValidationError> {
    if filename.trim().is_empty() {
        return Err(ValidationError::EmptyFilename);
    }
    Ok(())
}

/// Reject negative or non-finite pixel measurements.
pub(crate) fn check_extent(field: &'static str, value: f64) -> Result<(), ValidationError> {
    if !value.is_finite() {
        return Err(ValidationError::NonFiniteInset { field });
    }
    if value < 0.0 {
        return Err(ValidationError::NegativeInset { field, value });
    }
    Ok(())
}
