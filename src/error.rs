//! Error types for imgbind
//!
//! This module provides the error types shared by the request binding and
//! the collaborators that plug into it:
//! - Introspection errors (reading a target's hidden size bounds)
//! - Image errors (loading, decoding), reported to completion listeners
//!
//! All errors use the `thiserror` crate for minimal boilerplate and
//! proper error trait implementations.
//!
//! None of these errors escape [`LoadRequest`](crate::LoadRequest) size
//! resolution: introspection failures are logged and treated as "no value".

use thiserror::Error;

/// Result type alias for imgbind operations
///
/// # Examples
///
/// ```
/// use imgbind::Result;
///
/// fn probe() -> Result<u32> {
///     Ok(0)
/// }
/// ```
pub type Result<T> = std::result::Result<T, Error>;

/// Top-level error type for imgbind
///
/// # Examples
///
/// ```
/// use imgbind::Error;
/// use imgbind::error::ImageError;
///
/// let err: Error = ImageError::LoadFailed {
///     url: "https://example.com/a.png".to_string(),
///     reason: "404 Not Found".to_string(),
/// }
/// .into();
/// assert!(err.to_string().contains("404"));
/// ```
#[derive(Error, Debug, Clone)]
pub enum Error {
  /// Image loading or decoding error
  #[error("Image error: {0}")]
  Image(#[from] ImageError),

  /// A display target could not report one of its properties
  #[error("Introspection error: {0}")]
  Introspection(#[from] IntrospectionError),

  /// Generic error for miscellaneous issues
  #[error("{0}")]
  Other(String),
}

/// Errors that occur while loading or decoding an image
///
/// The request binding never produces these itself; schedulers hand them
/// to [`ImageListener`](crate::ImageListener)s as the failed outcome.
///
/// # Examples
///
/// ```
/// use imgbind::error::ImageError;
///
/// let error = ImageError::DecodeFailed {
///     url: "file:///tmp/broken.png".to_string(),
///     reason: "unexpected EOF".to_string(),
/// };
/// println!("{}", error);
/// ```
#[derive(Error, Debug, Clone)]
pub enum ImageError {
  /// Image loading failed
  #[error("Failed to load image from '{url}': {reason}")]
  LoadFailed { url: String, reason: String },

  /// Image decoding failed
  #[error("Failed to decode image from '{url}': {reason}")]
  DecodeFailed { url: String, reason: String },
}

/// Errors raised when reading a platform-defined property of a display target
///
/// Toolkits often keep size bounds in fields that are not part of their public
/// API. Reaching them can fail in several ways, all of which are treated the
/// same by callers: as "no value available".
#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum IntrospectionError {
  /// The property does not exist on this widget type
  #[error("Field '{field}' does not exist on the target type")]
  FieldMissing { field: String },

  /// The property exists but cannot be read
  #[error("Access to field '{field}' was denied")]
  AccessDenied { field: String },

  /// The property holds a value of an unexpected type
  #[error("Field '{field}' has unexpected type {found}")]
  TypeMismatch { field: String, found: String },
}

impl IntrospectionError {
  /// Name of the property that could not be read.
  pub fn field(&self) -> &str {
    match self {
      Self::FieldMissing { field }
      | Self::AccessDenied { field }
      | Self::TypeMismatch { field, .. } => field,
    }
  }
}
