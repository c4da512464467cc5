//! Display options carried by a load request
//!
//! The request never interprets these; they are passed through to whatever
//! stage shows placeholders or applies the decoded image.

use serde::{Deserialize, Serialize};

/// Configuration for displaying an image in its target.
///
/// # Example
///
/// ```
/// use imgbind::DisplayConfig;
///
/// let config = DisplayConfig::new()
///   .with_placeholder("res://loading")
///   .with_error_image("res://broken");
/// assert_eq!(config.placeholder.as_deref(), Some("res://loading"));
/// ```
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct DisplayConfig {
  /// Resource shown in the target while the load is pending.
  pub placeholder: Option<String>,
  /// Resource shown in the target when the load fails.
  pub error_image: Option<String>,
}

impl DisplayConfig {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_placeholder(mut self, resource: impl Into<String>) -> Self {
    self.placeholder = Some(resource.into());
    self
  }

  pub fn with_error_image(mut self, resource: impl Into<String>) -> Self {
    self.error_image = Some(resource.into());
    self
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn default_has_no_resources() {
    let config = DisplayConfig::default();
    assert_eq!(config.placeholder, None);
    assert_eq!(config.error_image, None);
  }

  #[test]
  fn deserializes_partial_json() {
    let config: DisplayConfig =
      serde_json::from_str(r#"{"error_image":"res://broken"}"#).expect("parse config");
    assert_eq!(config.placeholder, None);
    assert_eq!(config.error_image.as_deref(), Some("res://broken"));
  }

  #[test]
  fn serializes_builder_output() {
    let config = DisplayConfig::new().with_placeholder("res://spinner");
    let json = serde_json::to_string(&config).expect("serialize config");
    assert!(json.contains("res://spinner"));
  }
}
