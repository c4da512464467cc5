//! Display target capability
//!
//! A display target is whatever widget will eventually show a decoded image.
//! The crate never owns one: requests hold a [`std::sync::Weak`] to it and
//! talk to it only through [`DisplayTarget`].

use crate::error::IntrospectionError;
use crate::geometry::{Axis, Extent};
use crate::layout::LayoutParams;
use std::sync::Mutex;

/// What a load request needs from the widget it is bound to.
///
/// Implementations must be shareable across threads: the scheduler, decoder
/// and UI thread may all query the same target.
pub trait DisplayTarget: Send + Sync {
  /// Declared layout parameters, or `None` when the widget has not been
  /// attached to a layout yet.
  fn layout_params(&self) -> Option<LayoutParams>;

  /// Post-layout pixel size. Zero on an axis that has not been laid out.
  fn rendered_extent(&self) -> Extent;

  /// Upper bound the widget class imposes on `axis`.
  ///
  /// This is usually kept outside the widget's public API, so reading it may
  /// fail. `i32::MAX` conventionally means "no limit".
  fn max_extent(&self, axis: Axis) -> Result<i32, IntrospectionError>;

  /// Records the source this widget currently wants to display.
  fn set_source_tag(&self, source_uri: &str);

  /// The most recently recorded source, if any.
  fn source_tag(&self) -> Option<String>;
}

/// Thread-safe storage for a target's current source tag.
///
/// Widgets embed one of these to implement the tag half of
/// [`DisplayTarget`].
#[derive(Debug, Default)]
pub struct SourceTag {
  current: Mutex<Option<String>>,
}

impl SourceTag {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn set(&self, source_uri: &str) {
    let mut slot = self
      .current
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner());
    *slot = Some(source_uri.to_string());
  }

  pub fn get(&self) -> Option<String> {
    self
      .current
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .clone()
  }

  /// True when the stored tag equals `source_uri`.
  pub fn matches(&self, source_uri: &str) -> bool {
    self
      .current
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
      .as_deref()
      == Some(source_uri)
  }

  pub fn clear(&self) {
    *self
      .current
      .lock()
      .unwrap_or_else(|poisoned| poisoned.into_inner()) = None;
  }
}
