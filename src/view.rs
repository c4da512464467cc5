//! In-memory display target
//!
//! [`ImageView`] models the parts of an image widget that size resolution
//! looks at. Hosts without a GUI toolkit (servers rendering thumbnails,
//! tests, benchmarks) use it directly; toolkit bindings implement
//! [`DisplayTarget`] on their own widgets instead.

use crate::error::IntrospectionError;
use crate::geometry::{Axis, Extent};
use crate::layout::LayoutParams;
use crate::target::{DisplayTarget, SourceTag};
use std::sync::RwLock;

/// The widget class's upper bound on one axis, as introspection sees it.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum MaxBound {
  /// No bound configured; reads back as `i32::MAX`.
  #[default]
  Unset,
  /// An explicit bound.
  Value(i32),
  /// Reading the bound fails with this error.
  Unavailable(IntrospectionError),
}

impl MaxBound {
  fn read(&self) -> Result<i32, IntrospectionError> {
    match self {
      Self::Unset => Ok(i32::MAX),
      Self::Value(v) => Ok(*v),
      Self::Unavailable(err) => Err(err.clone()),
    }
  }
}

#[derive(Debug, Clone, Default)]
struct ViewState {
  layout: Option<LayoutParams>,
  extent: Extent,
  max_width: MaxBound,
  max_height: MaxBound,
}

/// A display target whose layout state is set by the host.
///
/// # Example
///
/// ```
/// use imgbind::{ImageView, LayoutParams, Extent};
///
/// let view = ImageView::new().with_layout(LayoutParams::exact(120, 80));
/// view.lay_out(Extent::new(120, 80));
/// ```
#[derive(Debug, Default)]
pub struct ImageView {
  state: RwLock<ViewState>,
  tag: SourceTag,
}

impl ImageView {
  pub fn new() -> Self {
    Self::default()
  }

  pub fn with_layout(self, params: LayoutParams) -> Self {
    self.set_layout(Some(params));
    self
  }

  pub fn with_max(self, axis: Axis, bound: MaxBound) -> Self {
    self.set_max(axis, bound);
    self
  }

  /// Replaces the declared layout parameters.
  pub fn set_layout(&self, params: Option<LayoutParams>) {
    self.write().layout = params;
  }

  /// Records the extent assigned by a layout pass.
  pub fn lay_out(&self, extent: Extent) {
    self.write().extent = extent;
  }

  pub fn set_max(&self, axis: Axis, bound: MaxBound) {
    let mut state = self.write();
    match axis {
      Axis::Width => state.max_width = bound,
      Axis::Height => state.max_height = bound,
    }
  }

  fn read(&self) -> std::sync::RwLockReadGuard<'_, ViewState> {
    self
      .state
      .read()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }

  fn write(&self) -> std::sync::RwLockWriteGuard<'_, ViewState> {
    self
      .state
      .write()
      .unwrap_or_else(|poisoned| poisoned.into_inner())
  }
}

impl DisplayTarget for ImageView {
  fn layout_params(&self) -> Option<LayoutParams> {
    self.read().layout
  }

  fn rendered_extent(&self) -> Extent {
    self.read().extent
  }

  fn max_extent(&self, axis: Axis) -> Result<i32, IntrospectionError> {
    let state = self.read();
    match axis {
      Axis::Width => state.max_width.read(),
      Axis::Height => state.max_height.read(),
    }
  }

  fn set_source_tag(&self, source_uri: &str) {
    self.tag.set(source_uri);
  }

  fn source_tag(&self) -> Option<String> {
    self.tag.get()
  }
}
