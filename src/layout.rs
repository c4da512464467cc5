//! Declared layout sizes
//!
//! A target's layout parameters describe how big it *wants* to be, which
//! may differ from the extent it was actually given. Toolkits encode the two
//! non-numeric requests ("as big as the parent", "as big as the content") as
//! negative sentinels; [`LayoutDimension::raw`] exposes that encoding.

use crate::geometry::Axis;

/// Raw value of [`LayoutDimension::MatchParent`].
pub const MATCH_PARENT: i32 = -1;
/// Raw value of [`LayoutDimension::WrapContent`].
pub const WRAP_CONTENT: i32 = -2;

/// Declared size along one axis
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum LayoutDimension {
  /// A fixed pixel size.
  Exact(i32),
  /// Fill the parent along this axis.
  MatchParent,
  /// Size to the content along this axis.
  WrapContent,
}

impl LayoutDimension {
  /// Decodes a raw toolkit value, mapping the sentinels back to variants.
  ///
  /// ```
  /// use imgbind::layout::{LayoutDimension, WRAP_CONTENT};
  ///
  /// assert_eq!(LayoutDimension::from_raw(WRAP_CONTENT), LayoutDimension::WrapContent);
  /// assert_eq!(LayoutDimension::from_raw(120), LayoutDimension::Exact(120));
  /// ```
  pub const fn from_raw(value: i32) -> Self {
    match value {
      MATCH_PARENT => Self::MatchParent,
      WRAP_CONTENT => Self::WrapContent,
      n => Self::Exact(n),
    }
  }

  /// The numeric value as the toolkit declares it, sentinels included.
  pub const fn raw(self) -> i32 {
    match self {
      Self::Exact(n) => n,
      Self::MatchParent => MATCH_PARENT,
      Self::WrapContent => WRAP_CONTENT,
    }
  }

  pub const fn is_wrap_content(self) -> bool {
    matches!(self, Self::WrapContent)
  }
}

/// Layout parameters attached to a display target
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct LayoutParams {
  pub width: LayoutDimension,
  pub height: LayoutDimension,
}

impl LayoutParams {
  pub const fn new(width: LayoutDimension, height: LayoutDimension) -> Self {
    Self { width, height }
  }

  /// Fixed pixel size on both axes.
  pub const fn exact(width: i32, height: i32) -> Self {
    Self::new(LayoutDimension::Exact(width), LayoutDimension::Exact(height))
  }

  pub const fn dimension(&self, axis: Axis) -> LayoutDimension {
    match axis {
      Axis::Width => self.width,
      Axis::Height => self.height,
    }
  }
}
