//! Geometry types for display targets
//!
//! All extents are in device pixels as reported by the target's layout
//! system. They are signed because toolkits report "not laid out yet" and
//! sentinel sizes as zero or negative values.

use std::fmt;

/// One of the two layout axes
///
/// Size resolution is identical on both axes; this selects which one a
/// query applies to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Axis {
  /// Horizontal axis
  Width,
  /// Vertical axis
  Height,
}

impl Axis {
  /// Both axes, width first.
  pub const ALL: [Axis; 2] = [Axis::Width, Axis::Height];

  /// Lowercase axis name, used in log output.
  pub const fn name(self) -> &'static str {
    match self {
      Axis::Width => "width",
      Axis::Height => "height",
    }
  }
}

impl fmt::Display for Axis {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.write_str(self.name())
  }
}

/// A rendered pixel extent
///
/// # Examples
///
/// ```
/// use imgbind::{Axis, Extent};
///
/// let extent = Extent::new(240, 0);
/// assert_eq!(extent.along(Axis::Width), 240);
/// assert!(!extent.is_laid_out());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
pub struct Extent {
  /// Width (horizontal extent)
  pub width: i32,
  /// Height (vertical extent)
  pub height: i32,
}

impl Extent {
  /// An extent with zero width and height, as reported before layout.
  pub const ZERO: Self = Self {
    width: 0,
    height: 0,
  };

  /// Creates a new extent with the given dimensions
  pub const fn new(width: i32, height: i32) -> Self {
    Self { width, height }
  }

  /// Returns the dimension along `axis`.
  pub const fn along(self, axis: Axis) -> i32 {
    match axis {
      Axis::Width => self.width,
      Axis::Height => self.height,
    }
  }

  /// True when both dimensions are positive.
  pub const fn is_laid_out(self) -> bool {
    self.width > 0 && self.height > 0
  }
}

impl fmt::Display for Extent {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    write!(f, "{}x{}", self.width, self.height)
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn along_selects_axis() {
    let extent = Extent::new(3, 7);
    assert_eq!(extent.along(Axis::Width), 3);
    assert_eq!(extent.along(Axis::Height), 7);
  }

  #[test]
  fn zero_extent_is_not_laid_out() {
    assert!(!Extent::ZERO.is_laid_out());
    assert!(!Extent::new(10, -1).is_laid_out());
    assert!(Extent::new(1, 1).is_laid_out());
  }

  #[test]
  fn display_formats() {
    assert_eq!(Extent::new(640, 480).to_string(), "640x480");
    assert_eq!(Axis::Height.to_string(), "height");
  }
}
