//! Load requests bound to display targets
//!
//! A [`LoadRequest`] is created when a caller asks for an image to be shown in
//! a target. It carries everything the scheduler, cache and decoder stages need
//! (source, cache key, display options, completion listener) together with a
//! weak handle to the target, so a stalled load never keeps a dead widget alive.
//!
//! # Decode size
//!
//! Images are scaled to the size the target will actually occupy. That size is
//! frequently unknown when the request is created, so [`LoadRequest::resolve_width`]
//! and [`LoadRequest::resolve_height`] fall back through progressively weaker
//! signals:
//!
//! 1. the rendered extent, unless the axis is declared `WrapContent`;
//! 2. the declared layout dimension;
//! 3. the widget class's maximum, when it is a real bound;
//! 4. `0`, meaning "unknown, decode at natural size".

use crate::config::DisplayConfig;
use crate::geometry::{Axis, Extent};
use crate::key::{KeyHasher, Sha256KeyHasher};
use crate::listener::ImageListener;
use crate::target::DisplayTarget;
use std::fmt;
use std::hash::{Hash, Hasher};
use std::sync::{Arc, Weak};

/// A pending image load and the target it will be delivered to.
///
/// Requests compare and hash by source URI only, so a set of in-flight requests
/// de-duplicates loads of the same image regardless of which targets asked.
///
/// # Example
///
/// ```
/// use imgbind::{DisplayConfig, Extent, ImageView, LayoutParams, LoadRequest, NoopListener};
/// use std::sync::Arc;
///
/// let view = Arc::new(ImageView::new().with_layout(LayoutParams::exact(200, 100)));
/// let request = LoadRequest::new(
///   &view,
///   "https://example.com/cat.png",
///   Arc::new(DisplayConfig::default()),
///   Arc::new(NoopListener),
/// );
///
/// view.lay_out(Extent::new(180, 90));
/// assert_eq!(request.resolve_width(), 180);
/// assert_eq!(request.resolve_height(), 90);
///
/// drop(view);
/// assert_eq!(request.resolve_width(), 0);
/// ```
pub struct LoadRequest<T: DisplayTarget + ?Sized> {
  target: Weak<T>,
  source_uri: String,
  cache_key: String,
  config: Arc<DisplayConfig>,
  listener: Arc<dyn ImageListener<T>>,
}

impl<T: DisplayTarget + ?Sized> LoadRequest<T> {
  /// Binds a load of `source_uri` to `target`, keyed with [`Sha256KeyHasher`].
  ///
  /// Stamps the target with `source_uri` so a later result can be checked
  /// against what the target still wants (see [`LoadRequest::is_current`]).
  pub fn new(
    target: &Arc<T>,
    source_uri: impl Into<String>,
    config: Arc<DisplayConfig>,
    listener: Arc<dyn ImageListener<T>>,
  ) -> Self {
    Self::with_hasher(target, source_uri, config, listener, &Sha256KeyHasher)
  }

  /// Like [`LoadRequest::new`], deriving the cache key with `hasher`.
  pub fn with_hasher<H: KeyHasher + ?Sized>(
    target: &Arc<T>,
    source_uri: impl Into<String>,
    config: Arc<DisplayConfig>,
    listener: Arc<dyn ImageListener<T>>,
    hasher: &H,
  ) -> Self {
    let source_uri = source_uri.into();
    target.set_source_tag(&source_uri);
    let cache_key = hasher.hash_key(&source_uri);
    Self {
      target: Arc::downgrade(target),
      source_uri,
      cache_key,
      config,
      listener,
    }
  }

  pub fn source_uri(&self) -> &str {
    &self.source_uri
  }

  pub fn cache_key(&self) -> &str {
    &self.cache_key
  }

  pub fn config(&self) -> &Arc<DisplayConfig> {
    &self.config
  }

  pub fn listener(&self) -> &Arc<dyn ImageListener<T>> {
    &self.listener
  }

  /// The target, if it is still alive.
  ///
  /// Every call checks liveness afresh. A `Some` here says nothing about the
  /// next call: re-resolve immediately before touching the target.
  pub fn resolve_target(&self) -> Option<Arc<T>> {
    self.target.upgrade()
  }

  /// True while the target is alive and still tagged with this request's source.
  ///
  /// Schedulers check this right before delivering a result; a `false` means the
  /// target was dropped or has since been asked to show something else.
  pub fn is_current(&self) -> bool {
    self
      .resolve_target()
      .and_then(|target| target.source_tag())
      .is_some_and(|tag| tag == self.source_uri)
  }

  /// Width to decode the image at, or `0` when unknown.
  pub fn resolve_width(&self) -> u32 {
    self.resolve_dimension(Axis::Width)
  }

  /// Height to decode the image at, or `0` when unknown.
  pub fn resolve_height(&self) -> u32 {
    self.resolve_dimension(Axis::Height)
  }

  /// Both decode dimensions. Each axis is resolved independently.
  pub fn target_size(&self) -> Extent {
    let clamp = |v: u32| i32::try_from(v).unwrap_or(i32::MAX);
    Extent::new(clamp(self.resolve_width()), clamp(self.resolve_height()))
  }

  fn resolve_dimension(&self, axis: Axis) -> u32 {
    let Some(target) = self.resolve_target() else {
      return 0;
    };

    let mut size = 0;
    if let Some(params) = target.layout_params() {
      let declared = params.dimension(axis);
      if !declared.is_wrap_content() {
        size = target.rendered_extent().along(axis);
      }
      if size > 0 {
        log::trace!("{axis} of '{}' taken from rendered extent", self.source_uri);
      } else {
        // May be a sentinel; non-positive values stay unresolved.
        size = declared.raw();
      }
    }
    if size <= 0 {
      size = bounded_max(&*target, axis, &self.source_uri);
    }
    u32::try_from(size).unwrap_or(0)
  }
}

/// The target's maximum on `axis`, or `0` when it is not a usable bound.
fn bounded_max<T: DisplayTarget + ?Sized>(target: &T, axis: Axis, source_uri: &str) -> i32 {
  match target.max_extent(axis) {
    Ok(v) if v > 0 && v < i32::MAX => {
      log::trace!("{axis} of '{source_uri}' taken from max bound {v}");
      v
    }
    Ok(_) => 0,
    Err(err) => {
      log::warn!(
        "cannot read max {axis} for '{source_uri}' ({}): {err}",
        err.field()
      );
      0
    }
  }
}

impl<T: DisplayTarget + ?Sized> Clone for LoadRequest<T> {
  fn clone(&self) -> Self {
    Self {
      target: Weak::clone(&self.target),
      source_uri: self.source_uri.clone(),
      cache_key: self.cache_key.clone(),
      config: Arc::clone(&self.config),
      listener: Arc::clone(&self.listener),
    }
  }
}

impl<T: DisplayTarget + ?Sized> PartialEq for LoadRequest<T> {
  fn eq(&self, other: &Self) -> bool {
    self.source_uri == other.source_uri
  }
}

impl<T: DisplayTarget + ?Sized> Eq for LoadRequest<T> {}

impl<T: DisplayTarget + ?Sized> Hash for LoadRequest<T> {
  fn hash<H: Hasher>(&self, state: &mut H) {
    self.source_uri.hash(state);
  }
}

impl<T: DisplayTarget + ?Sized> fmt::Debug for LoadRequest<T> {
  fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
    f.debug_struct("LoadRequest")
      .field("source_uri", &self.source_uri)
      .field("cache_key", &self.cache_key)
      .field("config", &self.config)
      .field("target_alive", &(self.target.strong_count() > 0))
      .finish()
  }
}
