//! Completion callbacks
//!
//! A listener travels with a request but is only ever invoked by the
//! scheduler that performs the load, never by the request itself.

use crate::error::Result;
use image::DynamicImage;
use std::sync::Arc;

/// Result handed to a listener: the decoded image or why it is missing.
pub type LoadOutcome = Result<Arc<DynamicImage>>;

/// Receives the outcome of a load for a target of type `T`.
pub trait ImageListener<T: ?Sized>: Send + Sync {
  fn on_complete(&self, target: &T, outcome: &LoadOutcome, source_uri: &str);
}

impl<T, F> ImageListener<T> for F
where
  T: ?Sized,
  F: Fn(&T, &LoadOutcome, &str) + Send + Sync,
{
  fn on_complete(&self, target: &T, outcome: &LoadOutcome, source_uri: &str) {
    self(target, outcome, source_uri)
  }
}

/// Listener that ignores every outcome.
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopListener;

impl<T: ?Sized> ImageListener<T> for NoopListener {
  fn on_complete(&self, _target: &T, _outcome: &LoadOutcome, _source_uri: &str) {}
}
