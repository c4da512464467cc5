use imgbind::error::IntrospectionError;
use imgbind::{
  Axis, DisplayConfig, DisplayTarget, Extent, ImageView, LayoutDimension, LayoutParams,
  LoadRequest, MaxBound, NoopListener,
};
use std::sync::atomic::{AtomicUsize, Ordering};
use std::sync::Arc;

fn bind<T: DisplayTarget + ?Sized>(target: &Arc<T>, uri: &str) -> LoadRequest<T> {
  LoadRequest::new(
    target,
    uri,
    Arc::new(DisplayConfig::default()),
    Arc::new(NoopListener),
  )
}

#[test]
fn measured_width_with_unmeasured_height_falls_back_per_axis() {
  let view = Arc::new(
    ImageView::new()
      .with_layout(LayoutParams::new(
        LayoutDimension::Exact(300),
        LayoutDimension::MatchParent,
      ))
      .with_max(Axis::Height, MaxBound::Value(400)),
  );
  view.lay_out(Extent::new(240, 0));

  let request = bind(&view, "https://example.com/banner.jpg");
  assert_eq!(request.resolve_width(), 240);
  // Height: no rendered extent, declared MATCH_PARENT, then the max bound.
  assert_eq!(request.resolve_height(), 400);
}

#[test]
fn declared_height_used_when_not_laid_out() {
  let view = Arc::new(ImageView::new().with_layout(LayoutParams::exact(300, 180)));
  view.lay_out(Extent::new(240, 0));

  let request = bind(&view, "https://example.com/banner.jpg");
  assert_eq!(request.resolve_width(), 240);
  assert_eq!(request.resolve_height(), 180);
}

#[test]
fn no_layout_params_uses_max_bound() {
  let view = Arc::new(ImageView::new().with_max(Axis::Width, MaxBound::Value(480)));
  view.lay_out(Extent::new(1024, 768));

  let request = bind(&view, "thumb.png");
  // Rendered extent is ignored entirely without layout params.
  assert_eq!(request.resolve_width(), 480);
  assert_eq!(request.resolve_height(), 0);
}

#[test]
fn unbounded_or_non_positive_max_resolves_to_zero() {
  for bound in [MaxBound::Value(i32::MAX), MaxBound::Value(0), MaxBound::Value(-1)] {
    let view = Arc::new(ImageView::new().with_max(Axis::Height, bound));
    assert_eq!(bind(&view, "a.png").resolve_height(), 0);
  }
}

#[test]
fn every_introspection_failure_is_swallowed() {
  let failures = [
    IntrospectionError::FieldMissing {
      field: "max_width".to_string(),
    },
    IntrospectionError::AccessDenied {
      field: "max_width".to_string(),
    },
    IntrospectionError::TypeMismatch {
      field: "max_width".to_string(),
      found: "String".to_string(),
    },
  ];
  for err in failures {
    let view = Arc::new(
      ImageView::new()
        .with_layout(LayoutParams::new(
          LayoutDimension::WrapContent,
          LayoutDimension::WrapContent,
        ))
        .with_max(Axis::Width, MaxBound::Unavailable(err)),
    );
    assert_eq!(bind(&view, "a.png").resolve_width(), 0);
  }
}

#[test]
fn sizes_track_relayout() {
  let view = Arc::new(ImageView::new().with_layout(LayoutParams::exact(100, 100)));
  let request = bind(&view, "a.png");
  assert_eq!(request.target_size(), Extent::new(100, 100));

  view.lay_out(Extent::new(60, 40));
  assert_eq!(request.target_size(), Extent::new(60, 40));
}

#[test]
fn reclaimed_target_reports_zero() {
  let view = Arc::new(ImageView::new().with_layout(LayoutParams::exact(100, 100)));
  let request = bind(&view, "a.png");
  drop(view);
  assert!(request.resolve_target().is_none());
  assert_eq!(request.resolve_width(), 0);
  assert_eq!(request.resolve_height(), 0);
}

/// A toolkit widget that counts how often its hidden bound is read.
struct CountingWidget {
  reads: AtomicUsize,
  tag: imgbind::SourceTag,
}

impl DisplayTarget for CountingWidget {
  fn layout_params(&self) -> Option<LayoutParams> {
    Some(LayoutParams::exact(0, 90))
  }

  fn rendered_extent(&self) -> Extent {
    Extent::ZERO
  }

  fn max_extent(&self, _axis: Axis) -> Result<i32, IntrospectionError> {
    self.reads.fetch_add(1, Ordering::SeqCst);
    Ok(320)
  }

  fn set_source_tag(&self, source_uri: &str) {
    self.tag.set(source_uri);
  }

  fn source_tag(&self) -> Option<String> {
    self.tag.get()
  }
}

#[test]
fn max_bound_is_only_consulted_as_last_resort() {
  let widget = Arc::new(CountingWidget {
    reads: AtomicUsize::new(0),
    tag: imgbind::SourceTag::new(),
  });
  let request = bind(&widget, "a.png");

  assert_eq!(request.resolve_height(), 90);
  assert_eq!(widget.reads.load(Ordering::SeqCst), 0);

  assert_eq!(request.resolve_width(), 320);
  assert_eq!(widget.reads.load(Ordering::SeqCst), 1);
}

#[test]
fn trait_object_targets_are_supported() {
  let view: Arc<dyn DisplayTarget> =
    Arc::new(ImageView::new().with_layout(LayoutParams::exact(32, 16)));
  let request: LoadRequest<dyn DisplayTarget> = bind(&view, "icon.png");
  assert_eq!(request.target_size(), Extent::new(32, 16));
  assert_eq!(view.source_tag().as_deref(), Some("icon.png"));
}
