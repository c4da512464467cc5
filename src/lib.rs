pub mod config;
pub mod error;
pub mod geometry;
pub mod key;
pub mod layout;
pub mod listener;
pub mod request;
pub mod target;
pub mod view;

pub use config::DisplayConfig;
pub use error::{Error, IntrospectionError, Result};
pub use geometry::{Axis, Extent};
pub use key::{cache_key, KeyHasher, Sha256KeyHasher};
pub use layout::{LayoutDimension, LayoutParams};
pub use listener::{ImageListener, LoadOutcome, NoopListener};
pub use request::LoadRequest;
pub use target::{DisplayTarget, SourceTag};
pub use view::{ImageView, MaxBound};
