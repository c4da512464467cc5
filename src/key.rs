//! Cache keys for image sources
//!
//! Caching and de-duplication layers correlate requests by a digest of the
//! source URI rather than the URI itself, so keys are fixed-length and safe
//! to use as file names.

use sha2::{Digest, Sha256};

/// Derives a cache key from a source identifier.
///
/// Implementations must be deterministic and total: every string, including
/// the empty one, maps to a key.
pub trait KeyHasher: Send + Sync {
  fn hash_key(&self, source: &str) -> String;
}

/// Lowercase hex SHA-256 of the source URI.
#[derive(Debug, Clone, Copy, Default)]
pub struct Sha256KeyHasher;

impl KeyHasher for Sha256KeyHasher {
  fn hash_key(&self, source: &str) -> String {
    let digest = Sha256::digest(source.as_bytes());
    const HEX: &[u8; 16] = b"0123456789abcdef";
    let mut out = String::with_capacity(64);
    for &b in digest.iter() {
      out.push(HEX[(b >> 4) as usize] as char);
      out.push(HEX[(b & 0x0f) as usize] as char);
    }
    out
  }
}

impl<F> KeyHasher for F
where
  F: Fn(&str) -> String + Send + Sync,
{
  fn hash_key(&self, source: &str) -> String {
    self(source)
  }
}

/// Cache key for `source` using [`Sha256KeyHasher`].
///
/// ```
/// let key = imgbind::cache_key("https://example.com/cat.png");
/// assert_eq!(key.len(), 64);
/// assert_eq!(key, imgbind::cache_key("https://example.com/cat.png"));
/// ```
pub fn cache_key(source: &str) -> String {
  Sha256KeyHasher.hash_key(source)
}
