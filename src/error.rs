//! .
//!
//! Errors of the conversion core, plus the foreign errors of the optional decoding layer.

/// Everything that can go wrong while turning a pixel buffer into a document.
///
/// An empty sampling region is not an error: it resolves to white, see
/// [`sample_color`](crate::sampler::sample_color).
#[derive(Debug, thiserror::Error)]
pub enum Error {
  #[error("invalid config: {0}")]
  InvalidConfig(String),

  /// Only 1 (grayscale) or at least 3 (RGB, RGBA) channels are understood.
  #[error("malformed pixel sample: {channels} channel(s), expected 1 or at least 3")]
  MalformedSample { channels: usize },

  #[error("pixel buffer holds {actual} bytes, expected {expected}")]
  BufferSize { expected: usize, actual: usize },

  #[cfg(feature = "decode")]
  #[error("image error: {0}")]
  Image(#[from] image::ImageError),

  #[error("io error: {0}")]
  Io(#[from] std::io::Error),
}

/// Convenient wrapper around `std::Result`.
pub type Result<T> = std::result::Result<T, Error>;

/// Shorthand for `Err(Error::InvalidConfig(..))` with `format!` arguments.
macro_rules! invalid_config(
  ($($arg: tt)*) => {
    return Err($crate::error::Error::InvalidConfig(format!($($arg)*)))
  }
);
pub(crate) use invalid_config;
