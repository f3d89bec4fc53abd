//! Read-only access to decoded source pixels.

use {
  crate::{
    error::{Error, Result},
    geometry::PixelSpace
  },
  euclid::Size2D
};

/// A decoded raster image, addressed by integer `(x, y)` with the origin in the top-left corner.
///
/// A sample is a channel slice: 1 channel for grayscale, 3 or more for RGB / RGBA.
/// Implementors are never mutated by the conversion, and may be sampled from several threads.
pub trait PixelSource: Sync {
  fn width(&self) -> u32;
  fn height(&self) -> u32;
  /// Caller guarantees `x < width` and `y < height`.
  fn sample(&self, x: u32, y: u32) -> &[u8];

  fn size(&self) -> Size2D<u32, PixelSpace> {
    Size2D::new(self.width(), self.height())
  }
}

/// Interleaved, row-major 8-bit pixels.
#[derive(Debug, Clone, PartialEq)]
pub struct PixelBuffer {
  width: u32,
  height: u32,
  channels: usize,
  data: Vec<u8>
}

impl PixelBuffer {
  pub fn new(width: u32, height: u32, channels: usize, data: Vec<u8>) -> Result<Self> {
    if channels == 0 || channels == 2 {
      return Err(Error::MalformedSample { channels });
    }
    let expected = width as usize * height as usize * channels;
    if data.len() != expected {
      return Err(Error::BufferSize { expected, actual: data.len() });
    }
    Ok(Self { width, height, channels, data })
  }

  /// Buffer where every pixel equals `sample`.
  pub fn filled(width: u32, height: u32, sample: &[u8]) -> Result<Self> {
    let data = sample.iter()
      .cycle()
      .take(width as usize * height as usize * sample.len())
      .copied()
      .collect();
    Self::new(width, height, sample.len(), data)
  }

  /// Buffer computed per pixel by `f(x, y)`, which must return `channels` values.
  pub fn from_fn<F, S>(width: u32, height: u32, channels: usize, f: F) -> Result<Self>
    where F: Fn(u32, u32) -> S,
          S: AsRef<[u8]>
  {
    let mut data = Vec::with_capacity(width as usize * height as usize * channels);
    itertools::iproduct!(0..height, 0..width)
      .for_each(|(y, x)| data.extend_from_slice(f(x, y).as_ref()));
    Self::new(width, height, channels, data)
  }

  pub fn channels(&self) -> usize {
    self.channels
  }
}

impl PixelSource for PixelBuffer {
  fn width(&self) -> u32 { self.width }
  fn height(&self) -> u32 { self.height }

  #[inline]
  fn sample(&self, x: u32, y: u32) -> &[u8] {
    let offset = (y as usize * self.width as usize + x as usize) * self.channels;
    &self.data[offset..offset + self.channels]
  }
}

#[cfg(feature = "decode")]
mod impl_image;
#[cfg(feature = "decode")]
pub use impl_image::RasterImage;
