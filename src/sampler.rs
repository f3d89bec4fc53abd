//! Average colour of the source pixels under a hexagon.
//!
//! The hexagon is approximated by its circumcircle, so pixels between the hexagon's edges and the
//! circle count too. Channel means are truncated, not rounded.

use {
  crate::{
    error::{Error, Result},
    geometry::P2,
    pixel::PixelSource
  }
};

/// 8 bit RGB triple.
pub type Rgb = [u8; 3];

/// Colour of a hexagon that doesn't cover a single source pixel.
pub const FALLBACK_COLOR: Rgb = [255, 255, 255];

/// Reduce a sample to RGB: grayscale is replicated, RGB is kept, alpha is dropped.
pub fn normalize_sample(sample: &[u8]) -> Result<Rgb> {
  match *sample {
    [luma] => Ok([luma; 3]),
    [r, g, b, ..] => Ok([r, g, b]),
    _ => Err(Error::MalformedSample { channels: sample.len() })
  }
}

/// Running per-channel sum.
#[derive(Debug, Default, Copy, Clone, PartialEq)]
pub struct ColorAccumulator {
  sum: [u64; 3],
  count: u64
}

impl ColorAccumulator {
  pub fn push(&mut self, [r, g, b]: Rgb) {
    self.sum[0] += r as u64;
    self.sum[1] += g as u64;
    self.sum[2] += b as u64;
    self.count += 1;
  }

  pub fn count(&self) -> u64 {
    self.count
  }

  /// Truncated mean, `None` when nothing was pushed.
  pub fn mean(&self) -> Option<Rgb> {
    (self.count > 0).then(|| self.sum.map(|channel| (channel / self.count) as u8))
  }
}

/// Integer pixel range `[start, end)` along one axis around `center`, clipped to `[0, len)`.
fn clipped_range(center: f64, radius: f64, len: u32) -> std::ops::Range<u32> {
  let start = ((center - radius) as i64).max(0);
  let end = ((center + radius) as i64).min(len as i64);
  if end <= start {
    return 0..0;
  }
  start as u32..end as u32
}

/// Average colour of the pixels of `buffer` inside the circle of `radius` around `center`.
///
/// Returns [`FALLBACK_COLOR`] when the circle doesn't contain any pixel of the buffer.
pub fn sample_color(buffer: &impl PixelSource, center: P2, radius: f64) -> Result<Rgb> {
  let xs = clipped_range(center.x, radius, buffer.width());
  let ys = clipped_range(center.y, radius, buffer.height());
  let r2 = radius * radius;

  let mut acc = ColorAccumulator::default();
  for (x, y) in itertools::iproduct!(xs, ys) {
    let (dx, dy) = (x as f64 - center.x, y as f64 - center.y);
    if dx * dx + dy * dy <= r2 {
      acc.push(normalize_sample(buffer.sample(x, y))?);
    }
  }
  Ok(acc.mean().unwrap_or(FALLBACK_COLOR))
}
