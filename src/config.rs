use {
  crate::{
    error::{invalid_config, Result},
    geometry::PixelSpace,
    pixel::PixelSource
  },
  euclid::Size2D
};

/// Hexagon radius used when the caller doesn't pick one, in pixels.
pub const DEFAULT_HEX_RADIUS: f64 = 20.0;

/// Upper bound on `rows * cols` of the planned grid, culled centers included.
pub const MAX_GRID_CELLS: u64 = 1 << 26;

/// Immutable parameters of a single conversion.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Config {
  /// Distance from a hexagon's center to any of its vertices, in pixels.
  pub hex_radius: f64,
  pub width: u32,
  pub height: u32,
}

impl Config {
  pub fn new(hex_radius: f64, size: Size2D<u32, PixelSpace>) -> Result<Self> {
    if !hex_radius.is_finite() || hex_radius <= 0.0 {
      invalid_config!("hex radius must be a positive number, got {}", hex_radius);
    }
    if size.is_empty() {
      invalid_config!("image must not be empty, got {}x{}", size.width, size.height);
    }
    let config = Self {
      hex_radius,
      width: size.width,
      height: size.height
    };
    let cells = config.grid_cells();
    if cells > MAX_GRID_CELLS as f64 {
      invalid_config!(
        "hex radius {} is too small for a {}x{} image: {} grid cells, at most {} allowed",
        hex_radius, size.width, size.height, cells, MAX_GRID_CELLS
      );
    }
    Ok(config)
  }

  /// Config matching the dimensions of `buffer`.
  pub fn for_buffer(buffer: &impl PixelSource, hex_radius: f64) -> Result<Self> {
    Self::new(hex_radius, buffer.size())
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> {
    Size2D::new(self.width, self.height)
  }

  /// Horizontal distance between neighbouring centers of the same row.
  pub fn hex_width(&self) -> f64 {
    2.0 * self.hex_radius
  }

  pub fn hex_height(&self) -> f64 {
    3f64.sqrt() * self.hex_radius
  }

  /// Vertical distance between consecutive rows; rows overlap by a quarter of `hex_height`.
  pub fn row_pitch(&self) -> f64 {
    self.hex_height() * 0.75
  }

  /// `rows * cols` of the planned grid, computed in floating point so it can't overflow.
  fn grid_cells(&self) -> f64 {
    let rows = (self.height as f64 / self.row_pitch()).floor() + 2.0;
    let cols = (self.width as f64 / self.hex_width()).floor() + 2.0;
    rows * cols
  }
}
