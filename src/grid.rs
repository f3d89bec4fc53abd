//! Placement of hexagon centers over the image plane.
//!
//! Rows are `row_pitch` apart and overlap vertically by a quarter of `hex_height`; every odd row
//! is shifted right by half a `hex_width`. The grid deliberately overshoots the image by two rows
//! and two columns, and centers whose bounding square can't touch the canvas are culled.

use {
  crate::{
    config::Config,
    geometry::{BoundingBox, Hexagon, P2, PixelSpace}
  },
  euclid::Box2D
};

/// Hexagon center along with its grid position.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HexCenter {
  pub row: u32,
  pub col: u32,
  pub point: P2
}

#[derive(Debug, Copy, Clone)]
pub struct GridPlanner {
  config: Config
}

impl GridPlanner {
  pub fn new(config: Config) -> Self {
    Self { config }
  }

  /// Saturates at `u32::MAX` for configs built around the validation in `Config::new`.
  pub fn rows(&self) -> u32 {
    ((self.config.height as f64 / self.config.row_pitch()) as u32).saturating_add(2)
  }

  pub fn cols(&self) -> u32 {
    ((self.config.width as f64 / self.config.hex_width()) as u32).saturating_add(2)
  }

  pub fn center_at(&self, row: u32, col: u32) -> P2 {
    let hex_width = self.config.hex_width();
    let stagger = if row % 2 == 1 { hex_width / 2.0 } else { 0.0 };
    P2::new(
      col as f64 * hex_width + stagger,
      row as f64 * self.config.hex_height() * 0.75
    )
  }

  /// Canvas grown by one radius on every side.
  pub fn visible_area(&self) -> Box2D<f64, PixelSpace> {
    let size = self.config.size().to_f64();
    Box2D::from_size(size)
      .inflate(self.config.hex_radius, self.config.hex_radius)
  }

  /// Whether a hexagon centered at `point` could intersect the canvas, judged by its bounding
  /// square. Centers exactly on the grown boundary are kept.
  pub fn is_visible(&self, point: P2) -> bool {
    let area = self.visible_area();
    point.x >= area.min.x && point.x <= area.max.x &&
    point.y >= area.min.y && point.y <= area.max.y
  }

  pub fn hexagon(&self, center: &HexCenter) -> Hexagon {
    Hexagon::new(center.point, self.config.hex_radius)
  }

  pub fn centers(&self) -> HexCenters {
    HexCenters {
      planner: *self,
      rows: self.rows(),
      cols: self.cols(),
      next: 0
    }
  }
}

/// Row-major walk over the grid, skipping culled centers.
#[derive(Debug, Clone)]
pub struct HexCenters {
  planner: GridPlanner,
  rows: u32,
  cols: u32,
  next: u64
}

impl HexCenters {
  fn total(&self) -> u64 {
    self.rows as u64 * self.cols as u64
  }
}

impl Iterator for HexCenters {
  type Item = HexCenter;

  fn next(&mut self) -> Option<HexCenter> {
    while self.next < self.total() {
      let (row, col) = (
        (self.next / self.cols as u64) as u32,
        (self.next % self.cols as u64) as u32
      );
      self.next += 1;
      let point = self.planner.center_at(row, col);
      if self.planner.is_visible(point) {
        return Some(HexCenter { row, col, point });
      }
    }
    None
  }

  fn size_hint(&self) -> (usize, Option<usize>) {
    (0, usize::try_from(self.total() - self.next).ok())
  }
}

impl std::iter::FusedIterator for HexCenters {}

/// Lazily enumerate the centers of all hexagons needed to tile the image described by `config`.
pub fn plan_centers(config: &Config) -> HexCenters {
  let centers = GridPlanner::new(*config).centers();
  log::debug!(
    "hex grid: {} rows x {} cols, radius {}",
    centers.rows, centers.cols, config.hex_radius
  );
  centers
}

/// Union of the bounding squares of all planned hexagons.
pub fn coverage(config: &Config) -> Option<Box2D<f64, PixelSpace>> {
  let planner = GridPlanner::new(*config);
  planner.centers()
    .map(|center| planner.hexagon(&center).bounding_box())
    .reduce(|a, b| a.union(&b))
}

#[cfg(test)] mod tests;
