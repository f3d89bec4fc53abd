//! .
//!
//! The origin of coordinate system is in top-left corner, `x` grows to the right, `y` grows
//! downwards. Everything is measured in source image pixels.

use {
  std::f64::consts::PI,
  euclid::{Box2D, Point2D, Vector2D as V2}
};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f64, PixelSpace>;

pub trait BoundingBox<T, S> {
  fn bounding_box(&self) -> Box2D<T, S>;
}

/// Regular hexagon, first vertex directly to the right of the center.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct Hexagon {
  pub center: P2,
  pub radius: f64
}

impl Hexagon {
  pub fn new(center: P2, radius: f64) -> Self {
    Self { center, radius }
  }

  pub fn vertices(&self) -> [P2; 6] {
    hexagon_vertices(self.center, self.radius)
  }
}

/// Axis-aligned square circumscribing the hexagon's circumcircle.
impl BoundingBox<f64, PixelSpace> for Hexagon {
  fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    Box2D::new(
      self.center - V2::splat(self.radius),
      self.center + V2::splat(self.radius)
    )}}

/// Corners of the hexagon around `center`; vertex `i` lies at `i * 60°`.
///
/// Consecutive vertices, wrapping last to first, form the polygon boundary.
pub fn hexagon_vertices(center: P2, radius: f64) -> [P2; 6] {
  let mut vertices = [center; 6];
  vertices.iter_mut()
    .enumerate()
    .for_each(|(i, vertex)| {
      let angle = PI / 3.0 * i as f64;
      *vertex = P2::new(
        center.x + radius * angle.cos(),
        center.y + radius * angle.sin()
      );
    });
  vertices
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test] fn six_vertices_on_circumcircle() {
    let center = P2::new(13.0, -7.5);
    let vertices = hexagon_vertices(center, 20.0);
    assert_eq!(vertices.len(), 6);
    vertices.iter()
      .for_each(|v| assert!((v.distance_to(center) - 20.0).abs() < 1e-9));
  }

  #[test] fn vertex_order() {
    let vertices = hexagon_vertices(P2::new(0.0, 0.0), 10.0);
    assert_eq!(vertices[0], P2::new(10.0, 0.0));
    assert!((vertices[3].x + 10.0).abs() < 1e-9);
    // y grows downwards, so the second vertex is below the first
    assert!(vertices[1].y > 0.0 && vertices[4].y < 0.0);
    // edges of a regular hexagon are as long as its radius
    (0..6).for_each(|i| {
      let edge = vertices[i].distance_to(vertices[(i + 1) % 6]);
      assert!((edge - 10.0).abs() < 1e-9);
    });
  }

  #[test] fn bounding_box() {
    let hexagon = Hexagon::new(P2::new(5.0, 5.0), 2.0);
    let bb = hexagon.bounding_box();
    assert_eq!(bb.min, P2::new(3.0, 3.0));
    assert_eq!(bb.max, P2::new(7.0, 7.0));
  }
}
