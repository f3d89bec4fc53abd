//! Turn raster images into hexagon-tiled vector wallpapers.
//!
//! The image plane is covered with a staggered grid of hexagons ([`grid`]); every hexagon is
//! filled with the mean colour of the source pixels inside its circumcircle ([`sampler`]); the
//! result is collected into an SVG [`Document`](render::Document) ([`render`]).
//!
//! The conversion itself never touches the filesystem. Pixels come in through the
//! [`PixelSource`](pixel::PixelSource) trait, and the finished document is handed back to the
//! caller, who decides where it goes.
//!
//! # Basic usage
//! ```
//! # use hex_wallpaper::{pixel::PixelBuffer, error::Result};
//! # fn main() -> Result<()> {
//! // a 3x3 red image
//! let buffer = PixelBuffer::filled(3, 3, &[255, 0, 0])?;
//! let document = hex_wallpaper::convert(&buffer, 20.0)?;
//!
//! assert_eq!(document.len(), 1);
//! assert!(document.to_svg_string().contains(r#"fill="rgb(255,0,0)""#));
//! #   Ok(())
//! # }
//! ```
//!
//! The individual stages can be driven by hand, e.g. to render on all cores:
//! ```
//! # use hex_wallpaper::{pixel::PixelBuffer, error::Result, config::Config, grid, render};
//! # fn main() -> Result<()> {
//! let buffer = PixelBuffer::from_fn(64, 48, 1, |x, y| [(x ^ y) as u8])?;
//! let config = Config::for_buffer(&buffer, 6.0)?;
//! let document = render::render_parallel(grid::plan_centers(&config), &buffer, &config)?;
//! let mut svg = vec![];
//! document.write_to(&mut svg)?;
//! #   Ok(())
//! # }
//! ```
//!
//! With the `decode` feature, [`RasterImage`](pixel::RasterImage) opens PNG and JPEG files, and
//! `image::ImageBuffer`s with 8 bit channels can be sampled directly.

pub mod error;
pub mod config;
pub mod geometry;
pub mod pixel;
pub mod grid;
pub mod sampler;
pub mod render;
pub mod util;

use {
  config::Config,
  error::Result,
  pixel::PixelSource,
  render::Document
};

/// Tile `buffer` with hexagons of `hex_radius` pixels.
///
/// Fails fast on a non-positive radius, an empty buffer, or samples with 2 channels.
pub fn convert(buffer: &impl PixelSource, hex_radius: f64) -> Result<Document> {
  let config = Config::for_buffer(buffer, hex_radius)?;
  render::render(grid::plan_centers(&config), buffer, &config)
}
