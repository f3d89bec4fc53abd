//! Render a synthetic radial gradient as a hexagon wallpaper and print the SVG.
//!
//! `cargo run --example wallpaper -- [hex_radius] > out.svg`

use {
  hex_wallpaper::{
    config::{Config, DEFAULT_HEX_RADIUS},
    grid, render,
    pixel::PixelBuffer
  },
  anyhow::Result
};

fn main() -> Result<()> {
  let hex_radius = std::env::args().nth(1)
    .map(|radius| radius.parse::<f64>())
    .transpose()?
    .unwrap_or(DEFAULT_HEX_RADIUS);

  let (width, height) = (640, 360);
  let image = PixelBuffer::from_fn(width, height, 3, |x, y| {
    let (dx, dy) = (x as f32 - width as f32 / 2.0, y as f32 - height as f32 / 2.0);
    let d = (dx * dx + dy * dy).sqrt() / (width as f32 / 2.0);
    [
      (255.0 * (1.0 - d).max(0.0)) as u8,
      (x * 255 / width) as u8,
      (y * 255 / height) as u8
    ]
  })?;

  let config = Config::for_buffer(&image, hex_radius)?;
  let document = render::render_parallel(grid::plan_centers(&config), &image, &config)?;
  document.write_to(std::io::stdout().lock())?;
  eprintln!("{} hexagons", document.len());
  Ok(())
}
