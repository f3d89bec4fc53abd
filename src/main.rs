//! `hex-wallpaper [input] [hex_radius] [output]`
//!
//! Defaults to `input.png`, a radius of 20 pixels, and `output.svg`.

use {
  anyhow::{Context, Result},
  hex_wallpaper::{
    config::{Config, DEFAULT_HEX_RADIUS},
    grid, render,
    pixel::RasterImage,
    profile, util
  }
};

fn main() -> Result<()> {
  env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("info")).init();

  let mut args = std::env::args().skip(1);
  let input = args.next().unwrap_or_else(|| "input.png".into());
  let hex_radius = match args.next() {
    Some(radius) => radius.parse::<f64>()
      .with_context(|| format!("invalid hex radius {:?}", radius))?,
    None => DEFAULT_HEX_RADIUS
  };
  let output = args.next().unwrap_or_else(|| "output.svg".into());

  let image = RasterImage::open(&input)
    .with_context(|| format!("unable to open {:?}", input))?;
  let config = Config::for_buffer(&image, hex_radius)?;

  let document;
  profile!("render", {
    document = render::render_parallel(grid::plan_centers(&config), &image, &config)?;
  });

  let svg = document.to_svg_string();
  std::fs::write(&output, &svg)
    .with_context(|| format!("unable to write {:?}", output))?;

  log::info!("{} hexagons, {}", document.len(), util::file_size(svg.len()));
  log::info!("SVG saved to {}", output);
  Ok(())
}
