//! Hexagon records and their SVG serialization.
//!
//! ```text
//! <svg xmlns="http://www.w3.org/2000/svg" width="{W}" height="{H}">
//! <polygon points="x1,y1 x2,y2 ... x6,y6" fill="rgb(r,g,b)" stroke="none"/>
//! ...
//! </svg>
//! ```
//! Coordinates are printed in their shortest round-trip form, always with a decimal point.
//! Polygons appear in row-major grid order, later ones drawn over earlier ones at shared edges.

use {
  std::fmt::{self, Display, Formatter},
  itertools::Itertools,
  euclid::Size2D,
  crate::{
    config::Config,
    error::Result,
    geometry::{Hexagon, P2, PixelSpace},
    grid::HexCenter,
    pixel::PixelSource,
    sampler::{sample_color, Rgb}
  }
};

/// One filled hexagon of the output.
#[derive(Debug, Copy, Clone, PartialEq)]
pub struct HexRecord {
  pub vertices: [P2; 6],
  pub color: Rgb
}

impl HexRecord {
  pub fn new(hexagon: Hexagon, color: Rgb) -> Self {
    Self { vertices: hexagon.vertices(), color }
  }

  /// Geometry and sampled colour of the hexagon around `center`.
  pub fn sample(buffer: &impl PixelSource, center: P2, radius: f64) -> Result<Self> {
    let color = sample_color(buffer, center, radius)?;
    Ok(Self::new(Hexagon::new(center, radius), color))
  }
}

impl Display for HexRecord {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    let points = self.vertices.iter()
      .format_with(" ", |p, f| f(&format_args!("{:?},{:?}", p.x, p.y)));
    let [r, g, b] = self.color;
    write!(f, r#"<polygon points="{}" fill="rgb({},{},{})" stroke="none"/>"#, points, r, g, b)
  }
}

/// Append-only list of hexagons on a canvas, serialized once at the end.
#[derive(Debug, Clone, PartialEq)]
pub struct Document {
  size: Size2D<u32, PixelSpace>,
  records: Vec<HexRecord>
}

impl Document {
  pub fn new(size: Size2D<u32, PixelSpace>) -> Self {
    Self { size, records: vec![] }
  }

  pub fn with_capacity(size: Size2D<u32, PixelSpace>, capacity: usize) -> Self {
    Self { size, records: Vec::with_capacity(capacity) }
  }

  pub fn push(&mut self, record: HexRecord) {
    self.records.push(record);
  }

  pub fn size(&self) -> Size2D<u32, PixelSpace> {
    self.size
  }

  pub fn records(&self) -> &[HexRecord] {
    &self.records
  }

  pub fn len(&self) -> usize {
    self.records.len()
  }

  pub fn is_empty(&self) -> bool {
    self.records.is_empty()
  }

  pub fn to_svg_string(&self) -> String {
    self.to_string()
  }

  /// Serialize into a caller owned sink, e.g. a file or a socket.
  pub fn write_to(&self, mut sink: impl std::io::Write) -> Result<()> {
    write!(sink, "{}", self)?;
    sink.flush()?;
    Ok(())
  }
}

impl Display for Document {
  fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
    writeln!(
      f, r#"<svg xmlns="http://www.w3.org/2000/svg" width="{}" height="{}">"#,
      self.size.width, self.size.height
    )?;
    for record in &self.records {
      writeln!(f, "{}", record)?;
    }
    write!(f, "</svg>")
  }
}

impl Extend<HexRecord> for Document {
  fn extend<I: IntoIterator<Item = HexRecord>>(&mut self, records: I) {
    self.records.extend(records)
  }
}

fn check_size(buffer: &impl PixelSource, config: &Config) {
  if buffer.size() != config.size() {
    log::warn!(
      "config is {}x{}, but the buffer is {}x{}; sampling is clipped to the buffer",
      config.width, config.height, buffer.width(), buffer.height()
    );
  }
}

/// Sample every center in order and collect the hexagons into a document.
pub fn render(
  centers: impl IntoIterator<Item = HexCenter>,
  buffer: &impl PixelSource,
  config: &Config
) -> Result<Document> {
  check_size(buffer, config);
  let centers = centers.into_iter();
  let mut document = Document::with_capacity(config.size(), centers.size_hint().1.unwrap_or_default());
  for center in centers {
    document.push(HexRecord::sample(buffer, center.point, config.hex_radius)?);
  }
  log::debug!("rendered {} hexagons", document.len());
  Ok(document)
}

/// Same as [`render`], sampling hexagons on the rayon thread pool.
///
/// Output is byte-identical to [`render`]: records are collected back in the order of `centers`.
pub fn render_parallel(
  centers: impl IntoIterator<Item = HexCenter>,
  buffer: &impl PixelSource,
  config: &Config
) -> Result<Document> {
  use rayon::prelude::*;

  check_size(buffer, config);
  let centers = centers.into_iter().collect::<Vec<_>>();
  let records = centers.par_iter()
    .map(|center| HexRecord::sample(buffer, center.point, config.hex_radius))
    .collect::<Result<Vec<_>>>()?;
  log::debug!("rendered {} hexagons on {} threads", records.len(), rayon::current_num_threads());
  Ok(Document { size: config.size(), records })
}
