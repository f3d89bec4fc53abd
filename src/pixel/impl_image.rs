use {
  std::{ops::Deref, path::Path},
  image::{DynamicImage, GenericImageView, GrayImage, ImageBuffer, Pixel, RgbImage, RgbaImage},
  crate::{
    error::Result,
    pixel::PixelSource
  }
};

impl <P, Container> PixelSource for ImageBuffer<P, Container>
  where P: Pixel<Subpixel = u8> + Sync,
        Container: Deref<Target = [u8]> + Sync
{
  fn width(&self) -> u32 { self.width() }
  fn height(&self) -> u32 { self.height() }

  #[inline]
  fn sample(&self, x: u32, y: u32) -> &[u8] {
    self.get_pixel(x, y).channels()
  }
}

/// Decoded image, frozen in one of the layouts the sampler understands natively.
#[derive(Debug, Clone)]
pub enum RasterImage {
  Luma(GrayImage),
  Rgb(RgbImage),
  Rgba(RgbaImage)
}

impl RasterImage {
  pub fn open(path: impl AsRef<Path>) -> Result<Self> {
    let path = path.as_ref();
    let image = image::open(path)?;
    log::debug!("decoded {:?}: {}x{} {:?}", path, image.width(), image.height(), image.color());
    Ok(Self::from_dynamic(image))
  }

  /// LumaA, 16 bit and float layouts are converted to 8 bit RGBA.
  pub fn from_dynamic(image: DynamicImage) -> Self {
    match image {
      DynamicImage::ImageLuma8(image) => Self::Luma(image),
      DynamicImage::ImageRgb8(image) => Self::Rgb(image),
      DynamicImage::ImageRgba8(image) => Self::Rgba(image),
      other => {
        log::warn!("{:?} pixels are converted to 8 bit RGBA", other.color());
        Self::Rgba(other.to_rgba8())
      }
    }
  }
}

impl From<DynamicImage> for RasterImage {
  fn from(image: DynamicImage) -> Self {
    Self::from_dynamic(image)
  }
}

impl PixelSource for RasterImage {
  fn width(&self) -> u32 {
    match self {
      Self::Luma(image) => image.width(),
      Self::Rgb(image) => image.width(),
      Self::Rgba(image) => image.width(),
    }}

  fn height(&self) -> u32 {
    match self {
      Self::Luma(image) => image.height(),
      Self::Rgb(image) => image.height(),
      Self::Rgba(image) => image.height(),
    }}

  #[inline]
  fn sample(&self, x: u32, y: u32) -> &[u8] {
    match self {
      Self::Luma(image) => image.get_pixel(x, y).channels(),
      Self::Rgb(image) => image.get_pixel(x, y).channels(),
      Self::Rgba(image) => image.get_pixel(x, y).channels(),
    }}
}
