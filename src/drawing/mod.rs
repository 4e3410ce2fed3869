//! Compositing ellipses into RGBA images.

use {
  crate::geometry::{Ellipse, PixelSpace},
  euclid::Size2D,
  image::{Rgba, RgbaImage}
};


pub trait Draw<Backend> {
  fn draw(&self, image: &mut Backend);
}

/// Alpha-blends the ellipse over the covered pixels; everything else stays untouched.
impl Draw<RgbaImage> for Ellipse {
  fn draw(&self, image: &mut RgbaImage) {
    let color = self.color_clamped();
    let size: Size2D<u32, PixelSpace> = image.dimensions().into();
    self.pixels_within(size).for_each(|pixel| {
      let pixel = image.get_pixel_mut(pixel.x as u32, pixel.y as u32);
      *pixel = blend_over(*pixel, color);
    });
  }
}

impl<T: Draw<RgbaImage>> Draw<RgbaImage> for [T] {
  fn draw(&self, image: &mut RgbaImage) {
    self.iter().for_each(|shape| shape.draw(image));
  }
}

/// Over-compositing of `src` onto `dst`, with `src.0[3]` as the coverage of the source:
/// `out = src * a + dst * (1 - a)`.
///
/// The source is opaque where it is drawn, so the alpha channel accumulates as
/// `a + dst_a * (1 - a)`.
pub fn blend_over(dst: Rgba<u8>, src: Rgba<u8>) -> Rgba<u8> {
  let a = src.0[3] as f64 / 255.0;
  let mix = |s: u8, d: u8| (s as f64 * a + d as f64 * (1.0 - a)).round() as u8;
  Rgba([
    mix(src.0[0], dst.0[0]),
    mix(src.0[1], dst.0[1]),
    mix(src.0[2], dst.0[2]),
    mix(u8::MAX, dst.0[3])
  ])
}

/// Regenerates an approximation by compositing `ellipses` in order onto a blank canvas.
pub fn render<'a>(
  ellipses: impl IntoIterator<Item = &'a Ellipse>,
  width: u32,
  height: u32,
  background: Rgba<u8>
) -> RgbaImage {
  let mut image = RgbaImage::from_pixel(width, height, background);
  ellipses.into_iter()
    .for_each(|ellipse| ellipse.draw(&mut image));
  image
}
