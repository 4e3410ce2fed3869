//! Pixelwise squared-error distance between images, and the change of it caused by a
//! single ellipse.

use {
  crate::{
    drawing::blend_over,
    error::{ensure_same_dimensions, Result},
    geometry::{Ellipse, PixelSpace}
  },
  euclid::Size2D,
  image::{Rgba, RgbaImage},
  rayon::prelude::*
};

/// Sum over all pixels and all four channels of squared differences.
///
/// Symmetric, and zero iff both images are identical. Fails on differing dimensions.
pub fn distance(a: &RgbaImage, b: &RgbaImage) -> Result<f64> {
  ensure_same_dimensions(a.dimensions(), b.dimensions())?;
  let sum = a.as_raw().par_iter()
    .zip(b.as_raw().par_iter())
    .map(|(&x, &y)| channel_error(x, y))
    .sum::<u64>();
  Ok(sum as f64)
}

#[inline]
fn channel_error(x: u8, y: u8) -> u64 {
  let d = x.abs_diff(y) as u64;
  d * d
}

fn pixel_error(a: &Rgba<u8>, b: &Rgba<u8>) -> u64 {
  a.0.iter()
    .zip(b.0.iter())
    .map(|(&x, &y)| channel_error(x, y))
    .sum()
}

/// `distance(canvas, reference) - distance(canvas + ellipse, reference)`, evaluated only
/// on the pixels the ellipse covers. Positive when drawing the ellipse brings the canvas
/// closer to the reference.
pub fn distance_reduction(canvas: &RgbaImage, reference: &RgbaImage, ellipse: &Ellipse) -> Result<f64> {
  ensure_same_dimensions(canvas.dimensions(), reference.dimensions())?;
  let color = ellipse.color_clamped();
  let size: Size2D<u32, PixelSpace> = canvas.dimensions().into();
  let (before, after) = ellipse.pixels_within(size)
    .map(|pixel| {
      let (x, y) = (pixel.x as u32, pixel.y as u32);
      let old = canvas.get_pixel(x, y);
      let target = reference.get_pixel(x, y);
      (pixel_error(old, target), pixel_error(&blend_over(*old, color), target))
    })
    .fold((0u64, 0u64), |(b, a), (old, new)| (b + old, a + new));
  Ok(before as f64 - after as f64)
}

#[cfg(test)] mod tests {
  use {
    super::*,
    crate::{drawing::Draw, error::Error},
    rand::prelude::*
  };

  fn noise(width: u32, height: u32, seed: u64) -> RgbaImage {
    let mut rng = rand_pcg::Pcg64::seed_from_u64(seed);
    RgbaImage::from_fn(width, height, |_, _| Rgba(rng.gen()))
  }

  #[test] fn identity() -> Result<()> {
    let image = noise(17, 9, 0);
    assert_eq!(distance(&image, &image)?, 0.0);
    Ok(())
  }

  #[test] fn symmetric() -> Result<()> {
    let (a, b) = (noise(12, 12, 1), noise(12, 12, 2));
    assert!(distance(&a, &b)? > 0.0);
    assert_eq!(distance(&a, &b)?, distance(&b, &a)?);
    Ok(())
  }

  #[test] fn single_channel() -> Result<()> {
    let a = RgbaImage::new(4, 4);
    let mut b = a.clone();
    b.get_pixel_mut(2, 3).0[1] = 7;
    b.get_pixel_mut(0, 0).0[3] = 2;
    assert_eq!(distance(&a, &b)?, 53.0);
    Ok(())
  }

  #[test] fn dimension_mismatch() {
    let (a, b) = (RgbaImage::new(4, 4), RgbaImage::new(4, 5));
    assert_eq!(
      distance(&a, &b),
      Err(Error::DimensionMismatch { left: (4, 4), right: (4, 5) })
    );
    let ellipse = Ellipse::new(1, 1, 1, 1, 0.0, 0, 0, 0, 255);
    assert!(distance_reduction(&a, &b, &ellipse).is_err());
  }

  #[test] fn reduction_matches_full_distance() -> Result<()> {
    let reference = noise(24, 20, 3);
    let canvas = noise(24, 20, 4);
    let ellipses = [
      Ellipse::new(12, 10, 6, 3, 0.7, 200, 30, 90, 255),
      Ellipse::new(0, 19, 9, 4, 2.2, 10, 240, 0, 77),
      Ellipse::new(40, 40, 3, 3, 0.0, 0, 0, 0, 255),
      Ellipse::new(5, 5, 30, 30, 0.0, 128, 128, 128, 1),
    ];
    let before = distance(&canvas, &reference)?;
    for ellipse in ellipses {
      let mut after = canvas.clone();
      ellipse.draw(&mut after);
      let expected = before - distance(&after, &reference)?;
      assert_eq!(distance_reduction(&canvas, &reference, &ellipse)?, expected);
    }
    Ok(())
  }

  #[test] fn matching_ellipse_improves() -> Result<()> {
    let canvas = RgbaImage::from_pixel(16, 16, Rgba([0, 0, 0, 255]));
    let ellipse = Ellipse::new(8, 8, 4, 6, 0.3, 90, 180, 20, 255);
    let mut reference = canvas.clone();
    ellipse.draw(&mut reference);
    let gain = distance_reduction(&canvas, &reference, &ellipse)?;
    assert_eq!(gain, distance(&canvas, &reference)?);
    let shifted = Ellipse { center_x: 10, ..ellipse };
    assert!(distance_reduction(&canvas, &reference, &shifted)? < gain);
    Ok(())
  }
}
