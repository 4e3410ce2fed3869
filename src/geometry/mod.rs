//! Ellipse hypotheses and their analytic geometry.
//!
//! The origin of coordinate system is in top-left corner of the image, `x` grows to the right
//! and `y` downwards. One unit is one pixel; pixel `(x, y)` is sampled at its integer
//! coordinate.

use {
  crate::error::{Error, Result},
  euclid::{Box2D, Point2D, Rotation2D, Size2D, Vector2D as V2},
  image::Rgba,
  num_traits::ToPrimitive
};

mod rotation;
pub use rotation::{Centiradians, UNITS_PER_RADIAN};

/// Pixel coordinate basis
#[derive(Debug, Copy, Clone)]
pub struct PixelSpace;

pub type P2 = Point2D<f64, PixelSpace>;
/// Integer pixel location
pub type Pixel = Point2D<i32, PixelSpace>;

/// A colored, rotated ellipse. Immutable value type: mutations produce new ellipses.
///
/// Colors are not range checked on construction; see [`Ellipse::validate`].
#[derive(Debug, Copy, Clone, PartialEq, Eq, Hash)]
pub struct Ellipse {
  pub center_x: i32,
  pub center_y: i32,
  pub radius_x: i32,
  pub radius_y: i32,
  pub rotation: Centiradians,
  pub r: i32,
  pub g: i32,
  pub b: i32,
  pub alpha: i32
}

impl Ellipse {
  /// `rotation` is given in radians and rounded to [`Centiradians`].
  #[allow(clippy::too_many_arguments)]
  pub fn new(
    center_x: i32, center_y: i32,
    radius_x: i32, radius_y: i32,
    rotation: f64,
    r: i32, g: i32, b: i32, alpha: i32
  ) -> Self {
    Self {
      center_x, center_y,
      radius_x, radius_y,
      rotation: Centiradians::from_radians(rotation),
      r, g, b, alpha
    }
  }

  pub fn center(&self) -> P2 {
    Point2D::new(self.center_x as f64, self.center_y as f64)
  }

  /// Rotation in radians, not reduced.
  pub fn angle(&self) -> f64 {
    self.rotation.to_radians()
  }

  /// Either semi-axis is not strictly positive.
  pub fn is_degenerate(&self) -> bool {
    self.radius_x <= 0 || self.radius_y <= 0
  }

  /// Value of the ellipse quadratic form at `point`: `< 1` inside, `1` on the boundary.
  /// `None` for degenerate ellipses.
  pub fn level(&self, point: P2) -> Option<f64> {
    if self.is_degenerate() { return None; }
    let local = self.to_local(point - self.center());
    Some(
      (local.x / self.radius_x as f64).powi(2) +
      (local.y / self.radius_y as f64).powi(2)
    )
  }

  /// Whether `point` lies inside or on the boundary.
  ///
  /// A degenerate ellipse contains its center and nothing else.
  pub fn contains_point(&self, point: P2) -> bool {
    match self.level(point) {
      Some(level) => level <= 1.0,
      None => point == self.center()
    }
  }

  /// Tight axis-aligned bounding box of the rotated ellipse.
  pub fn bounding_box(&self) -> Box2D<f64, PixelSpace> {
    let (sin, cos) = self.angle().sin_cos();
    let rx2 = (self.radius_x as f64).powi(2);
    let ry2 = (self.radius_y as f64).powi(2);
    // both terms are non-negative for every angle
    let half = V2::new(
      (rx2 * cos * cos + ry2 * sin * sin).sqrt(),
      (rx2 * sin * sin + ry2 * cos * cos).sqrt()
    );
    Box2D::new(self.center() - half, self.center() + half)
  }

  /// Point of the boundary at parameter `t` (radians, measured in the ellipse frame).
  pub fn at(&self, t: f64) -> P2 {
    let local = V2::new(
      self.radius_x as f64 * t.cos(),
      self.radius_y as f64 * t.sin()
    );
    self.center() + rotation(self.angle()).transform_vector(local)
  }

  /// Offset from the center, expressed along the ellipse's own axes.
  fn to_local(&self, offset: V2<f64, PixelSpace>) -> V2<f64, PixelSpace> {
    rotation(-self.angle()).transform_vector(offset)
  }

  /// All integer pixels covered by the ellipse, row-major.
  pub fn pixels(&self) -> impl Iterator<Item = Pixel> + Clone {
    let bounds = self.bounding_box();
    self.pixels_in(bounds.min.ceil(), bounds.max.floor())
  }

  /// Covered pixels clipped to an image of `size`.
  pub fn pixels_within(&self, size: Size2D<u32, PixelSpace>) -> impl Iterator<Item = Pixel> + Clone {
    let bounds = self.bounding_box();
    let limit = size.to_f64().to_vector() - V2::splat(1.0);
    self.pixels_in(
      bounds.min.ceil().max(Point2D::origin()),
      bounds.max.floor().min(limit.to_point())
    )
  }

  fn pixels_in(&self, min: P2, max: P2) -> impl Iterator<Item = Pixel> + Clone {
    let ellipse = *self;
    // bounds of ellipses near the i32 limits reach past them
    let limits = |p: P2| p.max(P2::splat(i32::MIN as f64)).min(P2::splat(i32::MAX as f64)).cast::<i32>();
    let (min, max) = (limits(min), limits(max));
    itertools::iproduct!(min.y..=max.y, min.x..=max.x)
      .map(|(y, x)| Pixel::new(x, y))
      .filter(move |pixel| ellipse.contains_point(pixel.to_f64()))
  }

  /// Covered pixels together with the (clamped) ellipse color.
  pub fn rasterize(&self) -> impl Iterator<Item = (Pixel, Rgba<u8>)> + Clone {
    let color = self.color_clamped();
    self.pixels().map(move |pixel| (pixel, color))
  }

  /// Color with alpha, rejecting channels outside `[0, 255]`.
  pub fn color(&self) -> Result<Rgba<u8>> {
    let mut color = [0u8; 4];
    for (out, (channel, value)) in color.iter_mut().zip(self.channels()) {
      *out = value.to_u8()
        .ok_or(Error::InvalidColorChannel { channel, value })?;
    }
    Ok(Rgba(color))
  }

  /// Color with alpha, channels clamped into `[0, 255]`.
  pub fn color_clamped(&self) -> Rgba<u8> {
    let mut color = [0u8; 4];
    color.iter_mut()
      .zip(self.channels())
      .for_each(|(out, (_, value))| *out = num_traits::clamp(value, 0, 255) as u8);
    Rgba(color)
  }

  fn channels(&self) -> [(&'static str, i32); 4] {
    [("r", self.r), ("g", self.g), ("b", self.b), ("alpha", self.alpha)]
  }

  /// Rejects degenerate radii and out of range color channels.
  pub fn validate(&self) -> Result<()> {
    if self.is_degenerate() {
      return Err(Error::DegenerateGeometry {
        radius_x: self.radius_x,
        radius_y: self.radius_y
      });
    }
    self.color().map(|_| ())
  }
}

fn rotation(radians: f64) -> Rotation2D<f64, PixelSpace, PixelSpace> {
  Rotation2D::radians(radians)
}
