use {
  crate::{
    error::{Error, Result},
    geometry::{Centiradians, Ellipse}
  },
  std::ops::RangeInclusive
};

pub const MIN_RADIUS: i32 = 1;
/// Widest accepted window for any field.
pub const MAX_WINDOW: i32 = 255;

/// Per-field `±` ranges of the discrete neighborhood. A window of `0` pins the field.
#[derive(Copy, Clone, Debug, PartialEq, Eq)]
pub struct NeighborWindow {
  pub center_x: i32,
  pub center_y: i32,
  pub radius_x: i32,
  pub radius_y: i32,
  pub rotation: i32,
  pub r: i32,
  pub g: i32,
  pub b: i32,
  pub alpha: i32
}

impl Default for NeighborWindow {
  fn default() -> Self { Self::uniform(1) }
}

impl NeighborWindow {
  pub fn uniform(window: i32) -> Self {
    Self {
      center_x: window, center_y: window,
      radius_x: window, radius_y: window,
      rotation: window,
      r: window, g: window, b: window, alpha: window
    }
  }

  fn fields(&self) -> [i32; 9] {
    [
      self.center_x, self.center_y, self.radius_x, self.radius_y, self.rotation,
      self.r, self.g, self.b, self.alpha
    ]
  }

  /// Neighborhood size before clamping.
  pub fn size(&self) -> usize {
    self.fields().iter()
      .map(|w| 2 * (*w).max(0) as usize + 1)
      .fold(1usize, usize::saturating_mul)
  }

  pub fn validate(&self) -> Result<()> {
    match self.fields().iter().all(|w| (0..=MAX_WINDOW).contains(w)) {
      true => Ok(()),
      false => Err(Error::InvalidConfig(format!("neighbor windows must be within [0, {}]", MAX_WINDOW)))
    }
  }

  /// Cartesian product of every field varied within its window, the ellipse itself
  /// included. Radii are clamped to at least [`MIN_RADIUS`], color and alpha to
  /// `[0, 255]`; clamping shrinks ranges and never repeats a candidate.
  ///
  /// Lazy, deterministic, and restartable through `Clone`.
  pub fn neighbors(&self, ellipse: &Ellipse) -> impl Iterator<Item = Ellipse> + Clone {
    itertools::iproduct!(
      around(ellipse.center_x, self.center_x),
      around(ellipse.center_y, self.center_y),
      radius(ellipse.radius_x, self.radius_x),
      radius(ellipse.radius_y, self.radius_y),
      around(ellipse.rotation.0, self.rotation),
      channel(ellipse.r, self.r),
      channel(ellipse.g, self.g),
      channel(ellipse.b, self.b),
      channel(ellipse.alpha, self.alpha)
    ).map(|(center_x, center_y, radius_x, radius_y, rotation, r, g, b, alpha)| Ellipse {
      center_x, center_y,
      radius_x, radius_y,
      rotation: Centiradians(rotation),
      r, g, b, alpha
    })
  }
}

fn around(value: i32, window: i32) -> RangeInclusive<i32> {
  value.saturating_sub(window)..=value.saturating_add(window)
}

fn radius(value: i32, window: i32) -> RangeInclusive<i32> {
  value.saturating_sub(window).max(MIN_RADIUS)..=value.saturating_add(window).max(MIN_RADIUS)
}

fn channel(value: i32, window: i32) -> RangeInclusive<i32> {
  num_traits::clamp(value.saturating_sub(window), 0, 255)..=
    num_traits::clamp(value.saturating_add(window), 0, 255)
}
