use {
  std::{f64::consts::TAU, ops::Add},
  euclid::Angle
};

/// Conversion factor between [`Centiradians`] and radians.
pub const UNITS_PER_RADIAN: f64 = 100.0;

/// Fixed-point angle, in hundredths of a radian.
///
/// Stored raw: the value may exceed one revolution, it is only reduced by
/// [`Centiradians::normalized_radians`]. Integer steps keep repeated neighbor
/// mutations free of floating point drift.
#[derive(Debug, Default, Copy, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct Centiradians(pub i32);

impl Centiradians {
  /// Rounds to the nearest representable angle.
  pub fn from_radians(radians: f64) -> Self {
    Self((radians * UNITS_PER_RADIAN).round() as i32)
  }

  pub fn to_radians(self) -> f64 {
    self.0 as f64 / UNITS_PER_RADIAN
  }

  /// Equivalent angle in `[0, 2π)`.
  pub fn normalized_radians(self) -> f64 {
    self.to_radians().rem_euclid(TAU)
  }

  pub fn to_angle(self) -> Angle<f64> {
    Angle::radians(self.to_radians())
  }

  /// Number of units in one revolution, rounded.
  pub fn full_turn() -> Self {
    Self::from_radians(TAU)
  }
}

impl From<Angle<f64>> for Centiradians {
  fn from(angle: Angle<f64>) -> Self {
    Self::from_radians(angle.radians)
  }
}

impl Add<i32> for Centiradians {
  type Output = Self;

  fn add(self, rhs: i32) -> Self::Output {
    Self(self.0.saturating_add(rhs))
  }
}
