//! Crate error type.
//!
//! Every fallible operation of the library returns [`Result`]. Demos and binaries wrap it
//! into `anyhow::Result`.

use thiserror::Error;

#[derive(Debug, Error, Clone, PartialEq)]
pub enum Error {
  /// Two images that must share a shape do not.
  #[error("dimension mismatch: {}x{} vs {}x{}", left.0, left.1, right.0, right.1)]
  DimensionMismatch {
    left: (u32, u32),
    right: (u32, u32)
  },

  #[error("degenerate ellipse: radius_x = {radius_x}, radius_y = {radius_y}")]
  DegenerateGeometry {
    radius_x: i32,
    radius_y: i32
  },

  #[error("color channel `{channel}` out of range [0, 255]: {value}")]
  InvalidColorChannel {
    channel: &'static str,
    value: i32
  },

  #[error("invalid search configuration: {0}")]
  InvalidConfig(String),
}

pub type Result<T> = std::result::Result<T, Error>;

/// Fails with [`Error::DimensionMismatch`] unless both dimensions are equal.
pub fn ensure_same_dimensions(left: (u32, u32), right: (u32, u32)) -> Result<()> {
  if left != right {
    return Err(Error::DimensionMismatch { left, right });
  }
  Ok(())
}
