//! Greedy, locally-improving search over ellipse parameter space.
//!
//! Each layer seeds random ellipses, hill-climbs every seed through its discrete
//! neighborhood ([`NeighborWindow::neighbors`]) and commits the single best local optimum
//! to the canvas.

use {
  crate::error::{Error, Result},
  image::Rgba,
  std::ops::RangeInclusive
};

pub mod neighbors;
pub use neighbors::NeighborWindow;

pub mod hill_climb;
pub use hill_climb::hill_climb;

pub mod greedy;
pub use greedy::{Approximation, GreedySearch, Layer, Layers};


/// A candidate together with the distance reduction it achieves.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Scored<T> {
  pub improvement: f64,
  pub candidate: T
}

impl<T> Scored<T> {
  /// Strictly greater improvement. A non-finite score never beats anything.
  pub fn beats(&self, other: &Self) -> bool {
    self.improvement.is_finite() &&
      (other.improvement.is_nan() || self.improvement > other.improvement)
  }
}

/// First candidate with the greatest finite improvement.
pub fn first_best<T>(candidates: impl IntoIterator<Item = Scored<T>>) -> Option<Scored<T>> {
  candidates.into_iter().fold(None, |best, next| match best {
    Some(best) if !next.beats(&best) => Some(best),
    _ if next.improvement.is_finite() => Some(next),
    best => best
  })
}

#[derive(Clone, Debug)]
pub struct SearchConfig {
  pub image_x: u32,
  pub image_y: u32,
  pub window: NeighborWindow,
  /// Random starting ellipses per layer.
  pub seeds: usize,
  pub max_layers: usize,
  /// Hill-climb moves per seed.
  pub iteration_cap: usize,
  /// A layer is committed only if it reduces the distance by strictly more than this.
  pub min_improvement: f64,
  pub rng_seed: u64,
  /// Color of the blank canvas.
  pub background: Rgba<u8>,
  pub seed_radius: RangeInclusive<i32>,
  pub seed_alpha: RangeInclusive<i32>,
  /// Seed color is taken from the reference pixel under the seed center, instead of
  /// drawn at random.
  pub sample_seed_color: bool
}

impl Default for SearchConfig {
  fn default() -> Self {
    Self {
      image_x: 256,
      image_y: 256,
      window: NeighborWindow::default(),
      seeds: 64,
      max_layers: 128,
      iteration_cap: 64,
      min_improvement: 0.0,
      rng_seed: 0,
      background: Rgba([0, 0, 0, 0]),
      seed_radius: 1..=32,
      seed_alpha: 1..=255,
      sample_seed_color: true
    }}}

impl SearchConfig {
  pub fn validate(&self) -> Result<()> {
    let invalid = |msg: &str| -> Result<()> { Err(Error::InvalidConfig(msg.into())) };
    if self.image_x == 0 || self.image_y == 0 || self.image_x > i32::MAX as u32 || self.image_y > i32::MAX as u32 {
      return invalid("image dimensions must be positive and fit in i32");
    }
    if self.seeds == 0 {
      return invalid("at least one seed per layer is required");
    }
    if self.seed_radius.is_empty() || *self.seed_radius.start() < 1 {
      return invalid("seed radius range must be non-empty and start at 1 or above");
    }
    if self.seed_alpha.is_empty() || *self.seed_alpha.start() < 0 || *self.seed_alpha.end() > 255 {
      return invalid("seed alpha range must be a non-empty subrange of [0, 255]");
    }
    if self.min_improvement.is_nan() {
      return invalid("minimum improvement must be a number");
    }
    self.window.validate()
  }
}
