use {
  super::{first_best, hill_climb, SearchConfig},
  crate::{
    drawing::{render, Draw},
    error::{ensure_same_dimensions, Result},
    geometry::{Centiradians, Ellipse},
    metric
  },
  image::RgbaImage,
  rand::prelude::*,
  rand_pcg::Pcg64,
  rayon::prelude::*,
  tracing::{debug, info}
};

/// One committed ellipse.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct Layer {
  pub index: usize,
  pub ellipse: Ellipse,
  pub improvement: f64,
  /// Distance between canvas and reference after the commit.
  pub distance: f64
}

#[derive(Clone, Debug)]
pub struct Approximation {
  /// In compositing order.
  pub ellipses: Vec<Ellipse>,
  pub canvas: RgbaImage,
  pub distance: f64
}

/// Layer-by-layer greedy composition of ellipses approximating `reference`.
///
/// ```no_run
/// # use ellipse_art::{error::Result, solver::{GreedySearch, SearchConfig}};
/// # fn main() -> Result<()> {
/// let reference = image::RgbaImage::new(256, 256);
/// let approximation = GreedySearch::new(&reference, SearchConfig::default())?.run()?;
/// println!("{} ellipses, distance {}", approximation.ellipses.len(), approximation.distance);
/// # Ok(())
/// # }
/// ```
pub struct GreedySearch<'a> {
  reference: &'a RgbaImage,
  canvas: RgbaImage,
  config: SearchConfig,
  rng: Pcg64,
  ellipses: Vec<Ellipse>,
  distance: f64,
  converged: bool
}

impl<'a> GreedySearch<'a> {
  /// Starts from a blank canvas filled with `config.background`.
  pub fn new(reference: &'a RgbaImage, config: SearchConfig) -> Result<Self> {
    Self::resume(reference, vec![], config)
  }

  /// Continues a previous run. The canvas is regenerated from `ellipses`, which stay the
  /// first layers of the result; `max_layers` counts them too.
  pub fn resume(reference: &'a RgbaImage, ellipses: Vec<Ellipse>, config: SearchConfig) -> Result<Self> {
    config.validate()?;
    ensure_same_dimensions((config.image_x, config.image_y), reference.dimensions())?;
    let canvas = render(&ellipses, config.image_x, config.image_y, config.background);
    let distance = metric::distance(&canvas, reference)?;
    Ok(Self {
      reference,
      canvas,
      rng: Pcg64::seed_from_u64(config.rng_seed),
      config,
      ellipses,
      distance,
      converged: false
    })
  }

  pub fn canvas(&self) -> &RgbaImage { &self.canvas }
  pub fn ellipses(&self) -> &[Ellipse] { &self.ellipses }
  pub fn distance(&self) -> f64 { self.distance }
  pub fn config(&self) -> &SearchConfig { &self.config }

  /// Adds one layer. `None` once no candidate improves by more than
  /// `min_improvement`, or when `max_layers` is reached.
  pub fn step(&mut self) -> Result<Option<Layer>> {
    if self.converged || self.ellipses.len() >= self.config.max_layers {
      return Ok(None);
    }
    let seeds = (0..self.config.seeds)
      .map(|_| self.seed())
      .collect::<Vec<_>>();

    // seeds only read the pre-layer canvas; results keep seed order
    let (canvas, reference, config) = (&self.canvas, self.reference, &self.config);
    let optima = seeds.into_par_iter()
      .map(|seed| hill_climb(canvas, reference, seed, &config.window, config.iteration_cap))
      .collect::<Result<Vec<_>>>()?;
    optima.iter().enumerate().for_each(|(i, optimum)| debug!(
      seed = i, improvement = optimum.improvement, ellipse = ?optimum.candidate, "local optimum"
    ));

    match first_best(optima) {
      Some(best) if best.improvement > self.config.min_improvement => {
        best.candidate.draw(&mut self.canvas);
        self.distance -= best.improvement;
        self.ellipses.push(best.candidate);
        let layer = Layer {
          index: self.ellipses.len() - 1,
          ellipse: best.candidate,
          improvement: best.improvement,
          distance: self.distance
        };
        info!(
          layer = layer.index, improvement = layer.improvement, distance = layer.distance,
          ellipse = ?layer.ellipse, "committed"
        );
        Ok(Some(layer))
      },
      best => {
        info!(
          layers = self.ellipses.len(), best = ?best.map(|b| b.improvement),
          min_improvement = self.config.min_improvement, "converged"
        );
        self.converged = true;
        Ok(None)
      }
    }
  }

  /// Lazily runs [`GreedySearch::step`] until it yields `None`.
  pub fn layers(&mut self) -> Layers<'_, 'a> {
    Layers { search: self }
  }

  pub fn run(mut self) -> Result<Approximation> {
    for layer in self.layers() {
      layer?;
    }
    Ok(self.into_approximation())
  }

  pub fn into_approximation(self) -> Approximation {
    Approximation {
      ellipses: self.ellipses,
      canvas: self.canvas,
      distance: self.distance
    }
  }

  pub(super) fn seed(&mut self) -> Ellipse {
    let (config, rng) = (&self.config, &mut self.rng);
    let center_x = rng.gen_range(0..config.image_x as i32);
    let center_y = rng.gen_range(0..config.image_y as i32);
    let radius_x = rng.gen_range(config.seed_radius.clone());
    let radius_y = rng.gen_range(config.seed_radius.clone());
    let rotation = Centiradians(rng.gen_range(0..Centiradians::full_turn().0));
    let alpha = rng.gen_range(config.seed_alpha.clone());
    let [r, g, b, _] = match config.sample_seed_color {
      true => self.reference.get_pixel(center_x as u32, center_y as u32).0,
      false => rng.gen()
    };
    Ellipse {
      center_x, center_y,
      radius_x, radius_y,
      rotation,
      r: r as i32, g: g as i32, b: b as i32,
      alpha
    }
  }
}

pub struct Layers<'s, 'a> {
  search: &'s mut GreedySearch<'a>
}

impl Iterator for Layers<'_, '_> {
  type Item = Result<Layer>;

  fn next(&mut self) -> Option<Self::Item> {
    self.search.step().transpose()
  }
}
