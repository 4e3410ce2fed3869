use {
  super::{NeighborWindow, Scored},
  crate::{
    error::Result,
    geometry::Ellipse,
    metric::distance_reduction
  },
  image::RgbaImage,
  tracing::trace
};

pub fn score(canvas: &RgbaImage, reference: &RgbaImage, ellipse: Ellipse) -> Result<Scored<Ellipse>> {
  Ok(Scored {
    improvement: distance_reduction(canvas, reference, &ellipse)?,
    candidate: ellipse
  })
}

/// Moves `start` to its best-improving neighbor until none improves on it, or until
/// `iteration_cap` moves were made. Among equally good neighbors the first enumerated wins.
///
/// `canvas` is only read; the returned improvement is relative to it.
pub fn hill_climb(
  canvas: &RgbaImage,
  reference: &RgbaImage,
  start: Ellipse,
  window: &NeighborWindow,
  iteration_cap: usize
) -> Result<Scored<Ellipse>> {
  let mut current = score(canvas, reference, start)?;

  for step in 0..iteration_cap {
    let next = window.neighbors(&current.candidate)
      .try_fold(None::<Scored<Ellipse>>, |best, ellipse| -> Result<_> {
        let next = score(canvas, reference, ellipse)?;
        let incumbent = best.as_ref().unwrap_or(&current);
        Ok(if next.beats(incumbent) { Some(next) } else { best })
      })?;
    match next {
      Some(next) => {
        trace!(step, improvement = next.improvement, ellipse = ?next.candidate, "hill-climb move");
        current = next;
      },
      // local optimum
      None => break
    }
  }
  Ok(current)
}
