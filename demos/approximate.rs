/// Approximate an image with ellipses, write the result next to it.
///
/// cargo run --release --example approximate -- in.png [layers]
/// Log verbosity follows `RUST_LOG`, e.g. `RUST_LOG=ellipse_art=debug`.

use {
  ellipse_art::{
    drawing::render,
    solver::{GreedySearch, SearchConfig}
  },
  anyhow::{Context, Result},
  image::{imageops::FilterType, Rgba},
  tracing_subscriber::EnvFilter
};

fn main() -> Result<()> {
  tracing_subscriber::fmt()
    .with_env_filter(EnvFilter::try_from_default_env()
      .unwrap_or_else(|_| EnvFilter::new("info")))
    .init();

  let mut args = std::env::args().skip(1);
  let input = args.next().context("usage: approximate <image> [layers]")?;
  let max_layers = match args.next() {
    Some(layers) => layers.parse().context("layers must be a positive integer")?,
    None => 100
  };

  let config = SearchConfig {
    max_layers,
    background: Rgba([0, 0, 0, 255]),
    ..Default::default()
  };
  let reference = image::open(&input)
    .with_context(|| format!("failed to open {}", input))?
    .resize_exact(config.image_x, config.image_y, FilterType::Triangle)
    .to_rgba8();

  let t0 = std::time::Instant::now();
  let approximation = GreedySearch::new(&reference, config.clone())?.run()?;
  tracing::info!(
    ellipses = approximation.ellipses.len(),
    distance = approximation.distance,
    ms = t0.elapsed().as_millis() as u64,
    "done"
  );

  let path = "out.png";
  render(&approximation.ellipses, config.image_x, config.image_y, config.background)
    .save(path)?;
  for ellipse in &approximation.ellipses {
    println!("{:?}", ellipse);
  }
  Ok(())
}
