//! Approximates a raster image by greedily composing colored, rotated ellipses.
//!
//! The crate is split into [`geometry`] (the [`Ellipse`](geometry::Ellipse) hypothesis,
//! containment, bounding boxes, rasterization), [`drawing`] (compositing ellipses into an
//! `RgbaImage`), [`metric`] (squared-error image distance) and [`solver`] (neighbor
//! generation, hill-climbing and the layer-by-layer greedy driver).
//!
//! # Basic usage
//! ```no_run
//! # use {
//! #   ellipse_art::{
//! #     solver::{GreedySearch, SearchConfig},
//! #     drawing::render
//! #   },
//! #   image::Rgba
//! # };
//! # fn main() -> anyhow::Result<()> {
//! // The reference image must match the configured dimensions.
//! let reference = image::open("in.png")?
//!   .resize_exact(256, 256, image::imageops::FilterType::Triangle)
//!   .to_rgba8();
//! let config = SearchConfig {
//!   max_layers: 200,
//!   background: Rgba([0, 0, 0, 255]),
//!   ..Default::default()
//! };
//!
//! let mut search = GreedySearch::new(&reference, config)?;
//! for layer in search.layers() {
//!   let layer = layer?;
//!   println!("#{} distance = {}", layer.index, layer.distance);
//! }
//!
//! // The ellipse list alone is enough to regenerate the canvas.
//! let ellipses = search.ellipses().to_vec();
//! render(&ellipses, 256, 256, Rgba([0, 0, 0, 255])).save("out.png")?;
//! # Ok(())
//! # }
//! ```
//!
//! # Parallelism
//! Within a layer, every seed is hill-climbed independently against the same read-only
//! canvas snapshot, on the `rayon` thread pool. The canvas is only written once per layer,
//! after all seeds report.

pub mod error;
pub mod geometry;
pub mod drawing;
pub mod metric;
pub mod solver;
