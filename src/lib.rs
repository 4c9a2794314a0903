//! btc-charts: Bitcoin price chart rasterization.
//!
//! The crate maps a daily price series onto pixel columns under a linear or
//! logarithmic price axis, overlays an illustrative growth trend and a
//! stock-to-flow valuation curve, and emits an ordered draw list that a
//! [`render::Renderer`] turns into an image.

pub mod api;
pub mod core;
pub mod data;
pub mod error;
pub mod render;
pub mod telemetry;

pub use api::{ChartBuilder, PlotConfig};
pub use error::{ChartError, ChartResult};
