//! Chart orchestration: configuration, stage-driven building and labels.

pub mod annotation;
mod chart_builder;
mod plot_config;

pub use chart_builder::{ChartBuilder, ChartStage};
pub use plot_config::{ChartPalette, OverlayFlags, PlotConfig, TickConfig};
