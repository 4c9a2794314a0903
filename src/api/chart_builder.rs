use serde::{Deserialize, Serialize};
use tracing::{debug, trace, warn};

use crate::core::{
    DayAxis, PixelPoint, PriceSeries, ValueAxis, paint_band, rasterize, sample_columns, trend,
    valuation_model,
};
use crate::error::{ChartError, ChartResult};
use crate::render::{BandPrimitive, Color, LinePrimitive, RectPrimitive, RenderFrame, Renderer};

use super::PlotConfig;
use super::annotation::{price_tick_label, watermark_label, year_tick_label};

/// Progress of one chart render. Stages only move forward.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub enum ChartStage {
    Configured,
    BackgroundPainted,
    OverlaysPainted,
    PricePainted,
    Finalized,
}

/// Drives the axis mappers, sampler and rasterizer for one chart.
///
/// The builder owns the in-progress draw list for the whole render and
/// hands it off by value at [`ChartBuilder::finalize`]. Dropping a builder
/// early discards the partial frame.
#[derive(Debug)]
pub struct ChartBuilder {
    config: PlotConfig,
    day_axis: DayAxis,
    value_axis: ValueAxis,
    stage: ChartStage,
    frame: RenderFrame,
}

impl ChartBuilder {
    /// Validates `config` and prepares an empty frame.
    pub fn new(config: PlotConfig) -> ChartResult<Self> {
        config.validate()?;
        let day_axis = config.day_axis()?;
        let value_axis = config.value_axis()?;
        debug!(
            width = config.width,
            height = config.height,
            padding = config.padding,
            scale = %config.scale,
            "chart configured"
        );
        Ok(Self {
            frame: RenderFrame::new(config.area()),
            config,
            day_axis,
            value_axis,
            stage: ChartStage::Configured,
        })
    }

    /// Runs every stage and returns the finished frame.
    pub fn build(config: PlotConfig, series: &PriceSeries) -> ChartResult<RenderFrame> {
        let mut builder = Self::new(config)?;
        builder.paint_background()?;
        builder.paint_overlays()?;
        builder.paint_price(series)?;
        builder.finalize()
    }

    /// Builds the frame and hands it to `renderer`.
    pub fn render<R: Renderer>(
        config: PlotConfig,
        series: &PriceSeries,
        renderer: &mut R,
    ) -> ChartResult<RenderFrame> {
        let frame = Self::build(config, series)?;
        renderer.render(&frame)?;
        Ok(frame)
    }

    #[must_use]
    pub fn stage(&self) -> ChartStage {
        self.stage
    }

    #[must_use]
    pub fn config(&self) -> &PlotConfig {
        &self.config
    }

    #[must_use]
    pub fn day_axis(&self) -> DayAxis {
        self.day_axis
    }

    #[must_use]
    pub fn value_axis(&self) -> ValueAxis {
        self.value_axis
    }

    #[must_use]
    pub fn frame(&self) -> &RenderFrame {
        &self.frame
    }

    /// Fills the canvas and outlines the plot area.
    pub fn paint_background(&mut self) -> ChartResult<()> {
        self.enter(ChartStage::BackgroundPainted, "paint_background")?;
        let area = self.config.area();
        let palette = self.config.palette;

        self.frame.push_rect(RectPrimitive::new(
            0.0,
            0.0,
            f64::from(area.width),
            f64::from(area.height),
            palette.background,
        ));
        self.frame.push_rect(
            RectPrimitive::new(
                f64::from(area.left()),
                f64::from(area.top()),
                f64::from(area.inner_width()),
                f64::from(area.inner_height()),
                Color::TRANSPARENT,
            )
            .with_border(1.0, palette.border),
        );
        Ok(())
    }

    /// Paints the trend band, gridlines and the stock-to-flow curve.
    pub fn paint_overlays(&mut self) -> ChartResult<()> {
        self.enter(ChartStage::OverlaysPainted, "paint_overlays")?;
        let overlays = self.config.overlays;

        if overlays.trend {
            self.paint_trend_band();
        }
        self.paint_ticks()?;
        if overlays.stock_to_flow {
            let points = self.stock_to_flow_points();
            self.push_curve(&points, self.config.palette.stock_to_flow, "stock_to_flow");
        }
        Ok(())
    }

    /// Paints the observed price polyline when the price overlay is enabled.
    pub fn paint_price(&mut self, series: &PriceSeries) -> ChartResult<()> {
        self.enter(ChartStage::PricePainted, "paint_price")?;
        if !self.config.overlays.price {
            return Ok(());
        }
        if series.is_empty() {
            warn!("price overlay enabled but the series is empty");
        }
        let points = self.price_points(series);
        self.push_curve(&points, self.config.palette.price, "price");
        Ok(())
    }

    /// Adds the watermark and releases the finished frame.
    pub fn finalize(mut self) -> ChartResult<RenderFrame> {
        self.enter(ChartStage::Finalized, "finalize")?;
        if let Some(text) = self.config.watermark.as_deref() {
            self.frame.push_text(watermark_label(
                text,
                self.config.area(),
                self.config.ticks.font_size_px,
                self.config.palette.text,
            ));
        }
        self.frame.validate()?;
        let stats = self.frame.stats();
        debug!(
            rects = stats.rects,
            segments = stats.segments,
            bands = stats.bands,
            texts = stats.texts,
            "chart finalized"
        );
        Ok(self.frame)
    }

    /// Per-column price positions from the sampled series.
    #[must_use]
    pub fn price_points(&self, series: &PriceSeries) -> Vec<PixelPoint> {
        sample_columns(series, self.day_axis, self.config.sampling)
            .into_iter()
            .map(|(column, price)| PixelPoint::new(column, self.value_axis.map(price)))
            .collect()
    }

    /// Per-column positions of the trend curve.
    #[must_use]
    pub fn trend_points(&self) -> Vec<PixelPoint> {
        self.function_points(trend)
    }

    /// Per-column positions of the stock-to-flow valuation curve.
    #[must_use]
    pub fn stock_to_flow_points(&self) -> Vec<PixelPoint> {
        self.function_points(|day| Some(valuation_model(day)))
    }

    fn function_points(&self, curve: impl Fn(i64) -> Option<f64>) -> Vec<PixelPoint> {
        self.config
            .area()
            .columns()
            .map(|column| {
                let day = self.day_axis.column_to_day(column);
                PixelPoint::new(column, self.value_axis.map(curve(day)))
            })
            .collect()
    }

    fn paint_trend_band(&mut self) {
        let area = self.config.area();
        let rows = (area.top(), area.bottom());
        let mut bands = 0usize;
        for point in self.trend_points() {
            let Some(center_y) = point.y else {
                continue;
            };
            self.frame.push_band(BandPrimitive {
                x: point.x,
                center_y,
                pixels: paint_band(center_y, self.config.band, rows),
            });
            bands += 1;
        }
        debug!(bands, "trend band painted");
    }

    fn paint_ticks(&mut self) -> ChartResult<()> {
        let area = self.config.area();
        let ticks = self.config.ticks;
        let palette = self.config.palette;
        let (left, right) = (f64::from(area.left()), f64::from(area.right()));
        let (top, bottom) = (f64::from(area.top()), f64::from(area.bottom()));

        if let Some(step) = ticks.price_step {
            for tick in self.value_axis.ticks(step)? {
                let y = f64::from(tick.position);
                self.frame
                    .push_line(LinePrimitive::new(left, y, right, y, 1.0, palette.grid));
                if ticks.labels {
                    self.frame.push_text(price_tick_label(
                        tick,
                        area,
                        ticks.font_size_px,
                        palette.text,
                    ));
                }
            }
        }

        if ticks.year_ticks {
            for (year, tick) in self.day_axis.year_ticks() {
                let x = f64::from(tick.position);
                self.frame
                    .push_line(LinePrimitive::new(x, top, x, bottom, 1.0, palette.grid));
                if ticks.labels {
                    self.frame.push_text(year_tick_label(
                        year,
                        tick,
                        area,
                        ticks.font_size_px,
                        palette.text,
                    ));
                }
            }
        }
        Ok(())
    }

    fn push_curve(&mut self, points: &[PixelPoint], color: Color, curve: &'static str) {
        let segments = rasterize(points, color);
        let undefined = points.iter().filter(|point| !point.is_defined()).count();
        trace!(curve, columns = points.len(), undefined, "curve sampled");
        debug!(curve, segments = segments.len(), "curve rasterized");
        for segment in segments {
            self.frame
                .push_line(LinePrimitive::from_segment(segment, self.config.line_width));
        }
    }

    fn enter(&mut self, next: ChartStage, operation: &'static str) -> ChartResult<()> {
        let skips_background =
            self.stage == ChartStage::Configured && next != ChartStage::BackgroundPainted;
        if next <= self.stage || skips_background {
            return Err(ChartError::InvalidStage {
                stage: self.stage,
                operation,
            });
        }
        trace!(from = ?self.stage, to = ?next, "chart stage transition");
        self.stage = next;
        Ok(())
    }
}
