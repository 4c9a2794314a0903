use serde::{Deserialize, Serialize};

use crate::core::{
    BandStyle, DayAxis, OutOfRangePolicy, PlotArea, SamplingMode, ScaleKind, ValueAxis,
};
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

/// Which curves a chart draws on top of its background.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct OverlayFlags {
    #[serde(default = "default_true")]
    pub price: bool,
    #[serde(default)]
    pub trend: bool,
    #[serde(default)]
    pub stock_to_flow: bool,
}

impl Default for OverlayFlags {
    fn default() -> Self {
        Self {
            price: true,
            trend: false,
            stock_to_flow: false,
        }
    }
}

impl OverlayFlags {
    #[must_use]
    pub fn all() -> Self {
        Self {
            price: true,
            trend: true,
            stock_to_flow: true,
        }
    }

    #[must_use]
    pub fn none() -> Self {
        Self {
            price: false,
            trend: false,
            stock_to_flow: false,
        }
    }
}

/// Colors used for every chart element.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ChartPalette {
    pub background: Color,
    pub border: Color,
    pub grid: Color,
    pub price: Color,
    pub stock_to_flow: Color,
    pub text: Color,
}

impl Default for ChartPalette {
    fn default() -> Self {
        Self {
            background: Color::WHITE,
            border: Color::BLACK,
            grid: Color::rgba8(204, 204, 204, 255),
            price: Color::BLACK,
            stock_to_flow: Color::rgba8(255, 0, 0, 255),
            text: Color::rgba8(64, 64, 64, 255),
        }
    }
}

impl ChartPalette {
    fn validate(self) -> ChartResult<()> {
        for (name, color) in [
            ("background", self.background),
            ("border", self.border),
            ("grid", self.grid),
            ("price", self.price),
            ("stock_to_flow", self.stock_to_flow),
            ("text", self.text),
        ] {
            color
                .validate()
                .map_err(|err| ChartError::InvalidConfig(format!("palette `{name}`: {err}")))?;
        }
        Ok(())
    }
}

/// Gridline and label placement.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TickConfig {
    /// Additive step on a linear axis, multiplicative factor on a log axis.
    #[serde(default)]
    pub price_step: Option<f64>,
    #[serde(default)]
    pub year_ticks: bool,
    #[serde(default = "default_true")]
    pub labels: bool,
    #[serde(default = "default_font_size_px")]
    pub font_size_px: f64,
}

impl Default for TickConfig {
    fn default() -> Self {
        Self {
            price_step: None,
            year_ticks: false,
            labels: true,
            font_size_px: default_font_size_px(),
        }
    }
}

/// Immutable description of one chart render.
///
/// `x_max` is exclusive: the last column covers days up to `x_max - 1`.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct PlotConfig {
    pub width: u32,
    pub height: u32,
    #[serde(default)]
    pub padding: u32,
    pub x_min: i64,
    pub x_max: i64,
    pub y_min: f64,
    pub y_max: f64,
    #[serde(default)]
    pub scale: ScaleKind,
    #[serde(default)]
    pub overlays: OverlayFlags,
    #[serde(default)]
    pub sampling: SamplingMode,
    #[serde(default)]
    pub out_of_range: OutOfRangePolicy,
    #[serde(default)]
    pub palette: ChartPalette,
    #[serde(default)]
    pub band: BandStyle,
    #[serde(default)]
    pub ticks: TickConfig,
    #[serde(default = "default_line_width")]
    pub line_width: f64,
    #[serde(default)]
    pub watermark: Option<String>,
}

impl PlotConfig {
    #[must_use]
    pub fn new(width: u32, height: u32, x_min: i64, x_max: i64, y_min: f64, y_max: f64) -> Self {
        Self {
            width,
            height,
            padding: 0,
            x_min,
            x_max,
            y_min,
            y_max,
            scale: ScaleKind::default(),
            overlays: OverlayFlags::default(),
            sampling: SamplingMode::default(),
            out_of_range: OutOfRangePolicy::default(),
            palette: ChartPalette::default(),
            band: BandStyle::default(),
            ticks: TickConfig::default(),
            line_width: default_line_width(),
            watermark: None,
        }
    }

    #[must_use]
    pub fn with_padding(mut self, padding: u32) -> Self {
        self.padding = padding;
        self
    }

    #[must_use]
    pub fn with_scale(mut self, scale: ScaleKind) -> Self {
        self.scale = scale;
        self
    }

    #[must_use]
    pub fn with_overlays(mut self, overlays: OverlayFlags) -> Self {
        self.overlays = overlays;
        self
    }

    #[must_use]
    pub fn with_sampling(mut self, sampling: SamplingMode) -> Self {
        self.sampling = sampling;
        self
    }

    #[must_use]
    pub fn with_out_of_range(mut self, policy: OutOfRangePolicy) -> Self {
        self.out_of_range = policy;
        self
    }

    #[must_use]
    pub fn with_palette(mut self, palette: ChartPalette) -> Self {
        self.palette = palette;
        self
    }

    #[must_use]
    pub fn with_band(mut self, band: BandStyle) -> Self {
        self.band = band;
        self
    }

    #[must_use]
    pub fn with_ticks(mut self, ticks: TickConfig) -> Self {
        self.ticks = ticks;
        self
    }

    #[must_use]
    pub fn with_line_width(mut self, line_width: f64) -> Self {
        self.line_width = line_width;
        self
    }

    #[must_use]
    pub fn with_watermark(mut self, watermark: impl Into<String>) -> Self {
        self.watermark = Some(watermark.into());
        self
    }

    #[must_use]
    pub fn area(&self) -> PlotArea {
        PlotArea::new(self.width, self.height, self.padding)
    }

    pub fn day_axis(&self) -> ChartResult<DayAxis> {
        DayAxis::new(self.x_min, self.x_max, self.area())
    }

    pub fn value_axis(&self) -> ChartResult<ValueAxis> {
        Ok(ValueAxis::new(self.scale, self.y_min, self.y_max, self.area())?
            .with_policy(self.out_of_range))
    }

    /// Checks every invariant a render relies on.
    pub fn validate(&self) -> ChartResult<()> {
        if !self.area().is_valid() {
            return Err(ChartError::InvalidConfig(format!(
                "size {}x{} must fit i32 pixels and exceed twice the padding {}",
                self.width, self.height, self.padding
            )));
        }
        if self.x_min >= self.x_max {
            return Err(ChartError::InvalidConfig(format!(
                "x range must satisfy x_min < x_max, got [{}, {})",
                self.x_min, self.x_max
            )));
        }
        if !self.y_min.is_finite() || !self.y_max.is_finite() || self.y_min >= self.y_max {
            return Err(ChartError::InvalidConfig(format!(
                "y range must be finite with y_min < y_max, got [{}, {}]",
                self.y_min, self.y_max
            )));
        }
        if self.scale == ScaleKind::Logarithmic && self.y_min <= 0.0 {
            return Err(ChartError::DegenerateRange {
                min: self.y_min,
                max: self.y_max,
            });
        }
        if !self.line_width.is_finite() || self.line_width <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "line width must be finite and > 0".to_owned(),
            ));
        }
        if !self.ticks.font_size_px.is_finite() || self.ticks.font_size_px <= 0.0 {
            return Err(ChartError::InvalidConfig(
                "tick font size must be finite and > 0".to_owned(),
            ));
        }
        if let Some(step) = self.ticks.price_step {
            let advances = match self.scale {
                ScaleKind::Linear => step.is_finite() && step > 0.0,
                ScaleKind::Logarithmic => step.is_finite() && step > 1.0,
            };
            if !advances {
                return Err(ChartError::InvalidConfig(format!(
                    "price tick step {step} cannot advance a {} axis",
                    self.scale
                )));
            }
        }
        if self.watermark.as_deref().is_some_and(str::is_empty) {
            return Err(ChartError::InvalidConfig(
                "watermark must not be empty".to_owned(),
            ));
        }
        self.band.validate()?;
        self.palette.validate()
    }

    /// Serializes config to pretty JSON for debug/config files.
    pub fn to_json_pretty(&self) -> ChartResult<String> {
        serde_json::to_string_pretty(self)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to serialize config: {e}")))
    }

    /// Deserializes config from JSON.
    ///
    /// An unrecognized `scale` tag fails with [`ChartError::InvalidScale`].
    pub fn from_json_str(input: &str) -> ChartResult<Self> {
        let raw: serde_json::Value = serde_json::from_str(input)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))?;
        if let Some(tag) = raw.get("scale").and_then(serde_json::Value::as_str) {
            tag.parse::<ScaleKind>()?;
        }
        serde_json::from_value(raw)
            .map_err(|e| ChartError::InvalidConfig(format!("failed to parse config: {e}")))
    }
}

fn default_true() -> bool {
    true
}

fn default_font_size_px() -> f64 {
    11.0
}

fn default_line_width() -> f64 {
    1.0
}
