use serde::{Deserialize, Serialize};

use crate::core::primitives::year_starts_between;
use crate::core::{PlotArea, ScaleKind};
use crate::error::{ChartError, ChartResult};

/// Upper bound on generated ticks, guards against tiny steps.
const MAX_TICKS: usize = 512;

/// What happens to values outside the axis domain.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum OutOfRangePolicy {
    /// Pin to the nearest plot edge.
    #[default]
    Clamp,
    /// Treat as undefined, leaving a gap.
    Clip,
}

/// One tick on an axis.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct AxisTick {
    pub value: f64,
    pub position: i32,
}

/// Maps a price-like value onto a pixel row of the plot area.
///
/// Row 0 is the top of the canvas, so larger values map to smaller rows.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ValueAxis {
    scale: ScaleKind,
    min: f64,
    max: f64,
    scaled_min: f64,
    scaled_max: f64,
    area: PlotArea,
    policy: OutOfRangePolicy,
}

impl ValueAxis {
    pub fn new(scale: ScaleKind, min: f64, max: f64, area: PlotArea) -> ChartResult<Self> {
        if !area.is_valid() {
            return Err(ChartError::InvalidConfig(format!(
                "plot area {}x{} leaves no room inside padding {}",
                area.width, area.height, area.padding
            )));
        }
        if !scale.is_drawable(min) || !scale.is_drawable(max) {
            return Err(ChartError::DegenerateRange { min, max });
        }

        let scaled_min = scale.apply(min);
        let scaled_max = scale.apply(max);
        if !(scaled_min < scaled_max) {
            return Err(ChartError::DegenerateRange { min, max });
        }

        Ok(Self {
            scale,
            min,
            max,
            scaled_min,
            scaled_max,
            area,
            policy: OutOfRangePolicy::default(),
        })
    }

    #[must_use]
    pub fn with_policy(mut self, policy: OutOfRangePolicy) -> Self {
        self.policy = policy;
        self
    }

    #[must_use]
    pub fn scale(self) -> ScaleKind {
        self.scale
    }

    #[must_use]
    pub fn domain(self) -> (f64, f64) {
        (self.min, self.max)
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    /// Maps `value` to a row in `[top, bottom]`, or `None` if not drawable.
    ///
    /// The row is `(H - P) - (s(v) - s(min)) * (H - 2P) / (s(max) - s(min))`,
    /// floored. A result landing on `H - P` is nudged up one row so the
    /// minimum stays on canvas.
    #[must_use]
    pub fn value_to_row(self, value: f64) -> Option<i32> {
        if !self.scale.is_drawable(value) {
            return None;
        }
        if self.policy == OutOfRangePolicy::Clip && (value < self.min || value > self.max) {
            return None;
        }

        let base = f64::from(self.area.height - self.area.padding);
        let span_px = f64::from(self.area.inner_height());
        let offset = (self.scale.apply(value) - self.scaled_min) * span_px
            / (self.scaled_max - self.scaled_min);
        let raw = (base - offset).floor();
        if !raw.is_finite() {
            return None;
        }

        let mut row = raw as i64;
        if row == i64::from(self.area.height - self.area.padding) {
            row -= 1;
        }
        let row = row.clamp(i64::from(self.area.top()), i64::from(self.area.bottom()));
        Some(row as i32)
    }

    /// Maps an optional value, propagating `None` for missing samples.
    #[must_use]
    pub fn map(self, value: Option<f64>) -> Option<i32> {
        value.and_then(|value| self.value_to_row(value))
    }

    /// Tick values from `min` up to `max`.
    ///
    /// `step` is added on a linear axis and multiplied on a logarithmic one.
    pub fn ticks(self, step: f64) -> ChartResult<Vec<AxisTick>> {
        let valid_step = match self.scale {
            ScaleKind::Linear => step.is_finite() && step > 0.0,
            ScaleKind::Logarithmic => step.is_finite() && step > 1.0,
        };
        if !valid_step {
            return Err(ChartError::InvalidConfig(format!(
                "tick step {step} cannot advance a {} axis",
                self.scale
            )));
        }

        let limit = self.max + self.max.abs() * 1e-9;
        let mut ticks = Vec::new();
        let mut value = self.min;
        while value <= limit && ticks.len() < MAX_TICKS {
            if let Some(position) = self.value_to_row(value.min(self.max)) {
                ticks.push(AxisTick { value, position });
            }
            value = self.scale.next_tick(value, step);
        }
        Ok(ticks)
    }
}

/// Maps day offsets onto pixel columns; always linear.
///
/// The day range is half-open: `day_b` is the first day past the last column.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct DayAxis {
    day_a: i64,
    day_b: i64,
    area: PlotArea,
}

impl DayAxis {
    pub fn new(day_a: i64, day_b: i64, area: PlotArea) -> ChartResult<Self> {
        if !area.is_valid() {
            return Err(ChartError::InvalidConfig(format!(
                "plot area {}x{} leaves no room inside padding {}",
                area.width, area.height, area.padding
            )));
        }
        if day_a >= day_b {
            return Err(ChartError::DegenerateRange {
                min: day_a as f64,
                max: day_b as f64,
            });
        }
        Ok(Self { day_a, day_b, area })
    }

    #[must_use]
    pub fn range(self) -> (i64, i64) {
        (self.day_a, self.day_b)
    }

    #[must_use]
    pub fn area(self) -> PlotArea {
        self.area
    }

    /// Column whose [`DayAxis::column_window`] holds `day`, or `None` when
    /// outside `[day_a, day_b)`.
    ///
    /// This is the last column starting on or before `day`, i.e.
    /// `P + ceil((day - day_a + 1) * inner / span) - 1`.
    #[must_use]
    pub fn day_to_column(self, day: i64) -> Option<i32> {
        if !(self.day_a..self.day_b).contains(&day) {
            return None;
        }
        let inner = i128::from(self.area.inner_width());
        let span = i128::from(self.day_b - self.day_a);
        let covered = i128::from(day - self.day_a + 1) * inner;
        let offset = (covered + span - 1).div_euclid(span) - 1;
        Some((i128::from(self.area.padding) + offset) as i32)
    }

    /// First day covered by `column` (inverse of [`DayAxis::day_to_column`]).
    #[must_use]
    pub fn column_to_day(self, column: i32) -> i64 {
        let inner = i128::from(self.area.inner_width());
        let offset = i128::from(column) - i128::from(self.area.padding);
        let days = (offset * i128::from(self.day_b - self.day_a)).div_euclid(inner);
        self.day_a + days as i64
    }

    /// Half-open day window `[start, end)` covered by `column`, at least one day wide.
    #[must_use]
    pub fn column_window(self, column: i32) -> (i64, i64) {
        let start = self.column_to_day(column);
        let end = self.column_to_day(column + 1).max(start + 1);
        (start, end)
    }

    /// January 1st ticks inside the day range, labelled by year.
    #[must_use]
    pub fn year_ticks(self) -> Vec<(i32, AxisTick)> {
        year_starts_between(self.day_a, self.day_b)
            .into_iter()
            .filter_map(|(year, day)| {
                self.day_to_column(day).map(|position| {
                    (
                        year,
                        AxisTick {
                            value: day as f64,
                            position,
                        },
                    )
                })
            })
            .collect()
    }
}
