use serde::{Deserialize, Serialize};

use crate::core::{DayAxis, Sample};
use crate::error::{ChartError, ChartResult};

/// How a pixel column picks its value from the daily series.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum SamplingMode {
    /// Mean of every valid quote in the column's day window.
    #[default]
    BucketAverage,
    /// Quote of the first day of the column's window.
    Nearest,
}

/// Daily price series ordered by strictly increasing day offset.
#[derive(Debug, Clone, PartialEq, Default, Serialize, Deserialize)]
pub struct PriceSeries {
    samples: Vec<Sample>,
}

impl PriceSeries {
    pub fn new(samples: Vec<Sample>) -> ChartResult<Self> {
        if let Some(pair) = samples
            .windows(2)
            .find(|pair| pair[1].day_offset <= pair[0].day_offset)
        {
            return Err(ChartError::InvalidData(format!(
                "series days must be strictly increasing: day {} follows day {}",
                pair[1].day_offset, pair[0].day_offset
            )));
        }
        Ok(Self { samples })
    }

    #[must_use]
    pub fn samples(&self) -> &[Sample] {
        &self.samples
    }

    #[must_use]
    pub fn len(&self) -> usize {
        self.samples.len()
    }

    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.samples.is_empty()
    }

    #[must_use]
    pub fn first_day(&self) -> Option<i64> {
        self.samples.first().map(|sample| sample.day_offset)
    }

    #[must_use]
    pub fn last_day(&self) -> Option<i64> {
        self.samples.last().map(|sample| sample.day_offset)
    }

    /// Half-open day range `[first, last + 1)` covering every sample.
    #[must_use]
    pub fn day_range(&self) -> Option<(i64, i64)> {
        Some((self.first_day()?, self.last_day()? + 1))
    }

    /// Samples whose day falls in `[day_a, day_b)`.
    #[must_use]
    pub fn window(&self, day_a: i64, day_b: i64) -> &[Sample] {
        let start = self
            .samples
            .partition_point(|sample| sample.day_offset < day_a);
        let end = self
            .samples
            .partition_point(|sample| sample.day_offset < day_b);
        &self.samples[start..end.max(start)]
    }

    /// Quote on exactly `day`, if any.
    #[must_use]
    pub fn price_on(&self, day: i64) -> Option<f64> {
        self.samples
            .binary_search_by_key(&day, |sample| sample.day_offset)
            .ok()
            .and_then(|index| self.samples[index].quote())
    }

    /// Mean of the valid quotes in `[day_a, day_b)`.
    ///
    /// Quotes `<= 0` count neither in the sum nor in the divisor. An empty
    /// result is `None`, never zero.
    #[must_use]
    pub fn average_price(&self, day_a: i64, day_b: i64) -> Option<f64> {
        let (sum, count) = self
            .window(day_a, day_b)
            .iter()
            .filter_map(|sample| sample.quote())
            .fold((0.0, 0usize), |(sum, count), price| (sum + price, count + 1));
        (count > 0).then(|| sum / count as f64)
    }

    /// Highest valid quote in `[day_a, day_b)`.
    #[must_use]
    pub fn max_price(&self, day_a: i64, day_b: i64) -> Option<f64> {
        self.window(day_a, day_b)
            .iter()
            .filter_map(|sample| sample.quote())
            .reduce(f64::max)
    }

    /// Lowest valid quote in `[day_a, day_b)`.
    #[must_use]
    pub fn min_price(&self, day_a: i64, day_b: i64) -> Option<f64> {
        self.window(day_a, day_b)
            .iter()
            .filter_map(|sample| sample.quote())
            .reduce(f64::min)
    }
}

/// Value for one pixel column covering days `[day_a, day_b)`.
#[must_use]
pub fn sample(series: &PriceSeries, day_a: i64, day_b: i64, mode: SamplingMode) -> Option<f64> {
    match mode {
        SamplingMode::BucketAverage => series.average_price(day_a, day_b),
        SamplingMode::Nearest => series.price_on(day_a),
    }
}

/// Samples every drawable column of `axis`, left to right.
#[must_use]
pub fn sample_columns(
    series: &PriceSeries,
    axis: DayAxis,
    mode: SamplingMode,
) -> Vec<(i32, Option<f64>)> {
    axis.area()
        .columns()
        .map(|column| {
            let (day_a, day_b) = axis.column_window(column);
            (column, sample(series, day_a, day_b, mode))
        })
        .collect()
}
