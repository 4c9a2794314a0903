use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::core::primitives::day_offset_to_date;

/// One daily observation of the price series.
///
/// A price `<= 0` (or non-finite) means no quote was available that day.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Sample {
    pub day_offset: i64,
    pub date: Option<NaiveDate>,
    pub price: f64,
}

impl Sample {
    #[must_use]
    pub fn new(day_offset: i64, price: f64) -> Self {
        Self {
            day_offset,
            date: day_offset_to_date(day_offset),
            price,
        }
    }

    /// Builds a sample for a day without any quote.
    #[must_use]
    pub fn missing(day_offset: i64) -> Self {
        Self::new(day_offset, -1.0)
    }

    #[must_use]
    pub fn with_date(mut self, date: NaiveDate) -> Self {
        self.date = Some(date);
        self
    }

    /// Returns the price when it is a usable quote.
    #[must_use]
    pub fn quote(self) -> Option<f64> {
        (self.price.is_finite() && self.price > 0.0).then_some(self.price)
    }
}

/// Pixel-space size of the chart canvas with uniform padding.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PlotArea {
    pub width: u32,
    pub height: u32,
    pub padding: u32,
}

impl PlotArea {
    #[must_use]
    pub fn new(width: u32, height: u32, padding: u32) -> Self {
        Self {
            width,
            height,
            padding,
        }
    }

    /// Both dimensions must fit pixel coordinates and leave at least one
    /// pixel inside the padding.
    #[must_use]
    pub fn is_valid(self) -> bool {
        let max = i32::MAX as u32;
        self.width <= max
            && self.height <= max
            && u64::from(self.width) > 2 * u64::from(self.padding)
            && u64::from(self.height) > 2 * u64::from(self.padding)
    }

    /// First drawable column.
    #[must_use]
    pub fn left(self) -> i32 {
        self.padding as i32
    }

    /// Last drawable column (inclusive).
    #[must_use]
    pub fn right(self) -> i32 {
        self.width as i32 - self.padding as i32 - 1
    }

    /// First drawable row.
    #[must_use]
    pub fn top(self) -> i32 {
        self.padding as i32
    }

    /// Last drawable row (inclusive).
    #[must_use]
    pub fn bottom(self) -> i32 {
        self.height as i32 - self.padding as i32 - 1
    }

    /// Number of drawable columns.
    #[must_use]
    pub fn inner_width(self) -> u32 {
        self.width.saturating_sub(self.padding.saturating_mul(2))
    }

    /// Number of drawable rows.
    #[must_use]
    pub fn inner_height(self) -> u32 {
        self.height.saturating_sub(self.padding.saturating_mul(2))
    }

    /// Iterates the drawable columns left to right.
    pub fn columns(self) -> impl Iterator<Item = i32> {
        self.left()..=self.right()
    }
}

/// Per-column pixel position of a curve; `y == None` means nothing to draw.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct PixelPoint {
    pub x: i32,
    pub y: Option<i32>,
}

impl PixelPoint {
    #[must_use]
    pub fn new(x: i32, y: Option<i32>) -> Self {
        Self { x, y }
    }

    #[must_use]
    pub fn defined(x: i32, y: i32) -> Self {
        Self { x, y: Some(y) }
    }

    #[must_use]
    pub fn undefined(x: i32) -> Self {
        Self { x, y: None }
    }

    #[must_use]
    pub fn is_defined(self) -> bool {
        self.y.is_some()
    }
}
