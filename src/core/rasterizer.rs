use serde::{Deserialize, Serialize};

use crate::core::PixelPoint;
use crate::error::{ChartError, ChartResult};
use crate::render::Color;

const BAND_SATURATION: f64 = 1.0;
const BAND_LIGHTNESS: f64 = 0.7;

/// Straight line between two adjacent defined columns.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct Segment {
    pub x1: i32,
    pub y1: i32,
    pub x2: i32,
    pub y2: i32,
    pub color: Color,
}

/// Connects consecutive defined columns into segments.
///
/// A pair is joined only when both points are defined and their columns are
/// adjacent, so gaps are never bridged and `n` defined columns in a row give
/// exactly `n - 1` segments.
#[must_use]
pub fn rasterize(points: &[PixelPoint], color: Color) -> Vec<Segment> {
    points
        .windows(2)
        .filter_map(|pair| {
            let (from, to) = (pair[0], pair[1]);
            if to.x - from.x != 1 {
                return None;
            }
            Some(Segment {
                x1: from.x,
                y1: from.y?,
                x2: to.x,
                y2: to.y?,
                color,
            })
        })
        .collect()
}

/// Parameters of the hue band drawn around the trend curve.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct BandStyle {
    pub thickness: i32,
    pub hue_min: i32,
    pub hue_max: i32,
    pub alpha: u8,
}

impl Default for BandStyle {
    fn default() -> Self {
        Self {
            thickness: 80,
            hue_min: 0,
            hue_max: 120,
            alpha: 255,
        }
    }
}

impl BandStyle {
    pub fn validate(self) -> ChartResult<Self> {
        if self.thickness <= 0 {
            return Err(ChartError::InvalidConfig(
                "band thickness must be > 0".to_owned(),
            ));
        }
        Ok(self)
    }

    /// Hue for a row `offset` pixels below the band center.
    #[must_use]
    pub fn hue_at(self, offset: i32) -> i32 {
        let raw = (i128::from(offset) + i128::from(self.thickness) + i128::from(self.hue_min))
            * i128::from(self.hue_max)
            / i128::from(self.thickness);
        raw.rem_euclid(360) as i32
    }
}

/// One colored pixel of a band column.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct BandPixel {
    pub y: i32,
    pub color: Color,
}

/// Colors every row within `thickness` of `center_y`, limited to `rows`.
///
/// Hue varies with the vertical offset from the center and is converted at
/// saturation 1.0 and lightness 0.7.
#[must_use]
pub fn paint_band(center_y: i32, style: BandStyle, rows: (i32, i32)) -> Vec<BandPixel> {
    let (top, bottom) = rows;
    let reach = style.thickness.saturating_sub(1);
    let first = center_y.saturating_sub(reach).max(top);
    let last = center_y.saturating_add(reach).min(bottom);

    (first..=last)
        .map(|y| BandPixel {
            y,
            color: Color::from_hsl(
                style.hue_at(y - center_y),
                BAND_SATURATION,
                BAND_LIGHTNESS,
                style.alpha,
            ),
        })
        .collect()
}
