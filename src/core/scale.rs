use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};

use crate::error::{ChartError, ChartResult};

/// Value transform applied before mapping a value onto an axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Default)]
#[serde(rename_all = "snake_case", try_from = "String")]
pub enum ScaleKind {
    /// Identity transform.
    #[default]
    Linear,
    /// Natural logarithm; only values > 0 are drawable.
    Logarithmic,
}

impl ScaleKind {
    /// Applies the scale to `value`.
    ///
    /// Under [`ScaleKind::Logarithmic`] a non-positive input is returned
    /// unchanged instead of failing. Callers that need a drawable value must
    /// reject `value <= 0` themselves (see [`ScaleKind::is_drawable`]).
    #[must_use]
    pub fn apply(self, value: f64) -> f64 {
        match self {
            Self::Linear => value,
            Self::Logarithmic => {
                if value <= 0.0 {
                    value
                } else {
                    value.ln()
                }
            }
        }
    }

    /// Returns whether `value` has a usable position under this scale.
    #[must_use]
    pub fn is_drawable(self, value: f64) -> bool {
        match self {
            Self::Linear => value.is_finite(),
            Self::Logarithmic => value.is_finite() && value > 0.0,
        }
    }

    /// Advances a tick value by `step`.
    ///
    /// Linear ticks are additive, logarithmic ticks are multiplicative.
    #[must_use]
    pub fn next_tick(self, value: f64, step: f64) -> f64 {
        match self {
            Self::Linear => value + step,
            Self::Logarithmic => value * step,
        }
    }

    #[must_use]
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Linear => "linear",
            Self::Logarithmic => "logarithmic",
        }
    }
}

impl fmt::Display for ScaleKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FromStr for ScaleKind {
    type Err = ChartError;

    fn from_str(tag: &str) -> ChartResult<Self> {
        match tag.trim().to_ascii_lowercase().as_str() {
            "linear" | "lin" => Ok(Self::Linear),
            "logarithmic" | "log" => Ok(Self::Logarithmic),
            other => Err(ChartError::InvalidScale(format!(
                "unrecognized scale tag `{other}`"
            ))),
        }
    }
}

impl TryFrom<String> for ScaleKind {
    type Error = ChartError;

    fn try_from(tag: String) -> ChartResult<Self> {
        tag.parse()
    }
}

/// Applies the scale named by `tag` to `value`.
///
/// Unknown tags fail with [`ChartError::InvalidScale`].
pub fn apply_scale(tag: &str, value: f64) -> ChartResult<f64> {
    let kind: ScaleKind = tag.parse()?;
    Ok(kind.apply(value))
}
