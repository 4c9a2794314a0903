/// Fitted regression `log10(price) = 2.9065 * ln(days) - 19.493`.
pub const TREND_SLOPE: f64 = 2.9065;
pub const TREND_INTERCEPT: f64 = -19.493;

/// Illustrative long-run growth curve, `None` for days `<= 0`.
#[must_use]
pub fn trend(day_offset: i64) -> Option<f64> {
    if day_offset <= 0 {
        return None;
    }
    let exponent = TREND_SLOPE * (day_offset as f64).ln() + TREND_INTERCEPT;
    Some(10f64.powf(exponent))
}
