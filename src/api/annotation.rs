use crate::core::{AxisTick, PlotArea};
use crate::render::{Color, TextHAlign, TextPrimitive};

const LABEL_INSET_PX: f64 = 4.0;

/// Formats a price tick, grouping thousands and trimming fractional zeros.
#[must_use]
pub fn format_price_label(value: f64) -> String {
    if !value.is_finite() {
        return value.to_string();
    }
    if value.abs() >= 1.0 {
        let rounded = value.round() as i64;
        let digits = rounded.unsigned_abs().to_string();
        let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
        for (index, digit) in digits.chars().enumerate() {
            if index > 0 && (digits.len() - index) % 3 == 0 {
                grouped.push(',');
            }
            grouped.push(digit);
        }
        let sign = if rounded < 0 { "-" } else { "" };
        return format!("{sign}${grouped}");
    }

    let fixed = format!("{value:.4}");
    let trimmed = fixed.trim_end_matches('0').trim_end_matches('.');
    format!("${trimmed}")
}

/// Label sitting just above a horizontal gridline, inside the plot.
#[must_use]
pub fn price_tick_label(
    tick: AxisTick,
    area: PlotArea,
    font_size_px: f64,
    color: Color,
) -> TextPrimitive {
    let y = (f64::from(tick.position) - font_size_px - 2.0).max(f64::from(area.top()));
    TextPrimitive::new(
        format_price_label(tick.value),
        f64::from(area.left()) + LABEL_INSET_PX,
        y,
        font_size_px,
        color,
        TextHAlign::Left,
    )
}

/// Year label centered on a vertical gridline, along the bottom edge.
#[must_use]
pub fn year_tick_label(
    year: i32,
    tick: AxisTick,
    area: PlotArea,
    font_size_px: f64,
    color: Color,
) -> TextPrimitive {
    TextPrimitive::new(
        year.to_string(),
        f64::from(tick.position),
        f64::from(area.bottom()) - font_size_px - LABEL_INSET_PX,
        font_size_px,
        color,
        TextHAlign::Center,
    )
}

/// Watermark in the top-right corner of the plot.
#[must_use]
pub fn watermark_label(
    text: &str,
    area: PlotArea,
    font_size_px: f64,
    color: Color,
) -> TextPrimitive {
    TextPrimitive::new(
        text,
        f64::from(area.right()) - LABEL_INSET_PX,
        f64::from(area.top()) + LABEL_INSET_PX,
        font_size_px,
        color,
        TextHAlign::Right,
    )
}

#[cfg(test)]
mod tests {
    use super::format_price_label;

    #[test]
    fn negative_and_non_finite_prices_still_format() {
        assert_eq!(format_price_label(-12_345.4), "-$12,345");
        assert_eq!(format_price_label(f64::INFINITY), "inf");
    }

    #[test]
    fn fractional_labels_trim_trailing_zeros() {
        assert_eq!(format_price_label(0.5), "$0.5");
        assert_eq!(format_price_label(0.0001), "$0.0001");
    }
}
