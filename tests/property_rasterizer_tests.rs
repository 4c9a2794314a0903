use btc_charts::core::{BandStyle, PixelPoint, paint_band, rasterize};
use btc_charts::render::Color;
use proptest::prelude::*;

proptest! {
    #[test]
    fn segments_only_join_adjacent_defined_columns(
        rows in prop::collection::vec(prop::option::of(0i32..500), 0..200)
    ) {
        let points: Vec<PixelPoint> = rows
            .iter()
            .enumerate()
            .map(|(x, y)| PixelPoint::new(x as i32, *y))
            .collect();

        let segments = rasterize(&points, Color::BLACK);
        let expected = rows
            .windows(2)
            .filter(|pair| pair[0].is_some() && pair[1].is_some())
            .count();
        prop_assert_eq!(segments.len(), expected);

        for segment in &segments {
            prop_assert_eq!(segment.x2 - segment.x1, 1);
            prop_assert_eq!(Some(segment.y1), rows[segment.x1 as usize]);
            prop_assert_eq!(Some(segment.y2), rows[segment.x2 as usize]);
        }
    }

    #[test]
    fn band_pixels_stay_within_rows_and_thickness(
        center in -100i32..700,
        thickness in 1i32..200,
        top in 0i32..50,
        height in 1i32..600
    ) {
        let style = BandStyle { thickness, ..BandStyle::default() };
        let bottom = top + height;

        let pixels = paint_band(center, style, (top, bottom));
        for pixel in &pixels {
            prop_assert!(pixel.y >= top && pixel.y <= bottom);
            prop_assert!((pixel.y - center).abs() < thickness);
        }
        prop_assert!(pixels.windows(2).all(|pair| pair[1].y == pair[0].y + 1));
    }

    #[test]
    fn band_hue_is_a_valid_angle(
        offset in -400i32..400,
        thickness in 1i32..300,
        hue_min in -360i32..360,
        hue_max in 0i32..720
    ) {
        let style = BandStyle { thickness, hue_min, hue_max, alpha: 255 };
        let hue = style.hue_at(offset);
        prop_assert!((0..360).contains(&hue));
    }
}
