use btc_charts::core::{DayAxis, OutOfRangePolicy, PlotArea, ScaleKind, ValueAxis};
use proptest::prelude::*;

proptest! {
    #[test]
    fn value_rows_stay_inside_plot_area(
        width in 10u32..800,
        height in 10u32..800,
        padding in 0u32..4,
        min in 0.01f64..1_000.0,
        span in 0.5f64..100_000.0,
        value in -200_000.0f64..200_000.0,
        logarithmic in any::<bool>()
    ) {
        let area = PlotArea::new(width, height, padding);
        let scale = if logarithmic { ScaleKind::Logarithmic } else { ScaleKind::Linear };
        let axis = ValueAxis::new(scale, min, min + span, area).expect("axis");

        if let Some(row) = axis.value_to_row(value) {
            prop_assert!(row >= area.top());
            prop_assert!(row <= area.bottom());
        } else {
            prop_assert!(logarithmic && value <= 0.0);
        }
    }

    #[test]
    fn larger_values_never_map_below_smaller_ones(
        height in 10u32..800,
        min in 0.01f64..1_000.0,
        span in 0.5f64..100_000.0,
        a in 0.0f64..1.0,
        b in 0.0f64..1.0,
        logarithmic in any::<bool>()
    ) {
        let area = PlotArea::new(100, height, 2);
        let scale = if logarithmic { ScaleKind::Logarithmic } else { ScaleKind::Linear };
        let axis = ValueAxis::new(scale, min, min + span, area).expect("axis");

        let low = min + span * a.min(b);
        let high = min + span * a.max(b);
        let low_row = axis.value_to_row(low).expect("low row");
        let high_row = axis.value_to_row(high).expect("high row");
        prop_assert!(high_row <= low_row);
    }

    #[test]
    fn clipped_axis_only_drops_out_of_domain_values(
        value in -500.0f64..1_500.0
    ) {
        let area = PlotArea::new(200, 120, 6);
        let axis = ValueAxis::new(ScaleKind::Linear, 0.0, 1_000.0, area)
            .expect("axis")
            .with_policy(OutOfRangePolicy::Clip);

        let row = axis.value_to_row(value);
        prop_assert_eq!(row.is_some(), (0.0..=1_000.0).contains(&value));
    }

    #[test]
    fn day_columns_stay_inside_plot_area(
        width in 10u32..1_200,
        padding in 0u32..4,
        day_a in -1_000i64..6_000,
        days in 1i64..20_000,
        fraction in 0.0f64..1.0
    ) {
        let area = PlotArea::new(width, 50, padding);
        let axis = DayAxis::new(day_a, day_a + days, area).expect("axis");

        let day = day_a + ((days as f64 - 1.0) * fraction) as i64;
        let column = axis.day_to_column(day).expect("day inside range");
        prop_assert!(column >= area.left());
        prop_assert!(column <= area.right());
        prop_assert!(axis.column_to_day(column) <= day);
    }

    #[test]
    fn day_column_window_contains_the_day(
        width in 3u32..1_200,
        padding in 0u32..2,
        day_a in -1_000i64..6_000,
        days in 1i64..20_000,
        fraction in 0.0f64..1.0
    ) {
        let area = PlotArea::new(width, 50, padding);
        let axis = DayAxis::new(day_a, day_a + days, area).expect("axis");

        let day = day_a + ((days as f64 - 1.0) * fraction) as i64;
        let column = axis.day_to_column(day).expect("day inside range");
        let (start, end) = axis.column_window(column);
        prop_assert!(start <= day && day < end);
    }

    #[test]
    fn column_windows_are_ordered_and_non_empty(
        width in 10u32..600,
        padding in 0u32..4,
        day_a in 0i64..6_000,
        days in 1i64..8_000
    ) {
        let area = PlotArea::new(width, 50, padding);
        let axis = DayAxis::new(day_a, day_a + days, area).expect("axis");

        let mut previous_start = i64::MIN;
        for column in area.columns() {
            let (start, end) = axis.column_window(column);
            prop_assert!(end > start);
            prop_assert!(start >= previous_start);
            prop_assert!((day_a..day_a + days).contains(&start));
            previous_start = start;
        }
    }
}
