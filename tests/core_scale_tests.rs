use btc_charts::ChartError;
use btc_charts::core::{DayAxis, OutOfRangePolicy, PlotArea, ScaleKind, ValueAxis, apply_scale};

#[test]
fn logarithmic_scale_uses_natural_log_for_positive_values() {
    let scaled = ScaleKind::Logarithmic.apply(std::f64::consts::E);
    assert!((scaled - 1.0).abs() <= 1e-12);

    let tagged = apply_scale("log", 10.0).expect("known tag");
    assert!((tagged - 10f64.ln()).abs() <= 1e-12);
}

#[test]
fn logarithmic_scale_passes_non_positive_values_through() {
    assert_eq!(ScaleKind::Logarithmic.apply(0.0), 0.0);
    assert_eq!(ScaleKind::Logarithmic.apply(-3.5), -3.5);
    assert!(!ScaleKind::Logarithmic.is_drawable(0.0));
    assert!(ScaleKind::Logarithmic.is_drawable(0.5));
}

#[test]
fn linear_scale_is_identity() {
    for value in [-10.0, 0.0, 0.25, 42.0] {
        assert_eq!(ScaleKind::Linear.apply(value), value);
    }
}

#[test]
fn unknown_scale_tag_is_rejected() {
    let err = "sqrt".parse::<ScaleKind>().expect_err("unknown tag");
    assert!(matches!(err, ChartError::InvalidScale(_)));
    assert!(matches!(
        apply_scale("cubic", 1.0),
        Err(ChartError::InvalidScale(_))
    ));
    assert_eq!("Logarithmic".parse::<ScaleKind>().expect("tag"), ScaleKind::Logarithmic);
}

#[test]
fn value_axis_maps_bounds_to_plot_edges() {
    let area = PlotArea::new(100, 100, 10);
    let axis = ValueAxis::new(ScaleKind::Linear, 0.0, 100.0, area).expect("axis");

    assert_eq!(axis.value_to_row(100.0), Some(10));
    assert_eq!(axis.value_to_row(0.0), Some(89));
    assert_eq!(axis.value_to_row(50.0), Some(50));
}

#[test]
fn logarithmic_value_axis_maps_bounds_to_plot_edges() {
    let area = PlotArea::new(100, 100, 10);
    let axis = ValueAxis::new(ScaleKind::Logarithmic, 1.0, 10_000.0, area).expect("axis");

    assert_eq!(axis.value_to_row(10_000.0), Some(10));
    assert_eq!(axis.value_to_row(1.0), Some(89));
    let middle = axis.value_to_row(100.0).expect("middle row");
    assert!((49..=50).contains(&middle));
    assert_eq!(axis.value_to_row(0.0), None);
    assert_eq!(axis.value_to_row(-5.0), None);
}

#[test]
fn value_axis_without_padding_reaches_canvas_edges() {
    let area = PlotArea::new(3, 10, 0);
    let axis = ValueAxis::new(ScaleKind::Linear, 100.0, 200.0, area).expect("axis");

    assert_eq!(axis.value_to_row(100.0), Some(9));
    assert_eq!(axis.value_to_row(200.0), Some(0));
    assert_eq!(axis.map(None), None);
}

#[test]
fn out_of_range_values_follow_policy() {
    let area = PlotArea::new(100, 100, 10);
    let clamped = ValueAxis::new(ScaleKind::Linear, 0.0, 100.0, area).expect("axis");
    let clipped = clamped.with_policy(OutOfRangePolicy::Clip);

    assert_eq!(clamped.value_to_row(150.0), Some(10));
    assert_eq!(clamped.value_to_row(-20.0), Some(89));
    assert_eq!(clipped.value_to_row(150.0), None);
    assert_eq!(clipped.value_to_row(-20.0), None);
    assert_eq!(clipped.value_to_row(100.0), Some(10));
}

#[test]
fn degenerate_value_ranges_are_rejected() {
    let area = PlotArea::new(100, 100, 10);

    assert!(matches!(
        ValueAxis::new(ScaleKind::Linear, 5.0, 5.0, area),
        Err(ChartError::DegenerateRange { .. })
    ));
    assert!(matches!(
        ValueAxis::new(ScaleKind::Logarithmic, 0.0, 10.0, area),
        Err(ChartError::DegenerateRange { .. })
    ));
    assert!(matches!(
        ValueAxis::new(ScaleKind::Linear, 0.0, 1.0, PlotArea::new(20, 20, 10)),
        Err(ChartError::InvalidConfig(_))
    ));
}

#[test]
fn linear_ticks_step_additively() {
    let area = PlotArea::new(100, 100, 10);
    let axis = ValueAxis::new(ScaleKind::Linear, 0.0, 100.0, area).expect("axis");

    let ticks = axis.ticks(25.0).expect("ticks");
    let values: Vec<f64> = ticks.iter().map(|tick| tick.value).collect();
    assert_eq!(values, vec![0.0, 25.0, 50.0, 75.0, 100.0]);
    assert_eq!(ticks.first().map(|tick| tick.position), Some(89));
    assert_eq!(ticks.last().map(|tick| tick.position), Some(10));
}

#[test]
fn logarithmic_ticks_step_multiplicatively() {
    let area = PlotArea::new(1024, 576, 18);
    let axis = ValueAxis::new(ScaleKind::Logarithmic, 0.1, 1_000_000.0, area).expect("axis");

    let ticks = axis.ticks(10.0).expect("ticks");
    assert_eq!(ticks.len(), 8);
    assert!(ticks.windows(2).all(|pair| pair[1].position < pair[0].position));
    assert!(axis.ticks(1.0).is_err());
}

#[test]
fn day_axis_column_windows_are_half_open() {
    let area = PlotArea::new(100, 50, 10);
    let axis = DayAxis::new(0, 160, area).expect("axis");

    assert_eq!(axis.column_to_day(10), 0);
    assert_eq!(axis.column_window(10), (0, 2));
    assert_eq!(axis.column_window(89), (158, 160));
    assert_eq!(axis.day_to_column(0), Some(10));
    assert_eq!(axis.day_to_column(159), Some(89));
    assert_eq!(axis.day_to_column(160), None);
    assert_eq!(axis.day_to_column(-1), None);
}

#[test]
fn zoomed_out_days_land_in_the_column_that_samples_them() {
    let axis = DayAxis::new(0, 7, PlotArea::new(3, 10, 0)).expect("axis");

    assert_eq!(axis.column_window(0), (0, 2));
    assert_eq!(axis.column_window(1), (2, 4));
    assert_eq!(axis.column_window(2), (4, 7));
    let columns: Vec<Option<i32>> = (0..7).map(|day| axis.day_to_column(day)).collect();
    assert_eq!(
        columns,
        vec![Some(0), Some(0), Some(1), Some(1), Some(2), Some(2), Some(2)]
    );
}

#[test]
fn day_axis_widens_windows_when_zoomed_in() {
    let area = PlotArea::new(40, 10, 0);
    let axis = DayAxis::new(100, 110, area).expect("axis");

    for column in area.columns() {
        let (start, end) = axis.column_window(column);
        assert!(end > start);
    }
    assert!(matches!(
        DayAxis::new(5, 5, area),
        Err(ChartError::DegenerateRange { .. })
    ));
}
