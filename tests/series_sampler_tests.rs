use btc_charts::ChartError;
use btc_charts::core::{
    DayAxis, PlotArea, PriceSeries, Sample, SamplingMode, sample, sample_columns,
};

fn gapped_series() -> PriceSeries {
    PriceSeries::new(vec![
        Sample::new(554, 100.0),
        Sample::missing(555),
        Sample::new(556, 200.0),
        Sample::new(557, 300.0),
    ])
    .expect("ordered series")
}

#[test]
fn average_price_ignores_missing_quotes() {
    let series = gapped_series();

    assert_eq!(series.average_price(554, 557), Some(150.0));
    assert_eq!(series.average_price(554, 558), Some(200.0));
    assert_eq!(series.average_price(555, 556), None);
}

#[test]
fn window_is_half_open() {
    let series = gapped_series();

    assert_eq!(series.window(555, 557).len(), 2);
    assert_eq!(series.average_price(557, 558), Some(300.0));
    assert_eq!(series.average_price(558, 600), None);
    assert_eq!(series.average_price(400, 554), None);
    assert!(series.window(557, 554).is_empty());
}

#[test]
fn series_queries_report_range_and_extremes() {
    let series = gapped_series();

    assert_eq!(series.len(), 4);
    assert_eq!(series.first_day(), Some(554));
    assert_eq!(series.last_day(), Some(557));
    assert_eq!(series.day_range(), Some((554, 558)));
    assert_eq!(series.max_price(554, 558), Some(300.0));
    assert_eq!(series.min_price(554, 558), Some(100.0));
    assert_eq!(series.price_on(555), None);
    assert_eq!(series.price_on(556), Some(200.0));
}

#[test]
fn empty_series_has_no_range() {
    let series = PriceSeries::new(Vec::new()).expect("empty series");

    assert!(series.is_empty());
    assert_eq!(series.day_range(), None);
    assert_eq!(series.average_price(0, 10), None);
}

#[test]
fn unordered_series_is_rejected() {
    let err = PriceSeries::new(vec![Sample::new(10, 1.0), Sample::new(10, 2.0)])
        .expect_err("duplicate day");
    assert!(matches!(err, ChartError::InvalidData(_)));
}

#[test]
fn nearest_mode_reads_first_day_of_window() {
    let series = gapped_series();

    assert_eq!(sample(&series, 554, 557, SamplingMode::Nearest), Some(100.0));
    assert_eq!(sample(&series, 555, 557, SamplingMode::Nearest), None);
    assert_eq!(
        sample(&series, 555, 557, SamplingMode::BucketAverage),
        Some(200.0)
    );
}

#[test]
fn one_column_per_day_reproduces_the_series() {
    let series = gapped_series();
    let axis = DayAxis::new(554, 558, PlotArea::new(4, 10, 0)).expect("axis");

    let columns = sample_columns(&series, axis, SamplingMode::BucketAverage);
    assert_eq!(
        columns,
        vec![(0, Some(100.0)), (1, None), (2, Some(200.0)), (3, Some(300.0))]
    );
}

#[test]
fn wide_columns_average_their_days() {
    let series = gapped_series();
    let axis = DayAxis::new(554, 558, PlotArea::new(2, 10, 0)).expect("axis");

    let columns = sample_columns(&series, axis, SamplingMode::BucketAverage);
    assert_eq!(columns, vec![(0, Some(100.0)), (1, Some(250.0))]);
}
