//! Loader for daily price CSV exports.
//!
//! Expected layout: a header row, then one row per day whose first cell is a
//! `YYYY-MM-DD` date (optionally followed by a time) and whose remaining
//! cells are per-exchange prices. Empty or non-positive cells are ignored;
//! a day with no usable price is kept as a missing sample.

use std::io::Read;
use std::path::Path;

use tracing::{debug, warn};

use crate::core::primitives::{date_to_day_offset, parse_date_cell};
use crate::core::{PriceSeries, Sample};
use crate::error::{ChartError, ChartResult};

/// Reads the CSV file at `path` into a price series.
///
/// Fails with [`ChartError::DataUnavailable`] when the file cannot be opened.
pub fn load_series(path: impl AsRef<Path>) -> ChartResult<PriceSeries> {
    let path = path.as_ref();
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_path(path)
        .map_err(|source| ChartError::DataUnavailable {
            path: path.to_path_buf(),
            source,
        })?;
    let series = collect_series(reader)?;
    debug!(path = %path.display(), samples = series.len(), "loaded price series");
    Ok(series)
}

/// Reads CSV content from any reader into a price series.
pub fn read_series<R: Read>(input: R) -> ChartResult<PriceSeries> {
    let reader = csv::ReaderBuilder::new()
        .has_headers(true)
        .flexible(true)
        .from_reader(input);
    collect_series(reader)
}

/// Mean of the positive prices in `cells`, `-1.0` when none parse.
#[must_use]
pub fn average_row_price<'a>(cells: impl IntoIterator<Item = &'a str>) -> f64 {
    let (sum, count) = cells
        .into_iter()
        .filter_map(|cell| cell.trim().parse::<f64>().ok())
        .filter(|price| price.is_finite() && *price > 0.0)
        .fold((0.0, 0usize), |(sum, count), price| (sum + price, count + 1));
    if count > 0 { sum / count as f64 } else { -1.0 }
}

fn collect_series<R: Read>(mut reader: csv::Reader<R>) -> ChartResult<PriceSeries> {
    let mut samples: Vec<Sample> = Vec::new();

    for (row, record) in reader.records().enumerate() {
        let record = record.map_err(map_csv_error)?;
        let Some(date_cell) = record.get(0) else {
            continue;
        };
        let date = parse_date_cell(date_cell)?;
        let day_offset = date_to_day_offset(date);

        if let Some(previous) = samples.last().filter(|last| last.day_offset >= day_offset) {
            warn!(
                row,
                day_offset,
                previous_day = previous.day_offset,
                "skipping out-of-order or duplicate day"
            );
            continue;
        }

        let price = average_row_price(record.iter().skip(1));
        samples.push(Sample::new(day_offset, price).with_date(date));
    }

    PriceSeries::new(samples)
}

fn map_csv_error(err: csv::Error) -> ChartError {
    match err.into_kind() {
        csv::ErrorKind::Io(err) => ChartError::Io(err),
        other => ChartError::InvalidData(format!("malformed csv record: {other:?}")),
    }
}
