use chrono::{Datelike, Duration, NaiveDate};

use crate::error::{ChartError, ChartResult};

/// Calendar date of day offset 0.
pub const GENESIS_DATE: (i32, u32, u32) = (2009, 1, 9);

#[must_use]
pub fn genesis_date() -> NaiveDate {
    let (year, month, day) = GENESIS_DATE;
    NaiveDate::from_ymd_opt(year, month, day).unwrap_or(NaiveDate::MIN)
}

/// Days elapsed between the genesis date and `date`.
#[must_use]
pub fn date_to_day_offset(date: NaiveDate) -> i64 {
    (date - genesis_date()).num_days()
}

/// Calendar date for a day offset, `None` when it falls outside chrono's range.
#[must_use]
pub fn day_offset_to_date(day_offset: i64) -> Option<NaiveDate> {
    genesis_date().checked_add_signed(Duration::try_days(day_offset)?)
}

/// Fractional calendar year of a day offset, e.g. day 0 is `2009.0247`.
#[must_use]
pub fn day_offset_to_fractional_year(day_offset: i64) -> f64 {
    let (year, _, day) = GENESIS_DATE;
    day_offset as f64 / 365.0 + f64::from(day) / 365.0 + f64::from(year)
}

/// Day offset of every January 1st inside `[day_a, day_b)`.
#[must_use]
pub fn year_starts_between(day_a: i64, day_b: i64) -> Vec<(i32, i64)> {
    let (Some(first), Some(last)) = (day_offset_to_date(day_a), day_offset_to_date(day_b)) else {
        return Vec::new();
    };

    (first.year()..=last.year())
        .filter_map(|year| NaiveDate::from_ymd_opt(year, 1, 1))
        .map(|date| (date.year(), date_to_day_offset(date)))
        .filter(|(_, day)| (day_a..day_b).contains(day))
        .collect()
}

/// Parses the leading `YYYY-MM-DD` of a date cell (time suffix ignored).
pub fn parse_date_cell(cell: &str) -> ChartResult<NaiveDate> {
    let trimmed = cell.trim();
    let date_part = trimmed
        .split(|c: char| c == ' ' || c == 'T')
        .next()
        .unwrap_or(trimmed);
    NaiveDate::parse_from_str(date_part, "%Y-%m-%d")
        .map_err(|err| ChartError::InvalidData(format!("unparsable date `{trimmed}`: {err}")))
}
