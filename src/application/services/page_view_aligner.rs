//! Calendar alignment of sparse weekly page-view series.
//!
//! Inputs are borrowed and outputs freshly allocated. Apart from [`align`],
//! which reads the local clock, "today" is an explicit parameter.

use std::collections::HashMap;

use chrono::NaiveDate;

use crate::domain::calendar::{self, build_date_axis, weeks_between};
use crate::domain::entities::{
    AlignedDataset, AlignedSeries, BarChartData, RestaurantIdentity, RestaurantPageViews, WeekYear,
    WeeklyCount,
};

/// Earliest (week, year) across all series.
///
/// Only the first valid record of each series is inspected, relying on the
/// ascending order of `page_views`. Records with a negative week or year are
/// skipped since they cannot be placed on a calendar. Returns `None` when no
/// series has a usable record.
pub fn find_earliest_week(series: &[RestaurantPageViews]) -> Option<WeekYear> {
    series
        .iter()
        .filter_map(|restaurant| {
            restaurant
                .page_views
                .iter()
                .map(WeeklyCount::week_year)
                .find(WeekYear::is_valid)
        })
        .min()
}

/// [`align_at`] with today's date as the end of the axis.
pub fn align(series: &[RestaurantPageViews]) -> AlignedDataset {
    align_at(series, calendar::today())
}

/// Aligns all series onto a weekly axis running from the earliest recorded
/// week up to `today`.
///
/// Empty input yields [`AlignedDataset::empty`].
pub fn align_at(series: &[RestaurantPageViews], today: NaiveDate) -> AlignedDataset {
    let Some(start) = find_earliest_week(series).and_then(|earliest| earliest.start_date()) else {
        return AlignedDataset::empty();
    };

    align_onto(series, build_date_axis(start, today).collect())
}

/// Aligns all series onto a caller-supplied weekly axis.
///
/// One [`AlignedSeries`] is produced per distinct restaurant identity, in
/// first-seen order, zero-filled to the axis length. Each record's count is
/// written at its week offset from the first axis date; a later record for
/// the same week overwrites an earlier one. Records that have no calendar
/// date or fall outside the axis are dropped.
pub fn align_onto(series: &[RestaurantPageViews], dates: Vec<NaiveDate>) -> AlignedDataset {
    let mut restaurant_data: Vec<AlignedSeries> = Vec::new();
    let mut slots: HashMap<RestaurantIdentity<'_>, usize> = HashMap::new();

    for restaurant in series {
        let slot = *slots.entry(restaurant.identity()).or_insert_with(|| {
            restaurant_data.push(AlignedSeries::zeroed(&restaurant.name, dates.len()));
            restaurant_data.len() - 1
        });

        for record in &restaurant.page_views {
            match axis_offset(&dates, record) {
                Some(offset) => restaurant_data[slot].click_data[offset] = record.count,
                None => tracing::debug!(
                    restaurant = %restaurant.name,
                    week = record.week,
                    year = record.year,
                    "Page view record outside the date axis, dropping"
                ),
            }
        }
    }

    AlignedDataset {
        dates,
        restaurant_data,
    }
}

fn axis_offset(dates: &[NaiveDate], record: &WeeklyCount) -> Option<usize> {
    let axis_start = *dates.first()?;
    let date = record.week_year().start_date()?;
    if date < axis_start {
        return None;
    }

    let offset = weeks_between(axis_start, date);
    (offset < dates.len()).then_some(offset)
}

/// Number of dates [`align_at`] would put on the axis, without building it.
///
/// Lets callers bound the output size before aligning: the result holds
/// this many entries per distinct restaurant.
pub fn axis_weeks(series: &[RestaurantPageViews], today: NaiveDate) -> usize {
    let Some(start) = find_earliest_week(series).and_then(|earliest| earliest.start_date()) else {
        return 0;
    };
    if start > today {
        return 0;
    }

    let days = today.signed_duration_since(start).num_days().unsigned_abs();
    usize::try_from(days / calendar::DAYS_IN_WEEK + 1).unwrap_or(usize::MAX)
}

/// Sum of all counts of one series.
///
/// Accumulated in `u128`: any realistic number of `u64` buckets fits.
pub fn total_views(restaurant: &RestaurantPageViews) -> u128 {
    restaurant
        .page_views
        .iter()
        .map(|record| u128::from(record.count))
        .sum()
}

/// Mean weekly count of each series, in input order; 0 for an empty series.
pub fn average_per_restaurant(series: &[RestaurantPageViews]) -> Vec<f64> {
    series
        .iter()
        .map(|restaurant| {
            if restaurant.page_views.is_empty() {
                return 0.0;
            }
            total_views(restaurant) as f64 / restaurant.page_views.len() as f64
        })
        .collect()
}

/// Count of the last completed week before `reference` for each series.
///
/// Series are ascending, so last week's bucket can only be one of the final
/// two records; only those are inspected. Missing buckets count as 0.
pub fn most_recent_completed_week(series: &[RestaurantPageViews], reference: NaiveDate) -> Vec<u64> {
    let Some(last_week) = WeekYear::preceding(reference) else {
        return vec![0; series.len()];
    };

    series
        .iter()
        .map(|restaurant| {
            restaurant
                .page_views
                .iter()
                .rev()
                .take(2)
                .find(|record| record.week_year() == last_week)
                .map_or(0, |record| record.count)
        })
        .collect()
}

/// Display name of each series, in input order.
pub fn restaurant_names(series: &[RestaurantPageViews]) -> Vec<String> {
    series.iter().map(|restaurant| restaurant.name.clone()).collect()
}

/// Bar-chart projection: last week's counts and all-time averages.
pub fn bar_chart_at(series: &[RestaurantPageViews], today: NaiveDate) -> BarChartData {
    BarChartData::new(
        most_recent_completed_week(series, today),
        average_per_restaurant(series),
        restaurant_names(series),
    )
}
