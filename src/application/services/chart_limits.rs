//! Size bounds for aligned chart data.
//!
//! An aligned dataset holds one entry per axis week for every series, and
//! the axis runs from the earliest recorded week to "now". Both ends come
//! from the caller, so the output size is checked before aligning.

use chrono::NaiveDate;
use thiserror::Error;

use super::page_view_aligner::axis_weeks;
use crate::domain::entities::RestaurantPageViews;

/// Roughly twenty years of weekly dates.
pub const DEFAULT_MAX_AXIS_WEEKS: usize = 1_040;
pub const DEFAULT_MAX_CHART_CELLS: usize = 1_000_000;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum ChartLimitError {
    #[error("date axis of {weeks} weeks exceeds the limit of {max} weeks")]
    AxisTooLong { weeks: usize, max: usize },

    #[error("chart of {cells} data points exceeds the limit of {max}")]
    TooManyCells { cells: usize, max: usize },
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChartLimits {
    pub max_axis_weeks: usize,
    /// Axis weeks times series count.
    pub max_cells: usize,
}

impl Default for ChartLimits {
    fn default() -> Self {
        Self {
            max_axis_weeks: DEFAULT_MAX_AXIS_WEEKS,
            max_cells: DEFAULT_MAX_CHART_CELLS,
        }
    }
}

impl ChartLimits {
    /// Checks the line chart for `series` as of `today` against the limits.
    ///
    /// Returns the axis length on success.
    pub fn check(
        &self,
        series: &[RestaurantPageViews],
        today: NaiveDate,
    ) -> Result<usize, ChartLimitError> {
        let weeks = axis_weeks(series, today);
        if weeks > self.max_axis_weeks {
            return Err(ChartLimitError::AxisTooLong {
                weeks,
                max: self.max_axis_weeks,
            });
        }

        let cells = weeks.saturating_mul(series.len());
        if cells > self.max_cells {
            return Err(ChartLimitError::TooManyCells {
                cells,
                max: self.max_cells,
            });
        }

        Ok(weeks)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::entities::WeeklyCount;

    fn date(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    fn wildfire(week: i32, year: i32) -> RestaurantPageViews {
        RestaurantPageViews::new("Wildfire", vec![WeeklyCount::new(week, year, 1)])
    }

    #[test]
    fn test_within_limits() {
        let limits = ChartLimits::default();
        assert_eq!(limits.check(&[wildfire(10, 2020)], date(2020, 3, 8)), Ok(2));
        assert_eq!(limits.check(&[], date(2020, 3, 8)), Ok(0));
    }

    #[test]
    fn test_year_zero_record_is_rejected() {
        let limits = ChartLimits::default();

        let result = limits.check(&[wildfire(0, 0)], date(2026, 10, 19));

        assert!(matches!(
            result,
            Err(ChartLimitError::AxisTooLong { max: DEFAULT_MAX_AXIS_WEEKS, .. })
        ));
    }

    #[test]
    fn test_far_future_today_is_rejected() {
        let limits = ChartLimits::default();

        let result = limits.check(&[wildfire(10, 2020)], date(9999, 12, 31));

        assert!(matches!(result, Err(ChartLimitError::AxisTooLong { .. })));
    }

    #[test]
    fn test_many_empty_series_count_against_cells() {
        let limits = ChartLimits {
            max_axis_weeks: 100,
            max_cells: 50,
        };
        let mut series = vec![wildfire(10, 2020)];
        series.extend((0..30).map(|i| RestaurantPageViews::new(format!("Empty {i}"), vec![])));

        // 2 weeks for 31 series.
        assert_eq!(
            limits.check(&series, date(2020, 3, 8)),
            Err(ChartLimitError::TooManyCells { cells: 62, max: 50 })
        );
    }
}
