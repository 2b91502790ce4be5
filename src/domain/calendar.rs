//! Week arithmetic on calendar dates.
//!
//! Weeks start on Sunday. Week `n` of a year is the Sunday-started week
//! containing January 1 plus `(n - 1) * 7` days, so week 1 may begin in the
//! previous December. All dates are plain calendar days: there is no
//! time-of-day component, so daylight-saving shifts never skew a difference.

use chrono::{Datelike, Days, Local, NaiveDate, TimeDelta};

use crate::domain::entities::WeekYear;

pub const DAYS_IN_WEEK: u64 = 7;

/// Today's date in the server's local time zone.
pub fn today() -> NaiveDate {
    Local::now().date_naive()
}

/// Maps a (week, year) pair to the Sunday starting that week.
///
/// Returns `None` when `week` or `year` is negative, or when the result
/// falls outside the representable calendar. Week numbers are otherwise not
/// range-checked: week 60 of a year is simply a date in the next year.
///
/// ```
/// use chrono::NaiveDate;
/// use pageview_charts::domain::calendar::week_year_to_date;
///
/// assert_eq!(week_year_to_date(4, 2020), NaiveDate::from_ymd_opt(2020, 1, 19));
/// assert_eq!(week_year_to_date(-1, 2020), None);
/// ```
pub fn week_year_to_date(week: i32, year: i32) -> Option<NaiveDate> {
    if week < 0 || year < 0 {
        return None;
    }

    let january_first = NaiveDate::from_ymd_opt(year, 1, 1)?;
    let offset = TimeDelta::try_days((i64::from(week) - 1) * DAYS_IN_WEEK as i64)?;
    let date = january_first.checked_add_signed(offset)?;
    sunday_on_or_before(date)
}

/// Rolls `date` back to the Sunday of its week (a Sunday maps to itself).
pub fn sunday_on_or_before(date: NaiveDate) -> Option<NaiveDate> {
    let weekday_index = date.weekday().num_days_from_sunday();
    date.checked_sub_days(Days::new(u64::from(weekday_index)))
}

/// Rounded number of whole weeks between two dates, in either order.
///
/// Partial weeks round half-up; with whole-day differences an exact half
/// week never occurs, so 3 days round down and 4 days round up.
pub fn weeks_between(a: NaiveDate, b: NaiveDate) -> usize {
    let days = a.signed_duration_since(b).num_days().unsigned_abs();
    let weeks = (days + DAYS_IN_WEEK / 2) / DAYS_IN_WEEK;
    usize::try_from(weeks).unwrap_or(usize::MAX)
}

/// Week numbering that inverts [`week_year_to_date`].
///
/// A week straddling New Year is week 1 of the new year, so every Sunday
/// has exactly one (week, year) label.
pub fn week_of_year(date: NaiveDate) -> Option<WeekYear> {
    let sunday = sunday_on_or_before(date)?;
    let year = sunday.year();

    if week_year_to_date(1, year + 1) == Some(sunday) {
        return Some(WeekYear::new(1, year + 1));
    }

    let first_sunday = week_year_to_date(1, year)?;
    let week = i32::try_from(weeks_between(first_sunday, sunday)).ok()?;
    Some(WeekYear::new(week + 1, year))
}

/// Consecutive dates 7 days apart, from a start date up to and including an
/// end date.
///
/// Produced by [`build_date_axis`]. The iterator is finite and cloning it
/// restarts generation from the clone's position.
#[derive(Debug, Clone)]
pub struct WeeklyDates {
    next: Option<NaiveDate>,
    end: NaiveDate,
}

impl Iterator for WeeklyDates {
    type Item = NaiveDate;

    fn next(&mut self) -> Option<NaiveDate> {
        let current = self.next.filter(|date| *date <= self.end)?;
        self.next = current.checked_add_days(Days::new(DAYS_IN_WEEK));
        Some(current)
    }
}

/// Weekly dates from `start` while `<= end`. Empty when `start > end`.
pub fn build_date_axis(start: NaiveDate, end: NaiveDate) -> WeeklyDates {
    WeeklyDates {
        next: Some(start),
        end,
    }
}
