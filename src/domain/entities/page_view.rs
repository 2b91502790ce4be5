//! Page-view entities: weekly buckets and per-restaurant series.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

use crate::domain::calendar;

/// A (week, year) pair keying one weekly bucket of page views.
///
/// Field order matters: the derived ordering compares `year` first and
/// `week` second, which is the chronological order of buckets.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct WeekYear {
    pub year: i32,
    pub week: i32,
}

impl WeekYear {
    pub fn new(week: i32, year: i32) -> Self {
        Self { year, week }
    }

    /// Negative weeks or years never map onto a calendar date.
    pub fn is_valid(&self) -> bool {
        self.week >= 0 && self.year >= 0
    }

    /// The Sunday that starts this week, or `None` for an invalid pair.
    pub fn start_date(&self) -> Option<NaiveDate> {
        calendar::week_year_to_date(self.week, self.year)
    }

    /// The week that contains `date`.
    ///
    /// Weeks start on Sunday and week 1 of a year is the week containing
    /// January 1, so a week straddling New Year belongs to the new year.
    /// `start_date` of the result is always the Sunday on or before `date`.
    pub fn containing(date: NaiveDate) -> Option<Self> {
        calendar::week_of_year(date)
    }

    /// The last full week before the week containing `date`.
    pub fn preceding(date: NaiveDate) -> Option<Self> {
        let sunday = calendar::sunday_on_or_before(date)?;
        let previous = sunday.checked_sub_days(chrono::Days::new(calendar::DAYS_IN_WEEK))?;
        Self::containing(previous)
    }
}

/// One weekly page-view bucket as produced by the page-view store.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct WeeklyCount {
    pub week: i32,
    pub year: i32,
    pub count: u64,
}

impl WeeklyCount {
    pub fn new(week: i32, year: i32, count: u64) -> Self {
        Self { week, year, count }
    }

    pub fn week_year(&self) -> WeekYear {
        WeekYear::new(self.week, self.year)
    }
}

/// All weekly page views of one restaurant.
///
/// `page_views` is expected in ascending (year, week) order. The store
/// guarantees it; nothing downstream re-sorts.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct RestaurantPageViews {
    pub name: String,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<String>,
    #[serde(default)]
    pub page_views: Vec<WeeklyCount>,
}

impl RestaurantPageViews {
    pub fn new(name: impl Into<String>, page_views: Vec<WeeklyCount>) -> Self {
        Self {
            name: name.into(),
            id: None,
            page_views,
        }
    }

    pub fn with_id(mut self, id: impl Into<String>) -> Self {
        self.id = Some(id.into());
        self
    }

    /// Key used to group series: the stable id when present, else the name.
    pub fn identity(&self) -> RestaurantIdentity<'_> {
        match self.id.as_deref() {
            Some(id) => RestaurantIdentity::Id(id),
            None => RestaurantIdentity::Name(&self.name),
        }
    }
}

/// Grouping key of a series.
///
/// Ids and names live in separate key spaces: an id equal to some other
/// restaurant's display name never merges the two.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum RestaurantIdentity<'a> {
    Id(&'a str),
    Name(&'a str),
}

/// Input for recording a single page view into the store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct NewPageView {
    pub restaurant_key: String,
    pub name: String,
    pub week_year: WeekYear,
}
