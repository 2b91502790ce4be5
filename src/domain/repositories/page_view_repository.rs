//! Repository trait for weekly page-view buckets.

use async_trait::async_trait;
use thiserror::Error;

use crate::domain::entities::{NewPageView, RestaurantPageViews, WeekYear, WeeklyCount};

/// Failures reported by page-view store implementations.
#[derive(Debug, Clone, Error, PartialEq, Eq)]
pub enum StoreError {
    #[error("restaurant key must not be empty")]
    EmptyKey,

    #[error("week {} of year {} does not map to a calendar date", .0.week, .0.year)]
    InvalidWeek(WeekYear),

    #[error("page view store unavailable: {0}")]
    Unavailable(String),
}

impl StoreError {
    /// Whether retrying the same operation may succeed.
    pub fn is_transient(&self) -> bool {
        matches!(self, Self::Unavailable(_))
    }
}

/// Repository interface for page-view tracking.
///
/// Restaurants are keyed by a stable restaurant key. Listing returns them in
/// the order they were first recorded, each series ascending by
/// (year, week), which is the ordering the chart aligner relies on.
///
/// # Implementations
///
/// - [`crate::infrastructure::persistence::InMemoryPageViewRepository`] - process-local store
/// - Test mocks available with `cfg(test)`
#[cfg_attr(test, mockall::automock)]
#[async_trait]
pub trait PageViewRepository: Send + Sync {
    /// Adds one view to the restaurant's bucket for `week_year`, creating the
    /// bucket with a count of 1 when absent.
    ///
    /// Returns the bucket after the increment.
    ///
    /// # Errors
    ///
    /// Returns [`StoreError::EmptyKey`] or [`StoreError::InvalidWeek`] for
    /// malformed input, [`StoreError::Unavailable`] when the backend fails.
    async fn record_view(&self, view: NewPageView) -> Result<WeeklyCount, StoreError>;

    /// Returns every restaurant's weekly series.
    async fn list_page_views(&self) -> Result<Vec<RestaurantPageViews>, StoreError>;

    /// Number of restaurants with at least one bucket.
    async fn count_restaurants(&self) -> Result<usize, StoreError>;

    /// Loads a page-view dump, replacing the counts of buckets it names.
    ///
    /// Series are keyed by [`RestaurantPageViews::identity`]: an id shares
    /// the key space of [`NewPageView::restaurant_key`], a bare name does
    /// not. Buckets without a calendar date are skipped, and a series with
    /// none left is not registered. Returns the number of buckets written.
    async fn import(&self, series: Vec<RestaurantPageViews>) -> Result<usize, StoreError>;
}
