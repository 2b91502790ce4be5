//! Page-view listing and import service.

use std::sync::Arc;

use crate::domain::entities::RestaurantPageViews;
use crate::domain::repositories::PageViewRepository;
use crate::error::AppError;

/// Service over the page-view store.
///
/// Single views are recorded asynchronously by the page-view worker; this
/// service covers listing, counting and bulk import.
pub struct PageViewService<R: PageViewRepository + ?Sized> {
    repository: Arc<R>,
}

impl<R: PageViewRepository + ?Sized> PageViewService<R> {
    pub fn new(repository: Arc<R>) -> Self {
        Self { repository }
    }

    /// All stored series, each ascending by (year, week).
    pub async fn list_page_views(&self) -> Result<Vec<RestaurantPageViews>, AppError> {
        Ok(self.repository.list_page_views().await?)
    }

    pub async fn count_restaurants(&self) -> Result<usize, AppError> {
        Ok(self.repository.count_restaurants().await?)
    }

    /// Imports a page-view dump and returns the number of buckets written.
    pub async fn import(&self, series: Vec<RestaurantPageViews>) -> Result<usize, AppError> {
        let restaurants = series.len();
        let buckets = self.repository.import(series).await?;
        tracing::info!(restaurants, buckets, "Imported page views");
        Ok(buckets)
    }
}
