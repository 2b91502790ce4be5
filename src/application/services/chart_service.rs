//! Chart data and scoring service over the page-view store.

use std::sync::Arc;

use chrono::NaiveDate;

use super::chart_limits::ChartLimits;
use super::{page_view_aligner, page_view_scorer};
use crate::domain::calendar;
use crate::domain::entities::{AlignedDataset, BarChartData, RestaurantPageViews, RestaurantScore};
use crate::domain::repositories::PageViewRepository;
use crate::error::AppError;

/// Builds chart data and scores either from the store or from a supplied
/// payload.
///
/// `as_of` pins the day treated as "now"; `None` means the local date.
pub struct ChartService<R: PageViewRepository + ?Sized> {
    repository: Arc<R>,
    limits: ChartLimits,
}

impl<R: PageViewRepository + ?Sized> ChartService<R> {
    pub fn new(repository: Arc<R>, limits: ChartLimits) -> Self {
        Self { repository, limits }
    }

    /// Multi-line chart data for everything in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the chart would exceed the
    /// configured limits, [`AppError::Internal`] when the store cannot be read.
    pub async fn line_chart(&self, as_of: Option<NaiveDate>) -> Result<AlignedDataset, AppError> {
        let series = self.repository.list_page_views().await?;
        self.line_chart_for(&series, as_of)
    }

    /// Bar chart data for everything in the store.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Internal`] when the store cannot be read.
    pub async fn bar_chart(&self, as_of: Option<NaiveDate>) -> Result<BarChartData, AppError> {
        let series = self.repository.list_page_views().await?;
        Ok(self.bar_chart_for(&series, as_of))
    }

    /// Popularity scores for everything in the store.
    pub async fn scores(&self) -> Result<Vec<RestaurantScore>, AppError> {
        let series = self.repository.list_page_views().await?;
        Ok(self.scores_for(&series))
    }

    /// Multi-line chart data for a supplied payload.
    ///
    /// # Errors
    ///
    /// Returns [`AppError::Validation`] when the chart would exceed the
    /// configured limits.
    pub fn line_chart_for(
        &self,
        series: &[RestaurantPageViews],
        as_of: Option<NaiveDate>,
    ) -> Result<AlignedDataset, AppError> {
        let today = as_of.unwrap_or_else(calendar::today);
        self.limits.check(series, today)?;

        let dataset = match as_of {
            Some(today) => page_view_aligner::align_at(series, today),
            None => page_view_aligner::align(series),
        };
        tracing::debug!(
            restaurants = dataset.restaurant_data.len(),
            weeks = dataset.dates.len(),
            %today,
            "Built line chart data"
        );
        Ok(dataset)
    }

    /// Bar chart data for a supplied payload.
    pub fn bar_chart_for(&self, series: &[RestaurantPageViews], as_of: Option<NaiveDate>) -> BarChartData {
        let today = as_of.unwrap_or_else(calendar::today);
        let bar = page_view_aligner::bar_chart_at(series, today);
        tracing::debug!(restaurants = bar.restaurant_names.len(), %today, "Built bar chart data");
        bar
    }

    /// Popularity scores for a supplied payload.
    pub fn scores_for(&self, series: &[RestaurantPageViews]) -> Vec<RestaurantScore> {
        let scores = page_view_scorer::scores(series);
        tracing::debug!(restaurants = scores.len(), "Computed restaurant scores");
        scores
    }
}
