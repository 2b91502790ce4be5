//! Background worker writing page-view events to the store.

use std::sync::Arc;

use metrics::counter;
use tokio::sync::mpsc;
use tokio_retry::RetryIf;
use tokio_retry::strategy::{ExponentialBackoff, jitter};

use crate::domain::entities::{NewPageView, WeekYear, WeeklyCount};
use crate::domain::page_view_event::PageViewEvent;
use crate::domain::repositories::{PageViewRepository, StoreError};

/// Consumes page-view events until every sender is dropped.
///
/// Each event is bucketed into the week containing its `viewed_on` day and
/// recorded with up to `retry_attempts` retries on transient store errors.
/// Failures are logged and counted, never propagated.
pub async fn run_page_view_worker(
    mut rx: mpsc::Receiver<PageViewEvent>,
    repository: Arc<dyn PageViewRepository>,
    retry_attempts: usize,
) {
    while let Some(event) = rx.recv().await {
        process_event(&event, repository.as_ref(), retry_attempts).await;
    }

    tracing::info!("Page view channel closed, worker stopped");
}

async fn process_event(
    event: &PageViewEvent,
    repository: &dyn PageViewRepository,
    retry_attempts: usize,
) -> Option<WeeklyCount> {
    let Some(week_year) = WeekYear::containing(event.viewed_on) else {
        counter!("page_views_dropped_total").increment(1);
        tracing::warn!(
            restaurant_key = %event.restaurant_key,
            viewed_on = %event.viewed_on,
            "Page view date has no week bucket, dropping"
        );
        return None;
    };

    let view = NewPageView {
        restaurant_key: event.restaurant_key.clone(),
        name: event.name.clone(),
        week_year,
    };

    let strategy = ExponentialBackoff::from_millis(10)
        .map(jitter)
        .take(retry_attempts);

    match RetryIf::spawn(
        strategy,
        || repository.record_view(view.clone()),
        StoreError::is_transient,
    )
    .await
    {
        Ok(bucket) => {
            counter!("page_views_recorded_total").increment(1);
            tracing::debug!(
                restaurant_key = %view.restaurant_key,
                week = bucket.week,
                year = bucket.year,
                count = bucket.count,
                "Page view recorded"
            );
            Some(bucket)
        }
        Err(e) => {
            counter!("page_views_failed_total").increment(1);
            tracing::error!(
                restaurant_key = %view.restaurant_key,
                error = %e,
                "Failed to record page view"
            );
            None
        }
    }
}
