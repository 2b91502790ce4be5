#![allow(dead_code)]

use std::sync::Arc;

use pageview_charts::application::services::ChartLimits;
use pageview_charts::domain::entities::{RestaurantPageViews, WeeklyCount};
use pageview_charts::domain::page_view_event::PageViewEvent;
use pageview_charts::infrastructure::persistence::InMemoryPageViewRepository;
use pageview_charts::state::AppState;
use tokio::sync::mpsc;

/// Wildfire weeks 10/11 of 2020 plus Poke Doke week 11.
pub fn sample_page_views() -> Vec<RestaurantPageViews> {
    vec![
        RestaurantPageViews::new(
            "Wildfire",
            vec![WeeklyCount::new(10, 2020, 2), WeeklyCount::new(11, 2020, 10)],
        )
        .with_id("4"),
        RestaurantPageViews::new("Poke Doke", vec![WeeklyCount::new(11, 2020, 8)]).with_id("7"),
    ]
}

pub fn create_test_state() -> (
    AppState,
    mpsc::Receiver<PageViewEvent>,
    Arc<InMemoryPageViewRepository>,
) {
    create_test_state_with_capacity(100)
}

pub fn create_test_state_with_capacity(
    capacity: usize,
) -> (
    AppState,
    mpsc::Receiver<PageViewEvent>,
    Arc<InMemoryPageViewRepository>,
) {
    create_test_state_with(capacity, ChartLimits::default())
}

pub fn create_test_state_with_limits(
    limits: ChartLimits,
) -> (
    AppState,
    mpsc::Receiver<PageViewEvent>,
    Arc<InMemoryPageViewRepository>,
) {
    create_test_state_with(100, limits)
}

fn create_test_state_with(
    capacity: usize,
    limits: ChartLimits,
) -> (
    AppState,
    mpsc::Receiver<PageViewEvent>,
    Arc<InMemoryPageViewRepository>,
) {
    let repository = Arc::new(InMemoryPageViewRepository::new());
    let (tx, rx) = mpsc::channel(capacity);

    let state = AppState::new(repository.clone(), tx, limits);

    (state, rx, repository)
}

pub async fn create_seeded_state() -> (AppState, mpsc::Receiver<PageViewEvent>) {
    let (state, rx, _repository) = create_test_state();
    state
        .page_view_service
        .import(sample_page_views())
        .await
        .unwrap();
    (state, rx)
}
