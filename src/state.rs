//! Shared application state injected into all handlers.

use std::sync::Arc;

use tokio::sync::mpsc;

use crate::application::services::{ChartLimits, ChartService, PageViewService};
use crate::domain::page_view_event::PageViewEvent;
use crate::domain::repositories::PageViewRepository;

/// Handler state: services over one page-view store plus the sender side of
/// the recording queue.
#[derive(Clone)]
pub struct AppState {
    pub page_view_service: Arc<PageViewService<dyn PageViewRepository>>,
    pub chart_service: Arc<ChartService<dyn PageViewRepository>>,
    pub page_view_sender: mpsc::Sender<PageViewEvent>,
}

impl AppState {
    pub fn new(
        repository: Arc<dyn PageViewRepository>,
        page_view_sender: mpsc::Sender<PageViewEvent>,
        chart_limits: ChartLimits,
    ) -> Self {
        Self {
            page_view_service: Arc::new(PageViewService::new(repository.clone())),
            chart_service: Arc::new(ChartService::new(repository, chart_limits)),
            page_view_sender,
        }
    }
}
