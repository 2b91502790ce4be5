//! Business logic services for the application layer.

pub mod chart_limits;
pub mod chart_service;
pub mod page_view_aligner;
pub mod page_view_scorer;
pub mod page_view_service;

pub use chart_limits::{ChartLimitError, ChartLimits};
pub use chart_service::ChartService;
pub use page_view_service::PageViewService;
