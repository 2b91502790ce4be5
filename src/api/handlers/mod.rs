//! HTTP request handlers for API endpoints.
//!
//! Each handler module corresponds to a logical grouping of endpoints.

pub mod charts;
pub mod fallback;
pub mod health;
pub mod page_views;

pub use charts::{
    align_payload_handler, bar_chart_handler, bar_payload_handler, line_chart_handler,
    score_payload_handler, scores_handler,
};
pub use fallback::not_found_handler;
pub use health::health_handler;
pub use page_views::{list_page_views_handler, record_page_view_handler};
