//! Application layer services implementing business logic.
//!
//! Services consume repository traits and provide a clean API for HTTP
//! handlers and the command-line tool.
//!
//! # Available Services
//!
//! - [`services::page_view_aligner`] - Pure calendar alignment of page-view series
//! - [`services::chart_service::ChartService`] - Line and bar chart data
//! - [`services::page_view_service::PageViewService`] - Page-view listing, seeding and recording

pub mod services;
