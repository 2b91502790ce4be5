//! # Page-view Charts
//!
//! Weekly restaurant page-view tracking and calendar-aligned chart data,
//! built with Axum.
//!
//! ## Architecture
//!
//! - **Domain Layer** ([`domain`]) - Entities, week arithmetic and repository traits
//! - **Application Layer** ([`application`]) - Series alignment and chart services
//! - **Infrastructure Layer** ([`infrastructure`]) - Page-view store and seed loading
//! - **API Layer** ([`api`]) - REST API handlers, DTOs, and middleware
//!
//! ## Features
//!
//! - Page views bucketed by Sunday-start (week, year)
//! - Series aligned onto one gapless weekly date axis for multi-line charts
//! - Last-completed-week and average counts for bar charts
//! - Normalized popularity scores per restaurant
//! - Asynchronous view recording with retry logic
//!
//! ## Quick Start
//!
//! ```bash
//! export SEED_FILE="./seed/page-views.json"  # Optional
//! cargo run
//!
//! # Chart a dump without running the server
//! cargo run --bin chart -- line ./seed/page-views.json --as-of 2020-03-20
//! ```
//!
//! ## Configuration
//!
//! Service configuration is loaded from environment variables via [`config::Config`].
//! See [`config`] module for available options.

pub mod api;
pub mod application;
pub mod domain;
pub mod error;
pub mod infrastructure;
pub mod state;

pub mod config;
pub mod server;

pub mod routes;

pub use error::AppError;
pub use state::AppState;

/// Commonly used types for external consumers.
///
/// Re-exports frequently used types to simplify imports for library users
/// and integration tests.
pub mod prelude {
    pub use crate::application::services::page_view_aligner::{align, align_at, bar_chart_at};
    pub use crate::application::services::page_view_scorer::scores;
    pub use crate::application::services::{ChartLimits, ChartService, PageViewService};
    pub use crate::domain::entities::{
        AlignedDataset, AlignedSeries, BarChartData, RestaurantPageViews, RestaurantScore,
        WeekYear, WeeklyCount,
    };
    pub use crate::error::AppError;
    pub use crate::state::AppState;
}
