//! Core domain entities representing the page-view data model.
//!
//! Entities are plain data structures without business logic. Page-view
//! entities double as the JSON contract of the page-view store, so they
//! carry serde derives with camelCase field names.
//!
//! # Entity Types
//!
//! - [`WeeklyCount`] - Page views recorded in one (week, year) bucket
//! - [`RestaurantPageViews`] - All weekly buckets of one restaurant
//! - [`AlignedDataset`] - Multi-line chart data on a shared weekly axis
//! - [`BarChartData`] - Last-week and average counts per restaurant
//! - [`RestaurantScore`] - Normalized popularity score
//!
//! `NewPageView` is the creation input for a single recorded view.

pub mod chart;
pub mod page_view;
pub mod score;

pub use chart::{AlignedDataset, AlignedSeries, BarChartData};
pub use page_view::{NewPageView, RestaurantIdentity, RestaurantPageViews, WeekYear, WeeklyCount};
pub use score::RestaurantScore;
