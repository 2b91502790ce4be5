//! Domain layer containing business entities and logic.
//!
//! Defines entities, week arithmetic, repository interfaces, and the
//! page-view recording pipeline, independent of HTTP and storage concerns.
//!
//! # Architecture
//!
//! - [`entities`] - Core data structures (weekly buckets, chart data sets)
//! - [`calendar`] - Sunday-started week numbering and date-axis generation
//! - [`repositories`] - Data access trait definitions
//! - [`page_view_event`] - Page-view event model
//! - [`page_view_worker`] - Asynchronous page-view recording worker
//!
//! # Page View Flow
//!
//! 1. HTTP handler receives a page-view notification
//! 2. [`page_view_event::PageViewEvent`] is sent to an async channel
//! 3. [`page_view_worker::run_page_view_worker`] buckets it by week, with retry
//! 4. The bucket is incremented via [`repositories::PageViewRepository`]

pub mod calendar;
pub mod entities;
pub mod page_view_event;
pub mod page_view_worker;
pub mod repositories;
