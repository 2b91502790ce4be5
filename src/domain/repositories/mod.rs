//! Repository trait definitions for the domain layer.
//!
//! Traits define the contract for data operations; implementations live in
//! `crate::infrastructure::persistence`. Mock implementations are generated
//! via `mockall` for service tests.
//!
//! # Available Repositories
//!
//! - [`PageViewRepository`] - Weekly page-view recording and listing
//!
//! See integration tests in `tests/repository_page_view.rs` for usage examples.

pub mod page_view_repository;

pub use page_view_repository::{PageViewRepository, StoreError};

#[cfg(test)]
pub use page_view_repository::MockPageViewRepository;
