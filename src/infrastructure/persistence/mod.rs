//! Page-view store implementations.

pub mod memory_page_view_repository;

pub use memory_page_view_repository::InMemoryPageViewRepository;
