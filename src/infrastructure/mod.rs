//! Infrastructure layer for external integrations.
//!
//! Implements the repository traits defined by the domain layer.
//!
//! # Modules
//!
//! - [`persistence`] - Page-view store implementations
//! - [`seed`] - Page-view dumps loaded from JSON files

pub mod persistence;
pub mod seed;
