//! Data Transfer Objects for API requests and responses.
//!
//! All DTOs use Serde for JSON serialization/deserialization and validator
//! for input validation. Chart responses serialize the domain chart types
//! directly.

pub mod chart;
pub mod health;
pub mod page_view;
