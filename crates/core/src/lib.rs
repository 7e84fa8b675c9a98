//! Domain layer for the gorgina inventory tracker.
//!
//! Pure types and helpers with no database or HTTP dependencies: error
//! taxonomy, input normalization for catalog fields, search pattern
//! construction and CSV export formatting.

pub mod catalog;
pub mod error;
pub mod export;
pub mod search;
pub mod types;
