pub mod catalog;
pub mod export;
pub mod usage;
