//! # Booking Common Library
//!
//! Shared code for the booking site:
//! - Record store (SQLite schema, models, repository functions)
//! - Query/aggregation layer (area grouping, search, show partitioning)
//! - Bootstrap configuration loading
//! - Time formatting for show listings

pub mod config;
pub mod db;
pub mod error;
pub mod query;
pub mod time;

pub use error::{Error, Result};
