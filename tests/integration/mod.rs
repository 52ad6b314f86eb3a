//! Integration tests
//!
//! HTTP flows through the full router and schema checks against a real
//! SQLite database.

pub mod api;
pub mod database;
