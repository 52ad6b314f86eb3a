//! API integration tests
//!
//! Integration tests for all API endpoints

#[cfg(feature = "ssr")]
mod auth_test;
#[cfg(feature = "ssr")]
mod forum_test;
