//! Common test utilities and helpers
//!
//! This module provides shared utilities for all tests including:
//! - In-memory database and app state fixtures
//! - Authentication test helpers
//! - Custom assertion macros

pub mod assertions;
#[cfg(feature = "ssr")]
pub mod auth_helpers;

#[cfg(feature = "ssr")]
pub use auth_helpers::*;
#[cfg(feature = "ssr")]
pub use database::*;
