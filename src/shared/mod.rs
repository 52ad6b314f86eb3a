//! Shared Module
//!
//! This module contains pieces that do not depend on the HTTP server or the
//! database: the field validators used before any registration touches
//! storage, and the error type they report.
//!
//! # Overview
//!
//! Everything here is plain Rust and compiles without the `ssr` feature, so
//! validators can be reused by any client of the library.

/// Shared error types
pub mod error;

/// Username, email and password validation rules
pub mod validation;

/// Re-export commonly used types for convenience
pub use error::SharedError;
pub use validation::{validate_email, validate_password, validate_username};
