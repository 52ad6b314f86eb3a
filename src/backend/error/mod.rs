//! Backend Error Module
//!
//! This module defines the error types of the backend server and their
//! conversion into HTTP responses.
//!
//! # Module Structure
//!
//! ```text
//! error/
//! ├── mod.rs        - Module exports and documentation
//! ├── types.rs      - AuthError and BackendError
//! └── conversion.rs - IntoResponse implementations
//! ```
//!
//! # Propagation
//!
//! Repositories return `AuthError`. The auth service passes those through
//! and adds `SharedError` validation failures; handlers lift both into
//! `BackendError` with `?`. Anything the taxonomy does not recognize is an
//! internal failure.

/// Error type definitions
pub mod types;

/// Error conversion implementations
pub mod conversion;

// Re-export commonly used types
pub use types::{AuthError, BackendError};
