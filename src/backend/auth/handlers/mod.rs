//! Authentication Handlers Module
//!
//! HTTP handlers for the authentication endpoints.
//!
//! # Handlers
//!
//! - **`register`** - POST /api/auth/register - User registration
//! - **`login`** - POST /api/auth/login - Open a session
//! - **`logout`** - POST /api/auth/logout - End the session (requires auth)
//!
//! Body parse failures are reported as 400 "Invalid request body"; every
//! other failure goes through [`BackendError`](crate::backend::error::BackendError).

/// Request and response types
pub mod types;

/// Registration handler
pub mod register;

/// Login handler
pub mod login;

/// Logout handler
pub mod logout;

pub use types::{LoginRequest, LoginResponse, RegisterRequest};

pub use login::login;
pub use logout::logout;
pub use register::register;
