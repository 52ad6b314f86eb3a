//! Forum - Main Library
//!
//! Forum is the backend of a discussion board: user registration, login,
//! cookie sessions and the request pipeline that turns a session cookie back
//! into an identity. Posts, comments and reactions have their tables in the
//! schema; categories are seeded and listed.
//!
//! # Module Structure
//!
//! - **`shared`** - Framework-free pieces
//!   - Username, email and password validators
//!   - Validation error type
//!
//! - **`backend`** - Server-side code (only compiled with `ssr` feature)
//!   - Axum HTTP server, routes and middleware
//!   - Credential and session repositories over SQLite
//!   - Auth service coordinating both repositories
//!
//! # Feature Flags
//!
//! - **`ssr`** (default) - Enables the backend modules and the
//!   `forum-server` binary
//!
//! # Usage
//!
//! ```rust,no_run
//! use forum::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! // Serve `app` with axum::serve
//! # Ok(())
//! # }
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: fields validated, user and credential rows written in one transaction
//! 2. **Login**: credentials verified, prior session replaced, cookie set
//! 3. **Every request**: the identify stage resolves the cookie to an optional user
//! 4. **Protected routes**: the require-auth stage rejects anonymous requests with 401
//! 5. **Logout**: session row deleted, cookie cleared

/// Shared validation and error types
pub mod shared;

/// Backend server-side code
#[cfg(feature = "ssr")]
pub mod backend;
