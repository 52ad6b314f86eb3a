//! Backend Module
//!
//! This module contains all server-side code for the forum. It provides an
//! Axum HTTP server over a SQLite database with cookie-based sessions.
//!
//! # Architecture
//!
//! The backend is organized into focused submodules:
//!
//! - **`server`** - Configuration, application state, app creation
//! - **`database`** - Connection pool and schema bootstrap
//! - **`auth`** - Password hashing, user and session repositories, auth service, handlers
//! - **`middleware`** - Identify and require-auth stages, client address extractor
//! - **`forum`** - Categories and the home page
//! - **`routes`** - Router assembly
//! - **`error`** - Error taxonomy and HTTP conversion
//!
//! # Module Structure
//!
//! ```text
//! backend/
//! ├── mod.rs          - Module exports and documentation
//! ├── server/         - Config, state and initialization
//! ├── database/       - Pool and schema
//! ├── auth/           - Authentication
//! ├── middleware/     - Request middleware
//! ├── forum/          - Forum content
//! ├── routes/         - Route configuration
//! └── error/          - Error types
//! ```
//!
//! # Concurrency
//!
//! Each request runs as its own task. The only shared state is the
//! `SqlitePool`; multi-statement writes (user + credential, session delete +
//! insert) each run inside one transaction so partial writes are never
//! visible.

/// Server setup and configuration
pub mod server;

/// Database pool and schema bootstrap
pub mod database;

/// Authentication and user management
pub mod auth;

/// Middleware for request processing
pub mod middleware;

/// Forum content: categories and home page
pub mod forum;

/// Route configuration
pub mod routes;

/// Backend error types
pub mod error;

/// Re-export commonly used types
pub use server::{create_app, AppState, ServerConfig};
pub use error::{AuthError, BackendError};
