//! Middleware Module
//!
//! HTTP middleware and request extractors for the backend server.
//!
//! # Architecture
//!
//! - **`auth`** - Identify and require-auth stages, identity extractors
//! - **`client_addr`** - Peer address extractor used when opening sessions
//!
//! # Example
//!
//! ```rust,ignore
//! use axum::middleware::{from_fn, from_fn_with_state};
//! use forum::backend::middleware::{identify, require_auth};
//!
//! let router = Router::new()
//!     .route("/api/auth/logout", post(logout).route_layer(from_fn(require_auth)))
//!     .layer(from_fn_with_state(state.clone(), identify))
//!     .with_state(state);
//! ```

pub mod auth;
pub mod client_addr;

pub use auth::{current_user, identify, require_auth, resolve_identity, AuthUser, CurrentUser, SESSION_COOKIE};
pub use client_addr::{ClientAddr, UNKNOWN_CLIENT};
