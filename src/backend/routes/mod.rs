//! Route Configuration Module
//!
//! This module configures all HTTP routes for the backend server.
//!
//! # Module Structure
//!
//! ```text
//! routes/
//! ├── mod.rs          - Module exports and documentation
//! ├── router.rs       - Main router creation and layers
//! └── api_routes.rs   - API endpoints (auth, categories)
//! ```
//!
//! # Routes
//!
//! - `GET /` - Home page greeting
//! - `POST /api/auth/register` - User registration
//! - `POST /api/auth/login` - User login
//! - `POST /api/auth/logout` - Logout (requires auth)
//! - `GET /api/categories` - Forum categories
//!
//! Every route runs behind the identify stage; only logout additionally
//! requires an identified user.

/// Main router creation
pub mod router;

/// API endpoint handlers
pub mod api_routes;

pub use router::create_router;
