//! Server Module
//!
//! Configuration, shared state and application assembly for the Axum
//! HTTP server.
//!
//! # Module Structure
//!
//! ```text
//! server/
//! ├── mod.rs          - Module exports and documentation
//! ├── config.rs       - ServerConfig built from the environment
//! ├── state.rs        - AppState and FromRef implementations
//! └── init.rs         - Database bootstrap and app creation
//! ```
//!
//! # Initialization Flow
//!
//! 1. **Configuration Loading**: `ServerConfig::from_env`
//! 2. **Database**: pool, schema, category seed
//! 3. **State Creation**: stores and auth service
//! 4. **Router Creation**: routes, identify stage, tracing
//!
//! # Example
//!
//! ```rust,no_run
//! use forum::backend::server::{create_app, ServerConfig};
//!
//! # async fn example() -> Result<(), Box<dyn std::error::Error>> {
//! let config = ServerConfig::from_env()?;
//! let app = create_app(config).await?;
//! # let _ = app;
//! # Ok(())
//! # }
//! ```

/// Application state management
pub mod state;

/// Server configuration loading
pub mod config;

/// Server initialization
pub mod init;

pub use config::{ConfigError, ServerConfig};
pub use init::{build_router, create_app};
pub use state::AppState;
