//! Authentication Module
//!
//! This module handles user registration, login and the session lifecycle.
//! It provides the HTTP handlers for the authentication endpoints and the
//! stores they sit on.
//!
//! # Architecture
//!
//! The auth module is organized into focused submodules:
//!
//! - **`password`** - bcrypt hashing and verification
//! - **`users`** - User model and credential store (`user`, `user_auth`)
//! - **`sessions`** - Session model and session store (`sessions`)
//! - **`service`** - Registration, login and logout on top of both stores
//! - **`handlers`** - HTTP handlers for authentication endpoints
//!
//! # Module Structure
//!
//! ```text
//! auth/
//! ├── mod.rs          - Module exports and documentation
//! ├── password.rs     - Password hasher
//! ├── users.rs        - User model and credential store
//! ├── sessions.rs     - Session model and session store
//! ├── service.rs      - Auth service
//! └── handlers/       - HTTP handlers
//!     ├── mod.rs      - Handler exports
//!     ├── types.rs    - Request/response types
//!     ├── register.rs - User registration handler
//!     ├── login.rs    - Login handler (sets the session cookie)
//!     └── logout.rs   - Logout handler (clears the session cookie)
//! ```
//!
//! # Authentication Flow
//!
//! 1. **Register**: username, email and password are validated → user and credential rows created → 201
//! 2. **Login**: credentials verified → previous session replaced → cookie set → 200
//! 3. **Logout**: session row deleted → cookie cleared → 200
//!
//! # Security
//!
//! - Passwords are hashed using bcrypt before storage
//! - Session tokens are 32 random bytes, hex encoded, carried in an http-only cookie
//! - One session per user; logging in again ends the previous session
//! - Invalid credentials return 401 with one uniform message (no account enumeration)

pub mod password;
pub mod users;
pub mod sessions;
pub mod service;
pub mod handlers;

pub use password::PasswordHasher;
pub use service::AuthService;
pub use sessions::{Session, SessionRepository};
pub use users::{User, UserRepository};
pub use handlers::{login, logout, register};
pub use handlers::types::{LoginRequest, LoginResponse, RegisterRequest};
