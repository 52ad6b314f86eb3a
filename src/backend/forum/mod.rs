//! Forum Module
//!
//! Public forum pages and read-only forum data.
//!
//! - **`home`** - GET / greeting that reflects the identified user
//! - **`categories`** - Category model and GET /api/categories

pub mod categories;
pub mod home;

pub use categories::{list_categories, Category};
pub use home::home;
