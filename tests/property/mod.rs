//! Property-based tests
//!
//! Validators and the password hasher over generated input.

pub mod validation_proptest;
#[cfg(feature = "ssr")]
pub mod hashing_proptest;
