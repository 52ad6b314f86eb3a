//! Database integration tests
