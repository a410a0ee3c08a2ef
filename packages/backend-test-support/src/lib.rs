//! Shared helpers for backend unit and integration tests.
//!
//! Kept free of backend types so both the library's own tests and the
//! integration tests can depend on it without a cycle.

pub mod logging;
pub mod problem_details;
