//! Backend test support utilities
//!
//! Shared by the backend's integration tests: idempotent logging setup and
//! assertions over RFC 7807 problem-details responses. Kept free of backend
//! types so the assertions check the wire contract, not the Rust structs.

pub mod logging;
pub mod problem_details;
