//! HTTP layer for the skill dashboard.
//!
//! Exposed as a library so integration tests can build the exact router
//! and middleware stack the production binary uses.

pub mod config;
pub mod error;
pub mod handlers;
pub mod router;
pub mod routes;
pub mod state;
