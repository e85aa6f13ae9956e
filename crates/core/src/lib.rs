//! Pure domain logic for the team skill-tracking dashboard.
//!
//! This crate contains no I/O and no shared state; all data is passed in
//! by the caller. The store and API crates build on top of it.

pub mod error;
pub mod history;
pub mod import;
pub mod level;
pub mod matrix;
pub mod model;
pub mod trend;
pub mod types;
pub mod week;
