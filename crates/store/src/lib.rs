//! In-memory entity store for the skill dashboard.
//!
//! Holds team members, skills, and weekly skill ratings behind a single
//! read/write lock, with store-owned id allocation and cascade deletes.
//! Construct a [`Store`] explicitly and hand it to whoever needs it; there
//! is no global instance.

pub mod seed;
pub mod store;

pub use store::Store;
