//! Request handlers.
//!
//! Each submodule provides async handler functions for one resource.
//! Handlers delegate to the shared [`Store`](skillboard_store::Store) and
//! map errors via [`AppError`](crate::error::AppError).

pub mod dashboard;
pub mod import;
pub mod member;
pub mod rating;
pub mod skill;
