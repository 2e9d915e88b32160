//! Shared error, validation, and identity types for Castwright crates

#![allow(clippy::must_use_candidate)]

mod error;
mod user;
pub mod validate;

pub use error::{ApiError, HttpError};
pub use user::AuthenticatedUser;
