//! Content generation for Castwright
//!
//! Prompt builders, response normalizers, the outline parser and the mock
//! data generator, tied together by [`ContentService`].

#![allow(clippy::must_use_candidate, clippy::missing_errors_doc)]

pub mod mock;
pub mod normalize;
pub mod outline;
pub mod prompts;
pub mod rating;
mod service;
pub mod types;

pub use service::ContentService;
