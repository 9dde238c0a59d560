//! Shared utility helpers.

pub mod error;
pub(crate) mod ranking;

pub use error::{DetSetError, Result as DetSetResult};
