//! Unified error types surfaced by the runtime API.
//!
//! Wraps content loading and armory failures so clients can bubble them up
//! with consistent context.
use thiserror::Error;

use armory_core::ArmoryError;

pub type Result<T> = std::result::Result<T, RuntimeError>;

#[derive(Debug, Error)]
pub enum RuntimeError {
    /// A content file could not be read or parsed.
    #[error("failed to load {what}: {message}")]
    Content { what: &'static str, message: String },

    #[error(transparent)]
    Armory(#[from] ArmoryError),

    #[error("no item named {name} in the world")]
    UnknownItem { name: String },
}

impl RuntimeError {
    pub(crate) fn content(what: &'static str, error: impl std::fmt::Display) -> Self {
        RuntimeError::Content {
            what,
            message: format!("{error:#}"),
        }
    }
}
