//! Common error infrastructure for armory-core.
//!
//! This module provides shared types and traits used across all error types in armory-core.
//! Domain-specific errors (e.g., `ItemError`, `AttachError`) are defined in the engine
//! alongside the operations they validate.
//!
//! # Design Principles
//!
//! - **Type Safety**: Each component has its own error type with specific variants
//! - **Severity Classification**: Errors are categorized for logging and recovery
//! - **Silent for players**: A rejected operation leaves state untouched; only the log
//!   records it

use crate::state::ItemId;

/// Severity level of an error, used for categorization and logging.
///
/// - **Recoverable**: Temporary conditions that may succeed on a later frame
/// - **Validation**: Invalid request for the current state (UI races, double clicks)
/// - **Internal**: A condition the normal flow cannot produce; indicates a caller bug
/// - **Fatal**: A broken invariant between linked items
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, strum::Display)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[strum(serialize_all = "snake_case")]
pub enum ErrorSeverity {
    /// Recoverable error - can retry on a later frame.
    ///
    /// Examples: nothing in reach to pick up
    Recoverable,

    /// Validation error - invalid request for the current state.
    ///
    /// Examples: item already collected, attachment incompatible with weapon
    Validation,

    /// Internal error - caller bug or unreachable state.
    ///
    /// Examples: weapon slot index out of range, detach of an unmounted attachment
    Internal,

    /// Fatal error - linked state disagrees with itself.
    ///
    /// Examples: attachment owner and weapon slot point at different items
    Fatal,
}

impl ErrorSeverity {
    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }

    /// Returns true if this error indicates an internal bug.
    pub const fn is_internal(&self) -> bool {
        matches!(self, Self::Internal | Self::Fatal)
    }
}

/// Common trait for all armory-core errors.
///
/// # Implementation Guidelines
///
/// - All error enums should implement this trait
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on who is at fault, not on impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }

    /// Item the error is about, if any.
    fn subject(&self) -> Option<ItemId> {
        None
    }
}

/// Logs a rejected operation at a level matching its severity.
///
/// Called once at each public entry point so nested helpers do not log twice.
pub(crate) fn report<E: GameError>(operation: &'static str, error: &E) {
    let code = error.error_code();
    match error.severity() {
        ErrorSeverity::Recoverable => {
            tracing::debug!(operation, code, subject = ?error.subject(), "{error}")
        }
        ErrorSeverity::Validation => {
            tracing::warn!(operation, code, subject = ?error.subject(), "{error}")
        }
        ErrorSeverity::Internal | ErrorSeverity::Fatal => {
            tracing::error!(operation, code, subject = ?error.subject(), "{error}")
        }
    }
}

/// Extension for logging the error side of a result at an entry point.
pub(crate) trait ReportExt {
    fn reported(self, operation: &'static str) -> Self;
}

impl<T, E: GameError> ReportExt for Result<T, E> {
    fn reported(self, operation: &'static str) -> Self {
        if let Err(error) = &self {
            report(operation, error);
        }
        self
    }
}
