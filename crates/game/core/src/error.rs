//! Common error infrastructure for game-core.
//!
//! Domain errors (e.g. [`StateError`](crate::StateError)) are defined next to
//! the state they validate and classified through [`GameError`] so callers can
//! log and branch on them uniformly.

/// Severity level of an error, used for categorization and recovery strategies.
///
/// - **Recoverable**: the command was refused but the session may continue
/// - **Validation**: invalid input that should be rejected without retry
/// - **Fatal**: the state cannot be constructed or used at all
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ErrorSeverity {
    /// Recoverable error - the player can pick another command.
    ///
    /// Examples: item not held, nothing to consume
    Recoverable,

    /// Validation error - invalid input, should not retry without changes.
    ///
    /// Examples: malformed grid, unknown glyph
    Validation,

    /// Fatal error - no playable state could be produced.
    ///
    /// Examples: game definition without levels
    Fatal,
}

impl ErrorSeverity {
    /// Returns a human-readable description of this severity level.
    pub const fn as_str(&self) -> &'static str {
        match self {
            Self::Recoverable => "recoverable",
            Self::Validation => "validation",
            Self::Fatal => "fatal",
        }
    }

    /// Returns true if this error is potentially recoverable.
    pub const fn is_recoverable(&self) -> bool {
        matches!(self, Self::Recoverable)
    }
}

/// Common trait for all game-core errors.
///
/// # Implementation Guidelines
///
/// - Use `#[derive(thiserror::Error)]` for Display/Error impl
/// - Classify severity based on recoverability, not impact
pub trait GameError: core::fmt::Display + core::fmt::Debug {
    /// Returns the severity level of this error.
    fn severity(&self) -> ErrorSeverity;

    /// Returns a static string identifier for this error variant.
    ///
    /// Default implementation uses the error type name.
    fn error_code(&self) -> &'static str {
        core::any::type_name::<Self>()
    }
}
