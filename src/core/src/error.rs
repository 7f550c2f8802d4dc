//! Error types for role management
//!
//! Every failure is deterministic and caused by the caller: retrying the same
//! call with the same arguments fails the same way.

use thiserror::Error;

pub type Result<T> = std::result::Result<T, RoleError>;

/// Role manager error type
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum RoleError {
    /// Wrong number of time tokens, or an unusable configuration value
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),

    /// A referenced role is not present in the store
    #[error("Role not found: {0}")]
    RoleNotFound(String),
}

impl RoleError {
    /// Create an invalid argument error
    pub fn invalid_argument<S: Into<String>>(msg: S) -> Self {
        RoleError::InvalidArgument(msg.into())
    }

    /// Create a role not found error
    pub fn role_not_found<S: Into<String>>(name: S) -> Self {
        RoleError::RoleNotFound(name.into())
    }

    /// Check the number of time tokens handed over by a host engine
    ///
    /// `what` names the expected tokens for the error message,
    /// e.g. "start and end times".
    pub fn check_arity<T>(tokens: &[T], expected: usize, what: &str) -> Result<()> {
        if tokens.len() != expected {
            return Err(RoleError::InvalidArgument(format!(
                "expected {} ({} value{}), got {}",
                what,
                expected,
                if expected == 1 { "" } else { "s" },
                tokens.len()
            )));
        }
        Ok(())
    }
}
