use thiserror::Error;

/// Library-level errors using thiserror for structured error handling.
///
/// The tracking core itself has no fatal path: unrecognized chat lines and
/// unreadable world entities are expected conditions, not errors. What
/// remains are configuration validation failures and precondition
/// violations at the query boundary.

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum ConfigError {
    #[error("invalid overlay position ({x}, {y}): must be within {max_x}x{max_y}")]
    InvalidPosition { x: u32, y: u32, max_x: u32, max_y: u32 },

    #[error("invalid configuration: {0}")]
    Invalid(String),
}

#[derive(Error, Debug, Clone, Copy, PartialEq, Eq)]
pub enum PreconditionError {
    /// Match state was queried while no game is being tracked. Callers are
    /// expected to check liveness first; "no tracker" is a normal state,
    /// not one to recover from.
    #[error("no game is currently being tracked")]
    NoLiveTracker,
}

/// Type alias for application Results using anyhow for context chaining
pub type AppResult<T> = anyhow::Result<T>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = PreconditionError::NoLiveTracker;
        assert_eq!(err.to_string(), "no game is currently being tracked");

        let err = ConfigError::Invalid("bad flag".to_string());
        assert_eq!(err.to_string(), "invalid configuration: bad flag");
    }
}
