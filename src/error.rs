//! Error taxonomy for colony solves.

use thiserror::Error as ThisError;

/// Errors raised by a solve.
///
/// A deadline is not an error: a timed-out solve still returns its best tour
/// with [`Termination::TimedOut`](crate::colony::Termination::TimedOut).
#[derive(Debug, Clone, PartialEq, ThisError)]
pub enum Error {
    /// Rejected input: too few nodes, bad coordinates, unknown start,
    /// out-of-range configuration.
    #[error("invalid input: {0}")]
    InvalidInput(String),
    /// A non-finite cost or desirability was produced during the solve.
    #[error("computation error: {0}")]
    Computation(String),
}

/// Crate-wide result alias.
pub type Result<T> = std::result::Result<T, Error>;

impl Error {
    pub fn invalid_input(message: impl Into<String>) -> Self {
        Self::InvalidInput(message.into())
    }

    pub fn computation(message: impl Into<String>) -> Self {
        Self::Computation(message.into())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_display_prefixes() {
        assert_eq!(
            Error::invalid_input("need at least 2 nodes").to_string(),
            "invalid input: need at least 2 nodes"
        );
        assert_eq!(
            Error::computation("cost(0, 1) is NaN").to_string(),
            "computation error: cost(0, 1) is NaN"
        );
    }
}
