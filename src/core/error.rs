//! Core error types.

use std::fmt;

/// Errors raised by the dispatch bridge before the handler runs.
///
/// Staging failures are deliberately not represented here: they travel
/// inside the upload descriptor so the handler can report them in its own
/// vocabulary. Errors the handler itself accumulates are relayed verbatim
/// at capture time and never surface as values of this type.
#[derive(Debug)]
pub enum Error {
    /// The administrative execution context precondition is unmet.
    Precondition(String),

    /// A bridge method was invoked out of state-machine order.
    State {
        expected: &'static str,
        actual: &'static str,
    },
}

impl fmt::Display for Error {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Error::Precondition(msg) => write!(f, "{}", msg),
            Error::State { expected, actual } => {
                write!(f, "bridge is in state {} (expected {})", actual, expected)
            }
        }
    }
}

impl std::error::Error for Error {}

/// Result type alias for bridge operations.
pub type Result<T> = std::result::Result<T, Error>;
