//! Errors used by the parsing and setup layers of the board core.
//!
//! `BoardErrors` is the single error type returned by the coordinate codec,
//! the placement codec, the login hand-off and the option setter. The
//! interaction layer (`controller`) never returns it: it logs the error and
//! reports a `BoardOutcome` instead so a bad tap can not stop the event loop.

use thiserror::Error;

/// Unified error type for parsing and configuration failures.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum BoardErrors {
    /// Grid indices outside `0..=7`.
    ///
    /// Payload: (row, col) as supplied by the caller.
    #[error("coordinate out of range: row {0}, col {1}")]
    InvalidCoordinate(i32, i32),

    /// An algebraic square string could not be interpreted.
    ///
    /// Payload: the original string, for diagnostics.
    #[error("invalid notation: {0:?}")]
    InvalidNotation(String),

    /// A FEN piece-placement field had malformed structure or tokens.
    #[error("invalid placement: {0}")]
    InvalidPlacement(String),

    /// Login was attempted with a blank username.
    #[error("Enter username to continue")]
    EmptyUsername,

    /// `set_option` was called with a name the config does not know.
    #[error("unknown option '{0}'")]
    UnknownOption(String),

    /// `set_option` was called with a value that does not parse for the option.
    ///
    /// Payload: (option name, offending value).
    #[error("invalid {0} value '{1}'")]
    InvalidOptionValue(String, String),
}
