//! Core calculator module: input modes, operators, and the engine.

pub mod engine;
pub mod operator;

pub use engine::{ButtonEvent, Engine, Snapshot};
pub use operator::{Operator, Pending};

use serde::{Deserialize, Serialize};
use thiserror::Error;

/// Result type for calculator operations
pub type CalcResult<T> = Result<T, CalcError>;

/// Errors that can occur while driving the calculator
#[derive(Debug, Error, Clone, PartialEq, Eq)]
pub enum CalcError {
    /// An operator was pressed while the machine was not awaiting a fresh
    /// operand. Handled locally by the engine, which drops into its error
    /// state rather than propagating.
    #[error("operator pressed out of sequence")]
    OutOfSequence,

    /// A click targeted an element id that is not a keypad button
    #[error("unknown keypad element id: {id}")]
    UnknownElement {
        /// The element id that failed to resolve
        id: String,
    },

    /// A scripted key sequence contained a character with no button mapping
    #[error("unrecognized script key: {key:?}")]
    UnknownKey {
        /// The offending character
        key: char,
    },

    /// An event script could not be decoded
    #[error("invalid event script: {message}")]
    Script {
        /// Decoder error message
        message: String,
    },
}

impl CalcError {
    /// Creates an unknown-element error
    #[must_use]
    pub fn unknown_element(id: impl Into<String>) -> Self {
        Self::UnknownElement { id: id.into() }
    }

    /// Creates a script-decode error
    #[must_use]
    pub fn script(message: impl Into<String>) -> Self {
        Self::Script {
            message: message.into(),
        }
    }
}

/// The calculator's syntactic expectation for the next input.
///
/// The grammar is `number → operator → number → operator|equals → …`; the
/// mode tags which kind of input just occurred so each handler can validate
/// sequencing before mutating the display.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Mode {
    /// An operand is being entered or a result is showing
    Number,
    /// An operator was just pressed; the next digit starts a fresh operand
    Operation,
    /// An invalid input sequence was seen; the display reads `Err`
    Error,
}
