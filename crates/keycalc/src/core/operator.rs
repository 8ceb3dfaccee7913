//! Operator enums for the four arithmetic functions.

use serde::{Deserialize, Serialize};

/// A binary arithmetic operator selected from the keypad.
///
/// Type-safe closed set: every evaluation site matches exhaustively, so an
/// unhandled operator is a compile error rather than a silent fallthrough.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Operator {
    /// Addition (+)
    Add,
    /// Subtraction (-)
    Subtract,
    /// Multiplication (*)
    Multiply,
    /// Division (/)
    Divide,
}

impl Operator {
    /// Returns the operator symbol for display and logging
    #[must_use]
    pub const fn symbol(&self) -> &'static str {
        match self {
            Self::Add => "+",
            Self::Subtract => "-",
            Self::Multiply => "*",
            Self::Divide => "/",
        }
    }

    /// Applies the operator with standard floating-point semantics.
    ///
    /// Division by zero is not guarded: it yields `Infinity` or `NaN`, which
    /// the display shows as an ordinary result.
    #[must_use]
    pub fn apply(&self, a: f64, b: f64) -> f64 {
        match self {
            Self::Add => a + b,
            Self::Subtract => a - b,
            Self::Multiply => a * b,
            Self::Divide => a / b,
        }
    }
}

/// What the operator buttons have left pending on the engine.
///
/// `Equals` is storable state, not just an action: it marks that a result is
/// showing, so the next digit press starts a fresh operand instead of
/// appending to the result.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum Pending {
    /// A binary operator awaiting its second operand
    Op(Operator),
    /// An equals evaluation just ran; a result is showing
    Equals,
}
