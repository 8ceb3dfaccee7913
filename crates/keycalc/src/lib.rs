//! Keycalc - a button-driven four-function calculator engine.
//!
//! The calculator is a finite-state machine over discrete button-press
//! events. Digits and the decimal point build an operand as *text* (leading
//! zeros collapse, at most one decimal point); operator keys latch the
//! display as the first operand; the shared add/equals key either starts a
//! chain or folds the pending operation. Chains evaluate left to right with
//! no precedence: `2 + 3 * 4` is `(2 + 3) * 4 = 20`.
//!
//! An operator pressed while no operand is being entered is the one
//! user-visible error: the display reads `Err` until the next clear (or a
//! digit starting a fresh operand). Numeric edge cases are not errors -
//! division by zero shows `Infinity` or `NaN` like any other result.
//!
//! # Example
//!
//! ```rust
//! use keycalc::prelude::*;
//!
//! let mut session = Session::new();
//! session.press_keys("12+3=").unwrap();
//! assert_eq!(session.display(), "15");
//!
//! session.press(ButtonEvent::Clear);
//! session.press_keys("5/0=").unwrap();
//! assert_eq!(session.display(), "Infinity");
//! ```

#![cfg_attr(
    test,
    allow(
        clippy::unwrap_used,
        clippy::expect_used,
        clippy::panic,
        clippy::float_cmp
    )
)]
#![deny(missing_docs)]
#![deny(missing_debug_implementations)]

pub mod core;
pub mod driver;
pub mod panel;

/// Prelude for convenient imports
pub mod prelude {
    pub use crate::core::{
        ButtonEvent, CalcError, CalcResult, Engine, Mode, Operator, Pending, Snapshot,
    };
    pub use crate::driver::Session;
    pub use crate::panel::{Keypad, KeypadButton, Panel};
}

#[cfg(test)]
mod tests {
    use super::prelude::*;

    #[test]
    fn test_prelude_imports() {
        let mut engine = Engine::new();
        engine.press(ButtonEvent::Digit(7));
        assert_eq!(engine.display(), "7");
        assert_eq!(engine.mode(), Mode::Number);
    }

    #[test]
    fn test_engine_direct() {
        let mut engine = Engine::new();
        engine.press_digit(6);
        engine.press_operator(Operator::Multiply);
        engine.press_digit(7);
        engine.press_add_or_equals();
        assert_eq!(engine.display(), "42");
        assert_eq!(engine.pending(), Some(Pending::Equals));
    }

    #[test]
    fn test_session_click_path() {
        let mut session = Session::new();
        session.click("button-9").unwrap();
        session.click("button-divide").unwrap();
        session.click("button-2").unwrap();
        session.click("button-add-equals").unwrap();
        assert_eq!(session.display(), "4.5");
    }
}
