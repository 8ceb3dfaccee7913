//! Button-press state machine and arithmetic evaluation.
//!
//! The engine consumes one symbolic [`ButtonEvent`] at a time and maintains
//! the display text, the latched first operand, and the pending operator.
//! Operands stay strings all the way to the equals evaluation: leading-zero
//! suppression and decimal-point tracking are defined over the textual form,
//! so conversion to `f64` happens in exactly one place.

use serde::{Deserialize, Serialize};
use tracing::{debug, error, warn};

use crate::core::operator::{Operator, Pending};
use crate::core::{CalcError, Mode};

/// A single symbolic button press delivered by the host shell.
///
/// `Add` and `Equals` are fired by the same physical button; both route to
/// the shared handler, which decides the role from the pending state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub enum ButtonEvent {
    /// A digit key, 0 through 9
    Digit(u8),
    /// The decimal point key
    Decimal,
    /// The shared add/equals key, addition role
    Add,
    /// The subtraction key
    Subtract,
    /// The multiplication key
    Multiply,
    /// The division key
    Divide,
    /// The shared add/equals key, equals role
    Equals,
    /// The clear key
    Clear,
}

impl ButtonEvent {
    /// Maps a script character to its button event.
    ///
    /// `'+'` and `'='` map to the two roles of the shared button; `'C'` (or
    /// `'c'`) clears. Returns `None` for characters with no button.
    #[must_use]
    pub fn from_key(key: char) -> Option<Self> {
        match key {
            '0'..='9' => key.to_digit(10).map(|d| Self::Digit(d as u8)),
            '.' => Some(Self::Decimal),
            '+' => Some(Self::Add),
            '-' => Some(Self::Subtract),
            '*' => Some(Self::Multiply),
            '/' => Some(Self::Divide),
            '=' => Some(Self::Equals),
            'C' | 'c' => Some(Self::Clear),
            _ => None,
        }
    }
}

/// Serializable view of the engine state, for diagnostics and tests
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Snapshot {
    /// Current input mode
    pub mode: Mode,
    /// Current display text
    pub display: String,
    /// Whether the in-progress number already contains a decimal point
    pub has_decimal: bool,
    /// Latched first operand, as text
    pub operand: String,
    /// Pending operator, if any
    pub pending: Option<Pending>,
}

/// Four-function calculator engine.
///
/// A finite-state object holding the current mode, display text, latched
/// operand, pending operator, and decimal-entry flag. One owned instance per
/// session; every handler takes `&mut self`, so access is explicit and
/// exclusive. Handlers never fail outward: an out-of-sequence operator drops
/// the engine into its error state (`display == "Err"`), and the host keeps
/// rendering whatever [`Engine::display`] returns.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Engine {
    mode: Mode,
    display: String,
    has_decimal: bool,
    operand: String,
    pending: Option<Pending>,
}

impl Default for Engine {
    fn default() -> Self {
        Self::new()
    }
}

impl Engine {
    /// Creates an engine in its reset state: `Number` mode, display `"0"`
    #[must_use]
    pub fn new() -> Self {
        Self {
            mode: Mode::Number,
            display: "0".to_string(),
            has_decimal: false,
            operand: "0".to_string(),
            pending: None,
        }
    }

    /// The text to render verbatim
    #[must_use]
    pub fn display(&self) -> &str {
        &self.display
    }

    /// Current input mode
    #[must_use]
    pub fn mode(&self) -> Mode {
        self.mode
    }

    /// Latched first operand, as text
    #[must_use]
    pub fn operand(&self) -> &str {
        &self.operand
    }

    /// Pending operator, if any
    #[must_use]
    pub fn pending(&self) -> Option<Pending> {
        self.pending
    }

    /// Whether the number being typed already contains a decimal point
    #[must_use]
    pub fn has_decimal(&self) -> bool {
        self.has_decimal
    }

    /// Copies the full state out for diagnostics or assertions
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        Snapshot {
            mode: self.mode,
            display: self.display.clone(),
            has_decimal: self.has_decimal,
            operand: self.operand.clone(),
            pending: self.pending,
        }
    }

    /// Routes a symbolic button event to its handler.
    pub fn press(&mut self, event: ButtonEvent) {
        debug!(?event, display = %self.display, mode = ?self.mode, "button press");
        match event {
            ButtonEvent::Digit(d) => self.press_digit(d),
            ButtonEvent::Decimal => self.press_decimal(),
            ButtonEvent::Add | ButtonEvent::Equals => self.press_add_or_equals(),
            ButtonEvent::Subtract => self.press_operator(Operator::Subtract),
            ButtonEvent::Multiply => self.press_operator(Operator::Multiply),
            ButtonEvent::Divide => self.press_operator(Operator::Divide),
            ButtonEvent::Clear => self.press_clear(),
        }
    }

    /// Handles a digit key, 0 through 9.
    ///
    /// In `Number` mode the digit replaces a lone `"0"` or a just-computed
    /// result and appends otherwise, so leading zeros are never shown. In
    /// `Operation` or `Error` mode the digit starts a fresh operand.
    pub fn press_digit(&mut self, d: u8) {
        let Some(digit) = char::from_digit(u32::from(d), 10) else {
            warn!(d, "digit out of range, ignoring");
            return;
        };
        self.push_token(digit);
        self.clear_equals_marker();
    }

    /// Handles the decimal point key.
    ///
    /// A second point within one number is ignored; otherwise the point goes
    /// through the same append-or-replace rules as a digit.
    pub fn press_decimal(&mut self) {
        if self.has_decimal {
            return;
        }
        self.has_decimal = true;
        self.push_token('.');
        self.clear_equals_marker();
    }

    /// Handles a dedicated binary operator key.
    ///
    /// Out of sequence (mode is not `Number`) this is the one user-visible
    /// error: the engine resets into `Error` mode with display `"Err"`.
    /// Otherwise a still-pending operator is folded first, which is what
    /// makes chains evaluate left to right without precedence.
    pub fn press_operator(&mut self, op: Operator) {
        if self.mode != Mode::Number {
            self.fail();
            return;
        }
        self.update_operand();
        self.mode = Mode::Operation;
        self.pending = Some(Pending::Op(op));
        self.has_decimal = false;
    }

    /// Handles the shared add/equals button.
    ///
    /// With nothing pending, or with a result already showing, the press
    /// means addition: latch the display as the operand and wait for the
    /// next number. With a binary operator pending it means equals: fold
    /// operand and display, then mark that a result is showing.
    pub fn press_add_or_equals(&mut self) {
        match self.pending {
            None | Some(Pending::Equals) => {
                self.update_operand();
                self.mode = Mode::Operation;
                self.pending = Some(Pending::Op(Operator::Add));
                self.has_decimal = false;
            }
            Some(Pending::Op(_)) => {
                self.perform_equals();
                // A failed evaluation leaves the error reset untouched; the
                // result marker is only valid over an actual result.
                if self.mode != Mode::Error {
                    self.pending = Some(Pending::Equals);
                }
            }
        }
    }

    /// Handles the clear key: unconditional reset from any state.
    pub fn press_clear(&mut self) {
        self.reset();
    }

    /// Appends or replaces display text per the current mode.
    fn push_token(&mut self, token: char) {
        match self.mode {
            Mode::Number => {
                if self.display == "0" || self.equals_pressed() {
                    self.display = token.to_string();
                } else {
                    self.display.push(token);
                }
            }
            Mode::Operation | Mode::Error => {
                self.display = token.to_string();
                self.mode = Mode::Number;
            }
        }
    }

    /// Folds any pending binary operator, then latches the display as the
    /// first operand of the next operation.
    fn update_operand(&mut self) {
        if matches!(self.pending, Some(Pending::Op(_))) {
            self.perform_equals();
        }
        self.operand = self.display.clone();
    }

    /// Evaluates `operand <op> display` and shows the result.
    ///
    /// Reaching this without a second operand entered (mode not `Number`)
    /// is the sequence error. Texts that fail to parse, such as a lone
    /// `"."`, evaluate as `0`.
    fn perform_equals(&mut self) {
        if self.mode != Mode::Number {
            self.fail();
            return;
        }
        let Some(Pending::Op(op)) = self.pending else {
            // Guarded out by every caller.
            error!(pending = ?self.pending, "equals with no binary operator pending");
            return;
        };
        let a = parse_or_zero(&self.operand);
        let b = parse_or_zero(&self.display);
        let result = op.apply(a, b);
        debug!(a, b, op = op.symbol(), result, "evaluated");
        self.display = format_number(result);
        self.pending = None;
        self.mode = Mode::Number;
        self.has_decimal = false;
    }

    fn equals_pressed(&self) -> bool {
        self.pending == Some(Pending::Equals)
    }

    /// Clears the result marker so the next operator press starts a fresh
    /// computation instead of re-triggering the prior one.
    fn clear_equals_marker(&mut self) {
        if self.equals_pressed() {
            self.pending = None;
        }
    }

    /// Drops into the error state: display `"Err"`, everything else reset.
    fn fail(&mut self) {
        warn!(error = %CalcError::OutOfSequence, "entering error state");
        self.reset();
        self.mode = Mode::Error;
        self.display = "Err".to_string();
    }

    fn reset(&mut self) {
        self.mode = Mode::Number;
        self.display = "0".to_string();
        self.has_decimal = false;
        self.operand = "0".to_string();
        self.pending = None;
    }
}

/// Parses a working numeral, defaulting to zero when the text is not a
/// number (a lone `"."`, the `"Err"` marker, or empty).
fn parse_or_zero(s: &str) -> f64 {
    s.parse().unwrap_or(0.0)
}

/// Formats an evaluation result the way the display spells numbers:
/// shortest decimal form, no trailing `.0` on integral values, and the
/// non-finite spellings `Infinity` / `-Infinity` / `NaN`.
fn format_number(n: f64) -> String {
    if n.is_nan() {
        "NaN".to_string()
    } else if n.is_infinite() {
        if n.is_sign_positive() {
            "Infinity".to_string()
        } else {
            "-Infinity".to_string()
        }
    } else if n == 0.0 {
        // negative zero renders as plain "0"
        "0".to_string()
    } else {
        n.to_string()
    }
}
