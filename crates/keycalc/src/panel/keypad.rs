//! Keypad button definitions.
//!
//! Maps the host's clickable elements to symbolic [`ButtonEvent`]s. Element
//! ids are stable and mirror the markup the calculator was built against
//! (`button-7`, `button-decimal`, `button-add-equals`, ...). The add/equals
//! key is one physical button serving both roles.

use crate::core::ButtonEvent;

/// A single keypad button: the event it fires, its element id, and its
/// position in the button grid.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct KeypadButton {
    /// The event this button fires when clicked
    pub event: ButtonEvent,
    /// Stable element id bound to the click listener
    pub id: String,
    /// Grid row (0-indexed)
    pub row: usize,
    /// Grid column (0-indexed)
    pub col: usize,
}

impl KeypadButton {
    /// Creates a button definition with the id derived from its event
    #[must_use]
    pub fn new(event: ButtonEvent, row: usize, col: usize) -> Self {
        let id = match event {
            ButtonEvent::Digit(d) => format!("button-{d}"),
            ButtonEvent::Decimal => "button-decimal".to_string(),
            ButtonEvent::Add | ButtonEvent::Equals => "button-add-equals".to_string(),
            ButtonEvent::Subtract => "button-subtract".to_string(),
            ButtonEvent::Multiply => "button-multiply".to_string(),
            ButtonEvent::Divide => "button-divide".to_string(),
            ButtonEvent::Clear => "button-clear".to_string(),
        };
        Self {
            event,
            id,
            row,
            col,
        }
    }

    /// Returns the label printed on the button face
    #[must_use]
    pub fn label(&self) -> String {
        match self.event {
            ButtonEvent::Digit(d) => d.to_string(),
            ButtonEvent::Decimal => ".".to_string(),
            ButtonEvent::Add | ButtonEvent::Equals => "+/=".to_string(),
            ButtonEvent::Subtract => "-".to_string(),
            ButtonEvent::Multiply => "*".to_string(),
            ButtonEvent::Divide => "/".to_string(),
            ButtonEvent::Clear => "C".to_string(),
        }
    }
}

/// The keypad layout - a 4x4 grid of buttons
/// ```text
/// [ 7 ] [ 8 ] [ 9 ] [ / ]
/// [ 4 ] [ 5 ] [ 6 ] [ * ]
/// [ 1 ] [ 2 ] [ 3 ] [ - ]
/// [ 0 ] [ . ] [ C ] [+/=]
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Keypad {
    buttons: Vec<KeypadButton>,
    rows: usize,
    cols: usize,
}

impl Default for Keypad {
    fn default() -> Self {
        Self::new()
    }
}

impl Keypad {
    /// Creates the standard four-function keypad
    #[must_use]
    pub fn new() -> Self {
        let buttons = vec![
            // Row 0: 7 8 9 /
            KeypadButton::new(ButtonEvent::Digit(7), 0, 0),
            KeypadButton::new(ButtonEvent::Digit(8), 0, 1),
            KeypadButton::new(ButtonEvent::Digit(9), 0, 2),
            KeypadButton::new(ButtonEvent::Divide, 0, 3),
            // Row 1: 4 5 6 *
            KeypadButton::new(ButtonEvent::Digit(4), 1, 0),
            KeypadButton::new(ButtonEvent::Digit(5), 1, 1),
            KeypadButton::new(ButtonEvent::Digit(6), 1, 2),
            KeypadButton::new(ButtonEvent::Multiply, 1, 3),
            // Row 2: 1 2 3 -
            KeypadButton::new(ButtonEvent::Digit(1), 2, 0),
            KeypadButton::new(ButtonEvent::Digit(2), 2, 1),
            KeypadButton::new(ButtonEvent::Digit(3), 2, 2),
            KeypadButton::new(ButtonEvent::Subtract, 2, 3),
            // Row 3: 0 . C +/=
            KeypadButton::new(ButtonEvent::Digit(0), 3, 0),
            KeypadButton::new(ButtonEvent::Decimal, 3, 1),
            KeypadButton::new(ButtonEvent::Clear, 3, 2),
            KeypadButton::new(ButtonEvent::Add, 3, 3),
        ];

        Self {
            buttons,
            rows: 4,
            cols: 4,
        }
    }

    /// Returns the number of buttons
    #[must_use]
    pub fn button_count(&self) -> usize {
        self.buttons.len()
    }

    /// Returns the grid dimensions (rows, cols)
    #[must_use]
    pub fn dimensions(&self) -> (usize, usize) {
        (self.rows, self.cols)
    }

    /// Returns all button definitions in row-major order
    #[must_use]
    pub fn buttons(&self) -> &[KeypadButton] {
        &self.buttons
    }

    /// Gets a button by row and column
    #[must_use]
    pub fn get_button_at(&self, row: usize, col: usize) -> Option<&KeypadButton> {
        if row < self.rows && col < self.cols {
            self.buttons.get(row * self.cols + col)
        } else {
            None
        }
    }

    /// Finds a button by element id
    #[must_use]
    pub fn find_button_by_id(&self, id: &str) -> Option<&KeypadButton> {
        self.buttons.iter().find(|b| b.id == id)
    }

    /// Finds the physical button a script character lands on.
    ///
    /// `'+'` and `'='` resolve to the same add/equals button.
    #[must_use]
    pub fn find_button_by_key(&self, key: char) -> Option<&KeypadButton> {
        let event = match ButtonEvent::from_key(key)? {
            ButtonEvent::Equals => ButtonEvent::Add,
            other => other,
        };
        self.buttons.iter().find(|b| b.event == event)
    }

    /// Resolves a click on an element id to the event it fires
    #[must_use]
    pub fn handle_click(&self, element_id: &str) -> Option<ButtonEvent> {
        self.find_button_by_id(element_id).map(|b| b.event)
    }
}
