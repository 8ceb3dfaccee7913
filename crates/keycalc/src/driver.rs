//! Session driver wiring keypad, engine, and display together.
//!
//! One seam for every way of feeding the calculator: symbolic events,
//! element-id clicks, script strings for tests, and JSON event scripts for
//! recorded sequences. After each event the panel is re-rendered with the
//! engine's display text, verbatim.

use tracing::debug;

use crate::core::{ButtonEvent, CalcError, CalcResult, Engine, Snapshot};
use crate::panel::{Keypad, Panel};

/// An interactive calculator session.
///
/// Owns the engine, the keypad definitions, and the display panel with
/// exclusive access; every input path funnels through [`Session::press`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Session {
    engine: Engine,
    keypad: Keypad,
    panel: Panel,
}

impl Default for Session {
    fn default() -> Self {
        Self::new()
    }
}

impl Session {
    /// Creates a session with a freshly reset engine and renders the
    /// initial `"0"` into the panel.
    #[must_use]
    pub fn new() -> Self {
        let mut session = Self {
            engine: Engine::new(),
            keypad: Keypad::new(),
            panel: Panel::new(),
        };
        session.render();
        session
    }

    /// The text currently shown on the panel
    #[must_use]
    pub fn display(&self) -> &str {
        self.panel.text()
    }

    /// The engine, for state assertions
    #[must_use]
    pub fn engine(&self) -> &Engine {
        &self.engine
    }

    /// The keypad definitions
    #[must_use]
    pub fn keypad(&self) -> &Keypad {
        &self.keypad
    }

    /// The display panel
    #[must_use]
    pub fn panel(&self) -> &Panel {
        &self.panel
    }

    /// Snapshot of the engine state
    #[must_use]
    pub fn snapshot(&self) -> Snapshot {
        self.engine.snapshot()
    }

    /// Feeds one symbolic button event and re-renders the panel.
    pub fn press(&mut self, event: ButtonEvent) {
        self.engine.press(event);
        self.render();
    }

    /// Routes a click on a keypad element id to its event.
    pub fn click(&mut self, element_id: &str) -> CalcResult<()> {
        let event = self
            .keypad
            .handle_click(element_id)
            .ok_or_else(|| CalcError::unknown_element(element_id))?;
        debug!(element_id, ?event, "click");
        self.press(event);
        Ok(())
    }

    /// Presses a sequence of script keys, e.g. `"12+34="`.
    ///
    /// Whitespace is skipped; any other unmapped character is an error.
    /// Events before the offending character have already been applied.
    pub fn press_keys(&mut self, keys: &str) -> CalcResult<()> {
        for key in keys.chars() {
            if key.is_whitespace() {
                continue;
            }
            let event = ButtonEvent::from_key(key).ok_or(CalcError::UnknownKey { key })?;
            self.press(event);
        }
        Ok(())
    }

    /// Replays a JSON event script: an array of [`ButtonEvent`]s.
    pub fn run_script(&mut self, json: &str) -> CalcResult<()> {
        let events: Vec<ButtonEvent> =
            serde_json::from_str(json).map_err(|e| CalcError::script(e.to_string()))?;
        debug!(count = events.len(), "replaying event script");
        for event in events {
            self.press(event);
        }
        Ok(())
    }

    fn render(&mut self) {
        self.panel.set_text(self.engine.display());
    }
}
