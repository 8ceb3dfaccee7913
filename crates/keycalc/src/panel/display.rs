//! Mock display element.

/// Element id of the display content area
pub const DISPLAY_ID: &str = "calc-display-content";

/// The single-line display element the calculator renders into.
///
/// A mock stand-in for the host's display area: it holds the current text
/// verbatim and counts renders, so tests can assert both what is shown and
/// that a render happened after every event.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    id: String,
    text: String,
    renders: usize,
}

impl Default for Panel {
    fn default() -> Self {
        Self::new()
    }
}

impl Panel {
    /// Creates an empty panel with the standard display element id
    #[must_use]
    pub fn new() -> Self {
        Self {
            id: DISPLAY_ID.to_string(),
            text: String::new(),
            renders: 0,
        }
    }

    /// The element id this panel stands in for
    #[must_use]
    pub fn id(&self) -> &str {
        &self.id
    }

    /// The text currently shown
    #[must_use]
    pub fn text(&self) -> &str {
        &self.text
    }

    /// Number of renders performed so far
    #[must_use]
    pub fn render_count(&self) -> usize {
        self.renders
    }

    /// Renders the given text verbatim, replacing what was shown.
    pub fn set_text(&mut self, text: &str) {
        self.text.clear();
        self.text.push_str(text);
        self.renders += 1;
    }
}
