//! Host-shell boundary: keypad button definitions and the display panel.
//!
//! The engine's host is trivial I/O — buttons that fire events and one
//! element that shows text. These types stand in for that host so the whole
//! boundary is testable without a page: [`Keypad`] maps stable element ids
//! to button events, [`Panel`] records what was rendered.

pub mod display;
pub mod keypad;

pub use display::Panel;
pub use keypad::{Keypad, KeypadButton};
