//! Input normalization
//!
//! Key presses and pointer presses collapse into a single abstract
//! "activate" signal; everything the state machine needs to know about
//! input fits in one bit. Only Space and ArrowUp count among key presses
//! so typing elsewhere on the page is left alone.

/// Key codes that activate (KeyboardEvent.code values).
const ACTIVATE_CODES: [&str; 2] = ["Space", "ArrowUp"];

/// A raw platform input event, stripped to what the gate cares about.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum InputEvent<'a> {
    /// A key press carrying its discrete code
    KeyPress { code: &'a str },
    /// A pointer press (mouse button, touch, pen); always accepted
    PointerPress,
}

/// The normalized "jump/start/restart" signal.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Activate;

/// Filter one raw event.
///
/// Returns `Some(Activate)` iff the event is relevant; the caller must then
/// also suppress the platform's default handling (page scroll on Space and
/// ArrowUp). Acceptance and `prevent_default` go together.
pub fn gate(event: InputEvent<'_>) -> Option<Activate> {
    match event {
        InputEvent::KeyPress { code } => ACTIVATE_CODES.contains(&code).then_some(Activate),
        InputEvent::PointerPress => Some(Activate),
    }
}
