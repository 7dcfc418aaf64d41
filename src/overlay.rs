//! Start / game-over prompt surface
//!
//! The sim never talks to the DOM; the shell drives this contract on phase
//! changes. On web the prompt is the `#overlay` element with a title and a
//! body line; native builds use the no-op implementation.

/// The prompt panel shown while the game waits for input.
pub trait Overlay {
    fn show(&self, title: &str, body: &str);
    fn hide(&self);
}

/// DOM-backed overlay (web build): `#overlay`, `#overlay-title`,
/// `#overlay-text`, toggled via the `hidden` class.
#[cfg(target_arch = "wasm32")]
#[derive(Debug, Default)]
pub struct DomOverlay;

#[cfg(target_arch = "wasm32")]
impl DomOverlay {
    fn element(id: &str) -> Option<web_sys::Element> {
        web_sys::window()?.document()?.get_element_by_id(id)
    }
}

#[cfg(target_arch = "wasm32")]
impl Overlay for DomOverlay {
    fn show(&self, title: &str, body: &str) {
        if let Some(el) = Self::element("overlay-title") {
            el.set_text_content(Some(title));
        }
        if let Some(el) = Self::element("overlay-text") {
            el.set_text_content(Some(body));
        }
        if let Some(el) = Self::element("overlay") {
            el.class_list().remove_1("hidden").ok();
        }
    }

    fn hide(&self) {
        if let Some(el) = Self::element("overlay") {
            el.class_list().add_1("hidden").ok();
        }
    }
}

/// Overlay that swallows everything (native/headless runs).
#[derive(Debug, Default)]
pub struct NullOverlay;

impl Overlay for NullOverlay {
    fn show(&self, _title: &str, _body: &str) {}
    fn hide(&self) {}
}
