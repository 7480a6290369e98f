//! Small wrappers over the browser APIs the widgets call directly.
//!
//! None of these panic: a missing body or a failed call is logged and skipped.

use leptos::prelude::*;

/// `window.innerWidth` in CSS pixels.
pub fn viewport_width() -> f64 {
    window()
        .inner_width()
        .ok()
        .and_then(|w| w.as_f64())
        .unwrap_or(0.0)
}

/// `window.location.pathname`.
pub fn current_path() -> String {
    window().location().pathname().unwrap_or_default()
}

/// Blocking browser alert.
pub fn alert(message: &str) {
    if let Err(e) = window().alert_with_message(message) {
        log::warn!("alert failed: {e:?}");
    }
}

/// Suspend or restore page scrolling behind an overlay.
pub fn set_page_scroll_locked(locked: bool) {
    let Some(body) = document().body() else {
        return;
    };
    let style = body.style();
    let result = if locked {
        style.set_property("overflow", "hidden")
    } else {
        style.remove_property("overflow").map(|_| ())
    };
    if let Err(e) = result {
        log::warn!("failed to update page scroll lock: {e:?}");
    }
}

/// Smooth-scroll to the element with `id`. Returns `false` if there is none.
pub fn scroll_to_element(id: &str) -> bool {
    let Some(target) = document().get_element_by_id(id) else {
        return false;
    };
    let options = web_sys::ScrollIntoViewOptions::new();
    options.set_behavior(web_sys::ScrollBehavior::Smooth);
    target.scroll_into_view_with_scroll_into_view_options(&options);
    true
}
