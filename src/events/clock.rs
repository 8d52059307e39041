use crate::clock::{elapsed_secs, format_elapsed};
use crate::constants::{CLOCK_ID, CLOCK_TICK_MS};
use std::sync::atomic::Ordering;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Write the time since page start into `#session-time` once a second.
/// The element is looked up on every tick, so it may appear late.
pub fn wire_session_clock(window: &web::Window) {
    let started = js_sys::Date::now();
    let win = window.clone();
    let closure = Closure::wrap(Box::new(move || {
        let Some(el) = win.document().and_then(|d| d.get_element_by_id(CLOCK_ID)) else {
            return;
        };
        let secs = elapsed_secs(started, js_sys::Date::now());
        el.set_text_content(Some(&format_elapsed(secs)));
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        CLOCK_TICK_MS,
    ) {
        Ok(id) => crate::CLOCK_INTERVAL.store(id, Ordering::SeqCst),
        Err(e) => log::error!("session clock timer error: {:?}", e),
    }
    closure.forget();
}
