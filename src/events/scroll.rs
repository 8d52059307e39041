use crate::constants::VELOCITY_DECAY_MS;
use crate::dom;
use margin_core::{Event, MarginEngine};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::Ordering;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn wire_scroll(
    window: &web::Window,
    document: &web::Document,
    engine: &Rc<RefCell<MarginEngine>>,
) {
    let win = window.clone();
    let doc = document.clone();
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move || {
        let (_, vh) = dom::viewport_size(&win);
        let event = Event::Scroll {
            scroll_y: dom::scroll_y(&win),
            section: dom::current_section(&doc, vh),
            row_midpoints: dom::row_midpoints(&doc),
        };
        engine.borrow_mut().handle(event);
    }) as Box<dyn FnMut()>);

    let opts = web::AddEventListenerOptions::new();
    opts.set_passive(true);
    _ = window.add_event_listener_with_callback_and_add_event_listener_options(
        "scroll",
        closure.as_ref().unchecked_ref(),
        &opts,
    );
    closure.forget();
}

/// Decay scroll velocity on its own timer so it settles even when no frames
/// or scroll events arrive.
pub fn wire_velocity_decay(window: &web::Window, engine: &Rc<RefCell<MarginEngine>>) {
    let engine = engine.clone();
    let closure = Closure::wrap(Box::new(move || {
        engine.borrow_mut().handle(Event::VelocityDecay);
    }) as Box<dyn FnMut()>);
    match window.set_interval_with_callback_and_timeout_and_arguments_0(
        closure.as_ref().unchecked_ref(),
        VELOCITY_DECAY_MS,
    ) {
        Ok(id) => crate::DECAY_INTERVAL.store(id, Ordering::SeqCst),
        Err(e) => log::error!("velocity decay timer error: {:?}", e),
    }
    closure.forget();
}
