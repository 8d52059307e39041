use crate::constants::RESIZE_DEBOUNCE_MS;
use crate::dom;
use margin_core::{Event, MarginEngine};
use std::cell::{Cell, RefCell};
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// Rebuild every layer once resizing has been quiet for `RESIZE_DEBOUNCE_MS`.
pub fn wire_debounced_resize(
    window: &web::Window,
    document: &web::Document,
    engine: &Rc<RefCell<MarginEngine>>,
) {
    let pending: Rc<Cell<Option<i32>>> = Rc::new(Cell::new(None));

    let win = window.clone();
    let doc = document.clone();
    let engine = engine.clone();
    let pending_fire = pending.clone();
    let rebuild = Closure::wrap(Box::new(move || {
        pending_fire.set(None);
        match dom::measure_geometry(&win, &doc) {
            Ok(geometry) => {
                log::info!(
                    "[resize] {}x{} margins {:.0}/{:.0}",
                    geometry.width,
                    geometry.height,
                    geometry.left_margin(),
                    geometry.right_margin()
                );
                engine.borrow_mut().handle(Event::Resize {
                    geometry,
                    row_midpoints: dom::row_midpoints(&doc),
                });
            }
            Err(e) => log::warn!("[resize] skipped: {}", e),
        }
    }) as Box<dyn FnMut()>);

    let win = window.clone();
    let on_resize = Closure::wrap(Box::new(move || {
        if let Some(id) = pending.take() {
            win.clear_timeout_with_handle(id);
        }
        match win.set_timeout_with_callback_and_timeout_and_arguments_0(
            rebuild.as_ref().unchecked_ref(),
            RESIZE_DEBOUNCE_MS,
        ) {
            Ok(id) => pending.set(Some(id)),
            Err(e) => log::error!("resize timer error: {:?}", e),
        }
    }) as Box<dyn FnMut()>);
    _ = window.add_event_listener_with_callback("resize", on_resize.as_ref().unchecked_ref());
    on_resize.forget();
}
