use crate::{dom, nav};
use margin_core::{Event, MarginEngine};
use std::cell::RefCell;
use std::rc::Rc;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

/// mouseenter/mouseleave on every project row present at init.
///
/// The row set is fixed for the page's lifetime: rows inserted later get no
/// hover listeners, though scroll still rebuilds their tension lines.
pub fn wire_row_hover(document: &web::Document, engine: &Rc<RefCell<MarginEngine>>) {
    let rows = dom::project_rows(document);
    for (row, el) in rows.iter().enumerate() {
        let engine_enter = engine.clone();
        let enter = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            engine_enter
                .borrow_mut()
                .handle(Event::PointerEnter { row });
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mouseenter", enter.as_ref().unchecked_ref());
        enter.forget();

        let engine_leave = engine.clone();
        let leave = Closure::wrap(Box::new(move |_ev: web::MouseEvent| {
            engine_leave
                .borrow_mut()
                .handle(Event::PointerLeave { row });
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("mouseleave", leave.as_ref().unchecked_ref());
        leave.forget();
    }
    log::info!("[hover] wired {} rows", rows.len());
}

/// Make the whole row clickable. Links nested in the row keep their own
/// behaviour.
pub fn wire_row_click(window: &web::Window, document: &web::Document) {
    for el in dom::project_rows(document) {
        let win = window.clone();
        let row = el.clone();
        let click = Closure::wrap(Box::new(move |ev: web::MouseEvent| {
            let on_nested_link = ev
                .target()
                .and_then(|t| t.dyn_into::<web::Element>().ok())
                .and_then(|t| t.closest("a").ok().flatten())
                .is_some_and(|link| link != row);
            if let Some(href) = nav::row_click_href(row.get_attribute("href"), on_nested_link) {
                if let Err(e) = win.location().set_href(&href) {
                    log::warn!("[click] navigation to {} failed: {:?}", href, e);
                }
            }
        }) as Box<dyn FnMut(_)>);
        _ = el.add_event_listener_with_callback("click", click.as_ref().unchecked_ref());
        click.forget();
    }
}
