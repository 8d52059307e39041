use crate::constants::{ENTRY_SELECTOR, ENTRY_THRESHOLD};
use anyhow::anyhow;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::{JsCast, JsValue};
use web_sys as web;

/// Start each `.ani` element's CSS animation the first time it scrolls into
/// view. Elements are unobserved once started.
pub fn wire_entry_animations(document: &web::Document) -> anyhow::Result<()> {
    let callback = Closure::wrap(Box::new(
        move |entries: js_sys::Array, observer: web::IntersectionObserver| {
            for entry in entries.iter() {
                let Ok(entry) = entry.dyn_into::<web::IntersectionObserverEntry>() else {
                    continue;
                };
                if !entry.is_intersecting() {
                    continue;
                }
                let target = entry.target();
                if let Some(el) = target.dyn_ref::<web::HtmlElement>() {
                    _ = el.style().set_property("animation-play-state", "running");
                }
                observer.unobserve(&target);
            }
        },
    ) as Box<dyn FnMut(js_sys::Array, web::IntersectionObserver)>);

    let options = web::IntersectionObserverInit::new();
    options.set_threshold(&JsValue::from_f64(ENTRY_THRESHOLD));
    let observer =
        web::IntersectionObserver::new_with_options(callback.as_ref().unchecked_ref(), &options)
            .map_err(|e| anyhow!("IntersectionObserver: {:?}", e))?;
    callback.forget();

    let nodes = document
        .query_selector_all(ENTRY_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?;
    let mut count = 0;
    for el in (0..nodes.length())
        .filter_map(|i| nodes.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
    {
        observer.observe(&el);
        count += 1;
    }
    log::info!("[entry] observing {} elements", count);
    Ok(())
}
