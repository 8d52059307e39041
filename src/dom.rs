use crate::constants::{CONTENT_SELECTOR, ROW_SELECTOR};
use anyhow::anyhow;
use margin_core::{detect_section, Geometry, Section, SECTION_ANCHORS};
use wasm_bindgen::JsCast;
use web_sys as web;

pub fn element_by_id<T: JsCast>(document: &web::Document, id: &str) -> anyhow::Result<T> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{id}"))?
        .dyn_into::<T>()
        .map_err(|e| anyhow!("#{id} has the wrong type: {:?}", e))
}

#[inline]
pub fn viewport_size(window: &web::Window) -> (f32, f32) {
    let w = window
        .inner_width()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    let h = window
        .inner_height()
        .ok()
        .and_then(|v| v.as_f64())
        .unwrap_or(0.0);
    (w as f32, h as f32)
}

#[inline]
pub fn scroll_y(window: &web::Window) -> f32 {
    window.scroll_y().unwrap_or(0.0) as f32
}

/// Viewport plus content column, validated. Fails until the column is laid out.
pub fn measure_geometry(window: &web::Window, document: &web::Document) -> anyhow::Result<Geometry> {
    let (w, h) = viewport_size(window);
    let column = document
        .query_selector(CONTENT_SELECTOR)
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("missing {CONTENT_SELECTOR}"))?;
    let rect = column.get_bounding_client_rect();
    Ok(Geometry::measure(w, h, rect.left() as f32, rect.right() as f32)?)
}

pub fn project_rows(document: &web::Document) -> Vec<web::Element> {
    let Ok(list) = document.query_selector_all(ROW_SELECTOR) else {
        return Vec::new();
    };
    (0..list.length())
        .filter_map(|i| list.item(i))
        .filter_map(|n| n.dyn_into::<web::Element>().ok())
        .collect()
}

/// Live vertical midpoint of every project row, in viewport coordinates.
pub fn row_midpoints(document: &web::Document) -> Vec<f32> {
    project_rows(document)
        .iter()
        .map(|row| {
            let r = row.get_bounding_client_rect();
            (r.top() + r.height() * 0.5) as f32
        })
        .collect()
}

pub fn current_section(document: &web::Document, viewport_height: f32) -> Section {
    let tops = SECTION_ANCHORS.iter().filter_map(|(id, section)| {
        document
            .get_element_by_id(id)
            .map(|el| (*section, el.get_bounding_client_rect().top() as f32))
    });
    detect_section(tops, viewport_height)
}

/// Match the canvas backing store to its CSS size times devicePixelRatio.
/// Returns the ratio so the painter can scale its transform.
pub fn sync_canvas_backing_size(canvas: &web::HtmlCanvasElement, width: f32, height: f32) -> f64 {
    let dpr = web::window().map(|w| w.device_pixel_ratio()).unwrap_or(1.0);
    let style = canvas.style();
    _ = style.set_property("width", &format!("{width}px"));
    _ = style.set_property("height", &format!("{height}px"));
    canvas.set_width(((width as f64) * dpr).max(1.0) as u32);
    canvas.set_height(((height as f64) * dpr).max(1.0) as u32);
    dpr
}
