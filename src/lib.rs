#![cfg(target_arch = "wasm32")]
use margin_core::{EngineConfig, MarginEngine};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::{AtomicBool, AtomicI32, Ordering};
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::{spawn_local, JsFuture};
use web_sys as web;

mod clock;
mod constants;
mod dom;
mod events;
mod frame;
mod nav;
mod render;
mod style;

use constants::{CANVAS_ID, MEASURE_RETRY_FRAMES, SVG_ID};

static STARTED: AtomicBool = AtomicBool::new(false);
pub(crate) static RUNNING: AtomicBool = AtomicBool::new(false);
pub(crate) static DECAY_INTERVAL: AtomicI32 = AtomicI32::new(-1);
pub(crate) static CLOCK_INTERVAL: AtomicI32 = AtomicI32::new(-1);

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();

    if STARTED.swap(true, Ordering::SeqCst) {
        return Ok(());
    }
    log::info!("margin-web starting");
    RUNNING.store(true, Ordering::SeqCst);
    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

/// Stop the frame loop, the velocity timer and the session clock. The canvas
/// keeps its last frame.
#[wasm_bindgen]
pub fn stop() {
    RUNNING.store(false, Ordering::SeqCst);
    let Some(w) = web::window() else { return };
    for timer in [&DECAY_INTERVAL, &CLOCK_INTERVAL] {
        let id = timer.swap(-1, Ordering::SeqCst);
        if id >= 0 {
            w.clear_interval_with_handle(id);
        }
    }
}

// The content column's width depends on the web font, so layout is only
// trustworthy once document.fonts.ready resolves.
async fn wait_for_fonts(document: &web::Document) {
    if let Ok(ready) = document.fonts().ready() {
        _ = JsFuture::from(ready).await;
    }
}

async fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    // Page behaviour that does not depend on the margin layers.
    events::wire_session_clock(&window);
    events::wire_row_click(&window, &document);
    if let Err(e) = events::wire_entry_animations(&document) {
        log::warn!("[init] entry animations unavailable: {}", e);
    }

    let canvas: web::HtmlCanvasElement = dom::element_by_id(&document, CANVAS_ID)?;
    let svg: web::Element = dom::element_by_id(&document, SVG_ID)?;

    wait_for_fonts(&document).await;

    let mut attempts = 0;
    let geometry = loop {
        match dom::measure_geometry(&window, &document) {
            Ok(g) => break g,
            Err(e) if attempts < MEASURE_RETRY_FRAMES => {
                log::debug!("[init] deferring: {}", e);
                attempts += 1;
                frame::next_frame().await;
            }
            Err(e) => return Err(e),
        }
    };

    if !RUNNING.load(Ordering::SeqCst) {
        log::info!("[init] stopped before start");
        return Ok(());
    }

    let (_, vh) = dom::viewport_size(&window);
    let section = dom::current_section(&document, vh);
    let mut engine = MarginEngine::new(EngineConfig::default(), rand::random());
    engine.start(
        geometry,
        section,
        dom::scroll_y(&window),
        &dom::row_midpoints(&document),
    );
    let engine = Rc::new(RefCell::new(engine));

    events::wire_scroll(&window, &document, &engine);
    events::wire_velocity_decay(&window, &engine);
    events::wire_debounced_resize(&window, &document, &engine);
    events::wire_row_hover(&document, &engine);

    let frame_ctx = Rc::new(RefCell::new(frame::FrameContext {
        engine: engine.clone(),
        canvas: render::CanvasPainter::new(canvas)?,
        lines: render::LinePainter::new(document.clone(), svg),
        draws: Vec::new(),
    }));
    frame::start_loop(frame_ctx);
    Ok(())
}
