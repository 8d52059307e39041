use crate::render::{CanvasPainter, LinePainter};
use margin_core::{MarginEngine, TextDraw};
use std::cell::RefCell;
use std::rc::Rc;
use std::sync::atomic::Ordering;
use wasm_bindgen::closure::Closure;
use wasm_bindgen::JsCast;
use web_sys as web;

pub struct FrameContext {
    pub engine: Rc<RefCell<MarginEngine>>,
    pub canvas: CanvasPainter,
    pub lines: LinePainter,
    pub draws: Vec<TextDraw>,
}

impl FrameContext {
    pub fn frame(&mut self) {
        let mut engine = self.engine.borrow_mut();
        engine.tick(&mut self.draws);
        let geometry = *engine.geometry();
        self.canvas.resize_if_needed(&geometry);
        self.canvas.paint(&self.draws);
        self.lines.paint(engine.lines().lines(), &geometry);
    }
}

/// Drive `FrameContext::frame` from requestAnimationFrame until `stop()`.
pub fn start_loop(frame_ctx: Rc<RefCell<FrameContext>>) {
    let tick: Rc<RefCell<Option<Closure<dyn FnMut()>>>> = Rc::new(RefCell::new(None));
    let tick_clone = tick.clone();
    *tick.borrow_mut() = Some(Closure::wrap(Box::new(move || {
        if !crate::RUNNING.load(Ordering::SeqCst) {
            log::info!("[frame] loop stopped");
            return;
        }
        frame_ctx.borrow_mut().frame();
        request_frame(&tick_clone);
    }) as Box<dyn FnMut()>));
    request_frame(&tick);
}

fn request_frame(tick: &Rc<RefCell<Option<Closure<dyn FnMut()>>>>) {
    if let (Some(w), Some(cb)) = (web::window(), tick.borrow().as_ref()) {
        _ = w.request_animation_frame(cb.as_ref().unchecked_ref());
    }
}

/// Resolve on the next animation frame.
pub async fn next_frame() {
    let promise = js_sys::Promise::new(&mut |resolve, _reject| {
        if let Some(w) = web::window() {
            _ = w.request_animation_frame(&resolve);
        }
    });
    _ = wasm_bindgen_futures::JsFuture::from(promise).await;
}
