use crate::constants::{LINE_STROKE_WIDTH, LINE_VECTOR_EFFECT, SVG_NS};
use crate::dom;
use crate::style;
use margin_core::tension::TensionLine;
use margin_core::{Geometry, Label, TextDraw};
use wasm_bindgen::JsCast;
use web_sys as web;

/// Canvas2D painter for rain trails, rain words and popups.
pub struct CanvasPainter {
    canvas: web::HtmlCanvasElement,
    ctx: web::CanvasRenderingContext2d,
    width: f32,
    height: f32,
    font_px: u8,
}

impl CanvasPainter {
    pub fn new(canvas: web::HtmlCanvasElement) -> anyhow::Result<Self> {
        let ctx = canvas
            .get_context("2d")
            .map_err(|e| anyhow::anyhow!("{:?}", e))?
            .ok_or_else(|| anyhow::anyhow!("2d context unavailable"))?
            .dyn_into::<web::CanvasRenderingContext2d>()
            .map_err(|e| anyhow::anyhow!("{:?}", e))?;
        Ok(Self {
            canvas,
            ctx,
            width: 0.0,
            height: 0.0,
            font_px: 0,
        })
    }

    pub fn resize_if_needed(&mut self, g: &Geometry) {
        if self.width == g.width && self.height == g.height {
            return;
        }
        self.width = g.width;
        self.height = g.height;
        let dpr = dom::sync_canvas_backing_size(&self.canvas, g.width, g.height);
        // resizing resets the context state
        _ = self.ctx.set_transform(dpr, 0.0, 0.0, dpr, 0.0, 0.0);
        self.font_px = 0;
        log::debug!("[canvas] {}x{} @{}x", g.width, g.height, dpr);
    }

    pub fn paint(&mut self, draws: &[TextDraw]) {
        self.ctx
            .clear_rect(0.0, 0.0, self.width as f64, self.height as f64);
        let mut buf = [0u8; 4];
        for d in draws {
            if d.font_px != self.font_px {
                self.ctx.set_font(&style::font(d.font_px));
                self.font_px = d.font_px;
            }
            self.ctx.set_fill_style_str(&style::rgba(d.color, d.alpha));
            let text: &str = match d.label {
                Label::Glyph(c) => c.encode_utf8(&mut buf),
                Label::Word(w) => w,
            };
            _ = self.ctx.fill_text(text, d.x as f64, d.y as f64);
        }
    }
}

/// Keeps one SVG <path> per tension line and copies line state into it.
pub struct LinePainter {
    document: web::Document,
    svg: web::Element,
    paths: Vec<web::Element>,
    size: (f32, f32),
}

impl LinePainter {
    pub fn new(document: web::Document, svg: web::Element) -> Self {
        Self {
            document,
            svg,
            paths: Vec::new(),
            size: (0.0, 0.0),
        }
    }

    fn rebuild(&mut self, count: usize) {
        self.svg.set_inner_html("");
        self.paths.clear();
        for _ in 0..count {
            let path = match self.document.create_element_ns(Some(SVG_NS), "path") {
                Ok(p) => p,
                Err(e) => {
                    log::error!("svg path error: {:?}", e);
                    return;
                }
            };
            _ = path.set_attribute("fill", "none");
            _ = path.set_attribute("stroke-width", LINE_STROKE_WIDTH);
            _ = path.set_attribute("vector-effect", LINE_VECTOR_EFFECT);
            _ = self.svg.append_child(&path);
            self.paths.push(path);
        }
        log::debug!("[svg] {} paths", count);
    }

    pub fn paint(&mut self, lines: &[TensionLine], g: &Geometry) {
        if self.size != (g.width, g.height) {
            self.size = (g.width, g.height);
            _ = self.svg.set_attribute("width", &g.width.to_string());
            _ = self.svg.set_attribute("height", &g.height.to_string());
        }
        if self.paths.len() != lines.len() {
            self.rebuild(lines.len());
        }
        for (path, line) in self.paths.iter().zip(lines) {
            _ = path.set_attribute("d", &line.path_d(g));
            _ = path.set_attribute("stroke", &line.stroke());
        }
    }
}
