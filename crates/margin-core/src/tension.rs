use crate::config::SpringConfig;
use crate::constants::*;
use crate::geometry::Geometry;
use glam::Vec2;
use std::fmt::Write;

/// Spring-driven curve pair tying one project row to both margins.
#[derive(Clone, Debug)]
pub struct TensionLine {
    /// Vertical midpoint of the row, in viewport coordinates.
    pub base_y: f32,
    pub spike: Vec2,
    pub target_spike: Vec2,
    pub velocity: Vec2,
    pub opacity: f32,
    pub target_opacity: f32,
}

impl TensionLine {
    fn new(base_y: f32) -> Self {
        Self {
            base_y,
            spike: Vec2::ZERO,
            target_spike: Vec2::ZERO,
            velocity: Vec2::ZERO,
            opacity: 0.0,
            target_opacity: LINE_IDLE_OPACITY,
        }
    }

    pub fn relax(&mut self) {
        self.target_spike = Vec2::ZERO;
        self.target_opacity = LINE_IDLE_OPACITY;
    }

    #[inline]
    pub fn step(&mut self, spring: &SpringConfig) {
        self.velocity =
            self.velocity * spring.damping + (self.target_spike - self.spike) * spring.stiffness;
        self.spike += self.velocity;
        self.opacity += (self.target_opacity - self.opacity) * LINE_OPACITY_EASE;
    }

    /// SVG path data: one cubic through the left margin, one through the right.
    pub fn path_d(&self, g: &Geometry) -> String {
        let y = self.base_y;
        let sy = y + self.spike.y;
        let pull = self.spike.x * LINE_SPIKE_CONTROL;
        let l_mid = g.content_left * LINE_LEFT_CONTROL + pull;
        let r_mid = g.content_right + (g.width - g.content_right) * LINE_RIGHT_CONTROL - pull;
        let mut d = String::with_capacity(128);
        _ = write!(
            d,
            "M 0,{y} C {l_mid},{sy} {l_mid},{sy} {},{y} M {},{y} C {r_mid},{sy} {r_mid},{sy} {},{y}",
            g.content_left, g.content_right, g.width
        );
        d
    }

    pub fn stroke(&self) -> String {
        let [r, g, b] = LINE_STROKE;
        format!("rgba({r},{g},{b},{:.3})", self.opacity)
    }
}

#[derive(Debug, Default)]
pub struct TensionLines {
    lines: Vec<TensionLine>,
}

impl TensionLines {
    pub fn lines(&self) -> &[TensionLine] {
        &self.lines
    }

    pub fn get_mut(&mut self, index: usize) -> Option<&mut TensionLine> {
        self.lines.get_mut(index)
    }

    pub fn len(&self) -> usize {
        self.lines.len()
    }

    pub fn is_empty(&self) -> bool {
        self.lines.is_empty()
    }

    /// One line per row midpoint, all at rest. Empty when the margin is below
    /// `min_margin`.
    pub fn build(&mut self, geometry: &Geometry, row_midpoints: &[f32], min_margin: f32) {
        self.lines.clear();
        if geometry.margin_width() < min_margin {
            return;
        }
        self.lines
            .extend(row_midpoints.iter().map(|&y| TensionLine::new(y)));
        log::debug!("[lines] built {} lines", self.lines.len());
    }

    /// Follow the rows as the page scrolls or reflows.
    pub fn resync(&mut self, row_midpoints: &[f32]) {
        for (line, &y) in self.lines.iter_mut().zip(row_midpoints) {
            line.base_y = y;
        }
    }

    pub fn relax_all(&mut self) {
        for line in &mut self.lines {
            line.relax();
        }
    }

    pub fn step(&mut self, spring: &SpringConfig) {
        for line in &mut self.lines {
            line.step(spring);
        }
    }
}
