use crate::constants::*;
use crate::draw::{Label, TextDraw};
use crate::geometry::Geometry;
use crate::pools::{Rgb, WordPool};
use rand::prelude::*;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum PopupPhase {
    FadeIn,
    /// Peak reached; `hold_left` frames remain before fading out.
    Hold,
    FadeOut,
}

/// A short-lived word flashing at a fixed spot in a margin.
#[derive(Clone, Debug)]
pub struct Popup {
    pub text: &'static str,
    pub x: f32,
    pub y: f32,
    pub opacity: f32,
    pub peak_opacity: f32,
    pub phase: PopupPhase,
    pub fade_speed: f32,
    pub color: Rgb,
    pub font_px: u8,
    pub drift: f32,
    pub hold: u32,
    pub hold_left: u32,
}

impl Popup {
    fn advance(&mut self) {
        match self.phase {
            PopupPhase::FadeIn => {
                self.opacity += self.fade_speed;
                if self.opacity >= self.peak_opacity {
                    self.opacity = self.peak_opacity;
                    self.phase = PopupPhase::Hold;
                    self.hold_left = self.hold;
                }
            }
            PopupPhase::Hold => {
                if self.hold_left > 0 {
                    self.hold_left -= 1;
                } else {
                    self.phase = PopupPhase::FadeOut;
                    self.fade_out();
                }
            }
            PopupPhase::FadeOut => self.fade_out(),
        }
        self.y += self.drift;
    }

    #[inline]
    fn fade_out(&mut self) {
        self.opacity -= self.fade_speed * POPUP_FADE_OUT_RATIO;
    }

    #[inline]
    fn is_alive(&self) -> bool {
        self.phase == PopupPhase::FadeIn || self.opacity > POPUP_VISIBLE_EPSILON
    }
}

#[derive(Debug, Default)]
pub struct PopupField {
    popups: Vec<Popup>,
}

impl PopupField {
    pub fn popups(&self) -> &[Popup] {
        &self.popups
    }

    pub fn len(&self) -> usize {
        self.popups.len()
    }

    pub fn is_empty(&self) -> bool {
        self.popups.is_empty()
    }

    pub fn clear(&mut self) {
        self.popups.clear();
    }

    /// Spawn one popup in a random margin. Returns false when the margin is
    /// too narrow or the field already holds `max` popups.
    pub fn spawn(
        &mut self,
        geometry: &Geometry,
        pool: &WordPool,
        min_margin: f32,
        max: usize,
        rng: &mut impl Rng,
    ) -> bool {
        if geometry.margin_width() < min_margin || self.popups.len() >= max {
            return false;
        }
        let (Some(text), Some(color)) = (pool.popup.choose(rng), pool.colors.choose(rng)) else {
            return false;
        };
        let x = if rng.gen_bool(0.5) {
            span(rng, POPUP_EDGE_INNER, geometry.content_left - POPUP_EDGE_OUTER)
        } else {
            span(
                rng,
                geometry.content_right + POPUP_EDGE_INNER,
                geometry.width - POPUP_EDGE_OUTER,
            )
        };
        let h = geometry.height;
        self.popups.push(Popup {
            text: *text,
            x,
            y: span(rng, h * POPUP_Y_MIN, h * POPUP_Y_MAX),
            opacity: 0.0,
            peak_opacity: rng.gen_range(POPUP_PEAK_MIN..POPUP_PEAK_MAX),
            phase: PopupPhase::FadeIn,
            fade_speed: rng.gen_range(POPUP_FADE_MIN..POPUP_FADE_MAX),
            color: *color,
            font_px: rng.gen_range(POPUP_FONT_MIN..=POPUP_FONT_MAX),
            drift: rng.gen_range(-POPUP_DRIFT..POPUP_DRIFT),
            hold: rng.gen_range(POPUP_HOLD_MIN..=POPUP_HOLD_MAX),
            hold_left: 0,
        });
        true
    }

    /// Per-frame spawn roll. Hovering a project row raises the odds.
    pub fn maybe_spawn(
        &mut self,
        geometry: &Geometry,
        pool: &WordPool,
        hovering: bool,
        min_margin: f32,
        max: usize,
        rng: &mut impl Rng,
    ) -> bool {
        let chance = if hovering {
            POPUP_CHANCE_HOVER
        } else {
            POPUP_CHANCE_IDLE
        };
        rng.gen_bool(chance) && self.spawn(geometry, pool, min_margin, max, rng)
    }

    pub fn burst(
        &mut self,
        count: usize,
        geometry: &Geometry,
        pool: &WordPool,
        min_margin: f32,
        max: usize,
        rng: &mut impl Rng,
    ) {
        for _ in 0..count {
            self.spawn(geometry, pool, min_margin, max, rng);
        }
    }

    /// Drop faded popups, then advance the survivors and emit them.
    pub fn step(&mut self, out: &mut Vec<TextDraw>) {
        self.popups.retain(Popup::is_alive);
        for p in &mut self.popups {
            p.advance();
            out.push(TextDraw {
                label: Label::Word(p.text),
                x: p.x,
                y: p.y,
                font_px: p.font_px,
                color: p.color,
                alpha: p.opacity.clamp(0.0, POPUP_ALPHA_MAX),
            });
        }
    }
}

// Uniform sample that tolerates an empty range (very narrow right margins).
#[inline]
fn span(rng: &mut impl Rng, lo: f32, hi: f32) -> f32 {
    if hi > lo {
        rng.gen_range(lo..hi)
    } else {
        lo
    }
}
