use crate::config::RainFade;
use crate::constants::*;
use crate::draw::{Label, TextDraw};
use crate::geometry::Geometry;
use crate::pools::{Rgb, WordPool};
use rand::prelude::*;

#[derive(Clone, Debug)]
pub struct RainWord {
    pub text: &'static str,
    pub y: f32,
    pub ticks_left: u32,
    pub opacity: f32,
    pub color: Rgb,
}

/// A vertical strip of falling noise glyphs in one of the margins.
#[derive(Clone, Debug)]
pub struct RainColumn {
    pub x: f32,
    pub y: f32,
    pub speed: f32,
    pub base_opacity: f32,
    pub excited: bool,
    pub word: Option<RainWord>,
}

impl RainColumn {
    fn new(x: f32, height: f32, rng: &mut impl Rng) -> Self {
        Self {
            x,
            y: rng.gen_range(0.0..height.max(1.0)),
            speed: rng.gen_range(COLUMN_SPEED_MIN..COLUMN_SPEED_MAX),
            base_opacity: rng.gen_range(COLUMN_OPACITY_MIN..COLUMN_OPACITY_MAX),
            excited: false,
            word: None,
        }
    }
}

/// Multiplier applied to every column's fall speed from the decayed scroll
/// velocity. Fast scrolling at most multiplies speed by `1 + MAX_BOOST`.
#[inline]
pub fn scroll_speed_factor(scroll_velocity: f32) -> f32 {
    1.0 + (scroll_velocity.abs() * SCROLL_SPEED_GAIN).clamp(0.0, SCROLL_SPEED_MAX_BOOST)
}

#[derive(Debug, Default)]
pub struct RainField {
    columns: Vec<RainColumn>,
}

impl RainField {
    pub fn columns(&self) -> &[RainColumn] {
        &self.columns
    }

    /// Lay out one column per pitch in each margin. Leaves the field empty
    /// when the margin is below `min_margin`.
    pub fn build(&mut self, geometry: &Geometry, min_margin: f32, rng: &mut impl Rng) {
        self.columns.clear();
        if geometry.margin_width() < min_margin {
            log::debug!("[rain] margin {:.0}px too narrow", geometry.margin_width());
            return;
        }
        let left = (geometry.left_margin() / COLUMN_PITCH).floor() as usize;
        let right = (geometry.right_margin() / COLUMN_PITCH).floor() as usize;
        let inset = COLUMN_PITCH * COLUMN_INSET;
        for i in 0..left {
            let x = i as f32 * COLUMN_PITCH + inset;
            self.columns.push(RainColumn::new(x, geometry.height, rng));
        }
        for i in 0..right {
            let x = geometry.content_right + i as f32 * COLUMN_PITCH + inset;
            self.columns.push(RainColumn::new(x, geometry.height, rng));
        }
        log::debug!("[rain] built {} + {} columns", left, right);
    }

    pub fn excite(&mut self, chance: f64, rng: &mut impl Rng) {
        for c in &mut self.columns {
            if rng.gen_bool(chance) {
                c.excited = true;
            }
        }
    }

    pub fn calm(&mut self) {
        for c in &mut self.columns {
            c.excited = false;
        }
    }

    /// Advance every column by one frame and emit its trail and rain word.
    pub fn step(
        &mut self,
        geometry: &Geometry,
        pool: &WordPool,
        speed_factor: f32,
        fade: &RainFade,
        rng: &mut impl Rng,
        out: &mut Vec<TextDraw>,
    ) {
        let h = geometry.height;
        for col in &mut self.columns {
            let excite = if col.excited { EXCITED_SPEED } else { 1.0 };
            let dy = col.speed * speed_factor * excite;
            col.y += dy;
            if col.y > h + COLUMN_OVERSCAN {
                col.y = -COLUMN_OVERSCAN;
            }

            if col.word.is_none() && rng.gen_bool(RAIN_WORD_CHANCE) {
                if let (Some(text), Some(color)) =
                    (pool.rain.choose(rng), pool.colors.choose(rng))
                {
                    col.word = Some(RainWord {
                        text: *text,
                        y: col.y,
                        ticks_left: rng.gen_range(RAIN_WORD_LIFE_MIN..=RAIN_WORD_LIFE_MAX),
                        opacity: 1.0,
                        color: *color,
                    });
                }
            }

            let (trail, gain) = if col.excited {
                (TRAIL_LEN_EXCITED, EXCITED_TRAIL_GAIN)
            } else {
                (TRAIL_LEN, 1.0)
            };
            for t in 0..trail {
                let falloff = 1.0 - t as f32 / trail as f32;
                let alpha = (col.base_opacity * falloff * gain).clamp(0.0, TRAIL_OPACITY_MAX);
                out.push(TextDraw {
                    label: Label::Glyph(*NOISE_GLYPHS.choose(rng).unwrap_or(&'0')),
                    x: col.x,
                    y: col.y - t as f32 * GLYPH_PX,
                    font_px: GLYPH_PX as u8,
                    color: TRAIL_COLOR,
                    alpha,
                });
            }

            if let Some(word) = &mut col.word {
                word.ticks_left = word.ticks_left.saturating_sub(1);
                word.y += dy;
                if word.y > h + RAIN_WORD_EXIT {
                    col.word = None;
                } else {
                    word.opacity = fade.next(word.ticks_left, word.opacity);
                    out.push(TextDraw {
                        label: Label::Word(word.text),
                        x: col.x + RAIN_WORD_X_OFFSET,
                        y: word.y,
                        font_px: GLYPH_PX as u8 - 1,
                        color: word.color,
                        alpha: word.opacity * RAIN_WORD_ALPHA_SCALE,
                    });
                    if word.ticks_left == 0 {
                        col.word = None;
                    }
                }
            }

            if col.excited && rng.gen_bool(EXCITED_CLEAR_CHANCE) {
                col.excited = false;
            }
        }
    }
}
