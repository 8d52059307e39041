use crate::constants::*;

/// Opacity curve for a rain word riding a column.
///
/// The word sits at a flat `hold_opacity` while more than `tail_ticks` of its
/// lifetime remain, then decays geometrically by `tail_factor` per frame. The
/// jump between the two regimes is intentional and kept as-is.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct RainFade {
    pub hold_opacity: f32,
    pub tail_ticks: u32,
    pub tail_factor: f32,
}

impl RainFade {
    #[inline]
    pub fn next(&self, ticks_left: u32, opacity: f32) -> f32 {
        if ticks_left > self.tail_ticks {
            self.hold_opacity
        } else {
            opacity * self.tail_factor
        }
    }
}

impl Default for RainFade {
    fn default() -> Self {
        Self {
            hold_opacity: RAIN_FADE_HOLD_OPACITY,
            tail_ticks: RAIN_FADE_TAIL_TICKS,
            tail_factor: RAIN_FADE_TAIL_FACTOR,
        }
    }
}

/// Per-frame spring used by the tension lines:
/// `v = v * damping + (target - x) * stiffness; x += v`.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct SpringConfig {
    pub stiffness: f32,
    pub damping: f32,
}

impl SpringConfig {
    /// True when the discrete update has real eigenvalues, i.e. a line released
    /// from rest settles on its target without ringing.
    pub fn is_overdamped(&self) -> bool {
        let bound = 1.0 - self.damping.sqrt();
        self.stiffness <= bound * bound
    }
}

impl Default for SpringConfig {
    fn default() -> Self {
        Self {
            stiffness: SPRING_STIFFNESS,
            damping: SPRING_DAMPING,
        }
    }
}

#[derive(Clone, Debug)]
pub struct EngineConfig {
    pub rain_fade: RainFade,
    pub spring: SpringConfig,
    pub max_popups: usize,
    pub min_margin_columns: f32,
    pub min_margin_popups: f32,
    pub min_margin_lines: f32,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            rain_fade: RainFade::default(),
            spring: SpringConfig::default(),
            max_popups: MAX_POPUPS,
            min_margin_columns: MIN_MARGIN_COLUMNS,
            min_margin_popups: MIN_MARGIN_POPUPS,
            min_margin_lines: MIN_MARGIN_LINES,
        }
    }
}
