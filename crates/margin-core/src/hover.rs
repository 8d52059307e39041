//! Pointer enter/leave on project rows, translated into line targets.
//!
//! The hovered row's line gets a full spike and brightens; its direct
//! neighbours get a small vertical nudge; everything else stays idle.

use crate::constants::*;
use crate::tension::TensionLines;
use glam::Vec2;
use rand::Rng;

pub fn spike_row(lines: &mut TensionLines, row: usize, rng: &mut impl Rng) {
    if let Some(line) = lines.get_mut(row) {
        line.target_spike = Vec2::new(
            rng.gen_range(-HOVER_SPIKE_X..HOVER_SPIKE_X),
            rng.gen_range(-HOVER_SPIKE_Y..HOVER_SPIKE_Y),
        );
        line.target_opacity = rng.gen_range(HOVER_OPACITY_MIN..HOVER_OPACITY_MAX);
    }
    let neighbours = [row.checked_sub(1), row.checked_add(1)];
    for i in neighbours.into_iter().flatten() {
        if let Some(line) = lines.get_mut(i) {
            line.target_spike = Vec2::new(0.0, rng.gen_range(-NEIGHBOR_SPIKE_Y..NEIGHBOR_SPIKE_Y));
            line.target_opacity = NEIGHBOR_OPACITY;
        }
    }
}

/// Leaving any row releases every line back to rest; the springs do the rest.
#[inline]
pub fn release(lines: &mut TensionLines) {
    lines.relax_all();
}
