// Host-side tests for the rain column layer.

use margin_core::constants::*;
use margin_core::rain::RainField;
use margin_core::{pool_for, Geometry, Label, RainFade, Section};
use rand::rngs::StdRng;
use rand::SeedableRng;

fn wide() -> Geometry {
    Geometry::measure(1920.0, 1080.0, 120.0, 1800.0).unwrap()
}

#[test]
fn build_fills_each_margin_at_pitch_multiples() {
    let mut rng = StdRng::seed_from_u64(7);
    let mut field = RainField::default();
    field.build(&wide(), MIN_MARGIN_COLUMNS, &mut rng);

    let cols = field.columns();
    assert_eq!(cols.len(), 18, "floor(120/13) = 9 per side");
    let inset = COLUMN_PITCH * COLUMN_INSET;
    for (i, c) in cols[..9].iter().enumerate() {
        assert!((c.x - (i as f32 * COLUMN_PITCH + inset)).abs() < 1e-4);
    }
    for (i, c) in cols[9..].iter().enumerate() {
        assert!((c.x - (1800.0 + i as f32 * COLUMN_PITCH + inset)).abs() < 1e-4);
    }
    for c in cols {
        assert!(c.y >= 0.0 && c.y < 1080.0);
        assert!(c.speed >= COLUMN_SPEED_MIN && c.speed < COLUMN_SPEED_MAX);
        assert!(c.base_opacity >= COLUMN_OPACITY_MIN && c.base_opacity < COLUMN_OPACITY_MAX);
        assert!(!c.excited);
        assert!(c.word.is_none());
    }
}

#[test]
fn asymmetric_margins_count_each_side_separately() {
    let mut rng = StdRng::seed_from_u64(1);
    let g = Geometry::measure(1000.0, 800.0, 100.0, 960.0).unwrap();
    let mut field = RainField::default();
    field.build(&g, MIN_MARGIN_COLUMNS, &mut rng);
    // 100 / 13 -> 7 left, 40 / 13 -> 3 right
    assert_eq!(field.columns().len(), 10);
}

#[test]
fn narrow_margin_builds_nothing() {
    let mut rng = StdRng::seed_from_u64(3);
    let g = Geometry::measure(1000.0, 800.0, 15.0, 985.0).unwrap();
    let mut field = RainField::default();
    field.build(&g, MIN_MARGIN_COLUMNS, &mut rng);
    assert!(field.columns().is_empty());
}

#[test]
fn rebuild_replaces_previous_columns() {
    let mut rng = StdRng::seed_from_u64(3);
    let mut field = RainField::default();
    field.build(&wide(), MIN_MARGIN_COLUMNS, &mut rng);
    field.build(&wide(), MIN_MARGIN_COLUMNS, &mut rng);
    assert_eq!(field.columns().len(), 18);
}

#[test]
fn columns_wrap_and_trails_stay_faint() {
    let g = wide();
    let mut rng = StdRng::seed_from_u64(11);
    let mut field = RainField::default();
    field.build(&g, MIN_MARGIN_COLUMNS, &mut rng);
    let fade = RainFade::default();
    let pool = pool_for(Section::Projects);
    let mut out = Vec::new();
    let mut saw_word = false;

    for frame in 0..4000 {
        if frame % 500 == 0 {
            field.excite(0.6, &mut rng);
        }
        out.clear();
        field.step(&g, pool, 2.4, &fade, &mut rng, &mut out);
        assert!(out.len() >= field.columns().len() * TRAIL_LEN);
        for c in field.columns() {
            assert!(c.y >= -COLUMN_OVERSCAN);
            assert!(c.y <= g.height + COLUMN_OVERSCAN + COLUMN_SPEED_MAX * 2.4 * EXCITED_SPEED);
        }
        for d in &out {
            match d.label {
                Label::Glyph(ch) => {
                    assert!(NOISE_GLYPHS.contains(&ch));
                    assert!(d.alpha >= 0.0 && d.alpha <= TRAIL_OPACITY_MAX);
                }
                Label::Word(w) => {
                    saw_word = true;
                    assert!(pool.rain.contains(&w));
                    assert!(pool.colors.contains(&d.color));
                    assert!(d.alpha <= RAIN_FADE_HOLD_OPACITY * RAIN_WORD_ALPHA_SCALE + 1e-6);
                }
            }
        }
    }
    assert!(saw_word, "expected at least one rain word over 4000 frames");
}

#[test]
fn excitement_eventually_clears_itself() {
    let g = wide();
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = RainField::default();
    field.build(&g, MIN_MARGIN_COLUMNS, &mut rng);
    field.excite(1.0, &mut rng);
    assert!(field.columns().iter().all(|c| c.excited));

    let mut out = Vec::new();
    for _ in 0..1000 {
        out.clear();
        field.step(&g, pool_for(Section::Hero), 1.0, &RainFade::default(), &mut rng, &mut out);
    }
    assert!(field.columns().iter().all(|c| !c.excited));
}

#[test]
fn calm_clears_every_column() {
    let mut rng = StdRng::seed_from_u64(5);
    let mut field = RainField::default();
    field.build(&wide(), MIN_MARGIN_COLUMNS, &mut rng);
    field.excite(1.0, &mut rng);
    field.calm();
    assert!(field.columns().iter().all(|c| !c.excited));
}

#[test]
fn rain_fade_holds_then_decays() {
    let fade = RainFade::default();
    assert_eq!(fade.next(100, 1.0), 0.30);
    assert_eq!(fade.next(21, 0.30), 0.30);
    assert!((fade.next(20, 0.30) - 0.279).abs() < 1e-6);
    let mut op = 0.30;
    for t in (0..=20).rev() {
        let next = fade.next(t, op);
        assert!(next < op);
        op = next;
    }
}

fn single_column() -> (Geometry, RainField, StdRng) {
    // 20px left margin holds exactly one column; no right margin.
    let g = Geometry::measure(1000.0, 800.0, 20.0, 1000.0).unwrap();
    let mut rng = StdRng::seed_from_u64(21);
    let mut field = RainField::default();
    field.build(&g, MIN_MARGIN_COLUMNS, &mut rng);
    assert_eq!(field.columns().len(), 1);
    (g, field, rng)
}

#[test]
fn excited_column_falls_faster_with_a_longer_brighter_trail() {
    let (g, mut field, mut rng) = single_column();
    let pool = pool_for(Section::Hero);
    let fade = RainFade::default();
    let factor = 1.5;
    let mut out = Vec::new();

    let col = field.columns()[0].clone();
    field.step(&g, pool, factor, &fade, &mut rng, &mut out);
    let calm_y = field.columns()[0].y;
    assert!((calm_y - col.y - col.speed * factor).abs() < 1e-4);
    let glyphs: Vec<_> = out
        .iter()
        .filter(|d| matches!(d.label, Label::Glyph(_)))
        .collect();
    assert_eq!(glyphs.len(), TRAIL_LEN);
    for (t, d) in glyphs.iter().enumerate() {
        let falloff = 1.0 - t as f32 / TRAIL_LEN as f32;
        assert!((d.alpha - (col.base_opacity * falloff).min(TRAIL_OPACITY_MAX)).abs() < 1e-6);
        assert!((d.y - (calm_y - t as f32 * GLYPH_PX)).abs() < 1e-4);
    }

    field.excite(1.0, &mut rng);
    out.clear();
    field.step(&g, pool, factor, &fade, &mut rng, &mut out);
    let excited_y = field.columns()[0].y;
    assert!((excited_y - calm_y - col.speed * factor * EXCITED_SPEED).abs() < 1e-4);
    let glyphs: Vec<_> = out
        .iter()
        .filter(|d| matches!(d.label, Label::Glyph(_)))
        .collect();
    assert_eq!(glyphs.len(), TRAIL_LEN_EXCITED);
    for (t, d) in glyphs.iter().enumerate() {
        let falloff = 1.0 - t as f32 / TRAIL_LEN_EXCITED as f32;
        let expected = (col.base_opacity * falloff * EXCITED_TRAIL_GAIN).min(TRAIL_OPACITY_MAX);
        assert!((d.alpha - expected).abs() < 1e-6);
    }
}

/// Steps a field for `frames` frames and follows each column's rain word.
/// Returns (longest life in frames, words dropped past the bottom edge).
fn follow_rain_words(g: &Geometry, speed_factor: f32, seed: u64, frames: usize) -> (u32, usize) {
    let mut rng = StdRng::seed_from_u64(seed);
    let mut field = RainField::default();
    field.build(g, MIN_MARGIN_COLUMNS, &mut rng);
    let pool = pool_for(Section::About);
    let fade = RainFade::default();
    let mut out = Vec::new();

    let n = field.columns().len();
    let mut prev: Vec<Option<(u32, f32)>> = vec![None; n];
    let mut life = vec![0u32; n];
    let mut longest = 0;
    let mut exited = 0;

    for _ in 0..frames {
        out.clear();
        field.step(g, pool, speed_factor, &fade, &mut rng, &mut out);
        for (i, col) in field.columns().iter().enumerate() {
            match (&col.word, prev[i]) {
                (Some(w), _) => {
                    assert!(w.ticks_left >= 1 && w.ticks_left < RAIN_WORD_LIFE_MAX);
                    assert!(w.y <= g.height + RAIN_WORD_EXIT);
                    life[i] += 1;
                    assert!(life[i] < RAIN_WORD_LIFE_MAX, "word outlived its lifetime");
                    prev[i] = Some((w.ticks_left, w.y));
                }
                (None, Some((ticks, y))) => {
                    // A word cleared with ticks to spare must have crossed the exit line.
                    if ticks > 1 {
                        assert!(y + COLUMN_SPEED_MAX * speed_factor > g.height + RAIN_WORD_EXIT);
                        exited += 1;
                    }
                    longest = longest.max(life[i]);
                    life[i] = 0;
                    prev[i] = None;
                }
                (None, None) => {}
            }
        }
        for d in &out {
            if let Label::Word(_) = d.label {
                assert!(d.y <= g.height + RAIN_WORD_EXIT);
            }
        }
    }
    (longest, exited)
}

#[test]
fn rain_words_expire_after_their_lifetime() {
    let (longest, _) = follow_rain_words(&wide(), 1.0, 17, 30_000);
    assert!(longest >= RAIN_WORD_LIFE_MIN, "longest word lived {longest} frames");
    assert!(longest < RAIN_WORD_LIFE_MAX);
}

#[test]
fn rain_words_are_dropped_past_the_bottom_edge() {
    // A short viewport and fast scroll push most words off the bottom.
    let g = Geometry::measure(1920.0, 200.0, 120.0, 1800.0).unwrap();
    let (_, exited) = follow_rain_words(&g, 2.4, 19, 30_000);
    assert!(exited > 0, "expected words to leave through the bottom edge");
}
