// Host-side tests for frontend wiring constants.
// The main crate is wasm-only, so we include the pure-Rust modules directly.

#![allow(dead_code)]
mod constants {
    include!("../src/constants.rs");
}

use constants::*;

#[test]
#[allow(clippy::assertions_on_constants)]
fn dom_hooks_are_well_formed() {
    for id in [CANVAS_ID, SVG_ID, CLOCK_ID] {
        assert!(!id.is_empty());
        assert!(!id.starts_with('#'), "ids are passed to getElementById");
    }
    assert!(CONTENT_SELECTOR.starts_with('.'));
    assert!(ROW_SELECTOR.starts_with('.'));
    assert!(ENTRY_SELECTOR.starts_with('.'));
    assert!(ENTRY_THRESHOLD > 0.0 && ENTRY_THRESHOLD <= 1.0);
    assert_eq!(SVG_NS, "http://www.w3.org/2000/svg");
    assert!(LINE_STROKE_WIDTH.parse::<f32>().unwrap() > 0.0);
}

#[test]
#[allow(clippy::assertions_on_constants)]
fn timers_have_logical_relationships() {
    assert!(VELOCITY_DECAY_MS > 0);
    // the debounce must outlast several decay ticks so a drag-resize settles
    assert!(RESIZE_DEBOUNCE_MS > VELOCITY_DECAY_MS * 4);
    assert!(MEASURE_RETRY_FRAMES > 0);
    assert_eq!(CLOCK_TICK_MS, 1000, "the clock shows whole seconds");
}
