// Page wiring and timing used by the web frontend. The animation tuning
// itself lives in `margin_core::constants`.

// DOM hooks
pub const CANVAS_ID: &str = "margin-canvas"; // full-viewport 2D canvas behind the page
pub const SVG_ID: &str = "tension-svg"; // full-viewport SVG holding one <path> per row
pub const CONTENT_SELECTOR: &str = ".wrap"; // central column; its box defines the margins
pub const ROW_SELECTOR: &str = ".project-row";
pub const CLOCK_ID: &str = "session-time"; // receives the HH:MM:SS session clock
pub const ENTRY_SELECTOR: &str = ".ani"; // elements whose CSS animation starts on first view
pub const SVG_NS: &str = "http://www.w3.org/2000/svg";

// Tension line presentation attributes
pub const LINE_STROKE_WIDTH: &str = "0.6";
pub const LINE_VECTOR_EFFECT: &str = "non-scaling-stroke";

// Timers (milliseconds)
pub const RESIZE_DEBOUNCE_MS: i32 = 100; // quiet period before a rebuild
pub const VELOCITY_DECAY_MS: i32 = 16; // scroll velocity decay period
pub const CLOCK_TICK_MS: i32 = 1000;

// Fraction of an entry element that must be visible before it animates
pub const ENTRY_THRESHOLD: f64 = 0.04;

// Frames to wait for the content column to get a width after fonts load
pub const MEASURE_RETRY_FRAMES: u32 = 120;
