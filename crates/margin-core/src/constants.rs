// Tuning constants for the margin animations. Units are CSS pixels and
// display frames unless noted otherwise.

// Glyph grid
pub const GLYPH_PX: f32 = 11.0; // noise glyph font size
pub const COLUMN_PITCH: f32 = GLYPH_PX + 2.0; // horizontal distance between rain columns
pub const COLUMN_INSET: f32 = 0.45; // fraction of the pitch a column sits right of its slot

// Minimum margin width (px) before each layer renders at all
pub const MIN_MARGIN_COLUMNS: f32 = 20.0;
pub const MIN_MARGIN_POPUPS: f32 = 30.0;
pub const MIN_MARGIN_LINES: f32 = 40.0;

// Rain columns
pub const COLUMN_SPEED_MIN: f32 = 0.2;
pub const COLUMN_SPEED_MAX: f32 = 0.9;
pub const COLUMN_OPACITY_MIN: f32 = 0.03;
pub const COLUMN_OPACITY_MAX: f32 = 0.10;
pub const COLUMN_OVERSCAN: f32 = 20.0; // px past the bottom before wrapping to -OVERSCAN
pub const EXCITED_SPEED: f32 = 3.0;
pub const EXCITED_TRAIL_GAIN: f32 = 2.2;
pub const EXCITED_CLEAR_CHANCE: f64 = 0.03; // per frame
pub const TRAIL_LEN: usize = 6;
pub const TRAIL_LEN_EXCITED: usize = 18;
pub const TRAIL_OPACITY_MAX: f32 = 0.22;
pub const TRAIL_COLOR: [u8; 3] = [190, 190, 190];

// Scroll-driven speed factor: 1 + clamp(|velocity| * GAIN, 0, MAX)
pub const SCROLL_SPEED_GAIN: f32 = 0.003;
pub const SCROLL_SPEED_MAX_BOOST: f32 = 1.4;
pub const SCROLL_VELOCITY_DECAY: f32 = 0.78; // applied once per decay tick

// Rain words riding a column
pub const RAIN_WORD_CHANCE: f64 = 0.0014; // per column per frame
pub const RAIN_WORD_LIFE_MIN: u32 = 55;
pub const RAIN_WORD_LIFE_MAX: u32 = 130;
pub const RAIN_WORD_X_OFFSET: f32 = -18.0;
pub const RAIN_WORD_EXIT: f32 = 30.0; // px past the bottom before the word is dropped
pub const RAIN_WORD_ALPHA_SCALE: f32 = 0.38;
pub const RAIN_FADE_HOLD_OPACITY: f32 = 0.30;
pub const RAIN_FADE_TAIL_TICKS: u32 = 20;
pub const RAIN_FADE_TAIL_FACTOR: f32 = 0.93;

// Popup words
pub const MAX_POPUPS: usize = 18;
pub const POPUP_CHANCE_IDLE: f64 = 0.045;
pub const POPUP_CHANCE_HOVER: f64 = 0.12;
pub const POPUP_EDGE_INNER: f32 = 4.0;
pub const POPUP_EDGE_OUTER: f32 = 8.0;
pub const POPUP_Y_MIN: f32 = 0.05; // fraction of viewport height
pub const POPUP_Y_MAX: f32 = 0.92;
pub const POPUP_PEAK_MIN: f32 = 0.10;
pub const POPUP_PEAK_MAX: f32 = 0.28;
pub const POPUP_FADE_MIN: f32 = 0.008;
pub const POPUP_FADE_MAX: f32 = 0.022;
pub const POPUP_FADE_OUT_RATIO: f32 = 0.6;
pub const POPUP_FONT_MIN: u8 = 9;
pub const POPUP_FONT_MAX: u8 = 14;
pub const POPUP_DRIFT: f32 = 0.15; // max |vertical drift| per frame
pub const POPUP_HOLD_MIN: u32 = 80;
pub const POPUP_HOLD_MAX: u32 = 220;
pub const POPUP_VISIBLE_EPSILON: f32 = 0.002;
pub const POPUP_ALPHA_MAX: f32 = 0.32;
pub const POPUP_INITIAL_BURST: usize = 6;
pub const POPUP_SECTION_BURST: (usize, usize) = (4, 8);
pub const POPUP_HOVER_BURST: (usize, usize) = (3, 5);

// Tension lines
pub const LINE_IDLE_OPACITY: f32 = 0.03;
pub const LINE_OPACITY_EASE: f32 = 0.055;
pub const SPRING_STIFFNESS: f32 = 0.075;
pub const SPRING_DAMPING: f32 = 0.5;
pub const LINE_LEFT_CONTROL: f32 = 0.48; // fraction of the left margin
pub const LINE_RIGHT_CONTROL: f32 = 0.52; // fraction of the right margin
pub const LINE_SPIKE_CONTROL: f32 = 0.35; // fraction of spike x applied to control points
pub const LINE_STROKE: [u8; 3] = [100, 100, 100];

// Hover falloff
pub const HOVER_EXCITE_CHANCE: f64 = 0.6;
pub const HOVER_SPIKE_X: f32 = 24.0;
pub const HOVER_SPIKE_Y: f32 = 18.0;
pub const HOVER_OPACITY_MIN: f32 = 0.20;
pub const HOVER_OPACITY_MAX: f32 = 0.32;
pub const NEIGHBOR_SPIKE_Y: f32 = 7.0;
pub const NEIGHBOR_OPACITY: f32 = 0.09;

// Section tracking
pub const SECTION_ENTER_FRACTION: f32 = 0.55; // anchor top must be above this share of the viewport

pub const NOISE_GLYPHS: &[char] = &[
    '0', '1', 'ア', 'イ', 'ウ', 'エ', 'オ', 'カ', 'キ', 'ク', 'ケ', 'コ', '█', '▓', '▒', '░', '│',
    '┤', '╣', '║', '╗', '╝', '┐', '└', '┴', '┬', '├', '─', '┼', '╠', '═', '╬', '┘', '┌', 'Φ', 'Ψ',
    'Ω', '∂', '∆', '∇',
];
