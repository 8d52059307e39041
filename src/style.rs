// CSS strings for the canvas painter.

pub const FONT_FAMILY: &str = "'DM Mono', monospace";

#[inline]
pub fn font(px: u8) -> String {
    format!("{px}px {FONT_FAMILY}")
}

#[inline]
pub fn rgba(rgb: [u8; 3], alpha: f32) -> String {
    let [r, g, b] = rgb;
    format!("rgba({r},{g},{b},{:.4})", alpha.clamp(0.0, 1.0))
}
