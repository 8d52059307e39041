use crate::pools::Rgb;

#[derive(Clone, Copy, Debug, PartialEq)]
pub enum Label {
    Glyph(char),
    Word(&'static str),
}

/// One `fillText` call for the canvas painter.
#[derive(Clone, Copy, Debug, PartialEq)]
pub struct TextDraw {
    pub label: Label,
    pub x: f32,
    pub y: f32,
    pub font_px: u8,
    pub color: Rgb,
    pub alpha: f32,
}
