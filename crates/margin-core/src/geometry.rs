use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum GeometryError {
    #[error("content column is not laid out yet (left={left}, right={right})")]
    Unmeasured { left: f32, right: f32 },
}

/// Viewport size plus the horizontal extent of the central content column.
#[derive(Clone, Copy, Debug, Default, PartialEq)]
pub struct Geometry {
    pub width: f32,
    pub height: f32,
    pub content_left: f32,
    pub content_right: f32,
}

impl Geometry {
    /// Validate raw layout readings. A column with no width means fonts or
    /// styles have not applied yet and the caller should try again later.
    pub fn measure(
        width: f32,
        height: f32,
        content_left: f32,
        content_right: f32,
    ) -> Result<Self, GeometryError> {
        let finite = [width, height, content_left, content_right]
            .iter()
            .all(|v| v.is_finite());
        if !finite || content_right <= content_left || width <= 0.0 || height <= 0.0 {
            return Err(GeometryError::Unmeasured {
                left: content_left,
                right: content_right,
            });
        }
        Ok(Self {
            width,
            height,
            content_left,
            content_right,
        })
    }

    #[inline]
    pub fn left_margin(&self) -> f32 {
        self.content_left.max(0.0)
    }

    #[inline]
    pub fn right_margin(&self) -> f32 {
        (self.width - self.content_right).max(0.0)
    }

    /// Margin width used for the legibility thresholds. The column is centred,
    /// so the left margin stands in for both sides.
    #[inline]
    pub fn margin_width(&self) -> f32 {
        self.left_margin()
    }
}
