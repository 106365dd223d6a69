#[cfg(test)]
use serde::Serialize;

use crate::color::Color;

/// Whether a paint fills geometry or strokes its outline.
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PaintStyle {
    Fill,
    Stroke,
}

/// Resolved drawing state handed to a canvas call.
///
/// Backends may treat stroke state as mutable, so a caller that needs to
/// adjust a paint mid-draw clones it first and mutates the clone; the rule
/// is never to mutate a paint allocated by someone else.
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct Paint {
    color: Color,
    style: PaintStyle,
    stroke_width: f32,
}

impl Paint {
    pub fn new(color: Color, style: PaintStyle) -> Self {
        Self {
            color,
            style,
            stroke_width: 1.0,
        }
    }

    pub fn fill(color: Color) -> Self {
        Self::new(color, PaintStyle::Fill)
    }

    pub fn stroke(color: Color) -> Self {
        Self::new(color, PaintStyle::Stroke)
    }

    pub fn color(&self) -> Color {
        self.color
    }

    pub fn style(&self) -> PaintStyle {
        self.style
    }

    pub fn stroke_width(&self) -> f32 {
        self.stroke_width
    }

    pub fn set_stroke_width(&mut self, width: f32) {
        self.stroke_width = width;
    }
}
