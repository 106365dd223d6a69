#[cfg(test)]
use serde::Serialize;

use crate::font::{Font, FontDescriptor};
use crate::geometry::{Point, Rect};
use crate::paint::Paint;

/// Drawing surface consumed by the text renderer and widget paint code.
///
/// `draw_simple_string` positions `y` at the text baseline.
pub trait Canvas {
    fn draw_rect(&mut self, rect: Rect, paint: &Paint);
    fn draw_simple_string(&mut self, text: &str, x: f32, y: f32, font: &Font, paint: &Paint);
    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint);
}

/// A single recorded drawing command.
/// 單一筆記錄下來的繪圖指令。
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone)]
pub enum DisplayCommand {
    Rect {
        rect: Rect,
        paint: Paint,
    },
    Text {
        text: String,
        position: Point,
        font: FontDescriptor,
        paint: Paint,
    },
    Line {
        from: Point,
        to: Point,
        paint: Paint,
    },
}

/// Canvas implementation that records commands instead of rasterizing them.
/// 以記錄指令取代實際點陣化的畫布實作。
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone, Default)]
pub struct DisplayList {
    commands: Vec<DisplayCommand>,
}

impl DisplayList {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn push(&mut self, command: DisplayCommand) {
        self.commands.push(command);
    }

    pub fn commands(&self) -> &[DisplayCommand] {
        &self.commands
    }

    pub fn len(&self) -> usize {
        self.commands.len()
    }

    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }
}

impl Canvas for DisplayList {
    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        self.push(DisplayCommand::Rect {
            rect,
            paint: paint.clone(),
        });
    }

    fn draw_simple_string(&mut self, text: &str, x: f32, y: f32, font: &Font, paint: &Paint) {
        self.push(DisplayCommand::Text {
            text: text.to_string(),
            position: Point::new(x, y),
            font: font.descriptor().clone(),
            paint: paint.clone(),
        });
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        self.push(DisplayCommand::Line {
            from: Point::new(x0, y0),
            to: Point::new(x1, y1),
            paint: paint.clone(),
        });
    }
}
