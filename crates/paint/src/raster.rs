use image::codecs::png::PngEncoder;
use image::{ColorType, ImageBuffer, ImageEncoder, Rgba};
use thiserror::Error;

use crate::canvas::Canvas;
use crate::color::Color;
use crate::font::Font;
use crate::geometry::Rect;
use crate::paint::{Paint, PaintStyle};

/// Errors raised while exporting a raster surface.
#[derive(Debug, Error)]
pub enum RasterError {
    #[error("PNG encoding failed: {0}")]
    Encode(#[from] image::ImageError),
}

/// Estimated advance width of a run, used when no shaping backend is attached.
pub fn estimate_text_width(text: &str, size_pt: f32) -> f32 {
    (text.chars().count() as f32) * size_pt.max(1.0) * 0.6
}

/// Pixel-buffer canvas for previews and tests.
/// 供預覽與測試使用的像素緩衝畫布。
///
/// Glyph runs are approximated by filled boxes; real text output comes from
/// the platform canvas backend.
pub struct RasterCanvas {
    buffer: ImageBuffer<Rgba<u8>, Vec<u8>>,
    scale: f32,
}

impl RasterCanvas {
    pub fn new(width_px: u32, height_px: u32, scale: f32, background: Color) -> Self {
        let buffer = ImageBuffer::from_pixel(
            width_px.max(1),
            height_px.max(1),
            color_to_rgba(background),
        );
        Self {
            buffer,
            scale: if scale > 0.0 { scale } else { 1.0 },
        }
    }

    pub fn width(&self) -> u32 {
        self.buffer.width()
    }

    pub fn height(&self) -> u32 {
        self.buffer.height()
    }

    pub fn pixel(&self, x: u32, y: u32) -> Option<Color> {
        if x >= self.buffer.width() || y >= self.buffer.height() {
            return None;
        }
        let Rgba([r, g, b, a]) = *self.buffer.get_pixel(x, y);
        Some(Color::rgba(r, g, b, a))
    }

    pub fn into_png(self) -> Result<Vec<u8>, RasterError> {
        let (width, height) = self.buffer.dimensions();
        let mut data = Vec::new();
        PngEncoder::new(&mut data).write_image(
            self.buffer.as_raw(),
            width,
            height,
            ColorType::Rgba8,
        )?;
        Ok(data)
    }

    fn fill_px(&mut self, x: i32, y: i32, width: i32, height: i32, color: Color) {
        if width <= 0 || height <= 0 {
            return;
        }
        let width_px = self.buffer.width() as i32;
        let height_px = self.buffer.height() as i32;
        let x0 = x.clamp(0, width_px);
        let y0 = y.clamp(0, height_px);
        let x1 = (x + width).clamp(0, width_px);
        let y1 = (y + height).clamp(0, height_px);
        if x0 >= x1 || y0 >= y1 {
            return;
        }
        let rgba = color_to_rgba(color);
        for yy in y0..y1 {
            for xx in x0..x1 {
                self.buffer.put_pixel(xx as u32, yy as u32, rgba);
            }
        }
    }

    fn put_px(&mut self, x: i32, y: i32, color: Color) {
        if x < 0 || y < 0 || x >= self.buffer.width() as i32 || y >= self.buffer.height() as i32 {
            return;
        }
        self.buffer.put_pixel(x as u32, y as u32, color_to_rgba(color));
    }
}

impl Canvas for RasterCanvas {
    fn draw_rect(&mut self, rect: Rect, paint: &Paint) {
        let x = (rect.origin.x * self.scale).round() as i32;
        let y = (rect.origin.y * self.scale).round() as i32;
        let width = (rect.size.width * self.scale).ceil() as i32;
        let height = (rect.size.height * self.scale).ceil() as i32;
        match paint.style() {
            PaintStyle::Fill => self.fill_px(x, y, width, height, paint.color()),
            PaintStyle::Stroke => {
                let thickness = ((paint.stroke_width() * self.scale).round() as i32).max(1);
                self.fill_px(x, y, width, thickness, paint.color());
                self.fill_px(x, y + height - thickness, width, thickness, paint.color());
                self.fill_px(x, y, thickness, height, paint.color());
                self.fill_px(x + width - thickness, y, thickness, height, paint.color());
            }
        }
    }

    fn draw_simple_string(&mut self, text: &str, x: f32, y: f32, font: &Font, paint: &Paint) {
        if text.is_empty() {
            return;
        }
        let width = estimate_text_width(text, font.descriptor().size_pt);
        let metrics = font.metrics();
        let px = (x * self.scale).round() as i32;
        let py = ((y - metrics.ascent) * self.scale).round() as i32;
        let width_px = (width * self.scale).ceil() as i32;
        let height_px = ((metrics.ascent + metrics.descent) * self.scale).ceil() as i32;
        self.fill_px(px, py, width_px.max(2), height_px.max(2), paint.color());
    }

    fn draw_line(&mut self, x0: f32, y0: f32, x1: f32, y1: f32, paint: &Paint) {
        let px0 = (x0 * self.scale).round() as i32;
        let py0 = (y0 * self.scale).round() as i32;
        let px1 = (x1 * self.scale).round() as i32;
        let py1 = (y1 * self.scale).round() as i32;
        let thickness = ((paint.stroke_width() * self.scale).round() as i32).max(1);

        if py0 == py1 {
            self.fill_px(px0.min(px1), py0, (px1 - px0).abs(), thickness, paint.color());
        } else if px0 == px1 {
            self.fill_px(px0, py0.min(py1), thickness, (py1 - py0).abs(), paint.color());
        } else {
            let dx = px1 - px0;
            let dy = py1 - py0;
            let steps = dx.abs().max(dy.abs());
            for step in 0..=steps {
                let x = px0 + dx * step / steps;
                let y = py0 + dy * step / steps;
                self.put_px(x, y, paint.color());
            }
        }
    }
}

fn color_to_rgba(color: Color) -> Rgba<u8> {
    Rgba([color.r, color.g, color.b, color.a])
}
