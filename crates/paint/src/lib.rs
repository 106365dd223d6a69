//! Canvas substrate and text-decoration rendering shared by widget paint code.

pub mod canvas;
pub mod color;
pub mod decoration;
pub mod font;
pub mod geometry;
pub mod paint;
pub mod raster;

pub use canvas::{Canvas, DisplayCommand, DisplayList};
pub use color::{Color, ColorParseError};
pub use decoration::TextDecoration;
pub use font::{Font, FontDescriptor, FontMetrics, FontSlant, FontWeight};
pub use geometry::{Point, Rect, Size};
pub use paint::{Paint, PaintStyle};
pub use raster::{estimate_text_width, RasterCanvas, RasterError};
