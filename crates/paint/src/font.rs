#[cfg(test)]
use serde::Serialize;

/// Weight of a font face.
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontWeight {
    #[default]
    Regular,
    Medium,
    Bold,
}

/// Slant of a font face.
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash)]
pub enum FontSlant {
    #[default]
    Upright,
    Italic,
}

/// Stable identity of a font selection.
///
/// Two fonts resolving the same descriptor are interchangeable for layout
/// purposes, regardless of which handle produced them.
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone, PartialEq)]
pub struct FontDescriptor {
    pub family: String,
    pub size_pt: f32,
    pub weight: FontWeight,
    pub slant: FontSlant,
}

impl FontDescriptor {
    pub fn new(family: impl Into<String>, size_pt: f32) -> Self {
        Self {
            family: family.into(),
            size_pt,
            weight: FontWeight::default(),
            slant: FontSlant::default(),
        }
    }
}

/// Vertical metrics of a font, in the same units as the canvas.
#[cfg_attr(test, derive(Serialize))]
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct FontMetrics {
    pub ascent: f32,
    pub descent: f32,
    pub leading: f32,
}

impl FontMetrics {
    /// Size-derived estimate used when no shaping backend is attached.
    pub fn approximate(size_pt: f32) -> Self {
        let size = size_pt.max(1.0);
        Self {
            ascent: size * 0.8,
            descent: size * 0.2,
            leading: size * 0.1,
        }
    }
}

/// A font selection paired with its resolved metrics.
#[derive(Debug, Clone, PartialEq)]
pub struct Font {
    descriptor: FontDescriptor,
    metrics: FontMetrics,
}

impl Font {
    pub fn new(descriptor: FontDescriptor, metrics: FontMetrics) -> Self {
        Self {
            descriptor,
            metrics,
        }
    }

    /// Builds a font with estimated metrics for the given family and size.
    pub fn approximate(family: impl Into<String>, size_pt: f32) -> Self {
        let descriptor = FontDescriptor::new(family, size_pt);
        let metrics = FontMetrics::approximate(descriptor.size_pt);
        Self::new(descriptor, metrics)
    }

    /// Distance from the top of a line to the text baseline.
    pub fn baseline(&self) -> f32 {
        self.metrics.ascent
    }

    /// Full height of one line, including leading.
    pub fn line_height(&self) -> f32 {
        self.metrics.ascent + self.metrics.descent + self.metrics.leading
    }

    pub fn descriptor(&self) -> &FontDescriptor {
        &self.descriptor
    }

    pub fn metrics(&self) -> FontMetrics {
        self.metrics
    }
}
