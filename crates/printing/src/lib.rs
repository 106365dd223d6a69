//! Typed read-only views over printer capability attributes.

pub mod attributes;
mod localize;
pub mod printer;

pub use attributes::{AttributeBag, AttributeValue};
pub use printer::{
    orientation_code_from_key, orientation_key_from_code, orientation_presentation_name,
    side_presentation_name, PageMargins, PrinterAttributes, LANDSCAPE, ONE_SIDED, PORTRAIT,
    REVERSE_LANDSCAPE, REVERSE_PORTRAIT, TWO_SIDED_LONG_EDGE, TWO_SIDED_SHORT_EDGE,
};
