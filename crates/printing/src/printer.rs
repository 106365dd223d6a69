use crate::attributes::AttributeBag;
use crate::localize;

/// Orientation keywords carried in capability attributes.
pub const PORTRAIT: &str = "portrait";
pub const LANDSCAPE: &str = "landscape";
pub const REVERSE_LANDSCAPE: &str = "reverse-landscape";
pub const REVERSE_PORTRAIT: &str = "reverse-portrait";

/// Sides keywords.
pub const ONE_SIDED: &str = "one-sided";
pub const TWO_SIDED_LONG_EDGE: &str = "two-sided-long-edge";
pub const TWO_SIDED_SHORT_EDGE: &str = "two-sided-short-edge";

/// Protocol code meaning "no orientation requested".
const ORIENTATION_NONE_CODE: i32 = 7;

/// Page margins in hundredths of a millimeter (1/2540 inch).
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PageMargins {
    pub top: i32,
    pub left: i32,
    pub bottom: i32,
    pub right: i32,
}

/// Read-only typed view over a printer's capability attributes.
///
/// Every accessor is a pure read with a documented default; absent or
/// malformed data degrades to that default rather than failing.
#[derive(Debug, Clone, Copy)]
pub struct PrinterAttributes<'a> {
    bag: &'a AttributeBag,
}

impl<'a> PrinterAttributes<'a> {
    pub fn new(bag: &'a AttributeBag) -> Self {
        Self { bag }
    }

    pub fn bag(&self) -> &'a AttributeBag {
        self.bag
    }

    /// Icon URLs that can be used to represent this printer.
    pub fn icons(&self) -> Vec<String> {
        self.bag.strings("printer-icons")
    }

    /// Default media (page size). Empty when the printer reports none.
    pub fn default_media(&self) -> &'a str {
        self.bag.first_string("media-default", "")
    }

    /// Media (page sizes) that may be used.
    pub fn supported_media(&self) -> Vec<String> {
        self.bag.strings("media-supported")
    }

    /// Default color mode. Empty when the printer reports none.
    pub fn default_color_mode(&self) -> &'a str {
        self.bag.first_string("print-color-mode-default", "")
    }

    /// Color modes that may be used.
    pub fn supported_color_modes(&self) -> Vec<String> {
        self.bag.strings("print-color-mode-supported")
    }

    /// Maximum number of copies supported; 1 when unreported.
    pub fn max_copies(&self) -> i32 {
        self.bag.first_integer("copies-supported", 1)
    }

    /// Document MIME types the printer accepts.
    pub fn supported_document_types(&self) -> Vec<String> {
        self.bag.strings("document-format-supported")
    }

    /// Attributes that may accompany a new job request.
    pub fn supported_job_creation_attributes(&self) -> Vec<String> {
        self.bag.strings("job-creation-attributes-supported")
    }

    /// Media sources (trays) that may be selected.
    pub fn supported_media_sources(&self) -> Vec<String> {
        self.bag.strings("media-source-supported")
    }

    /// Default content optimization. Empty when the printer reports none.
    pub fn default_content_optimization(&self) -> &'a str {
        self.bag.first_string("print-content-optimize-default", "")
    }

    /// Content optimizations that may be requested.
    pub fn supported_content_optimizations(&self) -> Vec<String> {
        self.bag.strings("print-content-optimize-supported")
    }

    /// Default sides keyword. Empty when the printer reports none.
    pub fn default_sides(&self) -> &'a str {
        self.bag.first_string("sides-default", "")
    }

    /// Sides keywords that may be requested.
    pub fn supported_sides(&self) -> Vec<String> {
        self.bag.strings("sides-supported")
    }

    /// Default page orientation; `None` when the printer reports no
    /// orientation (or an undefined code).
    pub fn default_orientation(&self) -> Option<&'static str> {
        orientation_key_from_code(
            self.bag
                .first_integer("orientation-requested-default", ORIENTATION_NONE_CODE),
        )
    }

    /// Page orientations that may be requested; undefined codes are skipped.
    pub fn supported_orientations(&self) -> Vec<&'static str> {
        self.bag
            .integers("orientation-requested-supported")
            .into_iter()
            .filter_map(orientation_key_from_code)
            .collect()
    }

    /// Minimum page margins, in hundredths of a millimeter.
    pub fn minimum_margins(&self) -> PageMargins {
        PageMargins {
            top: self.bag.first_integer("media-top-margin-supported", 0),
            left: self.bag.first_integer("media-left-margin-supported", 0),
            bottom: self.bag.first_integer("media-bottom-margin-supported", 0),
            right: self.bag.first_integer("media-right-margin-supported", 0),
        }
    }
}

/// Maps a protocol orientation code to its keyword; 3 through 6 are the only
/// defined values.
pub fn orientation_key_from_code(code: i32) -> Option<&'static str> {
    match code {
        3 => Some(PORTRAIT),
        4 => Some(LANDSCAPE),
        5 => Some(REVERSE_LANDSCAPE),
        6 => Some(REVERSE_PORTRAIT),
        _ => None,
    }
}

/// Reverse of [`orientation_key_from_code`]; unknown keywords map to the
/// "none" code 7. No accessor calls this yet; it is the write side of an
/// orientation picker.
pub fn orientation_code_from_key(key: &str) -> i32 {
    match key {
        PORTRAIT => 3,
        LANDSCAPE => 4,
        REVERSE_LANDSCAPE => 5,
        REVERSE_PORTRAIT => 6,
        _ => ORIENTATION_NONE_CODE,
    }
}

/// Human-readable name for a sides keyword; unknown keys pass through
/// unchanged.
pub fn side_presentation_name(key: &str) -> &str {
    match key {
        ONE_SIDED => localize::text("sides.one-sided"),
        TWO_SIDED_LONG_EDGE => localize::text("sides.two-sided-long-edge"),
        TWO_SIDED_SHORT_EDGE => localize::text("sides.two-sided-short-edge"),
        other => other,
    }
}

/// Human-readable name for an orientation keyword; unknown keys pass through
/// unchanged.
pub fn orientation_presentation_name(key: &str) -> &str {
    match key {
        PORTRAIT => localize::text("orientation.portrait"),
        LANDSCAPE => localize::text("orientation.landscape"),
        REVERSE_LANDSCAPE => localize::text("orientation.reverse-landscape"),
        REVERSE_PORTRAIT => localize::text("orientation.reverse-portrait"),
        other => other,
    }
}
