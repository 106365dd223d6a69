use std::collections::BTreeMap;
use std::fs;
use std::path::PathBuf;

use inkwork_printing::{
    orientation_presentation_name, side_presentation_name, AttributeBag, PrinterAttributes,
};
use ron::de::from_str as ron_from_str;
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct CapabilityFixture {
    texts: BTreeMap<String, Vec<String>>,
    integers: BTreeMap<String, Vec<i32>>,
    expected: Expected,
}

#[derive(Debug, Deserialize)]
struct Expected {
    default_media: String,
    default_color_mode: String,
    max_copies: i32,
    default_orientation: Option<String>,
    supported_orientations: Vec<String>,
    supported_sides: Vec<String>,
    side_names: Vec<String>,
    margins: (i32, i32, i32, i32),
}

fn load_fixture() -> CapabilityFixture {
    let fixture_path =
        PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures/printer_caps.ron");
    let fixture_text = fs::read_to_string(&fixture_path)
        .unwrap_or_else(|err| panic!("failed to read {fixture_path:?}: {err}"));
    ron_from_str(&fixture_text)
        .unwrap_or_else(|err| panic!("failed to parse {fixture_path:?}: {err}"))
}

fn bag_from_fixture(fixture: &CapabilityFixture) -> AttributeBag {
    let mut bag = AttributeBag::new();
    for (key, values) in &fixture.texts {
        bag.insert_texts(key.clone(), values.iter().cloned());
    }
    for (key, values) in &fixture.integers {
        bag.insert_integers(key.clone(), values.iter().copied());
    }
    bag
}

#[test]
fn fixture_capabilities_surface_through_the_view() {
    let fixture = load_fixture();
    let bag = bag_from_fixture(&fixture);
    let printer = PrinterAttributes::new(&bag);
    let expected = &fixture.expected;

    assert_eq!(printer.default_media(), expected.default_media);
    assert_eq!(printer.default_color_mode(), expected.default_color_mode);
    assert_eq!(printer.max_copies(), expected.max_copies);
    assert_eq!(
        printer.default_orientation().map(str::to_string),
        expected.default_orientation
    );
    assert_eq!(
        printer.supported_orientations(),
        expected
            .supported_orientations
            .iter()
            .map(String::as_str)
            .collect::<Vec<_>>()
    );
    assert_eq!(printer.supported_sides(), expected.supported_sides);

    let side_names: Vec<String> = printer
        .supported_sides()
        .iter()
        .map(|key| side_presentation_name(key).to_string())
        .collect();
    assert_eq!(side_names, expected.side_names);

    let margins = printer.minimum_margins();
    assert_eq!(
        (margins.top, margins.left, margins.bottom, margins.right),
        expected.margins
    );
}

#[test]
fn populated_bag_exposes_every_capability() {
    let mut bag = AttributeBag::new();
    bag.insert_texts("printer-icons", ["https://printer.local/icon-128.png"]);
    bag.insert_texts(
        "job-creation-attributes-supported",
        ["copies", "media", "sides", "orientation-requested"],
    );
    bag.insert_texts("print-content-optimize-supported", ["photo", "text"]);
    bag.insert_text("print-content-optimize-default", "text");
    bag.insert_texts("document-format-supported", ["application/pdf"]);

    let printer = PrinterAttributes::new(&bag);
    assert_eq!(printer.icons(), vec!["https://printer.local/icon-128.png"]);
    assert_eq!(
        printer.supported_job_creation_attributes(),
        vec!["copies", "media", "sides", "orientation-requested"]
    );
    assert_eq!(printer.default_content_optimization(), "text");
    assert_eq!(
        printer.supported_content_optimizations(),
        vec!["photo", "text"]
    );
    assert_eq!(printer.supported_document_types(), vec!["application/pdf"]);

    // Unreported capabilities keep their defaults alongside reported ones.
    assert_eq!(printer.max_copies(), 1);
    assert_eq!(printer.default_orientation(), None);
}

#[test]
fn orientation_names_follow_the_reported_keys() {
    let mut bag = AttributeBag::new();
    bag.insert_integers("orientation-requested-supported", [3, 4]);
    let printer = PrinterAttributes::new(&bag);

    let names: Vec<&str> = printer
        .supported_orientations()
        .into_iter()
        .map(orientation_presentation_name)
        .collect();
    assert_eq!(names, vec!["Portrait", "Landscape"]);
}
