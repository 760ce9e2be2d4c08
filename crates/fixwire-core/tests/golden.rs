use std::fs;
use std::fs::File;
use std::io::BufReader;
use std::path::{Path, PathBuf};

use fixwire_core::{ByteOrder, CodecBuilder, InspectionReport, WireType, inspect};
use serde::Deserialize;

#[derive(Debug, Deserialize)]
struct Layout {
    byte_order: ByteOrder,
    types: Vec<WireType>,
    #[serde(default)]
    bool_support: bool,
}

fn case_dir(dir: &str) -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR"))
        .join("..")
        .join("..")
        .join(dir)
}

fn load_expected_report(dir: &str) -> InspectionReport {
    let expected_path = case_dir(dir).join("expected_report.json");
    let expected_json = fs::read_to_string(&expected_path).expect("read expected_report.json");
    serde_json::from_str(&expected_json).expect("parse expected report")
}

fn run_golden(dir: &str) {
    let root = case_dir(dir);
    let layout_json = fs::read_to_string(root.join("layout.json")).expect("read layout.json");
    let layout: Layout = serde_json::from_str(&layout_json).expect("parse layout");
    let input = File::open(root.join("input.bin")).expect("open input.bin");

    let mut builder = CodecBuilder::new(layout.byte_order).input(BufReader::new(input));
    if layout.bool_support {
        builder = builder.with_bool_support();
    }
    let mut codec = builder.build();
    let actual = inspect(&mut codec, &layout.types);
    let expected = load_expected_report(dir);

    let actual_value = serde_json::to_value(actual).expect("serialize actual");
    let expected_value = serde_json::to_value(expected).expect("serialize expected");

    assert_eq!(actual_value, expected_value, "golden mismatch in {dir}");
}

#[test]
fn golden_mcu_telemetry_be() {
    run_golden("tests/golden/mcu_telemetry_be");
}

#[test]
fn golden_short_read_le() {
    run_golden("tests/golden/short_read_le");
}

#[test]
fn golden_short_read_le_has_failure() {
    let report = load_expected_report("tests/golden/short_read_le");
    let failure = report.failure.expect("failure recorded");
    assert_eq!(failure.wire_type, WireType::Int32);
    assert_eq!(failure.offset, 2);
    assert_eq!(report.bytes_consumed, 4);
}
