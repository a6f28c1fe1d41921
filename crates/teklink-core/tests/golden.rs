use std::fs;
use std::path::{Path, PathBuf};

use serde::Deserialize;
use serde_json::Value;
use teklink_core::decode_uplink;

#[derive(Deserialize)]
struct GoldenInput {
    port: u8,
    payload_hex: String,
}

fn repo_root() -> PathBuf {
    Path::new(env!("CARGO_MANIFEST_DIR")).join("..").join("..")
}

fn run_golden(dir: &str) {
    let case = repo_root().join(dir);

    let input_json = fs::read_to_string(case.join("input.json")).expect("read input.json");
    let input: GoldenInput = serde_json::from_str(&input_json).expect("parse input");
    let payload = hex::decode(input.payload_hex.trim()).expect("payload hex");

    let uplink = decode_uplink(input.port, &payload).expect("decode uplink");
    let actual = serde_json::to_value(&uplink).expect("serialize document");

    let expected_json = fs::read_to_string(case.join("expected.json")).expect("read expected.json");
    let expected: Value = serde_json::from_str(&expected_json).expect("parse expected");

    assert_eq!(actual, expected, "golden mismatch in {dir}");
}

#[test]
fn golden_measurement() {
    run_golden("tests/golden/measurement");
}

#[test]
fn golden_status() {
    run_golden("tests/golden/status");
}

#[test]
fn golden_params() {
    run_golden("tests/golden/params");
}

#[test]
fn golden_params_truncated() {
    run_golden("tests/golden/params_truncated");
}

#[test]
fn golden_raw() {
    run_golden("tests/golden/raw");
}
