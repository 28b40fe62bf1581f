#![allow(dead_code)]
use assert_cmd::{Command, cargo_bin_cmd};
use std::env;
use std::fs;
use std::path::PathBuf;

pub fn tm() -> Command {
    cargo_bin_cmd!("trailmark")
}

/// Create a unique test data file path inside the system temp dir and remove
/// any existing file
pub fn setup_test_data(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trailmark.json", name));
    let data_path = path.to_string_lossy().to_string();
    fs::remove_file(&data_path).ok();
    data_path
}

/// Create a temporary output file path inside tempdir and ensure it's removed
pub fn temp_out(name: &str, ext: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_out.{}", name, ext));
    let p = path.to_string_lossy().to_string();
    fs::remove_file(&p).ok();
    p
}

/// Two-record seed used by tests that need predictable content.
pub const SAMPLE_SEED: &str = r#"[
    {
        "id": 1,
        "name": "Test Peak",
        "category": "Peak",
        "city": "Testville",
        "state": "Montana",
        "park": "Test National Park",
        "description": "A peak that only exists in the test suite.",
        "imageName": "testpeak",
        "isCompleted": false
    },
    {
        "id": 2,
        "name": "Test Falls",
        "category": "Waterfall",
        "city": "Testville",
        "state": "Montana",
        "park": "Test National Park",
        "description": "A waterfall that only exists in the test suite.",
        "imageName": "testfalls",
        "isCompleted": true
    }
]"#;

/// Write SAMPLE_SEED to a unique temp file and return its path
pub fn write_sample_seed(name: &str) -> String {
    let mut path: PathBuf = env::temp_dir();
    path.push(format!("{}_trailmark_seed.json", name));
    let seed_path = path.to_string_lossy().to_string();
    fs::write(&seed_path, SAMPLE_SEED).expect("write seed file");
    seed_path
}
