use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{setup_test_data, temp_out, tm, write_sample_seed};

#[test]
fn test_export_csv() {
    let data = setup_test_data("export_csv");
    let seed = write_sample_seed("export_csv");
    let out = temp_out("export_csv", "csv");

    tm().args([
        "--data", &data, "--seed", &seed, "export", "--format", "csv", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Exported 2 locations"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.starts_with("id,name,category,city,state,park,description,imageName,isCompleted"));
    assert!(content.contains("Test Peak"));
    assert!(content.contains("true"));
}

#[test]
fn test_export_json_round_trips_schema() {
    let data = setup_test_data("export_json");
    let seed = write_sample_seed("export_json");
    let out = temp_out("export_json", "json");

    tm().args([
        "--data", &data, "--seed", &seed, "export", "--format", "json", "--file", &out, "--force",
    ])
    .assert()
    .success();

    let content = fs::read_to_string(&out).unwrap();
    let parsed: serde_json::Value = serde_json::from_str(&content).unwrap();
    let records = parsed.as_array().unwrap();
    assert_eq!(records.len(), 2);
    assert_eq!(records[0]["imageName"], "testpeak");
    assert_eq!(records[1]["isCompleted"], true);
}

#[test]
fn test_export_defaults_to_embedded_seed_content() {
    let data = setup_test_data("export_embedded");
    let out = temp_out("export_embedded", "csv");

    tm().args([
        "--data", &data, "export", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Exported 10 locations"));

    let content = fs::read_to_string(&out).unwrap();
    assert!(content.contains("Old Faithful"));
}

#[test]
fn test_export_rejects_relative_path() {
    let data = setup_test_data("export_relative");

    tm().args([
        "--data", &data, "export", "--file", "relative_out.csv", "--force",
    ])
    .assert()
    .failure()
    .stderr(contains("absolute"));

    assert!(!Path::new("relative_out.csv").exists());
}

#[test]
fn test_export_empty_list_writes_nothing() {
    let data = setup_test_data("export_empty");
    fs::write(&data, "[]").unwrap();
    let out = temp_out("export_empty", "csv");

    tm().args([
        "--data", &data, "export", "--file", &out, "--force",
    ])
    .assert()
    .success()
    .stdout(contains("Nothing to export"));

    assert!(!Path::new(&out).exists());
}
