use predicates::str::contains;
use std::fs;
use std::path::Path;

mod common;
use common::{setup_test_data, tm, write_sample_seed};

#[test]
fn test_list_falls_back_to_embedded_seed() {
    let data = setup_test_data("list_embedded");

    tm().args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("Old Faithful"))
        .stdout(contains("Yellowstone National Park"))
        .stdout(contains("0 of 10 locations visited"));
}

#[test]
fn test_list_uses_seed_override() {
    let data = setup_test_data("list_seed_override");
    let seed = write_sample_seed("list_seed_override");

    tm().args(["--data", &data, "--seed", &seed, "list"])
        .assert()
        .success()
        .stdout(contains("Test Peak"))
        .stdout(contains("Test Falls"))
        .stdout(contains("1 of 2 locations visited"));
}

#[test]
fn test_persisted_file_wins_over_seed() {
    let data = setup_test_data("persisted_wins");
    fs::write(&data, "[]").unwrap();
    let seed = write_sample_seed("persisted_wins");

    tm().args(["--data", &data, "--seed", &seed, "list"])
        .assert()
        .success()
        .stdout(contains("No locations available."));
}

#[test]
fn test_corrupt_data_file_warns_and_renders_empty_list() {
    let data = setup_test_data("corrupt_data");
    fs::write(&data, "not json at all").unwrap();

    tm().args(["--data", &data, "list"])
        .assert()
        .success()
        .stdout(contains("Could not load location data"))
        .stdout(contains("No locations available."));
}

#[test]
fn test_toggle_marks_location_and_persists() {
    let data = setup_test_data("toggle_persists");
    let seed = write_sample_seed("toggle_persists");

    tm().args(["--data", &data, "--seed", &seed, "toggle", "1"])
        .assert()
        .success()
        .stdout(contains("Marked 'Test Peak' as visited"));

    // snapshot created by the toggle
    assert!(Path::new(&data).exists());

    // an independent run now reads the snapshot, not the seed
    tm().args(["--data", &data, "--seed", &seed, "list"])
        .assert()
        .success()
        .stdout(contains("2 of 2 locations visited"));
}

#[test]
fn test_toggle_twice_returns_to_not_visited() {
    let data = setup_test_data("toggle_twice");
    let seed = write_sample_seed("toggle_twice");

    tm().args(["--data", &data, "--seed", &seed, "toggle", "1"])
        .assert()
        .success();

    tm().args(["--data", &data, "--seed", &seed, "toggle", "1"])
        .assert()
        .success()
        .stdout(contains("Marked 'Test Peak' as not visited"));

    tm().args(["--data", &data, "--seed", &seed, "list"])
        .assert()
        .success()
        .stdout(contains("1 of 2 locations visited"));
}

#[test]
fn test_toggle_unknown_id_is_harmless() {
    let data = setup_test_data("toggle_unknown");
    let seed = write_sample_seed("toggle_unknown");

    tm().args(["--data", &data, "--seed", &seed, "toggle", "999"])
        .assert()
        .success()
        .stdout(contains("No location with id 999"));

    // no mutation happened, so no snapshot was written
    assert!(!Path::new(&data).exists());
}

#[test]
fn test_show_detail_view() {
    let data = setup_test_data("show_detail");
    let seed = write_sample_seed("show_detail");

    tm().args(["--data", &data, "--seed", &seed, "show", "1"])
        .assert()
        .success()
        .stdout(contains("Test Peak"))
        .stdout(contains("Testville, Montana"))
        .stdout(contains("not yet visited"))
        .stdout(contains("only exists in the test suite"))
        .stdout(contains("testpeak"));
}

#[test]
fn test_show_unknown_id() {
    let data = setup_test_data("show_unknown");

    tm().args(["--data", &data, "show", "424242"])
        .assert()
        .success()
        .stdout(contains("No location with id 424242"));
}

#[test]
fn test_init_test_mode() {
    tm().args(["--test", "init"])
        .assert()
        .success()
        .stdout(contains("trailmark initialization completed!"));
}

#[test]
fn test_backup_copies_snapshot() {
    let data = setup_test_data("backup_copy");
    let seed = write_sample_seed("backup_copy");
    let backup = common::temp_out("backup_copy", "json");

    // materialize the snapshot first
    tm().args(["--data", &data, "--seed", &seed, "toggle", "1"])
        .assert()
        .success();

    tm().args(["--data", &data, "backup", "--file", &backup])
        .assert()
        .success()
        .stdout(contains("Backup created"));

    let copied = fs::read_to_string(&backup).unwrap();
    assert!(copied.contains("Test Peak"));
}

#[test]
fn test_backup_without_snapshot_fails() {
    let data = setup_test_data("backup_missing");
    let backup = common::temp_out("backup_missing", "json");

    tm().args(["--data", &data, "backup", "--file", &backup])
        .assert()
        .failure()
        .stderr(contains("Location data file not found"));
}

#[test]
fn test_backup_compressed() {
    let data = setup_test_data("backup_gz");
    let seed = write_sample_seed("backup_gz");
    let backup = common::temp_out("backup_gz", "json");
    fs::remove_file(format!("{}.gz", backup)).ok();

    tm().args(["--data", &data, "--seed", &seed, "toggle", "2"])
        .assert()
        .success();

    tm().args([
        "--data", &data, "backup", "--file", &backup, "--compress",
    ])
    .assert()
    .success()
    .stdout(contains("Compressed backup"));

    assert!(Path::new(&format!("{}.gz", backup)).exists());
    assert!(!Path::new(&backup).exists());
}
