extern crate assert_cmd;
extern crate predicates;
extern crate tempfile;

use assert_cmd::prelude::*;
use predicates::prelude::*;
use std::fs;
use std::process::Command;

#[test]
fn renders_a_batch_to_named_bitmaps() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fractals.json");
    fs::write(
        &config,
        r#"{
            "FractalConfigurations": [
                { "Seed": 7, "Width": 48, "Height": 48, "Fractal": 0, "MaxIterations": 60 },
                { "Seed": 9, "Width": 48, "Height": 48, "Fractal": 8, "MaxIterations": 3 }
            ]
        }"#,
    )
    .unwrap();

    Command::cargo_bin("fractgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .success()
        .stdout(predicate::str::contains("Fractal 0 saved as"))
        .stdout(predicate::str::contains("Fractal 1 saved as"));

    assert!(dir.path().join("fractal_0_seed_7.bmp").exists());
    assert!(dir.path().join("fractal_1_seed_9.bmp").exists());
}

#[test]
fn a_bad_record_does_not_abort_its_siblings() {
    let dir = tempfile::tempdir().unwrap();
    let config = dir.path().join("fractals.json");
    fs::write(
        &config,
        r#"{
            "FractalConfigurations": [
                { "Seed": 1, "Width": 32, "Height": 32, "Fractal": 99 },
                { "Seed": 2, "Width": 32, "Height": 32, "Fractal": 9, "MaxIterations": 3 }
            ]
        }"#,
    )
    .unwrap();

    // The batch exits nonzero because a job failed, but the healthy
    // sibling still renders.
    Command::cargo_bin("fractgen")
        .unwrap()
        .arg("--config")
        .arg(&config)
        .arg("--outdir")
        .arg(dir.path())
        .assert()
        .failure()
        .stderr(predicate::str::contains("unknown fractal variant code 99"));

    assert!(!dir.path().join("fractal_0_seed_1.bmp").exists());
    assert!(dir.path().join("fractal_1_seed_2.bmp").exists());
}

#[test]
fn a_missing_configuration_is_reported() {
    let dir = tempfile::tempdir().unwrap();
    Command::cargo_bin("fractgen")
        .unwrap()
        .arg("--config")
        .arg(dir.path().join("nonexistent.json"))
        .assert()
        .failure()
        .stderr(predicate::str::contains("Could not read batch configuration"));
}
