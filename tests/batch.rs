//! End-to-end tests for the chart batch: file layout, idempotency, and
//! failure behavior. Outputs go under target/test_out so runs are inspectable.

use std::fs;
use std::path::PathBuf;

use report_charts::batch;
use report_charts::charts::{palette, renderer};
use report_charts::data::figures;

const EXPECTED_FILES: [&str; 7] = [
    "demographic_distribution.png",
    "device_preferences_pie.png",
    "performance_metrics_line.png",
    "system_performance_metrics.png",
    "usage_statistics_stacked.png",
    "user_satisfaction_bar.png",
    "user_satisfaction_pie.png",
];

fn test_dir(name: &str) -> PathBuf {
    let dir = PathBuf::from(env!("CARGO_MANIFEST_DIR"))
        .join("target")
        .join("test_out")
        .join(name);
    // Start each test from a clean directory
    let _ = fs::remove_dir_all(&dir);
    dir
}

#[test]
fn batch_writes_all_seven_charts() {
    let dir = test_dir("full_batch");

    batch::run(&dir).expect("batch should succeed");

    let mut names: Vec<String> = batch::list_outputs(&dir)
        .expect("listing should succeed")
        .iter()
        .map(|p| p.file_name().unwrap().to_string_lossy().into_owned())
        .collect();
    names.sort();
    assert_eq!(names, EXPECTED_FILES);

    // Every output decodes as a PNG with the configured dimensions
    let pie = image::open(dir.join("device_preferences_pie.png")).expect("decodable png");
    assert_eq!((pie.width(), pie.height()), (1000, 800));
    let diagram = image::open(dir.join("system_performance_metrics.png")).expect("decodable png");
    assert_eq!((diagram.width(), diagram.height()), (1600, 800));
}

#[test]
fn rerun_overwrites_without_duplicates() {
    let dir = test_dir("rerun");

    batch::run(&dir).expect("first run should succeed");
    let first_len = fs::metadata(dir.join("user_satisfaction_bar.png"))
        .expect("output exists")
        .len();

    // Directory already exists now; the second run must not fail on it
    batch::run(&dir).expect("second run should succeed");

    let files = batch::list_outputs(&dir).expect("listing should succeed");
    assert_eq!(files.len(), EXPECTED_FILES.len(), "no numbered duplicates");
    let second_len = fs::metadata(dir.join("user_satisfaction_bar.png"))
        .expect("output exists")
        .len();
    assert!(second_len > 0 && first_len > 0);
}

#[test]
fn listing_includes_stale_images() {
    let dir = test_dir("stale_listing");

    batch::run(&dir).expect("batch should succeed");
    fs::write(dir.join("old_figure.png"), b"not really a png").unwrap();
    fs::write(dir.join("notes.txt"), b"ignored").unwrap();

    let files = batch::list_outputs(&dir).expect("listing should succeed");
    assert_eq!(files.len(), EXPECTED_FILES.len() + 1);
    assert!(files
        .iter()
        .any(|p| p.file_name().unwrap() == "old_figure.png"));
    assert!(!files.iter().any(|p| p.file_name().unwrap() == "notes.txt"));
}

#[test]
fn batch_fails_when_output_dir_is_a_file() {
    let dir = test_dir("occupied");
    fs::create_dir_all(dir.parent().unwrap()).unwrap();
    fs::write(&dir, b"in the way").unwrap();

    let err = batch::run(&dir).expect_err("batch must fail");
    assert!(err.to_string().contains("output directory"));
}

#[test]
fn single_renderer_runs_standalone() {
    let dir = test_dir("standalone");
    fs::create_dir_all(&dir).unwrap();

    let series = figures::age_distribution().unwrap();
    let path = dir.join("demographic_distribution.png");
    renderer::horizontal_bar_chart(
        &path,
        "User Age Distribution",
        "Percentage of Users (%)",
        palette::CORAL,
        &series,
        (1000, 800),
    )
    .expect("renderer should succeed on its own");

    let bytes = fs::read(&path).expect("output exists");
    assert!(bytes.starts_with(&[137, 80, 78, 71]), "should be PNG header");
}
