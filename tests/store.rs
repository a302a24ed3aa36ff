use std::fs;
use std::path::PathBuf;

use chrono::{TimeZone, Utc};
use stock_tracker::{Quote, TrackerError, store};

fn sample_quote() -> Quote {
    Quote {
        symbol: "AAPL".to_string(),
        price: 150.25,
        change: -1.1,
        change_percent: "-0.72".to_string(),
        timestamp: Utc.with_ymd_and_hms(2024, 5, 17, 20, 0, 0).unwrap(),
    }
}

fn tmp_path(name: &str) -> PathBuf {
    std::env::temp_dir().join(format!("stock_tracker_{}_{name}", std::process::id()))
}

#[test]
fn save_then_load_roundtrips_all_fields() {
    let q = sample_quote();
    let path = tmp_path("roundtrip.json");

    store::save_quote(&q, &path).unwrap();
    let back = store::load_quote(&path).unwrap();

    assert_eq!(back, q);
    fs::remove_file(&path).unwrap();
}

#[test]
fn saving_fully_replaces_prior_content() {
    let q = sample_quote();
    let path = tmp_path("overwrite.json");

    // Pre-existing content longer than the snapshot must not survive.
    fs::write(&path, "x".repeat(10_000)).unwrap();
    store::save_quote(&q, &path).unwrap();

    let written = fs::read_to_string(&path).unwrap();
    assert_eq!(written, serde_json::to_string_pretty(&q).unwrap());
    fs::remove_file(&path).unwrap();
}

#[test]
fn rewriting_an_identical_quote_is_byte_identical() {
    let q = sample_quote();
    let path = tmp_path("idempotent.json");

    store::save_quote(&q, &path).unwrap();
    let first = fs::read(&path).unwrap();
    store::save_quote(&q, &path).unwrap();
    let second = fs::read(&path).unwrap();

    assert_eq!(first, second);
    fs::remove_file(&path).unwrap();
}

#[test]
fn save_into_missing_directory_is_a_typed_io_error() {
    let q = sample_quote();
    let path = tmp_path("no_such_dir").join("out.json");

    let err = store::save_quote(&q, &path).unwrap_err();

    assert!(matches!(err, TrackerError::Io(_)));
}
