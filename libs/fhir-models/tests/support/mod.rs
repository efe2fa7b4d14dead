#![allow(dead_code)]

use serde_json::Value;
use std::{fs, path::PathBuf};

pub fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("tests/data")
}

pub fn load_fixture(relative: &str) -> String {
    let path = fixtures_root().join(relative);
    assert!(path.exists(), "fixture missing at {:?}", path);

    fs::read_to_string(&path).expect("failed to read fixture")
}

/// Every fixture of one FHIR release, as `(file name, contents)`.
pub fn all_fixtures(release: &str) -> Vec<(String, String)> {
    let dir = fixtures_root().join(release);
    let mut paths: Vec<PathBuf> = fs::read_dir(&dir)
        .expect("failed to list fixtures")
        .map(|entry| entry.expect("failed to read directory entry").path())
        .filter(|path| path.extension().is_some_and(|ext| ext == "json"))
        .collect();
    paths.sort();
    assert!(!paths.is_empty(), "no fixtures in {:?}", dir);

    paths
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .expect("fixture has a file name")
                .to_string_lossy()
                .into_owned();
            let text = fs::read_to_string(&path).expect("failed to read fixture");
            (name, text)
        })
        .collect()
}

/// Compares two JSON documents structurally, ignoring key order.
pub fn assert_json_eq(expected: &str, actual: &str) {
    let expected: Value = serde_json::from_str(expected).expect("expected JSON is invalid");
    let actual: Value = serde_json::from_str(actual).expect("actual JSON is invalid");
    assert_eq!(expected, actual);
}
