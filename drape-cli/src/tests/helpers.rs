//! Test helpers for composing request documents on disk.

use camino::{Utf8Path, Utf8PathBuf};
use drape_core::test_support::{sample_catalog, samples_with_rmssd};
use serde_json::{Value, json};
use tempfile::TempDir;

pub(super) fn write_utf8(path: &Utf8Path, contents: &[u8]) {
    std::fs::write(path.as_std_path(), contents).expect("write fixture file");
}

/// A temporary directory exposed as a UTF-8 path.
pub(super) fn workspace() -> (TempDir, Utf8PathBuf) {
    let tmp = TempDir::new().expect("tempdir");
    let root = Utf8PathBuf::from_path_buf(tmp.path().to_path_buf()).expect("utf-8 workspace");
    (tmp, root)
}

/// Baseline and samples that yield a stress index of 6.
pub(super) fn session_json() -> (Value, Value) {
    let baseline = json!({ "mean_hrv": 60.0, "mean_rmssd": 50.0 });
    let samples = serde_json::to_value(samples_with_rmssd(&[45.0, 46.0, 47.0, 48.0, 49.0]))
        .expect("serialise samples");
    (baseline, samples)
}

/// A complete recommend request reporting `mood`.
pub(super) fn recommend_request_json(mood: &str) -> Value {
    let (baseline, samples) = session_json();
    json!({
        "baseline": baseline,
        "samples": samples,
        "weather": {
            "temperature_kelvin": 283.0,
            "humidity": 80.0,
            "conditions": "Rain",
            "uv_index": 1.0,
        },
        "events": [
            { "title": "Quarterly review", "type": "business", "start": 1_700_000_000_u64 },
        ],
        "mood": mood,
        "catalog": serde_json::to_value(sample_catalog()).expect("serialise catalog"),
    })
}

pub(super) fn write_json_fixture(path: &Utf8Path, value: &Value) {
    let payload = serde_json::to_string_pretty(value).expect("serialise fixture");
    write_utf8(path, payload.as_bytes());
}
