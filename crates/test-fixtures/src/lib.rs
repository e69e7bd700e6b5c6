//! Test fixture loader for Barload golden session scenarios.
//!
//! Provides typed deserialization of the fixture JSON files and helpers for
//! loading them in tests across crates.

use std::path::PathBuf;

use barload_core::{AthleteAttemptEstimate, AthleteEntry, HistoricalResult};
use chrono::NaiveDate;
use serde::de::DeserializeOwned;
use serde::Deserialize;

/// Root directory of the fixture files.
fn fixtures_root() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("golden")
}

/// Load and deserialize a JSON fixture file.
///
/// # Panics
/// Panics if the file doesn't exist or can't be deserialized.
pub fn load_fixture<T: DeserializeOwned>(relative_path: &str) -> T {
    let path = fixtures_root().join(relative_path);
    let content = std::fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("Failed to read fixture {}: {}", path.display(), e));
    serde_json::from_str(&content)
        .unwrap_or_else(|e| panic!("Failed to parse fixture {}: {}", path.display(), e))
}

/// Check that a fixture file exists.
pub fn fixture_exists(relative_path: &str) -> bool {
    fixtures_root().join(relative_path).exists()
}

/// List all JSON files in the fixture directory, sorted by name.
pub fn list_fixtures() -> Vec<PathBuf> {
    let dir = fixtures_root();
    let mut paths: Vec<PathBuf> = std::fs::read_dir(&dir)
        .unwrap_or_else(|e| panic!("Failed to read directory {}: {}", dir.display(), e))
        .filter_map(|entry| {
            let path = entry.ok()?.path();
            if path.extension().is_some_and(|ext| ext == "json") {
                Some(path)
            } else {
                None
            }
        })
        .collect();
    paths.sort();
    paths
}

/// A full session: inputs plus the expected sequenced output, in roster order.
#[derive(Debug, Clone, Deserialize)]
pub struct SessionScenario {
    pub description: String,
    /// Computation date for the recent-history window.
    pub as_of: NaiveDate,
    pub roster: Vec<AthleteEntry>,
    #[serde(default)]
    pub history: Vec<HistoricalResult>,
    pub expected: Vec<AthleteAttemptEstimate>,
}

/// Load a session scenario by file name.
pub fn load_scenario(file_name: &str) -> SessionScenario {
    load_fixture(file_name)
}

/// Load every scenario in the fixture directory.
pub fn all_scenarios() -> Vec<(String, SessionScenario)> {
    list_fixtures()
        .into_iter()
        .map(|path| {
            let name = path
                .file_name()
                .map(|n| n.to_string_lossy().into_owned())
                .unwrap_or_default();
            let scenario = load_scenario(&name);
            (name, scenario)
        })
        .collect()
}

/// Shorthand for a history row; attempts are `[a1, a2, a3]` and bests are
/// derived from the heaviest made attempt.
pub fn history_row(
    athlete_name: &str,
    date: &str,
    snatch: [i32; 3],
    clean_jerk: [i32; 3],
) -> HistoricalResult {
    let snatch_best = snatch.iter().copied().filter(|&w| w > 0).max().unwrap_or(0);
    let cj_best = clean_jerk.iter().copied().filter(|&w| w > 0).max().unwrap_or(0);
    HistoricalResult {
        athlete_name: athlete_name.to_string(),
        date: date.to_string(),
        snatch1: snatch[0],
        snatch2: snatch[1],
        snatch3: snatch[2],
        cj1: clean_jerk[0],
        cj2: clean_jerk[1],
        cj3: clean_jerk[2],
        snatch_best,
        cj_best,
        total: if snatch_best > 0 && cj_best > 0 {
            snatch_best + cj_best
        } else {
            0
        },
    }
}
