#![allow(dead_code)]

use std::collections::HashSet;
use std::io::Write;
use std::path::PathBuf;
use std::sync::Mutex;

use launch_dash::models::{LaunchDataset, LaunchRecord};
use tempfile::{Builder, NamedTempFile};

static ENV_LOCK: Mutex<()> = Mutex::new(());

/// Runs `f` with environment variables temporarily modified.
///
/// This is panic-safe (restores variables on unwind) and also serializes access to
/// process-global env vars to avoid flaky tests when Rust runs tests in parallel.
///
/// `changes` is a list of `(key, value)` pairs:
/// - `Some(v)` sets the variable to `v`
/// - `None` removes the variable
pub fn with_scoped_env<F, R>(changes: &[(&str, Option<&str>)], f: F) -> R
where
    F: FnOnce() -> R,
{
    let _lock = ENV_LOCK.lock().unwrap_or_else(|poisoned| poisoned.into_inner());
    let _guard = ScopedEnv::new(changes);
    f()
}

struct ScopedEnv {
    snapshot: Vec<(String, Option<String>)>,
}

impl ScopedEnv {
    fn new(changes: &[(&str, Option<&str>)]) -> Self {
        let keys: HashSet<&str> = changes.iter().map(|(k, _)| *k).collect();
        let snapshot = keys
            .into_iter()
            .map(|k| (k.to_string(), std::env::var(k).ok()))
            .collect::<Vec<_>>();

        for (k, v) in changes {
            match v {
                Some(val) => std::env::set_var(k, val),
                None => std::env::remove_var(k),
            }
        }

        Self { snapshot }
    }
}

impl Drop for ScopedEnv {
    fn drop(&mut self) {
        for (k, v) in self.snapshot.drain(..) {
            match v {
                Some(val) => std::env::set_var(&k, val),
                None => std::env::remove_var(&k),
            }
        }
    }
}

/// Path of the launch records CSV shipped with the crate.
pub fn sample_dataset_path() -> PathBuf {
    PathBuf::from(env!("CARGO_MANIFEST_DIR")).join("data/spacex_launch_dash.csv")
}

/// Write `content` to a temporary `.csv` file.
pub fn write_temp_csv(content: &str) -> NamedTempFile {
    let mut file = Builder::new().suffix(".csv").tempfile().unwrap();
    write!(file, "{}", content).unwrap();
    file
}

/// The four-record dataset used throughout the dashboard documentation:
/// SiteA 500 kg success, SiteA 1500 kg failure, two SiteB 2500 kg successes.
pub fn scenario_dataset() -> LaunchDataset {
    LaunchDataset::from_records(vec![
        LaunchRecord::new("SiteA", 500.0, true),
        LaunchRecord::new("SiteA", 1500.0, false),
        LaunchRecord::new("SiteB", 2500.0, true),
        LaunchRecord::new("SiteB", 2500.0, true),
    ])
}

pub const SCENARIO_CSV: &str = "Launch Site,Payload Mass (kg),class\n\
SiteA,500,1\n\
SiteA,1500,0\n\
SiteB,2500,1\n\
SiteB,2500,1\n";
