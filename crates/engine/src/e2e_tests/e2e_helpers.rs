//! E2E test helpers for constructing the full application stack.

use std::io::Cursor;
use std::path::{Path, PathBuf};
use std::sync::Arc;

use chrono::{TimeZone, Utc};
use tempfile::TempDir;

use crate::app::App;
use crate::cli::Console;
use crate::infrastructure::app_settings::AppSettings;
use crate::infrastructure::clock::{FixedClock, SequenceRandom};
use crate::infrastructure::export::CsvExporter;
use crate::infrastructure::histogram::HistogramCapability;

/// An [`App`] wired to real file export inside a private temp directory.
pub struct E2EHarness {
    pub app: App,
    pub output_dir: PathBuf,
    _temp: TempDir,
}

impl E2EHarness {
    /// Harness whose RNG replays `rolls` and whose histograms are disabled.
    pub fn new(rolls: Vec<u32>) -> Self {
        Self::with_settings(rolls, |_| {})
    }

    pub fn with_settings(rolls: Vec<u32>, configure: impl FnOnce(&mut AppSettings)) -> Self {
        let temp = tempfile::tempdir().expect("create temp dir");
        let mut settings = AppSettings {
            output_dir: temp.path().join("out"),
            histogram_enabled: false,
            ..AppSettings::default()
        };
        configure(&mut settings);

        let exporter = Arc::new(CsvExporter::new(&settings.output_dir));
        let histogram = HistogramCapability::resolve(&settings);
        let app = App::with_ports(
            settings.clone(),
            Arc::new(FixedClock(Utc.with_ymd_and_hms(2024, 3, 9, 14, 5, 7).unwrap())),
            Arc::new(SequenceRandom::new(rolls)),
            exporter,
            histogram,
        );

        Self {
            app,
            output_dir: settings.output_dir,
            _temp: temp,
        }
    }

    /// Feed `input` to a fresh console and return everything it printed.
    pub fn run(&self, input: &str) -> String {
        let mut console = Console::new(Cursor::new(input.to_string()), Vec::new());
        console.run(&self.app).expect("console run");
        String::from_utf8(console.into_output()).expect("utf8 output")
    }

    /// CSV files written so far, sorted by name.
    pub fn exported_files(&self) -> Vec<PathBuf> {
        list_csv(&self.output_dir)
    }
}

fn list_csv(dir: &Path) -> Vec<PathBuf> {
    let Ok(entries) = std::fs::read_dir(dir) else {
        return Vec::new();
    };
    let mut files: Vec<PathBuf> = entries
        .filter_map(|entry| entry.ok().map(|e| e.path()))
        .filter(|path| path.extension().is_some_and(|ext| ext == "csv"))
        .collect();
    files.sort();
    files
}
