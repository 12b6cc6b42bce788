//! Application state and composition.

use std::path::PathBuf;
use std::sync::Arc;

use dicesim_domain::{Die, DomainError, RollCount};

use crate::cli::{InputValidator, ReportFormatter};
use crate::infrastructure::{
    app_settings::AppSettings,
    clock::{SystemClock, SystemRandom},
    error::InfraError,
    export::CsvExporter,
    histogram::HistogramCapability,
    ports::{ClockPort, ExportPort, RandomPort},
};
use crate::use_cases::{CompletedSession, PlaySession, RollSession};

/// Main application state.
///
/// Built once at startup; every session borrows it.
pub struct App {
    settings: AppSettings,
    play: PlaySession,
    exporter: Arc<dyn ExportPort>,
    histogram: HistogramCapability,
    formatter: ReportFormatter,
}

impl App {
    /// Wire the real clock, an entropy-seeded RNG, the CSV exporter and
    /// whichever histogram capability this build has.
    pub fn new(settings: AppSettings) -> Self {
        let exporter = Arc::new(CsvExporter::new(&settings.output_dir));
        let histogram = HistogramCapability::resolve(&settings);
        Self::with_ports(
            settings,
            Arc::new(SystemClock::new()),
            Arc::new(SystemRandom::new()),
            exporter,
            histogram,
        )
    }

    pub fn with_ports(
        settings: AppSettings,
        clock: Arc<dyn ClockPort>,
        random: Arc<dyn RandomPort>,
        exporter: Arc<dyn ExportPort>,
        histogram: HistogramCapability,
    ) -> Self {
        tracing::debug!(
            output_dir = %settings.output_dir.display(),
            histogram = ?histogram,
            max_rolls = settings.max_rolls,
            "Composed application"
        );

        Self {
            formatter: ReportFormatter::from_settings(&settings),
            play: PlaySession::new(RollSession::new(random), clock),
            settings,
            exporter,
            histogram,
        }
    }

    pub fn settings(&self) -> &AppSettings {
        &self.settings
    }

    pub fn validator(&self) -> InputValidator {
        InputValidator::new(self.settings.max_rolls)
    }

    pub fn play(&self, die: Die, count: RollCount) -> Result<CompletedSession, DomainError> {
        self.play.execute(die, count)
    }

    pub fn report(&self, session: &CompletedSession) -> String {
        self.formatter.render_session(session)
    }

    pub fn export(&self, session: &CompletedSession) -> Result<PathBuf, InfraError> {
        self.exporter.export(&session.record)
    }

    pub fn render_histogram(
        &self,
        session: &CompletedSession,
    ) -> Option<Result<PathBuf, InfraError>> {
        self.histogram
            .render(session.die(), &session.statistics.frequencies)
    }

    /// Shown once at startup when histograms cannot be drawn.
    pub fn capability_notice(&self) -> Option<String> {
        self.histogram.notice()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn composes_csv_exporter_into_configured_directory() {
        let dir = tempfile::tempdir().unwrap();
        let app = App::new(AppSettings {
            output_dir: dir.path().to_path_buf(),
            histogram_enabled: false,
            ..AppSettings::default()
        });

        let session = app
            .play(Die::new(6).unwrap(), RollCount::new(12).unwrap())
            .unwrap();
        let path = app.export(&session).unwrap();

        assert!(path.starts_with(dir.path()));
        assert_eq!(CsvExporter::read_rolls(&path).unwrap(), *session.rolls());
        assert!(app.render_histogram(&session).is_none());
        assert!(app.capability_notice().is_some());
    }

    #[test]
    fn validator_uses_configured_roll_limit() {
        let app = App::new(AppSettings {
            max_rolls: 3,
            histogram_enabled: false,
            ..AppSettings::default()
        });
        assert!(app.validator().validate_count("4").is_err());
        assert_eq!(app.settings().max_rolls, 3);
    }
}
