//! Text report for a completed session.
//!
//! Pure formatting: the caller decides where the text goes.

use dicesim_domain::{Die, FrequencyTable, RollSequence, StatisticsSummary};

use crate::infrastructure::app_settings::AppSettings;
use crate::use_cases::CompletedSession;

const RULE_WIDTH: usize = 40;

/// Renders the results block shown after every session.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ReportFormatter {
    /// Sequences longer than this are shown as head, "...", tail; zero
    /// disables elision.
    preview_limit: usize,
    /// Dice up to this many sides list every face, rolled or not.
    frequency_range_limit: u32,
}

impl Default for ReportFormatter {
    fn default() -> Self {
        Self::from_settings(&AppSettings::default())
    }
}

impl ReportFormatter {
    pub fn new(preview_limit: usize, frequency_range_limit: u32) -> Self {
        Self {
            preview_limit,
            frequency_range_limit,
        }
    }

    pub fn from_settings(settings: &AppSettings) -> Self {
        Self::new(settings.preview_limit, settings.frequency_range_limit)
    }

    pub fn render_session(&self, session: &CompletedSession) -> String {
        self.render(
            session.die(),
            session.rolls(),
            &session.statistics.summary,
            &session.statistics.frequencies,
        )
    }

    pub fn render(
        &self,
        die: &Die,
        rolls: &RollSequence,
        summary: &StatisticsSummary,
        frequencies: &FrequencyTable,
    ) -> String {
        let rule = "=".repeat(RULE_WIDTH);
        let mut lines = vec![
            rule.clone(),
            format!("RESULTS ({}):", die),
            rule,
            String::new(),
            format!("Rolls: {}", self.preview(rolls)),
            String::new(),
            "STATISTICS:".to_string(),
            format!("• Minimum: {}", summary.minimum),
            format!("• Maximum: {}", summary.maximum),
            format!("• Average: {:.2}", summary.mean),
            format!("• Most common: {}", summary.mode),
            format!("• Total rolls: {}", summary.total_rolls),
            String::new(),
            "FREQUENCY:".to_string(),
        ];

        let frequency_line = |face: u32| {
            format!(
                "{}: {} rolls ({:.1}%)",
                face,
                frequencies.count(face),
                frequencies.rounded_percentage(face)
            )
        };

        if die.sides() <= self.frequency_range_limit {
            lines.extend((1..=die.sides()).map(frequency_line));
        } else {
            lines.extend(frequencies.iter().map(|(face, _)| frequency_line(face)));
            lines.push(format!(
                "(faces never rolled are omitted for dice over {} sides)",
                self.frequency_range_limit
            ));
        }

        let mut report = lines.join("\n");
        report.push('\n');
        report
    }

    /// Comma-separated rolls, elided in the middle when over the limit.
    pub fn preview(&self, rolls: &RollSequence) -> String {
        let values = rolls.as_slice();
        if self.preview_limit == 0 || values.len() <= self.preview_limit {
            return join(values.iter());
        }

        let edge = (self.preview_limit / 2).max(1);
        format!(
            "{}, ..., {}",
            join(values[..edge].iter()),
            join(values[values.len() - edge..].iter())
        )
    }
}

fn join<T: std::fmt::Display>(items: impl Iterator<Item = T>) -> String {
    items.map(|item| item.to_string()).collect::<Vec<_>>().join(", ")
}
