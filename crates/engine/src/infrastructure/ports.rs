//! Port traits at the boundary between use cases and the outside world.

use std::path::PathBuf;

use chrono::{DateTime, Utc};
use dicesim_domain::{Die, FrequencyTable, SessionRecord};

use super::error::InfraError;

// =============================================================================
// Testability Ports
// =============================================================================

#[cfg_attr(test, mockall::automock)]
pub trait ClockPort: Send + Sync {
    fn now(&self) -> DateTime<Utc>;
}

pub trait RandomPort: Send + Sync {
    /// Uniform value in the inclusive range `min..=max`.
    fn gen_range(&self, min: u32, max: u32) -> u32;
}

// =============================================================================
// Output Ports
// =============================================================================

/// Persists a completed session somewhere durable.
#[cfg_attr(test, mockall::automock)]
pub trait ExportPort: Send + Sync {
    /// Write the record and return where it went.
    fn export(&self, record: &SessionRecord) -> Result<PathBuf, InfraError>;
}

/// Draws a bar chart of a frequency table.
#[cfg_attr(test, mockall::automock)]
pub trait HistogramPort: Send + Sync {
    /// Render and save the chart, returning the image path.
    fn render(&self, die: &Die, frequencies: &FrequencyTable) -> Result<PathBuf, InfraError>;
}
