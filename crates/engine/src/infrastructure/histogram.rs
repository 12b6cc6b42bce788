//! Optional histogram rendering.
//!
//! Whether histograms can be drawn is decided once at startup and captured in
//! [`HistogramCapability`]. Builds without the `histogram` feature, or runs
//! with `DICESIM_HISTOGRAM=off`, resolve to `Unavailable` and every render
//! becomes a no-op.
//!
//! Images are named `d<sides>_histogram.png` with no timestamp, so a later
//! session with the same die replaces the earlier chart.

use std::path::PathBuf;
use std::sync::Arc;

use dicesim_domain::{Die, FrequencyTable};

use super::app_settings::AppSettings;
use super::error::InfraError;
use super::ports::HistogramPort;

/// Image file name for a die's histogram.
pub fn histogram_file_name(die: &Die) -> String {
    format!("d{}_histogram.png", die.sides())
}

/// Histogram support as resolved at startup.
#[derive(Clone)]
pub enum HistogramCapability {
    /// Charts are rendered through this port.
    Available(Arc<dyn HistogramPort>),
    /// Charts are skipped; `reason` is shown to the user once.
    Unavailable { reason: String },
}

impl HistogramCapability {
    /// Pick the renderer for this build and configuration.
    pub fn resolve(settings: &AppSettings) -> Self {
        if !settings.histogram_enabled {
            return Self::unavailable("disabled by DICESIM_HISTOGRAM");
        }
        Self::built_in(settings)
    }

    #[cfg(feature = "histogram")]
    fn built_in(settings: &AppSettings) -> Self {
        Self::Available(Arc::new(PlottersHistogram::new(&settings.output_dir)))
    }

    #[cfg(not(feature = "histogram"))]
    fn built_in(_settings: &AppSettings) -> Self {
        Self::unavailable(
            "built without the `histogram` feature (rebuild with `--features histogram`)",
        )
    }

    pub fn unavailable(reason: impl Into<String>) -> Self {
        Self::Unavailable {
            reason: reason.into(),
        }
    }

    pub fn is_available(&self) -> bool {
        matches!(self, Self::Available(_))
    }

    /// Informational notice for the unavailable case.
    pub fn notice(&self) -> Option<String> {
        match self {
            Self::Available(_) => None,
            Self::Unavailable { reason } => Some(format!(
                "{}. Skipping histograms.",
                InfraError::MissingCapability(reason.clone())
            )),
        }
    }

    /// Render when available; `None` means the capability is absent.
    pub fn render(
        &self,
        die: &Die,
        frequencies: &FrequencyTable,
    ) -> Option<Result<PathBuf, InfraError>> {
        match self {
            Self::Available(port) => Some(port.render(die, frequencies)),
            Self::Unavailable { .. } => None,
        }
    }
}

impl std::fmt::Debug for HistogramCapability {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Available(_) => f.write_str("Available"),
            Self::Unavailable { reason } => f
                .debug_struct("Unavailable")
                .field("reason", reason)
                .finish(),
        }
    }
}

#[cfg(feature = "histogram")]
pub use plotters_backend::PlottersHistogram;

#[cfg(feature = "histogram")]
mod plotters_backend {
    use std::fs;
    use std::ops::Range;
    use std::path::{Path, PathBuf};

    use dicesim_domain::{Die, FrequencyTable};
    use plotters::prelude::*;

    use super::histogram_file_name;
    use crate::infrastructure::error::InfraError;
    use crate::infrastructure::ports::HistogramPort;

    const IMAGE_SIZE: (u32, u32) = (1000, 600);

    /// Wider dice are grouped into this many bars at most.
    pub(super) const MAX_BARS: u32 = 100;

    fn plot_error(err: impl std::fmt::Display) -> InfraError {
        InfraError::Plot(err.to_string())
    }

    /// One bar: faces `first..=last` and how often any of them came up.
    #[derive(Debug, Clone, Copy, PartialEq, Eq)]
    pub(super) struct Bar {
        pub first: u32,
        pub last: u32,
        pub count: u64,
    }

    /// Group observed faces into bars of equal width, one face per bar for
    /// dice with at most [`MAX_BARS`] sides.
    pub(super) fn bars(die: &Die, frequencies: &FrequencyTable) -> Vec<Bar> {
        let width = die.sides().div_ceil(MAX_BARS);
        let mut bars: Vec<Bar> = Vec::new();
        for (face, count) in frequencies.iter() {
            let first = face.saturating_sub(1) / width * width + 1;
            match bars.last_mut() {
                Some(bar) if bar.first == first => bar.count += count,
                _ => bars.push(Bar {
                    first,
                    last: (first + width - 1).min(die.sides()),
                    count,
                }),
            }
        }
        bars
    }

    /// Whole-number count axis with a little headroom above the tallest bar.
    pub(super) fn count_range(bars: &[Bar]) -> Range<u64> {
        let top = bars.iter().map(|bar| bar.count).max().unwrap_or(0);
        0..top + (top / 10).max(1)
    }

    /// Bar chart renderer backed by the plotters bitmap backend.
    pub struct PlottersHistogram {
        output_dir: PathBuf,
    }

    impl PlottersHistogram {
        pub fn new(output_dir: impl Into<PathBuf>) -> Self {
            Self {
                output_dir: output_dir.into(),
            }
        }

        pub fn output_path(&self, die: &Die) -> PathBuf {
            self.output_dir.join(histogram_file_name(die))
        }

        fn draw(&self, path: &Path, die: &Die, frequencies: &FrequencyTable) -> Result<(), InfraError> {
            let root = BitMapBackend::new(path, IMAGE_SIZE).into_drawing_area();
            root.fill(&WHITE).map_err(plot_error)?;

            let bars = bars(die, frequencies);
            let x_max = die.sides() as f64 + 0.5;
            let title = format!("{} Roll Distribution (n={})", die, frequencies.total());

            let mut chart = ChartBuilder::on(&root)
                .caption(title, ("sans-serif", 30))
                .margin(20)
                .x_label_area_size(50)
                .y_label_area_size(70)
                .build_cartesian_2d(0.5f64..x_max, count_range(&bars))
                .map_err(plot_error)?;

            chart
                .configure_mesh()
                .disable_x_mesh()
                .x_desc("Value")
                .y_desc("Frequency")
                .x_labels(die.sides().min(20) as usize)
                .x_label_formatter(&|x| format!("{:.0}", x))
                .draw()
                .map_err(plot_error)?;

            chart
                .draw_series(bars.iter().map(|bar| {
                    let left = bar.first as f64 - 0.5;
                    let right = bar.last as f64 + 0.5;
                    let gap = (right - left) * 0.1;
                    Rectangle::new(
                        [(left + gap, 0u64), (right - gap, bar.count)],
                        BLUE.mix(0.75).filled(),
                    )
                }))
                .map_err(plot_error)?;

            root.present().map_err(plot_error)?;
            Ok(())
        }
    }

    impl HistogramPort for PlottersHistogram {
        fn render(&self, die: &Die, frequencies: &FrequencyTable) -> Result<PathBuf, InfraError> {
            if frequencies.is_empty() {
                return Err(InfraError::Plot("no rolls to plot".to_string()));
            }

            fs::create_dir_all(&self.output_dir)
                .map_err(|e| InfraError::io(&self.output_dir, e))?;

            let path = self.output_path(die);
            self.draw(&path, die, frequencies)?;

            tracing::info!(path = %path.display(), die = %die, "Saved histogram");
            Ok(path)
        }
    }
}
