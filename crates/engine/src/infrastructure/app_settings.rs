//! Application settings read from the environment.
//!
//! Every setting has a default, so an empty environment is a valid one.
//! Malformed values are logged and replaced by the default rather than
//! refusing to start.
//!
//! | Variable | Default | Meaning |
//! |---|---|---|
//! | `DICESIM_OUTPUT_DIR` | `.` | Where CSV and PNG files are written |
//! | `DICESIM_HISTOGRAM` | `on` | `off` resolves the histogram capability to unavailable |
//! | `DICESIM_PREVIEW_LIMIT` | `10` | Longer roll lists are shown head/tail only; `0` shows all |
//! | `DICESIM_MAX_ROLLS` | `10000000` | Largest accepted roll count |
//! | `DICESIM_FREQUENCY_RANGE_LIMIT` | `100` | Largest die whose unrolled faces are still listed |

use std::path::PathBuf;
use std::str::FromStr;

pub const OUTPUT_DIR_VAR: &str = "DICESIM_OUTPUT_DIR";
pub const HISTOGRAM_VAR: &str = "DICESIM_HISTOGRAM";
pub const PREVIEW_LIMIT_VAR: &str = "DICESIM_PREVIEW_LIMIT";
pub const MAX_ROLLS_VAR: &str = "DICESIM_MAX_ROLLS";
pub const FREQUENCY_RANGE_LIMIT_VAR: &str = "DICESIM_FREQUENCY_RANGE_LIMIT";

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AppSettings {
    /// Directory that receives exported CSV files and histogram images.
    pub output_dir: PathBuf,
    /// Whether the operator allows histogram rendering at all.
    pub histogram_enabled: bool,
    /// Roll sequences longer than this are previewed as head, "...", tail.
    pub preview_limit: usize,
    /// Upper bound on a single session's roll count.
    pub max_rolls: u32,
    /// Dice with at most this many sides list zero-count faces too.
    pub frequency_range_limit: u32,
}

impl Default for AppSettings {
    fn default() -> Self {
        Self {
            output_dir: PathBuf::from("."),
            histogram_enabled: true,
            preview_limit: 10,
            max_rolls: 10_000_000,
            frequency_range_limit: 100,
        }
    }
}

impl AppSettings {
    /// Read settings from the process environment.
    pub fn from_env() -> Self {
        Self::from_lookup(|key| std::env::var(key).ok())
    }

    /// Read settings through an arbitrary key lookup.
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> Self {
        let defaults = Self::default();
        let value = |key: &str| {
            lookup(key)
                .map(|v| v.trim().to_string())
                .filter(|v| !v.is_empty())
        };

        let output_dir = value(OUTPUT_DIR_VAR)
            .map(PathBuf::from)
            .unwrap_or(defaults.output_dir);

        let histogram_enabled = match value(HISTOGRAM_VAR) {
            None => defaults.histogram_enabled,
            Some(raw) => match parse_switch(&raw) {
                Some(enabled) => enabled,
                None => {
                    tracing::warn!(
                        key = HISTOGRAM_VAR,
                        value = %raw,
                        "Unrecognized switch value, using default"
                    );
                    defaults.histogram_enabled
                }
            },
        };

        Self {
            output_dir,
            histogram_enabled,
            preview_limit: parse_or_default(
                PREVIEW_LIMIT_VAR,
                value(PREVIEW_LIMIT_VAR),
                defaults.preview_limit,
            ),
            max_rolls: parse_or_default(MAX_ROLLS_VAR, value(MAX_ROLLS_VAR), defaults.max_rolls)
                .max(1),
            frequency_range_limit: parse_or_default(
                FREQUENCY_RANGE_LIMIT_VAR,
                value(FREQUENCY_RANGE_LIMIT_VAR),
                defaults.frequency_range_limit,
            ),
        }
    }
}

fn parse_switch(raw: &str) -> Option<bool> {
    match raw.to_ascii_lowercase().as_str() {
        "on" | "true" | "1" | "yes" => Some(true),
        "off" | "false" | "0" | "no" => Some(false),
        _ => None,
    }
}

fn parse_or_default<T>(key: &str, raw: Option<String>, default: T) -> T
where
    T: FromStr + Copy + std::fmt::Display,
{
    let Some(raw) = raw else {
        return default;
    };

    match raw.parse() {
        Ok(parsed) => parsed,
        Err(_) => {
            tracing::warn!(key, value = %raw, default = %default, "Invalid setting, using default");
            default
        }
    }
}
