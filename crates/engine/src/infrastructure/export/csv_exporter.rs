//! CSV exporter for roll sessions
//!
//! Writes one file per session, named `d<sides>_rolls_<YYYYmmdd_HHMMSS>.csv`
//! after the session's local timestamp. Two sessions for the same die within
//! the same second overwrite each other.
//!
//! Layout:
//! ```text
//! Roll #,Result
//! 1,3
//! 2,1
//! ```

use std::fs::{self, File};
use std::io::{self, BufWriter, Write};
use std::path::{Path, PathBuf};

use chrono::Local;
use dicesim_domain::{RollSequence, SessionRecord};

use crate::infrastructure::error::InfraError;
use crate::infrastructure::ports::ExportPort;

pub const CSV_HEADER: &str = "Roll #,Result";

const TIMESTAMP_FORMAT: &str = "%Y%m%d_%H%M%S";

/// CSV exporter writing into a fixed output directory
pub struct CsvExporter {
    output_dir: PathBuf,
}

impl CsvExporter {
    pub fn new(output_dir: impl Into<PathBuf>) -> Self {
        Self {
            output_dir: output_dir.into(),
        }
    }

    /// File name for a record, e.g. `d6_rolls_20240309_140507.csv`
    pub fn file_name(record: &SessionRecord) -> String {
        let timestamp = record
            .recorded_at
            .with_timezone(&Local)
            .format(TIMESTAMP_FORMAT);
        format!("d{}_rolls_{}.csv", record.die.sides(), timestamp)
    }

    /// Read an exported file back into the roll sequence it was written from.
    pub fn read_rolls(path: &Path) -> Result<RollSequence, InfraError> {
        let content = fs::read_to_string(path).map_err(|e| InfraError::io(path, e))?;
        parse_rolls(&content)
    }
}

impl ExportPort for CsvExporter {
    fn export(&self, record: &SessionRecord) -> Result<PathBuf, InfraError> {
        fs::create_dir_all(&self.output_dir).map_err(|e| InfraError::io(&self.output_dir, e))?;

        let path = self.output_dir.join(Self::file_name(record));
        let file = File::create(&path).map_err(|e| InfraError::io(&path, e))?;

        let mut writer = BufWriter::new(file);
        write_rolls(&mut writer, &record.rolls)
            .and_then(|()| writer.flush())
            .map_err(|e| InfraError::io(&path, e))?;

        tracing::info!(
            path = %path.display(),
            die = %record.die,
            rolls = record.rolls.len(),
            "Exported roll session"
        );
        Ok(path)
    }
}

fn write_rolls(writer: &mut impl Write, rolls: &RollSequence) -> io::Result<()> {
    writeln!(writer, "{}", CSV_HEADER)?;
    for (index, outcome) in rolls.iter().enumerate() {
        writeln!(writer, "{},{}", index + 1, outcome)?;
    }
    Ok(())
}

/// Parse CSV content produced by [`CsvExporter`].
///
/// Requires the header, then rows numbered 1, 2, 3, ... in order. Blank
/// lines are skipped and `\r\n` endings are accepted.
pub(crate) fn parse_rolls(content: &str) -> Result<RollSequence, InfraError> {
    let mut lines = content
        .lines()
        .enumerate()
        .map(|(index, line)| (index + 1, line.trim_end_matches('\r')))
        .filter(|(_, line)| !line.trim().is_empty());

    match lines.next() {
        Some((_, header)) if header == CSV_HEADER => {}
        Some((line, other)) => {
            return Err(InfraError::malformed(
                line,
                format!("expected header '{}', found '{}'", CSV_HEADER, other),
            ))
        }
        None => return Err(InfraError::malformed(1, "file is empty")),
    }

    let mut values = Vec::new();
    for (line, row) in lines {
        let mut fields = row.split(',').map(str::trim);
        let (Some(index), Some(value), None) = (fields.next(), fields.next(), fields.next()) else {
            return Err(InfraError::malformed(line, "expected 2 columns"));
        };

        let expected = values.len() + 1;
        if index.parse::<usize>().ok() != Some(expected) {
            return Err(InfraError::malformed(
                line,
                format!("expected roll #{}, found '{}'", expected, index),
            ));
        }

        let value: u32 = value
            .parse()
            .map_err(|_| InfraError::malformed(line, format!("invalid result '{}'", value)))?;
        values.push(value);
    }

    Ok(RollSequence::from_values(values))
}
