//! Summary statistics and frequency counting over a roll sequence.
//!
//! Counts stay exact integers; percentages are derived on demand and only
//! rounded for display.

use std::collections::BTreeMap;

use serde::{Deserialize, Serialize};

use crate::{DomainError, RollSequence};

/// Occurrences of each face within one roll sequence.
///
/// Only faces that were actually rolled are stored; [`FrequencyTable::count`]
/// answers zero for the rest. Iteration is in ascending face order.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase", try_from = "RawFrequencyTable")]
pub struct FrequencyTable {
    counts: BTreeMap<u32, u64>,
    total: u64,
}

#[derive(Deserialize)]
#[serde(rename_all = "camelCase")]
struct RawFrequencyTable {
    counts: BTreeMap<u32, u64>,
    total: u64,
}

impl TryFrom<RawFrequencyTable> for FrequencyTable {
    type Error = DomainError;

    /// Counts must be positive and add up to `total`.
    fn try_from(raw: RawFrequencyTable) -> Result<Self, Self::Error> {
        if let Some((face, _)) = raw.counts.iter().find(|(_, count)| **count == 0) {
            return Err(DomainError::invalid_configuration(format!(
                "Face {} has a zero count",
                face
            )));
        }
        let summed: u64 = raw.counts.values().sum();
        if summed != raw.total {
            return Err(DomainError::invalid_configuration(format!(
                "Counts add up to {} but total is {}",
                summed, raw.total
            )));
        }
        Ok(Self {
            counts: raw.counts,
            total: raw.total,
        })
    }
}

impl FrequencyTable {
    pub fn from_sequence(rolls: &RollSequence) -> Self {
        let mut counts = BTreeMap::new();
        for outcome in rolls.iter() {
            *counts.entry(outcome.value()).or_insert(0u64) += 1;
        }
        Self {
            counts,
            total: rolls.len() as u64,
        }
    }

    /// Occurrences of `face`, zero if it never came up.
    pub fn count(&self, face: u32) -> u64 {
        self.counts.get(&face).copied().unwrap_or(0)
    }

    /// Share of all rolls that landed on `face`, in percent (unrounded).
    pub fn percentage(&self, face: u32) -> f64 {
        if self.total == 0 {
            return 0.0;
        }
        self.count(face) as f64 / self.total as f64 * 100.0
    }

    /// [`Self::percentage`] rounded half away from zero to one decimal place.
    pub fn rounded_percentage(&self, face: u32) -> f64 {
        (self.percentage(face) * 10.0).round() / 10.0
    }

    pub fn total(&self) -> u64 {
        self.total
    }

    pub fn is_empty(&self) -> bool {
        self.counts.is_empty()
    }

    /// Observed `(face, count)` pairs, ascending by face.
    pub fn iter(&self) -> impl Iterator<Item = (u32, u64)> + '_ {
        self.counts.iter().map(|(&face, &count)| (face, count))
    }

    /// Highest count in the table, zero when empty.
    pub fn max_count(&self) -> u64 {
        self.counts.values().copied().max().unwrap_or(0)
    }

    /// Face with the strictly highest count; ties go to the smallest face.
    pub fn mode(&self) -> Option<u32> {
        let mut best: Option<(u32, u64)> = None;
        for (face, count) in self.iter() {
            match best {
                Some((_, best_count)) if count <= best_count => {}
                _ => best = Some((face, count)),
            }
        }
        best.map(|(face, _)| face)
    }
}

/// Min, max, mean, mode and size of one roll sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StatisticsSummary {
    pub minimum: u32,
    pub maximum: u32,
    pub mean: f64,
    pub mode: u32,
    pub total_rolls: u64,
}

/// Everything derived from a completed roll sequence.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionStatistics {
    pub summary: StatisticsSummary,
    pub frequencies: FrequencyTable,
}

impl SessionStatistics {
    /// Derive the summary and frequency table in a single pass.
    ///
    /// Fails with [`DomainError::EmptySequence`] when there are no rolls.
    pub fn calculate(rolls: &RollSequence) -> Result<Self, DomainError> {
        let mut values = rolls.iter().map(|outcome| outcome.value());
        let first = values.next().ok_or(DomainError::EmptySequence)?;

        let (minimum, maximum, sum) = values.fold(
            (first, first, u64::from(first)),
            |(min, max, sum), value| (min.min(value), max.max(value), sum + u64::from(value)),
        );

        let frequencies = FrequencyTable::from_sequence(rolls);
        let mode = frequencies.mode().ok_or(DomainError::EmptySequence)?;
        let total_rolls = frequencies.total();

        Ok(Self {
            summary: StatisticsSummary {
                minimum,
                maximum,
                mean: sum as f64 / total_rolls as f64,
                mode,
                total_rolls,
            },
            frequencies,
        })
    }
}
