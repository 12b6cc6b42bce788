//! Dice simulator domain.
//!
//! Pure value objects and derivations: dice, roll sequences, frequency
//! counting and summary statistics. Nothing here touches the filesystem or
//! owns a source of randomness; callers inject one into [`Die::roll_with`].

extern crate self as dicesim_domain;

pub mod error;
pub mod statistics;
pub mod value_objects;

pub use error::DomainError;
pub use statistics::{FrequencyTable, SessionStatistics, StatisticsSummary};
pub use value_objects::{Die, RollCount, RollOutcome, RollSequence, SessionRecord};
