//! Value objects - Immutable objects defined by their attributes

mod dice;
mod roll_sequence;
mod session_record;

pub use dice::{Die, RollCount, RollOutcome};
pub use roll_sequence::RollSequence;
pub use session_record::SessionRecord;
