//! What gets persisted for a completed session.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use super::{Die, RollSequence};

/// Timestamp, die and rolls of one completed session, written once.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SessionRecord {
    pub recorded_at: DateTime<Utc>,
    pub die: Die,
    pub rolls: RollSequence,
}

impl SessionRecord {
    pub fn new(recorded_at: DateTime<Utc>, die: Die, rolls: RollSequence) -> Self {
        Self {
            recorded_at,
            die,
            rolls,
        }
    }
}
