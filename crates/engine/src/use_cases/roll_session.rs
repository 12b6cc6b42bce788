//! Roll session use cases.
//!
//! - [`RollSession`] rolls one die a fixed number of times.
//! - [`PlaySession`] stamps the rolls with the clock and derives statistics,
//!   producing everything the report, export and histogram need.

use std::sync::Arc;

use dicesim_domain::{
    Die, DomainError, RollCount, RollSequence, SessionRecord, SessionStatistics,
};

use crate::infrastructure::ports::{ClockPort, RandomPort};

/// Rolls a die repeatedly using the injected randomness source.
pub struct RollSession {
    random: Arc<dyn RandomPort>,
}

impl RollSession {
    pub fn new(random: Arc<dyn RandomPort>) -> Self {
        Self { random }
    }

    /// Roll `count` times, in order.
    pub fn execute(&self, die: &Die, count: RollCount) -> RollSequence {
        (0..count.get())
            .map(|_| die.roll_with(|min, max| self.random.gen_range(min, max)))
            .collect()
    }

    /// Same as [`Self::execute`] for an unvalidated count.
    pub fn execute_count(&self, die: &Die, count: u32) -> Result<RollSequence, DomainError> {
        Ok(self.execute(die, RollCount::new(count)?))
    }
}

/// A finished session: the persisted record plus its derived statistics.
#[derive(Debug, Clone, PartialEq)]
pub struct CompletedSession {
    pub record: SessionRecord,
    pub statistics: SessionStatistics,
}

impl CompletedSession {
    pub fn die(&self) -> &Die {
        &self.record.die
    }

    pub fn rolls(&self) -> &RollSequence {
        &self.record.rolls
    }
}

/// Use case for one full roll-and-summarize cycle.
pub struct PlaySession {
    roll_session: RollSession,
    clock: Arc<dyn ClockPort>,
}

impl PlaySession {
    pub fn new(roll_session: RollSession, clock: Arc<dyn ClockPort>) -> Self {
        Self {
            roll_session,
            clock,
        }
    }

    pub fn execute(&self, die: Die, count: RollCount) -> Result<CompletedSession, DomainError> {
        let rolls = self.roll_session.execute(&die, count);
        let statistics = SessionStatistics::calculate(&rolls)?;

        tracing::debug!(
            die = %die,
            rolls = rolls.len(),
            mean = statistics.summary.mean,
            mode = statistics.summary.mode,
            "Completed roll session"
        );

        Ok(CompletedSession {
            record: SessionRecord::new(self.clock.now(), die, rolls),
            statistics,
        })
    }
}
