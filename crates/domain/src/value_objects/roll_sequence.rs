//! Ordered roll outcomes for one session.

use serde::{Deserialize, Serialize};

use super::RollOutcome;

/// The outcomes of one session, in the order they were rolled.
///
/// Read-only once built; statistics and exports borrow it.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollSequence {
    outcomes: Vec<RollOutcome>,
}

impl RollSequence {
    pub fn new(outcomes: Vec<RollOutcome>) -> Self {
        Self { outcomes }
    }

    /// Build from raw face values (CSV read-back, fixtures).
    pub fn from_values(values: impl IntoIterator<Item = u32>) -> Self {
        Self {
            outcomes: values.into_iter().map(RollOutcome::new).collect(),
        }
    }

    pub fn len(&self) -> usize {
        self.outcomes.len()
    }

    pub fn is_empty(&self) -> bool {
        self.outcomes.is_empty()
    }

    pub fn as_slice(&self) -> &[RollOutcome] {
        &self.outcomes
    }

    pub fn iter(&self) -> impl Iterator<Item = RollOutcome> + '_ {
        self.outcomes.iter().copied()
    }

    /// Face values in roll order.
    pub fn values(&self) -> Vec<u32> {
        self.iter().map(RollOutcome::value).collect()
    }
}

impl FromIterator<RollOutcome> for RollSequence {
    fn from_iter<I: IntoIterator<Item = RollOutcome>>(iter: I) -> Self {
        Self::new(iter.into_iter().collect())
    }
}

impl<'a> IntoIterator for &'a RollSequence {
    type Item = &'a RollOutcome;
    type IntoIter = std::slice::Iter<'a, RollOutcome>;

    fn into_iter(self) -> Self::IntoIter {
        self.outcomes.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn preserves_roll_order() {
        let rolls = RollSequence::from_values([3, 1, 6, 6, 2]);
        assert_eq!(rolls.len(), 5);
        assert_eq!(rolls.values(), vec![3, 1, 6, 6, 2]);
    }

    #[test]
    fn serializes_as_plain_list() {
        let rolls = RollSequence::from_values([4, 2]);
        assert_eq!(serde_json::to_string(&rolls).unwrap(), "[4,2]");
    }
}
