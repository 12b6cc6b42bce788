//! Dice value objects and parsing
//!
//! Supports die types like "d4", "D20", or a bare side count like "6".
//! Rolling takes an injected range generator so the domain never owns an RNG.

use serde::{Deserialize, Serialize};
use std::fmt;

use crate::DomainError;

/// Smallest die that still has a choice to make.
pub const MIN_SIDES: u32 = 2;

/// A die with a fixed number of faces, numbered `1..=sides`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Die {
    sides: u32,
}

impl Die {
    /// Create a die, rejecting fewer than two sides.
    pub fn new(sides: u32) -> Result<Self, DomainError> {
        if sides < MIN_SIDES {
            return Err(DomainError::invalid_configuration(format!(
                "Die must have at least {} sides, got {}",
                MIN_SIDES, sides
            )));
        }
        Ok(Self { sides })
    }

    /// Parse a die type string like "d20", "D6" or "12"
    ///
    /// Supported formats:
    /// - "dY" - a die with Y sides (prefix is case-insensitive)
    /// - "Y" - a die with Y sides
    ///
    /// Signs, decimals and anything else that is not a plain run of digits
    /// are rejected.
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim().to_lowercase();
        if input.is_empty() {
            return Err(DomainError::invalid_configuration("Empty die type"));
        }

        let digits = input.strip_prefix('d').unwrap_or(&input);
        let sides = parse_whole_number(digits, "die size")?;
        Self::new(sides)
    }

    pub fn sides(&self) -> u32 {
        self.sides
    }

    /// Roll once using the supplied range generator.
    ///
    /// `gen_range(min, max)` must return a value in the inclusive range
    /// `min..=max`; it is called exactly once.
    pub fn roll_with(&self, mut gen_range: impl FnMut(u32, u32) -> u32) -> RollOutcome {
        let value = gen_range(1, self.sides);
        debug_assert!(
            (1..=self.sides).contains(&value),
            "range generator returned {} for d{}",
            value,
            self.sides
        );
        RollOutcome(value)
    }

    /// Format as a display string (e.g., "d20")
    pub fn display(&self) -> String {
        format!("d{}", self.sides)
    }
}

impl fmt::Display for Die {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.display())
    }
}

impl TryFrom<u32> for Die {
    type Error = DomainError;

    fn try_from(sides: u32) -> Result<Self, Self::Error> {
        Self::new(sides)
    }
}

impl From<Die> for u32 {
    fn from(die: Die) -> Self {
        die.sides
    }
}

/// A single face value produced by a roll.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct RollOutcome(u32);

impl RollOutcome {
    /// Wrap a face value read back from an export or chosen by a test.
    ///
    /// No range check: the die that produced it is not known here.
    pub fn new(value: u32) -> Self {
        Self(value)
    }

    pub fn value(self) -> u32 {
        self.0
    }
}

impl fmt::Display for RollOutcome {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// How many times to roll in one session. Always at least one.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct RollCount(u32);

impl RollCount {
    pub fn new(count: u32) -> Result<Self, DomainError> {
        if count == 0 {
            return Err(DomainError::invalid_configuration("Must roll at least once"));
        }
        Ok(Self(count))
    }

    /// Parse a roll count like "100"
    pub fn parse(input: &str) -> Result<Self, DomainError> {
        let input = input.trim();
        if input.is_empty() {
            return Err(DomainError::invalid_configuration("Empty roll count"));
        }
        Self::new(parse_whole_number(input, "roll count")?)
    }

    pub fn get(self) -> u32 {
        self.0
    }
}

impl TryFrom<u32> for RollCount {
    type Error = DomainError;

    fn try_from(count: u32) -> Result<Self, Self::Error> {
        Self::new(count)
    }
}

impl From<RollCount> for u32 {
    fn from(count: RollCount) -> Self {
        count.0
    }
}

impl fmt::Display for RollCount {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// `str::parse::<u32>` accepts a leading '+', so check the digits ourselves.
fn parse_whole_number(digits: &str, what: &str) -> Result<u32, DomainError> {
    if digits.is_empty() || !digits.bytes().all(|b| b.is_ascii_digit()) {
        return Err(DomainError::invalid_configuration(format!(
            "Invalid {}: '{}' is not a positive whole number",
            what, digits
        )));
    }

    digits.parse().map_err(|_| {
        DomainError::invalid_configuration(format!("Invalid {}: '{}' is too large", what, digits))
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_bare_number() {
        assert_eq!(Die::parse("20").unwrap().sides(), 20);
    }

    #[test]
    fn test_parse_prefixed() {
        assert_eq!(Die::parse("d20").unwrap().sides(), 20);
        assert_eq!(Die::parse("d4").unwrap().sides(), 4);
    }

    #[test]
    fn test_parse_case_insensitive() {
        assert_eq!(Die::parse("D100").unwrap().sides(), 100);
    }

    #[test]
    fn test_parse_with_whitespace() {
        assert_eq!(Die::parse("  d6  ").unwrap().sides(), 6);
    }

    #[test]
    fn test_parse_rejects_zero_and_one() {
        assert!(Die::parse("d0").unwrap_err().is_invalid_configuration());
        assert!(Die::parse("0").unwrap_err().is_invalid_configuration());
        assert!(Die::parse("1").unwrap_err().is_invalid_configuration());
    }

    #[test]
    fn test_parse_rejects_non_integers() {
        for input in ["", "abc", "-5", "d-5", "+6", "2.5", "d", "dd6", "d6+1", "6d"] {
            assert!(
                matches!(Die::parse(input), Err(DomainError::InvalidConfiguration(_))),
                "accepted {:?}",
                input
            );
        }
    }

    #[test]
    fn test_parse_rejects_overflow() {
        let err = Die::parse("d99999999999").unwrap_err();
        assert!(err.to_string().contains("too large"));
    }

    #[test]
    fn test_new_rejects_small_dice() {
        assert!(Die::new(1).is_err());
        assert!(Die::new(2).is_ok());
        assert!(Die::new(u32::MAX).is_ok());
    }

    #[test]
    fn test_roll_with_passes_face_range() {
        let die = Die::new(12).unwrap();
        let outcome = die.roll_with(|min, max| {
            assert_eq!((min, max), (1, 12));
            7
        });
        assert_eq!(outcome.value(), 7);
    }

    #[test]
    fn test_display() {
        assert_eq!(Die::new(20).unwrap().to_string(), "d20");
    }

    #[test]
    fn test_roll_count_parse() {
        assert_eq!(RollCount::parse("5").unwrap().get(), 5);
        assert_eq!(RollCount::parse(" 1000 ").unwrap().get(), 1000);
    }

    #[test]
    fn test_roll_count_rejects_invalid() {
        for input in ["", "0", "-5", "abc", "d6", "1.5", "+3"] {
            assert!(RollCount::parse(input).is_err(), "accepted {:?}", input);
        }
    }

    #[test]
    fn test_die_deserialize_enforces_invariant() {
        let die: Die = serde_json::from_str("6").unwrap();
        assert_eq!(die.sides(), 6);
        assert!(serde_json::from_str::<Die>("1").is_err());
    }
}
