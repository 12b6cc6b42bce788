//! Prompt state machine for the interactive console.
//!
//! ```text
//!            valid die             valid count
//! AwaitingDieType ──────▶ AwaitingRollCount ──────▶ SessionComplete
//!      ▲   │ invalid          │ invalid               │      │
//!      │   └──▶ (same)        └──▶ (same)          "y"│      │ other
//!      └──────────────────────────────────────────────┘      ▼
//!                                                        Terminated
//! ```
//!
//! Transitions are pure; the console performs the [`Effect`] each one asks
//! for.

use dicesim_domain::{Die, DomainError, RollCount};

pub const DIE_PROMPT: &str = "Enter die type (e.g., d4, d6, d20) or number of sides: ";
pub const COUNT_PROMPT: &str = "Number of rolls: ";
pub const AGAIN_PROMPT: &str = "Roll again? (y/n): ";

/// Where the console is in the conversation.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum PromptState {
    AwaitingDieType,
    AwaitingRollCount { die: Die },
    /// A session just ran; the answer decides whether another one starts.
    SessionComplete,
    Terminated,
}

impl PromptState {
    /// Text to show before reading input, `None` once terminated.
    pub fn prompt(&self) -> Option<&'static str> {
        match self {
            Self::AwaitingDieType => Some(DIE_PROMPT),
            Self::AwaitingRollCount { .. } => Some(COUNT_PROMPT),
            Self::SessionComplete => Some(AGAIN_PROMPT),
            Self::Terminated => None,
        }
    }

    /// Explanation shown when input is rejected in this state.
    pub fn rejection_hint(&self) -> &'static str {
        match self {
            Self::AwaitingDieType => "Please enter a valid die size (e.g., 6, d10)",
            Self::AwaitingRollCount { .. } => "Please enter a positive integer",
            Self::SessionComplete | Self::Terminated => "",
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Terminated)
    }
}

/// What the console must do after a transition.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Effect {
    /// Nothing beyond showing the next prompt.
    None,
    /// Input was refused; the state did not advance.
    Rejected(DomainError),
    /// Run the full pipeline for this die and count.
    RunSession { die: Die, count: RollCount },
    /// Say goodbye; the loop is over.
    Farewell,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Transition {
    pub next: PromptState,
    pub effect: Effect,
}

impl Transition {
    fn to(next: PromptState, effect: Effect) -> Self {
        Self { next, effect }
    }

    fn stay(state: PromptState) -> Self {
        Self::to(state, Effect::None)
    }
}

/// Validates raw console input and drives [`PromptState`].
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct InputValidator {
    max_rolls: u32,
}

impl InputValidator {
    pub fn new(max_rolls: u32) -> Self {
        Self {
            max_rolls: max_rolls.max(1),
        }
    }

    pub fn validate_die(&self, input: &str) -> Result<Die, DomainError> {
        Die::parse(input)
    }

    pub fn validate_count(&self, input: &str) -> Result<RollCount, DomainError> {
        let count = RollCount::parse(input)?;
        if count.get() > self.max_rolls {
            return Err(DomainError::invalid_configuration(format!(
                "At most {} rolls per session, got {}",
                self.max_rolls, count
            )));
        }
        Ok(count)
    }

    /// Advance `state` with one line of input.
    ///
    /// Blank input re-prompts silently at the die and count prompts.
    pub fn transition(&self, state: PromptState, input: &str) -> Transition {
        let input = input.trim();

        match state {
            PromptState::AwaitingDieType if input.is_empty() => Transition::stay(state),
            PromptState::AwaitingDieType => match self.validate_die(input) {
                Ok(die) => Transition::stay(PromptState::AwaitingRollCount { die }),
                Err(err) => Transition::to(state, Effect::Rejected(err)),
            },

            PromptState::AwaitingRollCount { .. } if input.is_empty() => Transition::stay(state),
            PromptState::AwaitingRollCount { die } => match self.validate_count(input) {
                Ok(count) => {
                    Transition::to(PromptState::SessionComplete, Effect::RunSession { die, count })
                }
                Err(err) => Transition::to(state, Effect::Rejected(err)),
            },

            PromptState::SessionComplete => {
                if matches!(input.to_ascii_lowercase().as_str(), "y" | "yes") {
                    Transition::stay(PromptState::AwaitingDieType)
                } else {
                    Transition::to(PromptState::Terminated, Effect::Farewell)
                }
            }

            PromptState::Terminated => Transition::stay(state),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn validator() -> InputValidator {
        InputValidator::new(1_000)
    }

    fn d6() -> Die {
        Die::new(6).unwrap()
    }

    #[test]
    fn die_prompt_accepts_bare_and_prefixed_sizes() {
        for input in ["20", "d20", "D20", " d20 "] {
            let t = validator().transition(PromptState::AwaitingDieType, input);
            assert_eq!(
                t.next,
                PromptState::AwaitingRollCount {
                    die: Die::new(20).unwrap()
                },
                "input {:?}",
                input
            );
            assert_eq!(t.effect, Effect::None);
        }
    }

    #[test]
    fn invalid_die_input_never_advances() {
        for input in ["d0", "-5", "abc", "0", "1", "2.5", "d"] {
            let t = validator().transition(PromptState::AwaitingDieType, input);
            assert_eq!(t.next, PromptState::AwaitingDieType, "input {:?}", input);
            assert!(matches!(
                t.effect,
                Effect::Rejected(DomainError::InvalidConfiguration(_))
            ));
        }
    }

    #[test]
    fn invalid_count_input_never_advances() {
        let state = PromptState::AwaitingRollCount { die: d6() };
        for input in ["d0", "-5", "abc", "0", "1.5", "1001"] {
            let t = validator().transition(state, input);
            assert_eq!(t.next, state, "input {:?}", input);
            assert!(matches!(t.effect, Effect::Rejected(_)));
        }
    }

    #[test]
    fn blank_input_reprompts_without_error() {
        let t = validator().transition(PromptState::AwaitingDieType, "   ");
        assert_eq!(t, Transition::stay(PromptState::AwaitingDieType));

        let state = PromptState::AwaitingRollCount { die: d6() };
        assert_eq!(validator().transition(state, ""), Transition::stay(state));
    }

    #[test]
    fn valid_count_runs_session() {
        let t = validator().transition(PromptState::AwaitingRollCount { die: d6() }, "5");
        assert_eq!(t.next, PromptState::SessionComplete);
        assert_eq!(
            t.effect,
            Effect::RunSession {
                die: d6(),
                count: RollCount::new(5).unwrap()
            }
        );
    }

    #[test]
    fn yes_starts_over() {
        for input in ["y", "Y", "yes", " YES "] {
            let t = validator().transition(PromptState::SessionComplete, input);
            assert_eq!(t, Transition::stay(PromptState::AwaitingDieType));
        }
    }

    #[test]
    fn anything_else_terminates() {
        for input in ["n", "N", "no", "", "maybe"] {
            let t = validator().transition(PromptState::SessionComplete, input);
            assert_eq!(t.next, PromptState::Terminated);
            assert_eq!(t.effect, Effect::Farewell);
        }
    }

    #[test]
    fn terminated_is_absorbing() {
        let t = validator().transition(PromptState::Terminated, "y");
        assert_eq!(t, Transition::stay(PromptState::Terminated));
        assert!(t.next.is_terminal());
        assert_eq!(PromptState::Terminated.prompt(), None);
    }

    #[test]
    fn count_limit_comes_from_validator() {
        let strict = InputValidator::new(10);
        assert!(strict.validate_count("10").is_ok());
        let err = strict.validate_count("11").unwrap_err();
        assert!(err.to_string().contains("At most 10 rolls"));
    }
}
