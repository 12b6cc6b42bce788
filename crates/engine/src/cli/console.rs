//! Interactive console loop.
//!
//! Reads one line per prompt, feeds it through [`InputValidator::transition`]
//! and carries out the resulting [`Effect`]. Only failures of the input or
//! output stream end the loop with an error; everything else is reported
//! and the conversation continues.

use std::fmt::Display;
use std::io::{self, BufRead, Write};

use dicesim_domain::{Die, RollCount};
use thiserror::Error;

use super::state::{Effect, PromptState};
use crate::app::App;

pub const BANNER_TITLE: &str = "DICE ROLL SIMULATOR";
pub const FAREWELL: &str = "Thanks for rolling! Goodbye!";

const BANNER_WIDTH: usize = 50;

#[derive(Debug, Error)]
pub enum ConsoleError {
    #[error("Failed to read input: {0}")]
    Input(#[source] io::Error),
    #[error("Failed to write output: {0}")]
    Output(#[source] io::Error),
}

/// Console bound to an input and an output stream.
pub struct Console<R, W> {
    input: R,
    output: W,
}

impl<R: BufRead, W: Write> Console<R, W> {
    pub fn new(input: R, output: W) -> Self {
        Self { input, output }
    }

    pub fn into_output(self) -> W {
        self.output
    }

    /// Run until the user declines another session or input ends.
    pub fn run(&mut self, app: &App) -> Result<(), ConsoleError> {
        self.banner()?;
        if let Some(notice) = app.capability_notice() {
            self.say(format!("\n{}", notice))?;
        }

        let validator = app.validator();
        let mut state = PromptState::AwaitingDieType;

        while let Some(prompt) = state.prompt() {
            let spacer = if matches!(state, PromptState::AwaitingRollCount { .. }) {
                ""
            } else {
                "\n"
            };
            self.ask(format!("{}{}", spacer, prompt))?;

            let Some(line) = self.read_line()? else {
                tracing::debug!(?state, "Input ended");
                self.say(format!("\n\n{}", FAREWELL))?;
                return Ok(());
            };

            let transition = validator.transition(state, &line);
            match transition.effect {
                Effect::None => {}
                Effect::Rejected(err) => {
                    tracing::debug!(error = %err, ?state, "Rejected input");
                    self.say(format!(
                        "\nInvalid input: {}\nError details: {}\n",
                        state.rejection_hint(),
                        err
                    ))?;
                }
                Effect::RunSession { die, count } => self.run_session(app, die, count)?,
                Effect::Farewell => self.say(format!("\n{}", FAREWELL))?,
            }
            state = transition.next;
        }

        Ok(())
    }

    /// Report first, then export, then chart; the latter two only warn on
    /// failure.
    fn run_session(&mut self, app: &App, die: Die, count: RollCount) -> Result<(), ConsoleError> {
        let session = match app.play(die, count) {
            Ok(session) => session,
            Err(err) => {
                tracing::error!(error = %err, die = %die, count = %count, "Session failed");
                return self.say(format!("\nCould not summarize rolls: {}", err));
            }
        };

        self.say(format!("\n{}", app.report(&session).trim_end()))?;

        match app.export(&session) {
            Ok(path) => self.say(format!("\nResults saved to: {}", path.display()))?,
            Err(err) => {
                tracing::warn!(error = %err, "CSV export failed");
                self.say(format!("\nWarning: could not save results: {}", err))?;
            }
        }

        match app.render_histogram(&session) {
            None => {}
            Some(Ok(path)) => self.say(format!("Histogram saved to: {}", path.display()))?,
            Some(Err(err)) => {
                tracing::warn!(error = %err, "Histogram rendering failed");
                self.say(format!("Warning: could not render histogram: {}", err))?;
            }
        }

        Ok(())
    }

    fn banner(&mut self) -> Result<(), ConsoleError> {
        let rule = "=".repeat(BANNER_WIDTH);
        self.say(format!(
            "{}\n{:^width$}\n{}",
            rule,
            BANNER_TITLE,
            rule,
            width = BANNER_WIDTH
        ))
    }

    fn read_line(&mut self) -> Result<Option<String>, ConsoleError> {
        let mut line = String::new();
        let read = self
            .input
            .read_line(&mut line)
            .map_err(ConsoleError::Input)?;
        if read == 0 {
            return Ok(None);
        }
        Ok(Some(line.trim_end_matches(['\r', '\n']).to_string()))
    }

    fn say(&mut self, text: impl Display) -> Result<(), ConsoleError> {
        writeln!(self.output, "{}", text).map_err(ConsoleError::Output)
    }

    fn ask(&mut self, prompt: impl Display) -> Result<(), ConsoleError> {
        write!(self.output, "{}", prompt)
            .and_then(|()| self.output.flush())
            .map_err(ConsoleError::Output)
    }
}
