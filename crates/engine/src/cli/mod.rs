//! Interactive command-line surface: prompt state machine, report
//! formatting, and the console loop that ties them to stdin/stdout.

mod console;
mod report;
mod state;

pub use console::{Console, ConsoleError, BANNER_TITLE, FAREWELL};
pub use report::ReportFormatter;
pub use state::{Effect, InputValidator, PromptState, Transition};
