//! Dice simulator engine library.
//!
//! ## Structure
//!
//! - `use_cases/` - Roll sessions orchestrated over the domain
//! - `infrastructure/` - Ports and their adapters (clock, RNG, CSV, plotting)
//! - `cli/` - Prompt state machine, report formatting and the console loop
//! - `app` - Application composition

pub mod app;
pub mod cli;
pub mod infrastructure;
pub mod use_cases;

/// Full-pipeline tests driving the console over in-memory streams.
#[cfg(test)]
mod e2e_tests;

pub use app::App;
