//! End-to-end session tests.
//!
//! These tests drive the full pipeline (prompts, rolling, statistics,
//! report, CSV export) through [`crate::cli::Console`] with:
//! - A scripted randomness source
//! - A fixed clock
//! - A real [`crate::infrastructure::export::CsvExporter`] in a temp dir
//!
//! ```bash
//! cargo test -p dicesim-engine --lib e2e_tests
//! ```

mod e2e_helpers;
mod session_flow_tests;

pub use e2e_helpers::*;
