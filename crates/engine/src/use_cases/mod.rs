//! Use cases - orchestration between the domain and the ports.

mod roll_session;

pub use roll_session::{CompletedSession, PlaySession, RollSession};
