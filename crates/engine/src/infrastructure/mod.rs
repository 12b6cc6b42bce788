//! Infrastructure implementations.
//!
//! Contains port trait implementations for external dependencies: the
//! clock, the randomness source, the filesystem, and the plotting backend.

pub mod app_settings;
pub mod clock;
pub mod error;
pub mod export;
pub mod histogram;
pub mod ports;
