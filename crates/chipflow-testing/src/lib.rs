//! Test fixtures and recording helpers for the chipflow crates.

mod fixtures;
mod listener;

pub use fixtures::*;
pub use listener::*;
