//! Chip container widget state machine for Chipflow
//!
//! Composes the `chipflow-core` collection with the `chipflow-layout`
//! solver into a full field: pending-text commit, collapse/expand with the
//! "+N" indicator, typed input commands, and cross-container drag transfer.

mod collapse;
mod commands;
mod commit;
mod config;
mod container;
mod field;
mod measurer;
mod transfer;

pub use collapse::*;
pub use commands::*;
pub use commit::*;
pub use config::*;
pub use container::*;
pub use field::*;
pub use measurer::*;
pub use transfer::*;
