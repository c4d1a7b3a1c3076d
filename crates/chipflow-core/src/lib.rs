//! Chip data model and collection state machine for Chipflow

mod chip;
mod collection;
mod error;
mod events;
mod snapshot;

pub use chip::*;
pub use collection::*;
pub use error::*;
pub use events::*;
pub use snapshot::*;
