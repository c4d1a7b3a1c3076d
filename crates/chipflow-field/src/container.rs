//! The container capability surface.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use chipflow_core::{Chip, ChipError, ChipHandle};

static NEXT_CONTAINER_ID: AtomicU64 = AtomicU64::new(1);

/// Identity of one chip container, used to tell drag sources apart.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct ContainerId(u64);

impl ContainerId {
    /// Allocates a fresh process-unique id.
    pub fn next() -> Self {
        ContainerId(NEXT_CONTAINER_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ContainerId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "container#{}", self.0)
    }
}

/// What any chip container can do, independent of how it is rendered.
///
/// A capability trait implemented by composition over the collection and
/// collapse controller; there is no base-class hierarchy to override.
pub trait ChipContainer {
    /// Reduce to the first line plus a "+N" indicator.
    fn collapse(&self) -> Result<(), ChipError>;

    /// Undo a collapse; no-op when nothing is hidden.
    fn expand(&self) -> Result<(), ChipError>;

    /// Unconditionally restore all hidden chips.
    fn force_expand(&self);

    fn add_chip_at(&self, index: usize, chip: Chip) -> Result<ChipHandle, ChipError>;

    fn remove_chip_at(&self, index: usize) -> Result<Chip, ChipError>;

    /// Every committed chip, hidden ones included, in logical order.
    fn chips(&self) -> Vec<Chip>;

    fn is_collapsed(&self) -> bool;
}
