//! Observable chip lifecycle.

use std::cell::RefCell;
use std::rc::Rc;

use crate::Chip;

/// Lifecycle callbacks fired synchronously after each structural mutation.
///
/// Callbacks run on the single event thread and may themselves mutate the
/// collection that fired them; nested mutations queue their notifications
/// behind the one in flight, so order always matches mutation order.
pub trait ChipListener {
    fn on_chip_added(&mut self, chip: &Chip);
    fn on_chip_removed(&mut self, chip: &Chip);
}

/// Shared single-threaded listener registration.
pub type SharedChipListener = Rc<RefCell<dyn ChipListener>>;

/// One lifecycle notification, carrying the chip value at mutation time.
#[derive(Debug, Clone, PartialEq)]
pub enum ChipEvent {
    Added(Chip),
    Removed(Chip),
}

impl ChipEvent {
    pub fn chip(&self) -> &Chip {
        match self {
            ChipEvent::Added(chip) | ChipEvent::Removed(chip) => chip,
        }
    }

    pub fn is_added(&self) -> bool {
        matches!(self, ChipEvent::Added(_))
    }

    pub fn is_removed(&self) -> bool {
        matches!(self, ChipEvent::Removed(_))
    }
}
