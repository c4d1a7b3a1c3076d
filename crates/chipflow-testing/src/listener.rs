//! Recording listener for asserting on chip lifecycle events.

use std::cell::RefCell;
use std::rc::Rc;

use chipflow_core::{Chip, ChipCollection, ChipEvent, ChipListener};
use chipflow_field::ChipField;

/// Captures every lifecycle event in delivery order.
#[derive(Debug, Default)]
pub struct RecordingListener {
    events: Vec<ChipEvent>,
}

impl RecordingListener {
    pub fn new() -> Rc<RefCell<Self>> {
        Rc::new(RefCell::new(Self::default()))
    }

    /// Creates a listener and registers it on `collection`.
    pub fn install(collection: &ChipCollection) -> Rc<RefCell<Self>> {
        let listener = Self::new();
        collection.set_listener(listener.clone());
        listener
    }

    /// Creates a listener and registers it on `field`'s collection.
    pub fn install_on_field(field: &ChipField) -> Rc<RefCell<Self>> {
        let listener = Self::new();
        field.set_listener(listener.clone());
        listener
    }

    pub fn events(&self) -> &[ChipEvent] {
        &self.events
    }

    pub fn added_count(&self) -> usize {
        self.events.iter().filter(|event| event.is_added()).count()
    }

    pub fn removed_count(&self) -> usize {
        self.events.iter().filter(|event| event.is_removed()).count()
    }

    pub fn added_labels(&self) -> Vec<String> {
        self.events
            .iter()
            .filter(|event| event.is_added())
            .map(|event| event.chip().label.clone())
            .collect()
    }

    pub fn removed_labels(&self) -> Vec<String> {
        self.events
            .iter()
            .filter(|event| event.is_removed())
            .map(|event| event.chip().label.clone())
            .collect()
    }

    pub fn clear(&mut self) {
        self.events.clear();
    }
}

impl ChipListener for RecordingListener {
    fn on_chip_added(&mut self, chip: &Chip) {
        self.events.push(ChipEvent::Added(chip.clone()));
    }

    fn on_chip_removed(&mut self, chip: &Chip) {
        self.events.push(ChipEvent::Removed(chip.clone()));
    }
}
