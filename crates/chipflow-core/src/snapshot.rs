//! Plain serialize/deserialize contract for a collection's contents.

use crate::Chip;

/// An ordered copy of a collection's chips, independent of any platform
/// persistence format. Produced by [`crate::ChipCollection::snapshot`] and
/// consumed by [`crate::ChipCollection::restore`].
#[derive(Debug, Clone, Default, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct FieldSnapshot {
    chips: Vec<Chip>,
}

impl FieldSnapshot {
    pub fn new(chips: Vec<Chip>) -> Self {
        Self { chips }
    }

    pub fn chips(&self) -> &[Chip] {
        &self.chips
    }

    pub fn into_chips(self) -> Vec<Chip> {
        self.chips
    }

    pub fn len(&self) -> usize {
        self.chips.len()
    }

    pub fn is_empty(&self) -> bool {
        self.chips.is_empty()
    }
}
