//! Ordered chip collection with a position-indexed view.

use std::cell::{Cell, RefCell};
use std::collections::VecDeque;

use indexmap::IndexMap;
use rustc_hash::FxBuildHasher;

use crate::{Chip, ChipError, ChipEvent, ChipHandle, ChipId, FieldSnapshot, SharedChipListener};

type EntryMap = IndexMap<ChipHandle, Chip, FxBuildHasher>;

/// Ordered set of chip entries, position = insertion index.
///
/// All mutation happens on one event thread. Listener callbacks run after
/// the structural change completes and may reenter the collection; nested
/// notifications are queued so the listener observes events in mutation
/// order, exactly one per structural change. Iteration hands out snapshots,
/// never live views.
#[derive(Default)]
pub struct ChipCollection {
    entries: RefCell<EntryMap>,
    next_handle: Cell<u64>,
    listener: RefCell<Option<SharedChipListener>>,
    pending_events: RefCell<VecDeque<ChipEvent>>,
    dispatching: Cell<bool>,
}

impl ChipCollection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers the lifecycle listener, replacing any previous one.
    pub fn set_listener(&self, listener: SharedChipListener) {
        *self.listener.borrow_mut() = Some(listener);
    }

    pub fn clear_listener(&self) {
        *self.listener.borrow_mut() = None;
    }

    pub fn len(&self) -> usize {
        self.entries.borrow().len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.borrow().is_empty()
    }

    /// Appends a chip after all committed entries.
    pub fn add(&self, chip: Chip) -> ChipHandle {
        let handle = self.allocate_handle();
        self.entries.borrow_mut().insert(handle, chip.clone());
        self.emit(ChipEvent::Added(chip));
        handle
    }

    /// Inserts at `index`, shifting later entries. `index` may equal `len`
    /// (append).
    pub fn add_at(&self, index: usize, chip: Chip) -> Result<ChipHandle, ChipError> {
        let len = self.len();
        if index > len {
            return Err(ChipError::InvalidIndex { index, len });
        }
        let handle = self.allocate_handle();
        self.entries
            .borrow_mut()
            .shift_insert(index, handle, chip.clone());
        self.emit(ChipEvent::Added(chip));
        Ok(handle)
    }

    pub fn remove_at(&self, index: usize) -> Result<Chip, ChipError> {
        let removed = self.entries.borrow_mut().shift_remove_index(index);
        match removed {
            Some((_, chip)) => {
                self.emit(ChipEvent::Removed(chip.clone()));
                Ok(chip)
            }
            None => Err(ChipError::PositionNotFound { index }),
        }
    }

    pub fn remove_by_handle(&self, handle: ChipHandle) -> Result<Chip, ChipError> {
        let removed = self.entries.borrow_mut().shift_remove(&handle);
        match removed {
            Some(chip) => {
                self.emit(ChipEvent::Removed(chip.clone()));
                Ok(chip)
            }
            None => Err(ChipError::HandleNotFound { handle }),
        }
    }

    /// Removes the chip with the given id. Absence is a benign no-op: the
    /// chip may already have been taken by a concurrent drag operation.
    pub fn remove_by_id(&self, id: ChipId) -> Option<Chip> {
        let removed = {
            let mut entries = self.entries.borrow_mut();
            let index = entries.values().position(|chip| chip.id == id)?;
            entries.shift_remove_index(index)
        };
        let (_, chip) = removed?;
        self.emit(ChipEvent::Removed(chip.clone()));
        Some(chip)
    }

    pub fn get(&self, index: usize) -> Option<Chip> {
        self.entries
            .borrow()
            .get_index(index)
            .map(|(_, chip)| chip.clone())
    }

    pub fn get_by_handle(&self, handle: ChipHandle) -> Option<Chip> {
        self.entries.borrow().get(&handle).cloned()
    }

    pub fn handle_at(&self, index: usize) -> Option<ChipHandle> {
        self.entries
            .borrow()
            .get_index(index)
            .map(|(handle, _)| *handle)
    }

    pub fn index_of_handle(&self, handle: ChipHandle) -> Option<usize> {
        self.entries.borrow().get_index_of(&handle)
    }

    /// Ordered snapshot of the chip values. Copy-on-iterate: safe to walk
    /// while a listener mutates the collection.
    pub fn chips(&self) -> Vec<Chip> {
        self.entries.borrow().values().cloned().collect()
    }

    /// Ordered snapshot of the entry handles.
    pub fn handles(&self) -> Vec<ChipHandle> {
        self.entries.borrow().keys().copied().collect()
    }

    /// Detaches every entry from `index` onward without firing lifecycle
    /// events. Collapse suppression is a visibility change, not a removal.
    pub fn detach_from(&self, index: usize) -> Vec<Chip> {
        let mut entries = self.entries.borrow_mut();
        if index >= entries.len() {
            return Vec::new();
        }
        entries.split_off(index).into_values().collect()
    }

    /// Re-appends previously detached chips, again without lifecycle events.
    pub fn attach(&self, chips: Vec<Chip>) {
        let mut entries = self.entries.borrow_mut();
        for chip in chips {
            let handle = self.allocate_handle();
            entries.insert(handle, chip);
        }
    }

    /// Ordered copy of the contents for persistence.
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(self.chips())
    }

    /// Replaces the contents from a snapshot. Restored chips fire
    /// `on_chip_added` like any other insert; the prior contents leave
    /// silently.
    pub fn restore(&self, snapshot: &FieldSnapshot) {
        self.entries.borrow_mut().clear();
        log::debug!("restoring {} chips from snapshot", snapshot.len());
        for chip in snapshot.chips() {
            self.add(chip.clone());
        }
    }

    fn allocate_handle(&self) -> ChipHandle {
        let next = self.next_handle.get();
        self.next_handle.set(next + 1);
        ChipHandle(next)
    }

    /// Queues the event and drains the queue unless a dispatch is already
    /// running further up the stack; that outer drain will pick it up,
    /// keeping delivery in mutation order even under reentrant mutation.
    ///
    /// A panicking listener loses the remaining queued events of its
    /// dispatch, but the collection stays usable: the guard resets the
    /// in-flight state on unwind.
    fn emit(&self, event: ChipEvent) {
        struct DispatchGuard<'a>(&'a ChipCollection);

        impl Drop for DispatchGuard<'_> {
            fn drop(&mut self) {
                self.0.pending_events.borrow_mut().clear();
                self.0.dispatching.set(false);
            }
        }

        self.pending_events.borrow_mut().push_back(event);
        if self.dispatching.get() {
            return;
        }
        self.dispatching.set(true);
        let _guard = DispatchGuard(self);
        loop {
            let next = self.pending_events.borrow_mut().pop_front();
            let Some(event) = next else { break };
            let listener = self.listener.borrow().clone();
            if let Some(listener) = listener {
                match &event {
                    ChipEvent::Added(chip) => listener.borrow_mut().on_chip_added(chip),
                    ChipEvent::Removed(chip) => listener.borrow_mut().on_chip_removed(chip),
                }
            }
        }
    }
}

