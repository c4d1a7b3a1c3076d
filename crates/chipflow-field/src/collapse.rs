//! Collapse/expand state machine over the first computed line.

use std::cell::RefCell;

use chipflow_core::{Chip, ChipCollection, ChipError, ChipIdSet};
use chipflow_layout::{ItemKind, LayoutResult};

/// Visible/hidden partition of a collapsed container.
///
/// Hidden chips keep their original relative order so expanding restores
/// exactly the pre-collapse sequence.
#[derive(Debug, Clone, Default)]
pub struct CollapsedState {
    collapsed: bool,
    hidden: Vec<Chip>,
}

impl CollapsedState {
    pub fn is_collapsed(&self) -> bool {
        self.collapsed
    }

    pub fn hidden(&self) -> &[Chip] {
        &self.hidden
    }

    pub fn hidden_count(&self) -> usize {
        self.hidden.len()
    }

    pub fn hidden_ids(&self) -> ChipIdSet {
        self.hidden.iter().map(|chip| chip.id).collect()
    }
}

/// Drives the `Expanded <-> Collapsed` transitions of one container.
///
/// Collapse detaches everything past the kept prefix of the first line;
/// the detach/attach pair fires no chip lifecycle events because hiding is
/// a presentation change, not a removal.
#[derive(Debug, Default)]
pub struct CollapseController {
    collapsible: bool,
    state: RefCell<CollapsedState>,
}

impl CollapseController {
    pub fn new(collapsible: bool) -> Self {
        Self {
            collapsible,
            state: RefCell::new(CollapsedState::default()),
        }
    }

    pub fn is_collapsible(&self) -> bool {
        self.collapsible
    }

    pub fn is_collapsed(&self) -> bool {
        self.state.borrow().collapsed
    }

    pub fn hidden_count(&self) -> usize {
        self.state.borrow().hidden.len()
    }

    pub fn hidden_ids(&self) -> ChipIdSet {
        self.state.borrow().hidden_ids()
    }

    /// Snapshot of the current partition.
    pub fn state(&self) -> CollapsedState {
        self.state.borrow().clone()
    }

    /// Reduces `chips` to the first line of `layout`. A first line holding
    /// a single chip keeps exactly that chip visible, so a long chip is not
    /// swallowed right after being added. No-op when already collapsed or
    /// when the collection is empty.
    pub fn collapse(
        &self,
        chips: &ChipCollection,
        layout: &LayoutResult,
    ) -> Result<(), ChipError> {
        if !self.collapsible {
            return Err(ChipError::NotCollapsible);
        }
        if self.is_collapsed() || chips.is_empty() {
            return Ok(());
        }

        let first_line_chips = layout
            .lines
            .first()
            .map(|line| {
                line.items
                    .iter()
                    .filter(|placed| placed.metrics.kind == ItemKind::Chip)
                    .count()
            })
            .unwrap_or(0);
        let keep = if first_line_chips <= 1 {
            1
        } else {
            first_line_chips
        };
        let keep = keep.min(chips.len());

        let hidden = chips.detach_from(keep);
        log::debug!("collapse: {keep} chips visible, {} hidden", hidden.len());
        let mut state = self.state.borrow_mut();
        state.collapsed = true;
        state.hidden = hidden;
        Ok(())
    }

    /// No-op unless something is hidden.
    pub fn expand(&self, chips: &ChipCollection) -> Result<(), ChipError> {
        if !self.collapsible {
            return Err(ChipError::NotCollapsible);
        }
        if self.state.borrow().hidden.is_empty() {
            return Ok(());
        }
        self.force_expand(chips);
        Ok(())
    }

    /// Restores every hidden chip in its original relative order and clears
    /// the collapsed flag. Available even on non-collapsible containers:
    /// drag transfer must always be able to reveal its drop target.
    pub fn force_expand(&self, chips: &ChipCollection) {
        let hidden = {
            let mut state = self.state.borrow_mut();
            state.collapsed = false;
            std::mem::take(&mut state.hidden)
        };
        if !hidden.is_empty() {
            log::debug!("expand: restoring {} hidden chips", hidden.len());
            chips.attach(hidden);
        }
    }
}
