//! The chip field: collection + collapse controller + measurement seam.

use std::cell::{Cell, RefCell};
use std::rc::Rc;

use chipflow_core::{
    Chip, ChipCollection, ChipError, ChipHandle, ChipIdSet, FieldSnapshot, SharedChipListener,
};
use chipflow_layout::{ItemMetrics, LayoutResult, LayoutSolver};

use crate::{
    ChipContainer, CollapseController, CommitPolicy, ContainerId, FieldCommand, FieldConfig,
    ItemMeasurer, TransferCoordinator, TrimmedNonEmpty,
};

/// One flow container of chips plus the trailing input slot.
///
/// Single-threaded: all mutation happens on the event thread via interior
/// mutability, which lets a field appear as both source and target of the
/// same drag transfer.
pub struct ChipField {
    id: ContainerId,
    config: FieldConfig,
    chips: ChipCollection,
    collapse: CollapseController,
    measurer: Rc<dyn ItemMeasurer>,
    commit_policy: Rc<dyn CommitPolicy>,
    pending_text: RefCell<String>,
    last_length: Cell<f32>,
    last_line_count: Cell<usize>,
}

impl ChipField {
    pub fn new(config: FieldConfig, measurer: Rc<dyn ItemMeasurer>) -> Self {
        let collapse = CollapseController::new(config.collapsible);
        Self {
            id: ContainerId::next(),
            config,
            chips: ChipCollection::new(),
            collapse,
            measurer,
            commit_policy: Rc::new(TrimmedNonEmpty),
            pending_text: RefCell::new(String::new()),
            last_length: Cell::new(f32::INFINITY),
            last_line_count: Cell::new(1),
        }
    }

    pub fn with_commit_policy(mut self, policy: Rc<dyn CommitPolicy>) -> Self {
        self.commit_policy = policy;
        self
    }

    pub fn id(&self) -> ContainerId {
        self.id
    }

    pub fn config(&self) -> &FieldConfig {
        &self.config
    }

    /// The visible entries. Hidden (collapsed) chips live in the collapse
    /// state until expanded.
    pub fn collection(&self) -> &ChipCollection {
        &self.chips
    }

    pub fn set_listener(&self, listener: SharedChipListener) {
        self.chips.set_listener(listener);
    }

    pub fn pending_text(&self) -> String {
        self.pending_text.borrow().clone()
    }

    pub fn set_pending_text(&self, text: impl Into<String>) {
        *self.pending_text.borrow_mut() = text.into();
    }

    pub fn hidden_ids(&self) -> ChipIdSet {
        self.collapse.hidden_ids()
    }

    pub fn hidden_count(&self) -> usize {
        self.collapse.hidden_count()
    }

    /// The "+N" indicator label, present only while collapsed with hidden
    /// chips. Activating the indicator force-expands the field.
    pub fn indicator_label(&self) -> Option<String> {
        let hidden = self.collapse.hidden_count();
        (self.collapse.is_collapsed() && hidden > 0).then(|| format!("+{hidden}"))
    }

    /// Measures every visible item and solves the layout for a container of
    /// `max_length`. The result also drives collapse decisions, so the
    /// length is remembered for internally triggered passes.
    pub fn measure(&self, max_length: f32) -> LayoutResult {
        self.last_length.set(max_length);
        let items = self.layout_items();
        let result = LayoutSolver::solve(&items, &self.config.flow_config(max_length));
        self.last_line_count.set(result.line_count());
        result
    }

    /// Line count of the most recent measure pass.
    pub fn last_line_count(&self) -> usize {
        self.last_line_count.get()
    }

    /// Ordered snapshot of the full contents for persistence. Hidden chips
    /// are included; a restored field starts expanded.
    pub fn snapshot(&self) -> FieldSnapshot {
        FieldSnapshot::new(ChipContainer::chips(self))
    }

    pub fn restore(&self, snapshot: &FieldSnapshot) {
        self.collapse.force_expand(&self.chips);
        self.chips.restore(snapshot);
    }

    /// Applies one typed user command.
    pub fn dispatch(&self, command: FieldCommand) -> Result<(), ChipError> {
        match command {
            FieldCommand::CommitText(text) => {
                self.commit_text(&text);
                Ok(())
            }
            FieldCommand::DeleteBackward => {
                if self.pending_text.borrow().is_empty() && !self.chips.is_empty() {
                    self.chips.remove_at(self.chips.len() - 1)?;
                }
                Ok(())
            }
            FieldCommand::FocusGained => {
                if self.config.collapsible {
                    self.collapse.expand(&self.chips)?;
                }
                Ok(())
            }
            FieldCommand::FocusLost => {
                let pending = std::mem::take(&mut *self.pending_text.borrow_mut());
                if !pending.trim().is_empty() {
                    self.commit_text(&pending);
                }
                if self.config.collapsible {
                    let layout = self.measure(self.last_length.get());
                    if layout.line_count() > 1 {
                        self.collapse.collapse(&self.chips, &layout)?;
                    }
                }
                Ok(())
            }
            FieldCommand::ActivateIndicator | FieldCommand::LongPress => {
                if self.collapse.is_collapsed() {
                    self.collapse.force_expand(&self.chips);
                }
                Ok(())
            }
            FieldCommand::Drop {
                source,
                handle,
                index,
            } => {
                if source == self.id {
                    TransferCoordinator::move_chip(self, handle, self, index).map(|_| ())
                } else {
                    log::warn!(
                        "drop from {source} into {}: cross-container moves go through TransferCoordinator",
                        self.id
                    );
                    Ok(())
                }
            }
        }
    }

    /// Runs `text` through the commit policy. Accepted text becomes a chip
    /// appended before the input slot; rejected text stays pending.
    fn commit_text(&self, text: &str) {
        match self.commit_policy.commit(text) {
            Some(chip) => {
                self.pending_text.borrow_mut().clear();
                self.chips.add(chip);
            }
            None => {
                *self.pending_text.borrow_mut() = text.to_string();
            }
        }
    }

    /// Builds the item sequence for one layout pass: visible chips, then
    /// either the "+N" indicator (collapsed with hidden chips) or the
    /// input slot.
    fn layout_items(&self) -> Vec<ItemMetrics> {
        let spacing = self.config.chip_spacing;
        let mut items: Vec<ItemMetrics> = self
            .chips
            .chips()
            .iter()
            .map(|chip| {
                let (length, thickness) = self.measurer.measure_chip(chip);
                ItemMetrics::new(length, thickness).with_margins(0.0, spacing, 0.0, spacing)
            })
            .collect();

        if let Some(label) = self.indicator_label() {
            let (length, thickness) = self.measurer.measure_indicator(&label);
            items.push(
                ItemMetrics::indicator(length, thickness).with_margins(0.0, spacing, 0.0, spacing),
            );
        } else {
            let (length, thickness) = self
                .measurer
                .measure_input_slot(&self.pending_text.borrow());
            items.push(ItemMetrics::input_slot(length, thickness));
        }
        items
    }
}

impl ChipContainer for ChipField {
    fn collapse(&self) -> Result<(), ChipError> {
        if !self.config.collapsible {
            return Err(ChipError::NotCollapsible);
        }
        if self.chips.is_empty() {
            return Ok(());
        }
        let layout = self.measure(self.last_length.get());
        self.collapse.collapse(&self.chips, &layout)
    }

    fn expand(&self) -> Result<(), ChipError> {
        if !self.config.collapsible {
            return Err(ChipError::NotCollapsible);
        }
        self.collapse.expand(&self.chips)
    }

    fn force_expand(&self) {
        self.collapse.force_expand(&self.chips);
    }

    fn add_chip_at(&self, index: usize, chip: Chip) -> Result<ChipHandle, ChipError> {
        self.chips.add_at(index, chip)
    }

    fn remove_chip_at(&self, index: usize) -> Result<Chip, ChipError> {
        self.chips.remove_at(index)
    }

    fn chips(&self) -> Vec<Chip> {
        let mut all = self.chips.chips();
        all.extend(self.collapse.state().hidden().iter().cloned());
        all
    }

    fn is_collapsed(&self) -> bool {
        self.collapse.is_collapsed()
    }
}
