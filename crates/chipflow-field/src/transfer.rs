//! Cross-container move protocol for drag-and-drop.

use chipflow_core::{ChipError, ChipHandle};

use crate::{ChipContainer, ChipField};

/// Moves one chip between (or within) chip fields.
///
/// The move is not transactional: the source removal and target insert fire
/// their listener notifications separately, and if a listener panics in
/// between, the source-side removal stands. Pre-validation keeps the abort
/// path mutation-free.
pub struct TransferCoordinator;

impl TransferCoordinator {
    /// Removes `handle`'s chip from `source` and inserts it at `index` in
    /// `target`, clamped to `[0, target.len()]`. A drop that resolves onto
    /// the input slot lands immediately before it, i.e. at the end of the
    /// committed chips.
    ///
    /// A collapsed target is force-expanded first so the drop position is
    /// visible. Dropping a chip back onto its own position is a complete
    /// no-op: no mutation, no events. Otherwise exactly one removed and one
    /// added notification fire, on the source and target listeners
    /// respectively, also for same-field reordering.
    ///
    /// Returns the chip's handle in the target collection.
    pub fn move_chip(
        source: &ChipField,
        handle: ChipHandle,
        target: &ChipField,
        index: usize,
    ) -> Result<ChipHandle, ChipError> {
        let source_index = source
            .collection()
            .index_of_handle(handle)
            .ok_or(ChipError::HandleNotFound { handle })?;

        if target.is_collapsed() {
            target.force_expand();
        }

        // Within one field the insert happens after the removal, so the
        // landing position is `index` clamped to the shrunken list. A drop
        // that lands back on the chip's own slot, including one past the
        // last chip onto the input slot, changes nothing.
        let same_field = source.id() == target.id();
        if same_field && index.min(source.collection().len() - 1) == source_index {
            return Ok(handle);
        }

        let chip = source.collection().remove_by_handle(handle)?;
        let insert_at = index.min(target.collection().len());
        log::trace!(
            "moved {} from {}[{}] to {}[{}]",
            chip.id,
            source.id(),
            source_index,
            target.id(),
            insert_at
        );
        target.collection().add_at(insert_at, chip)
    }
}
