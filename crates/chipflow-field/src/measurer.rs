//! Inbound measurement seam.

use chipflow_core::Chip;

/// Owned by the embedding UI layer, which knows text and avatar sizes.
///
/// All results are (length, thickness) on the field's main/cross axes.
pub trait ItemMeasurer {
    /// Size of a committed chip token.
    fn measure_chip(&self, chip: &Chip) -> (f32, f32);

    /// Intrinsic size of the pending-text input slot. The layout pass may
    /// shrink the returned length to the space left on the slot's line.
    fn measure_input_slot(&self, pending_text: &str) -> (f32, f32);

    /// Size of the "+N" count indicator with the given label.
    fn measure_indicator(&self, label: &str) -> (f32, f32);
}
