//! Pending-text commit seam.

use chipflow_core::Chip;

/// Decides whether pending text becomes a chip.
///
/// Real validation (address formats, directory lookups) belongs to the
/// embedding layer; the core only needs the accept/reject seam.
pub trait CommitPolicy {
    fn commit(&self, text: &str) -> Option<Chip>;
}

/// Accepts any text that is non-empty after trimming, labeling the chip
/// with the trimmed text.
#[derive(Debug, Clone, Copy, Default)]
pub struct TrimmedNonEmpty;

impl CommitPolicy for TrimmedNonEmpty {
    fn commit(&self, text: &str) -> Option<Chip> {
        let trimmed = text.trim();
        if trimmed.is_empty() {
            return None;
        }
        Some(Chip::labeled(trimmed))
    }
}
