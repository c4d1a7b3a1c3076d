use crate::ChipHandle;

/// Errors surfaced by the chip collection and container state machine.
///
/// Layout never produces an error; only structural mutations and
/// misconfigured containers do.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ChipError {
    /// Insert index outside `[0, len]`.
    InvalidIndex { index: usize, len: usize },
    /// No entry for the given handle.
    HandleNotFound { handle: ChipHandle },
    /// No entry at the given position.
    PositionNotFound { index: usize },
    /// Collapse or expand was called on a non-collapsible container. This is
    /// an integration error, not a recoverable condition.
    NotCollapsible,
}

impl std::fmt::Display for ChipError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ChipError::InvalidIndex { index, len } => {
                write!(f, "index {index} out of bounds for {len} chips")
            }
            ChipError::HandleNotFound { handle } => {
                write!(f, "no chip entry for {handle}")
            }
            ChipError::PositionNotFound { index } => {
                write!(f, "no chip at position {index}")
            }
            ChipError::NotCollapsible => {
                write!(f, "container does not support collapse")
            }
        }
    }
}

impl std::error::Error for ChipError {}
