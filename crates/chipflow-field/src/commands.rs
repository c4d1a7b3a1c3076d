//! Typed input commands.
//!
//! UI events (keystrokes, focus changes, drops) arrive as plain commands
//! dispatched to [`crate::ChipField::dispatch`]; the event source never
//! reaches into field state directly.

use chipflow_core::ChipHandle;

use crate::ContainerId;

/// One user action against a chip field.
#[derive(Debug, Clone, PartialEq)]
pub enum FieldCommand {
    /// The user finished a token (space, comma, IME done). The commit
    /// policy decides whether it becomes a chip; rejected text stays
    /// pending.
    CommitText(String),
    /// Backspace with the caret at the start of the input slot: removes the
    /// last chip when no text is pending.
    DeleteBackward,
    /// The input slot gained focus; a collapsed field expands.
    FocusGained,
    /// The input slot lost focus; pending text is committed and a
    /// multi-line field collapses.
    FocusLost,
    /// The "+N" indicator was activated.
    ActivateIndicator,
    /// A chip or the indicator was long-pressed.
    LongPress,
    /// A dragged chip was dropped at `index`. Same-container drops reorder
    /// in place; cross-container drops are routed by the embedder through
    /// [`crate::TransferCoordinator`].
    Drop {
        source: ContainerId,
        handle: ChipHandle,
        index: usize,
    },
}
