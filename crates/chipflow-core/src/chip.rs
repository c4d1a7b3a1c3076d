//! The chip value type and its identifiers.

use std::fmt;
use std::sync::atomic::{AtomicU64, Ordering};

use rustc_hash::FxHashSet;

static NEXT_CHIP_ID: AtomicU64 = AtomicU64::new(1);

/// Opaque identity of a chip value. Stable across collection moves, so a
/// chip keeps its id when dragged between containers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ChipId(pub u64);

impl ChipId {
    /// Allocates a fresh process-unique id.
    pub fn next() -> Self {
        ChipId(NEXT_CHIP_ID.fetch_add(1, Ordering::Relaxed))
    }
}

impl fmt::Display for ChipId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "chip#{}", self.0)
    }
}

/// Set of chip ids, e.g. the hidden chips of a collapsed container.
pub type ChipIdSet = FxHashSet<ChipId>;

/// Identity of one entry inside a [`crate::ChipCollection`]. Allocated by
/// the collection on insert; a transferred chip gets a new handle in the
/// target collection.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ChipHandle(pub(crate) u64);

impl fmt::Display for ChipHandle {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "handle#{}", self.0)
    }
}

/// Opaque reference to an avatar image resource, resolved by the UI layer.
#[derive(Debug, Clone, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct AvatarRef(pub String);

/// One removable token, e.g. an email recipient.
#[derive(Debug, Clone, PartialEq)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Chip {
    pub id: ChipId,
    pub label: String,
    pub info: Option<String>,
    pub avatar: Option<AvatarRef>,
    /// True when the chip came from an autocomplete suggestion rather than
    /// free-typed text.
    pub auto_completed: bool,
}

impl Chip {
    pub fn new(label: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            id: ChipId::next(),
            label: label.into(),
            info: Some(info.into()),
            avatar: None,
            auto_completed: false,
        }
    }

    /// A chip with only a label, no secondary info.
    pub fn labeled(label: impl Into<String>) -> Self {
        Self {
            id: ChipId::next(),
            label: label.into(),
            info: None,
            avatar: None,
            auto_completed: false,
        }
    }

    pub fn with_id(id: ChipId, label: impl Into<String>, info: impl Into<String>) -> Self {
        Self {
            id,
            ..Self::new(label, info)
        }
    }

    pub fn with_avatar(mut self, avatar: AvatarRef) -> Self {
        self.avatar = Some(avatar);
        self
    }

    pub fn auto_completed(mut self, auto_completed: bool) -> Self {
        self.auto_completed = auto_completed;
        self
    }
}
