//! Per-item geometry descriptors consumed by the packing pass.

use crate::Gravity;

/// What a packed item represents to the widget layer.
///
/// The input slot gets auto-fill sizing during packing; the indicator is the
/// synthetic "+N" token a collapsed container appends.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ItemKind {
    #[default]
    Chip,
    InputSlot,
    Indicator,
}

/// Geometry of one item for a single layout pass.
///
/// Metrics are rebuilt every pass from the embedder's measurements; they
/// carry no identity beyond the pass.
#[derive(Debug, Clone, PartialEq)]
pub struct ItemMetrics {
    /// Measured main-axis size.
    pub length: f32,
    /// Measured cross-axis size.
    pub thickness: f32,
    pub margin_start: f32,
    pub margin_end: f32,
    pub margin_before: f32,
    pub margin_after: f32,
    /// Start a new line regardless of remaining space.
    pub force_new_line: bool,
    /// Cross-axis placement override; `None` uses the container gravity.
    pub gravity: Option<Gravity>,
    /// Share of leftover line space; `None` uses the configured default.
    pub weight: Option<f32>,
    pub kind: ItemKind,
}

impl ItemMetrics {
    pub fn new(length: f32, thickness: f32) -> Self {
        Self {
            length,
            thickness,
            margin_start: 0.0,
            margin_end: 0.0,
            margin_before: 0.0,
            margin_after: 0.0,
            force_new_line: false,
            gravity: None,
            weight: None,
            kind: ItemKind::Chip,
        }
    }

    pub fn input_slot(length: f32, thickness: f32) -> Self {
        Self {
            kind: ItemKind::InputSlot,
            ..Self::new(length, thickness)
        }
    }

    pub fn indicator(length: f32, thickness: f32) -> Self {
        Self {
            kind: ItemKind::Indicator,
            ..Self::new(length, thickness)
        }
    }

    pub fn with_margins(mut self, start: f32, end: f32, before: f32, after: f32) -> Self {
        self.margin_start = start;
        self.margin_end = end;
        self.margin_before = before;
        self.margin_after = after;
        self
    }

    pub fn with_weight(mut self, weight: f32) -> Self {
        self.weight = Some(weight);
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = Some(gravity);
        self
    }

    pub fn on_new_line(mut self) -> Self {
        self.force_new_line = true;
        self
    }

    /// Main-axis margin total.
    #[inline]
    pub fn spacing_length(&self) -> f32 {
        self.margin_start + self.margin_end
    }

    /// Cross-axis margin total.
    #[inline]
    pub fn spacing_thickness(&self) -> f32 {
        self.margin_before + self.margin_after
    }

    /// Main-axis extent including both margins.
    #[inline]
    pub fn outer_length(&self) -> f32 {
        self.length + self.spacing_length()
    }

    /// Cross-axis extent including both margins.
    #[inline]
    pub fn outer_thickness(&self) -> f32 {
        self.thickness + self.spacing_thickness()
    }

    #[inline]
    pub fn is_input_slot(&self) -> bool {
        self.kind == ItemKind::InputSlot
    }
}

impl Default for ItemMetrics {
    fn default() -> Self {
        Self::new(0.0, 0.0)
    }
}
