//! Construction-time configuration of a chip field.

use chipflow_layout::{Axis, FlowConfig, Gravity, MeasureMode, INPUT_SLOT_MIN_LENGTH};

/// Options the embedding layer supplies when building a [`crate::ChipField`].
///
/// Converted into a fresh [`FlowConfig`] on every measure pass; nothing here
/// is cached globally, so fields with different widths coexist.
#[derive(Debug, Clone, PartialEq)]
pub struct FieldConfig {
    pub orientation: Axis,
    pub gravity: Gravity,
    pub weight_default: f32,
    /// Lines counted toward the field's reported thickness; `0` disables.
    pub max_lines: usize,
    pub collapsible: bool,
    /// Clamp on a single chip's main-axis size.
    pub max_chip_length: Option<f32>,
    /// Gap between neighbouring chips, applied as trailing margins.
    pub chip_spacing: f32,
    pub input_slot_min_length: f32,
}

impl Default for FieldConfig {
    fn default() -> Self {
        Self {
            orientation: Axis::Horizontal,
            gravity: Gravity::default(),
            weight_default: 0.0,
            max_lines: 0,
            collapsible: true,
            max_chip_length: None,
            chip_spacing: 8.0,
            input_slot_min_length: INPUT_SLOT_MIN_LENGTH,
        }
    }
}

impl FieldConfig {
    pub fn with_orientation(mut self, orientation: Axis) -> Self {
        self.orientation = orientation;
        self
    }

    pub fn with_gravity(mut self, gravity: Gravity) -> Self {
        self.gravity = gravity;
        self
    }

    pub fn with_weight_default(mut self, weight_default: f32) -> Self {
        self.weight_default = weight_default;
        self
    }

    pub fn with_max_lines(mut self, max_lines: usize) -> Self {
        self.max_lines = max_lines;
        self
    }

    pub fn collapsible(mut self, collapsible: bool) -> Self {
        self.collapsible = collapsible;
        self
    }

    pub fn with_max_chip_length(mut self, max_chip_length: f32) -> Self {
        self.max_chip_length = Some(max_chip_length);
        self
    }

    pub fn with_chip_spacing(mut self, chip_spacing: f32) -> Self {
        self.chip_spacing = chip_spacing;
        self
    }

    /// The per-pass solver configuration for a container of `max_length`.
    pub fn flow_config(&self, max_length: f32) -> FlowConfig {
        FlowConfig {
            orientation: self.orientation,
            max_length,
            max_thickness: f32::INFINITY,
            length_mode: if max_length.is_finite() {
                MeasureMode::AtMost
            } else {
                MeasureMode::Unspecified
            },
            thickness_mode: MeasureMode::Unspecified,
            gravity: self.gravity,
            weight_default: self.weight_default,
            max_lines: self.max_lines,
            max_item_length: self.max_chip_length,
            input_slot_min_length: self.input_slot_min_length,
        }
    }
}
