//! Chip, metrics, and measurer fixtures.

use std::rc::Rc;

use chipflow_core::Chip;
use chipflow_field::{ChipField, FieldConfig, ItemMeasurer};
use chipflow_layout::ItemMetrics;

/// A chip labeled `label` with a derived info address.
pub fn chip(label: &str) -> Chip {
    Chip::new(label, format!("{label}@example.com"))
}

/// Chips for each label, in order.
pub fn chips(labels: &[&str]) -> Vec<Chip> {
    labels.iter().map(|label| chip(label)).collect()
}

/// A 24-thick chip item of the given length.
pub fn metrics(length: f32) -> ItemMetrics {
    ItemMetrics::new(length, 24.0)
}

/// Measures every chip to the same fixed size, whatever its label.
#[derive(Debug, Clone, Copy)]
pub struct FixedMeasurer {
    pub chip: (f32, f32),
    pub input_slot: (f32, f32),
    pub indicator: (f32, f32),
}

impl Default for FixedMeasurer {
    fn default() -> Self {
        Self {
            chip: (40.0, 24.0),
            input_slot: (20.0, 24.0),
            indicator: (24.0, 24.0),
        }
    }
}

impl ItemMeasurer for FixedMeasurer {
    fn measure_chip(&self, _chip: &Chip) -> (f32, f32) {
        self.chip
    }

    fn measure_input_slot(&self, _pending_text: &str) -> (f32, f32) {
        self.input_slot
    }

    fn measure_indicator(&self, _label: &str) -> (f32, f32) {
        self.indicator
    }
}

/// Length proportional to the label's character count, like a monospace
/// text measurement pass.
#[derive(Debug, Clone, Copy)]
pub struct LabelWidthMeasurer {
    pub glyph_width: f32,
    pub thickness: f32,
}

impl Default for LabelWidthMeasurer {
    fn default() -> Self {
        Self {
            glyph_width: 8.0,
            thickness: 24.0,
        }
    }
}

impl LabelWidthMeasurer {
    fn text_width(&self, text: &str) -> f32 {
        text.chars().count() as f32 * self.glyph_width
    }
}

impl ItemMeasurer for LabelWidthMeasurer {
    fn measure_chip(&self, chip: &Chip) -> (f32, f32) {
        (self.text_width(&chip.label), self.thickness)
    }

    fn measure_input_slot(&self, pending_text: &str) -> (f32, f32) {
        (self.text_width(pending_text).max(20.0), self.thickness)
    }

    fn measure_indicator(&self, label: &str) -> (f32, f32) {
        (self.text_width(label), self.thickness)
    }
}

/// A field wired to a [`FixedMeasurer`].
pub fn field(config: FieldConfig) -> ChipField {
    ChipField::new(config, Rc::new(FixedMeasurer::default()))
}

/// A field with `labels` already committed, measured by a [`FixedMeasurer`].
pub fn field_with(config: FieldConfig, labels: &[&str]) -> ChipField {
    let field = field(config);
    for label in labels {
        field.collection().add(chip(label));
    }
    field
}
