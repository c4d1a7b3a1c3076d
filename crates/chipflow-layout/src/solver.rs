//! Orchestrates packing, container sizing, and gravity/weight distribution.

use smallvec::SmallVec;

use crate::{
    Axis, CrossGravity, Gravity, ItemKind, ItemMetrics, Line, LineBuilder, MainGravity,
    MeasureMode, INPUT_SLOT_MIN_LENGTH,
};

/// Per-pass configuration for [`LayoutSolver`].
///
/// Passed explicitly on every solve; the solver keeps no cross-pass state,
/// so two containers with different widths never interfere.
#[derive(Debug, Clone, PartialEq)]
pub struct FlowConfig {
    pub orientation: Axis,
    pub max_length: f32,
    pub max_thickness: f32,
    pub length_mode: MeasureMode,
    pub thickness_mode: MeasureMode,
    pub gravity: Gravity,
    /// Weight assumed for items that carry no explicit weight.
    pub weight_default: f32,
    /// Lines counted toward the reported thickness; `0` disables the cap.
    pub max_lines: usize,
    /// Clamp applied to chip lengths before packing.
    pub max_item_length: Option<f32>,
    pub input_slot_min_length: f32,
}

impl Default for FlowConfig {
    fn default() -> Self {
        Self {
            orientation: Axis::Horizontal,
            max_length: f32::INFINITY,
            max_thickness: f32::INFINITY,
            length_mode: MeasureMode::Unspecified,
            thickness_mode: MeasureMode::Unspecified,
            gravity: Gravity::default(),
            weight_default: 0.0,
            max_lines: 0,
            max_item_length: None,
            input_slot_min_length: INPUT_SLOT_MIN_LENGTH,
        }
    }
}

impl FlowConfig {
    pub fn with_orientation(mut self, orientation: Axis) -> Self {
        self.orientation = orientation;
        self
    }

    /// Bounds the main axis at `max_length` without forcing it.
    pub fn with_max_length(mut self, max_length: f32) -> Self {
        self.max_length = max_length;
        self.length_mode = MeasureMode::AtMost;
        self
    }

    /// Fixes the main axis to exactly `length`.
    pub fn with_exact_length(mut self, length: f32) -> Self {
        self.max_length = length;
        self.length_mode = MeasureMode::Exactly;
        self
    }

    pub fn with_max_thickness(mut self, max_thickness: f32, mode: MeasureMode) -> Self {
        self.max_thickness = max_thickness;
        self.thickness_mode = mode;
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

    pub fn with_max_item_length(mut self, max_item_length: f32) -> Self {
        self.max_item_length = Some(max_item_length);
        self
    }
}

/// The solved layout: packed lines plus resolved container dimensions.
#[derive(Debug, Clone, PartialEq)]
pub struct LayoutResult {
    pub lines: Vec<Line>,
    /// Longest line length.
    pub content_length: f32,
    /// Stacked thickness of the counted lines.
    pub content_thickness: f32,
    /// Resolved container main-axis size.
    pub length: f32,
    /// Resolved container cross-axis size.
    pub thickness: f32,
    clipped_lines: usize,
    orientation: Axis,
}

impl LayoutResult {
    pub fn orientation(&self) -> Axis {
        self.orientation
    }

    pub fn line_count(&self) -> usize {
        self.lines.len()
    }

    /// Lines packed beyond the `max_lines` cap. They are positioned but do
    /// not contribute to the reported thickness; rendering may skip them.
    pub fn clipped_line_count(&self) -> usize {
        self.clipped_lines
    }

    pub fn total_width(&self) -> f32 {
        if self.orientation.is_horizontal() {
            self.length
        } else {
            self.thickness
        }
    }

    pub fn total_height(&self) -> f32 {
        if self.orientation.is_horizontal() {
            self.thickness
        } else {
            self.length
        }
    }
}

/// Full layout pass over an item sequence.
///
/// Never fails: overflow degrades to an oversized line, not an error, so a
/// render pass always has something to draw.
pub struct LayoutSolver;

impl LayoutSolver {
    pub fn solve(items: &[ItemMetrics], config: &FlowConfig) -> LayoutResult {
        let mut measured: Vec<ItemMetrics> = items.to_vec();
        if let Some(cap) = config.max_item_length {
            for item in &mut measured {
                if item.kind == ItemKind::Chip && item.length > cap {
                    item.length = cap;
                }
            }
        }

        let mut lines = LineBuilder::new(config.max_length)
            .check_fit(config.length_mode.is_constrained())
            .input_slot_min_length(config.input_slot_min_length)
            .pack(&measured);

        let content_length = lines
            .iter()
            .map(|line| line.line_length)
            .fold(0.0_f32, f32::max);
        let counted = if config.max_lines > 0 {
            lines.len().min(config.max_lines)
        } else {
            lines.len()
        };
        let clipped_lines = lines.len() - counted;
        let content_thickness: f32 = lines[..counted].iter().map(|l| l.line_thickness).sum();

        let length = config.length_mode.resolve(config.max_length, content_length);
        let thickness = config
            .thickness_mode
            .resolve(config.max_thickness, content_thickness);

        Self::stack_lines(&mut lines, counted, thickness, content_thickness, config);
        for line in &mut lines {
            Self::arrange_line(line, length, config);
        }

        LayoutResult {
            lines,
            content_length,
            content_thickness,
            length,
            thickness,
            clipped_lines,
            orientation: config.orientation,
        }
    }

    /// Applies container cross gravity and recomputes line start offsets.
    fn stack_lines(
        lines: &mut [Line],
        counted: usize,
        thickness: f32,
        content_thickness: f32,
        config: &FlowConfig,
    ) {
        let leftover = (thickness - content_thickness).max(0.0);
        let mut shift = 0.0;
        match config.gravity.cross {
            CrossGravity::Fill if counted > 0 && leftover > 0.0 => {
                let share = leftover / counted as f32;
                for line in lines[..counted].iter_mut() {
                    line.line_thickness += share;
                }
            }
            CrossGravity::Center => shift = leftover / 2.0,
            CrossGravity::End => shift = leftover,
            _ => {}
        }

        let mut start = shift;
        for line in lines.iter_mut() {
            line.start_thickness = start;
            start += line.line_thickness;
        }
    }

    /// Distributes leftover length inside one line and assigns item offsets.
    fn arrange_line(line: &mut Line, length: f32, config: &FlowConfig) {
        let leftover = (length - line.line_length).max(0.0);
        let mut start = 0.0;
        if leftover > 0.0 && !line.items.is_empty() {
            let weights: SmallVec<[f32; 8]> = line
                .items
                .iter()
                .map(|placed| {
                    placed
                        .metrics
                        .weight
                        .unwrap_or(config.weight_default)
                        .max(0.0)
                })
                .collect();
            let total_weight: f32 = weights.iter().sum();
            if total_weight > 0.0 {
                for (placed, weight) in line.items.iter_mut().zip(&weights) {
                    placed.length += leftover * (weight / total_weight);
                }
                line.line_length = length;
            } else if config.gravity.main == MainGravity::Fill {
                let share = leftover / line.items.len() as f32;
                for placed in line.items.iter_mut() {
                    placed.length += share;
                }
                line.line_length = length;
            } else {
                start = config.gravity.main.align(leftover);
            }
        }
        line.start_length = start;

        let mut cursor = 0.0;
        let mut prev_margin_end: f32 = 0.0;
        for (index, placed) in line.items.iter_mut().enumerate() {
            if index == 0 {
                cursor = placed.metrics.margin_start;
            } else {
                cursor += prev_margin_end.max(placed.metrics.margin_start);
            }
            placed.inline_offset = cursor;
            cursor += placed.length;
            prev_margin_end = placed.metrics.margin_end;

            let cross = placed
                .metrics
                .gravity
                .map(|gravity| gravity.cross)
                .unwrap_or(config.gravity.cross);
            let available = line.line_thickness - placed.metrics.spacing_thickness();
            if cross.is_fill() {
                placed.thickness = available.max(0.0);
                placed.cross_offset = placed.metrics.margin_before;
            } else {
                placed.cross_offset =
                    placed.metrics.margin_before + cross.align(available, placed.thickness);
            }
        }
    }
}

#[cfg(test)]
#[path = "tests/solver_tests.rs"]
mod tests;
