//! Greedy packing of measured items into lines.

use smallvec::SmallVec;

use crate::{Axis, ItemMetrics};

/// Floor for the auto-fill input slot so it never shrinks to nothing.
pub const INPUT_SLOT_MIN_LENGTH: f32 = 20.0;

/// Fraction of the container length the input slot content may reach before
/// it wraps to its own line instead of squeezing onto the current one.
const INPUT_SLOT_WRAP_FRACTION: f32 = 1.0 / 5.0;

/// One item with its assigned geometry inside a [`Line`].
#[derive(Debug, Clone, PartialEq)]
pub struct PlacedItem {
    pub metrics: ItemMetrics,
    /// Main-axis offset of the content edge, relative to the line start.
    pub inline_offset: f32,
    /// Cross-axis offset of the content edge, relative to the line start.
    pub cross_offset: f32,
    /// Final main-axis size, after weight redistribution.
    pub length: f32,
    /// Final cross-axis size, after fill gravity.
    pub thickness: f32,
}

impl PlacedItem {
    fn new(metrics: ItemMetrics) -> Self {
        let length = metrics.length;
        let thickness = metrics.thickness;
        Self {
            metrics,
            inline_offset: 0.0,
            cross_offset: 0.0,
            length,
            thickness,
        }
    }

    /// Horizontal offset within the line, mapped by orientation.
    pub fn x(&self, orientation: Axis) -> f32 {
        if orientation.is_horizontal() {
            self.inline_offset
        } else {
            self.cross_offset
        }
    }

    /// Vertical offset within the line, mapped by orientation.
    pub fn y(&self, orientation: Axis) -> f32 {
        if orientation.is_horizontal() {
            self.cross_offset
        } else {
            self.inline_offset
        }
    }
}

/// One committed row (or column, in vertical orientation) of packed items.
#[derive(Debug, Clone, PartialEq)]
pub struct Line {
    pub items: SmallVec<[PlacedItem; 8]>,
    /// Main-axis extent of the packed run, margins included.
    pub line_length: f32,
    /// Cross-axis extent, the max over items of their outer thickness.
    pub line_thickness: f32,
    /// Main-axis offset of the line, set by gravity.
    pub start_length: f32,
    /// Cumulative cross-axis offset of the lines before this one.
    pub start_thickness: f32,
}

impl Line {
    pub(crate) fn new(start_thickness: f32) -> Self {
        Self {
            items: SmallVec::new(),
            line_length: 0.0,
            line_thickness: 0.0,
            start_length: 0.0,
            start_thickness,
        }
    }

    pub fn len(&self) -> usize {
        self.items.len()
    }

    pub fn is_empty(&self) -> bool {
        self.items.is_empty()
    }

    /// Horizontal offset of the line, mapped by orientation.
    pub fn x(&self, orientation: Axis) -> f32 {
        if orientation.is_horizontal() {
            self.start_length
        } else {
            self.start_thickness
        }
    }

    /// Vertical offset of the line, mapped by orientation.
    pub fn y(&self, orientation: Axis) -> f32 {
        if orientation.is_horizontal() {
            self.start_thickness
        } else {
            self.start_length
        }
    }

    fn trailing_margin(&self) -> f32 {
        self.items
            .last()
            .map(|placed| placed.metrics.margin_end)
            .unwrap_or(0.0)
    }

    /// Line length if `item` were appended. Adjacent margins collapse to the
    /// larger of the two.
    pub(crate) fn length_with(&self, item: &ItemMetrics) -> f32 {
        if self.items.is_empty() {
            return item.outer_length();
        }
        let trailing = self.trailing_margin();
        let gap = trailing.max(item.margin_start);
        self.line_length - trailing + gap + item.length + item.margin_end
    }

    fn push(&mut self, item: ItemMetrics) {
        self.line_length = self.length_with(&item);
        self.line_thickness = self.line_thickness.max(item.outer_thickness());
        self.items.push(PlacedItem::new(item));
    }
}

/// Packs an ordered item sequence into lines under a max-length constraint.
///
/// Packing is order preserving and never drops an item: an item that cannot
/// fit even on an empty line is committed alone, overflowing.
#[derive(Debug, Clone)]
pub struct LineBuilder {
    max_length: f32,
    check_fit: bool,
    input_slot_min_length: f32,
}

impl LineBuilder {
    pub fn new(max_length: f32) -> Self {
        Self {
            max_length,
            check_fit: true,
            input_slot_min_length: INPUT_SLOT_MIN_LENGTH,
        }
    }

    /// Disables fit checking; every item joins the current line unless it
    /// forces a new one. Used when the length constraint is unspecified.
    pub fn check_fit(mut self, check_fit: bool) -> Self {
        self.check_fit = check_fit;
        self
    }

    pub fn input_slot_min_length(mut self, min_length: f32) -> Self {
        self.input_slot_min_length = min_length;
        self
    }

    /// Packs `items` in order. Always returns at least one (possibly empty)
    /// line so downstream first-line queries stay index-safe.
    pub fn pack(&self, items: &[ItemMetrics]) -> Vec<Line> {
        let mut lines = vec![Line::new(0.0)];

        for metrics in items {
            let mut item = metrics.clone();

            let wrap = {
                let current = lines.last().expect("pack keeps one open line");
                item.force_new_line
                    || (self.check_fit && !current.is_empty() && !self.fits(current, &item))
            };
            if wrap && !lines.last().expect("pack keeps one open line").is_empty() {
                let start = {
                    let last = lines.last().expect("pack keeps one open line");
                    last.start_thickness + last.line_thickness
                };
                lines.push(Line::new(start));
            }

            let current = lines.last_mut().expect("pack keeps one open line");
            if item.is_input_slot() && self.max_length.is_finite() {
                // The auto-fill slot consumes whatever is left on its line.
                let occupied = current.length_with(&ItemMetrics {
                    length: 0.0,
                    ..item.clone()
                });
                let remaining = self.max_length - occupied;
                item.length = item
                    .length
                    .min(remaining)
                    .max(self.input_slot_min_length);
            }
            if self.check_fit && current.is_empty() && item.outer_length() > self.max_length {
                log::warn!(
                    "item of length {:.1} exceeds max line length {:.1}; placing it alone",
                    item.outer_length(),
                    self.max_length
                );
            }
            current.push(item);
        }

        lines
    }

    fn fits(&self, line: &Line, item: &ItemMetrics) -> bool {
        if item.is_input_slot() {
            // The slot shrinks to the remaining space, so it fits unless its
            // intrinsic content has grown past a fifth of the container.
            return item.length <= self.max_length * INPUT_SLOT_WRAP_FRACTION;
        }
        line.length_with(item) <= self.max_length
    }
}

#[cfg(test)]
#[path = "tests/line_tests.rs"]
mod tests;
