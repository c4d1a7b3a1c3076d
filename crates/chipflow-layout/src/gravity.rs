//! Placement of lines and items within leftover space.

/// Placement along the main (wrapping) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MainGravity {
    /// Pack against the leading edge.
    #[default]
    Start,
    /// Center the packed run in the leftover space.
    Center,
    /// Pack against the trailing edge.
    End,
    /// Stretch items to consume the leftover space.
    Fill,
}

impl MainGravity {
    /// Offset of the packed run inside `leftover` extra space.
    ///
    /// `Fill` never offsets; its leftover is consumed by item expansion.
    pub fn align(self, leftover: f32) -> f32 {
        match self {
            MainGravity::Start | MainGravity::Fill => 0.0,
            MainGravity::Center => (leftover / 2.0).max(0.0),
            MainGravity::End => leftover.max(0.0),
        }
    }
}

/// Placement along the cross (stacking) axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CrossGravity {
    #[default]
    Start,
    Center,
    End,
    /// Stretch to the full cross-axis extent.
    Fill,
}

impl CrossGravity {
    /// Offset of a `size`-thick item inside `available` space.
    pub fn align(self, available: f32, size: f32) -> f32 {
        match self {
            CrossGravity::Start | CrossGravity::Fill => 0.0,
            CrossGravity::Center => ((available - size) / 2.0).max(0.0),
            CrossGravity::End => (available - size).max(0.0),
        }
    }

    #[inline]
    pub fn is_fill(self) -> bool {
        matches!(self, CrossGravity::Fill)
    }
}

/// Combined main- and cross-axis placement.
///
/// Replaces a platform gravity bitmask with two small enums; a container
/// carries one `Gravity`, items may override the cross-axis half.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Gravity {
    pub main: MainGravity,
    pub cross: CrossGravity,
}

impl Gravity {
    pub const START: Gravity = Gravity {
        main: MainGravity::Start,
        cross: CrossGravity::Start,
    };

    pub fn new(main: MainGravity, cross: CrossGravity) -> Self {
        Self { main, cross }
    }
}
