/// The wrapping direction of a flow container.
///
/// The main axis is where items are packed and lines wrap; the cross axis
/// is where lines stack. All packing code works on abstract length/thickness
/// and maps to x/y only at the edges.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Axis {
    /// Items flow left to right, lines stack top to bottom.
    #[default]
    Horizontal,

    /// Items flow top to bottom, lines stack left to right.
    Vertical,
}

impl Axis {
    /// Returns the opposite axis.
    #[inline]
    pub fn cross_axis(self) -> Self {
        match self {
            Axis::Horizontal => Axis::Vertical,
            Axis::Vertical => Axis::Horizontal,
        }
    }

    /// Returns true if this is the horizontal axis.
    #[inline]
    pub fn is_horizontal(self) -> bool {
        matches!(self, Axis::Horizontal)
    }

    /// Returns true if this is the vertical axis.
    #[inline]
    pub fn is_vertical(self) -> bool {
        matches!(self, Axis::Vertical)
    }
}
