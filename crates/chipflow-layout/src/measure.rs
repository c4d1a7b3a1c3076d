//! Container size resolution against a measurement constraint.

/// How a container constraint interacts with measured content size.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MeasureMode {
    /// The container must be exactly the constrained size.
    Exactly,
    /// The container may be any size up to the constraint.
    AtMost,
    /// No constraint; the container takes its content size.
    #[default]
    Unspecified,
}

impl MeasureMode {
    /// Resolves the final container size on one axis.
    pub fn resolve(self, constraint: f32, content: f32) -> f32 {
        match self {
            MeasureMode::Exactly => constraint,
            MeasureMode::AtMost => content.min(constraint),
            MeasureMode::Unspecified => content,
        }
    }

    /// Returns true when line fitting against the constraint is meaningful.
    #[inline]
    pub fn is_constrained(self) -> bool {
        !matches!(self, MeasureMode::Unspecified)
    }
}
