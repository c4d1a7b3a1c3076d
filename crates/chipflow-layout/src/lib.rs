//! Flow layout contracts & line packing engine for Chipflow

mod axis;
mod gravity;
mod item;
mod line;
mod measure;
mod solver;

pub use axis::*;
pub use gravity::*;
pub use item::*;
pub use line::*;
pub use measure::*;
pub use solver::*;

pub mod prelude {
    pub use crate::axis::Axis;
    pub use crate::gravity::{CrossGravity, Gravity, MainGravity};
    pub use crate::item::{ItemKind, ItemMetrics};
    pub use crate::measure::MeasureMode;
    pub use crate::solver::{FlowConfig, LayoutResult, LayoutSolver};
}
