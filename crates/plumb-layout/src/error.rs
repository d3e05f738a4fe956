//! Layout pass failures.

use plumb_core::geometry::Axis;
use thiserror::Error;

use crate::container::ElementId;

/// Why a layout pass could not complete.
///
/// None of these are recoverable within the pass: each one points at a bug in
/// the declared constraints or in the container driving the solvers.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Error)]
pub enum LayoutError {
    #[error("{axis} solver is not attached to an element")]
    Detached { axis: Axis },

    #[error("element {element} is not owned by this container")]
    UnknownElement { element: ElementId },

    #[error("{axis} relative solver of element {element} has no baseline")]
    BaselineUnsupported { element: ElementId, axis: Axis },

    #[error("measuring element {element} did not report a {axis} range")]
    UnresolvedRange { element: ElementId, axis: Axis },

    #[error("constraint cycle on the {axis} axis of element {element}")]
    ConstraintCycle { element: ElementId, axis: Axis },

    #[error("element {element} was asked to measure during its own measurement")]
    MeasureCycle { element: ElementId },

    #[error("container {axis} size depends on itself")]
    SizeCycle { axis: Axis },
}

impl LayoutError {
    /// Whether this error was raised by cycle detection.
    pub const fn is_cycle(&self) -> bool {
        matches!(
            self,
            Self::ConstraintCycle { .. } | Self::MeasureCycle { .. } | Self::SizeCycle { .. }
        )
    }
}
