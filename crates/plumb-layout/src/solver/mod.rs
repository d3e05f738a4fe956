//! Per-element, per-axis solvers.
//!
//! Layout is always decomposed into two independent one-dimensional problems.
//! Each element owns an [`AxisSolvers`] pair; each solver lazily turns the
//! element's constraints on its axis into concrete edges.

mod relative;

pub use relative::RelativeAxisSolver;

use crate::container::{ElementId, LayoutContainer};
use crate::measure::MeasureSpec;
use crate::LayoutError;

/// Resolves one element's position and size along one axis.
///
/// All queries are lazy and memoized until [`clear`](Self::clear). Queries
/// that need the element's own size trigger
/// [`LayoutContainer::measure_element`] synchronously.
pub trait AxisSolver {
    /// Physical lower edge. Under mirroring this is the logical end.
    ///
    /// Observing a different `mirrored` value than the previous query
    /// invalidates every cached value first.
    fn min(&self, ctx: &dyn LayoutContainer, mirrored: bool) -> Result<i32, LayoutError>;

    /// Midpoint: `start + range / 2` from a start anchor, `end - range / 2`
    /// from an end anchor, with floor halving. Independent of mirroring.
    fn mid(&self, ctx: &dyn LayoutContainer, mirrored: bool) -> Result<i32, LayoutError>;

    /// Physical upper edge. Under mirroring this is the logical start.
    fn max(&self, ctx: &dyn LayoutContainer, mirrored: bool) -> Result<i32, LayoutError>;

    /// Text baseline position. Only baseline-aware solvers support this.
    fn baseline(&self, ctx: &dyn LayoutContainer) -> Result<i32, LayoutError>;

    /// The element's size along this axis, measuring it if needed.
    fn range(&self, ctx: &dyn LayoutContainer) -> Result<i32, LayoutError>;

    /// The size request to hand to the measurement step.
    fn measure_spec(&self, ctx: &dyn LayoutContainer) -> Result<MeasureSpec, LayoutError>;

    /// Bind the solver to the element it positions.
    fn on_attach(&mut self, element: ElementId);

    /// Called by the container once the element has been measured.
    ///
    /// `baseline_range` is the measured baseline offset, when the element has
    /// one.
    fn on_range_resolved(&self, range: i32, baseline_range: Option<i32>);

    /// Forget everything resolved this pass. Idempotent.
    fn clear(&self);

    /// Cached values, without resolving anything.
    fn snapshot(&self) -> ResolvedAxis;
}

/// What a solver has resolved so far in the current pass.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct ResolvedAxis {
    pub start: Option<i32>,
    pub mid: Option<i32>,
    pub end: Option<i32>,
    pub range: Option<i32>,
}

impl ResolvedAxis {
    /// Nothing resolved.
    pub const UNRESOLVED: Self = Self {
        start: None,
        mid: None,
        end: None,
        range: None,
    };

    pub const fn is_unresolved(&self) -> bool {
        self.start.is_none() && self.mid.is_none() && self.end.is_none() && self.range.is_none()
    }
}

/// The X and Y solvers of one element.
pub struct AxisSolvers {
    pub x: Box<dyn AxisSolver>,
    pub y: Box<dyn AxisSolver>,
}

impl AxisSolvers {
    pub fn new(x: impl AxisSolver + 'static, y: impl AxisSolver + 'static) -> Self {
        Self {
            x: Box::new(x),
            y: Box::new(y),
        }
    }

    pub fn on_attach(&mut self, element: ElementId) {
        self.x.on_attach(element);
        self.y.on_attach(element);
    }

    pub fn clear(&self) {
        self.x.clear();
        self.y.clear();
    }
}

impl std::fmt::Debug for AxisSolvers {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("AxisSolvers")
            .field("x", &self.x.snapshot())
            .field("y", &self.y.snapshot())
            .finish()
    }
}
