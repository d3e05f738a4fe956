//! The interface a container exposes to its solvers and reference functions.

use std::fmt;

use plumb_core::geometry::PaddingDirection;

use crate::geometry::ParentGeometry;
use crate::size_config::SizeConfig;
use crate::solver::AxisSolvers;
use crate::LayoutError;

/// Handle of an element within its container.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(transparent))]
pub struct ElementId(usize);

impl ElementId {
    pub const fn new(index: usize) -> Self {
        Self(index)
    }

    /// Position of the element in its container.
    #[inline]
    pub const fn index(self) -> usize {
        self.0
    }
}

impl fmt::Display for ElementId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{}", self.0)
    }
}

/// The owner of a set of elements, driving one layout pass at a time.
///
/// Resolution is synchronous and re-entrant: a solver may call
/// [`measure_element`](Self::measure_element), which measures the element and
/// may in turn resolve other elements before returning. The constraint graph
/// along each axis must be acyclic; cycles are reported as errors rather than
/// resolved.
pub trait LayoutContainer {
    /// Whether the current pass lays out right-to-left.
    fn is_rtl(&self) -> bool;

    /// Inset along one of the six named directions.
    fn padding(&self, direction: PaddingDirection) -> i32;

    fn width_config(&self) -> &SizeConfig;

    fn height_config(&self) -> &SizeConfig;

    /// The solvers of one of the container's elements.
    fn solvers(&self, element: ElementId) -> Result<&AxisSolvers, LayoutError>;

    /// Measure `element` now and report its ranges to both of its solvers
    /// through [`AxisSolver::on_range_resolved`](crate::AxisSolver::on_range_resolved)
    /// before returning.
    fn measure_element(&self, element: ElementId) -> Result<(), LayoutError>;
}

impl<'c> dyn LayoutContainer + 'c {
    /// Edges of the container itself.
    pub fn geometry(&self) -> ParentGeometry<'_> {
        ParentGeometry::new(self)
    }

    /// Edges of another element, resolved lazily.
    pub fn element(&self, element: ElementId) -> Result<ElementRef<'_>, LayoutError> {
        let solvers = self.solvers(element)?;
        Ok(ElementRef {
            ctx: self,
            element,
            solvers,
        })
    }
}

/// A view of one element's edges, as seen by reference functions.
///
/// Every accessor forces resolution of the element's solver for the current
/// direction.
#[derive(Clone, Copy)]
pub struct ElementRef<'c> {
    ctx: &'c dyn LayoutContainer,
    element: ElementId,
    solvers: &'c AxisSolvers,
}

impl ElementRef<'_> {
    #[inline]
    pub const fn id(&self) -> ElementId {
        self.element
    }

    pub fn left(&self) -> Result<i32, LayoutError> {
        self.solvers.x.min(self.ctx, self.ctx.is_rtl())
    }

    pub fn right(&self) -> Result<i32, LayoutError> {
        self.solvers.x.max(self.ctx, self.ctx.is_rtl())
    }

    /// Logical start edge: `right` under RTL, `left` otherwise.
    pub fn start(&self) -> Result<i32, LayoutError> {
        if self.ctx.is_rtl() {
            self.right()
        } else {
            self.left()
        }
    }

    /// Logical end edge: `left` under RTL, `right` otherwise.
    pub fn end(&self) -> Result<i32, LayoutError> {
        if self.ctx.is_rtl() {
            self.left()
        } else {
            self.right()
        }
    }

    pub fn center_x(&self) -> Result<i32, LayoutError> {
        self.solvers.x.mid(self.ctx, self.ctx.is_rtl())
    }

    pub fn width(&self) -> Result<i32, LayoutError> {
        self.solvers.x.range(self.ctx)
    }

    pub fn top(&self) -> Result<i32, LayoutError> {
        self.solvers.y.min(self.ctx, false)
    }

    pub fn bottom(&self) -> Result<i32, LayoutError> {
        self.solvers.y.max(self.ctx, false)
    }

    pub fn center_y(&self) -> Result<i32, LayoutError> {
        self.solvers.y.mid(self.ctx, false)
    }

    pub fn height(&self) -> Result<i32, LayoutError> {
        self.solvers.y.range(self.ctx)
    }

    pub fn baseline(&self) -> Result<i32, LayoutError> {
        self.solvers.y.baseline(self.ctx)
    }
}

impl fmt::Debug for ElementRef<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ElementRef")
            .field("element", &self.element)
            .field("x", &self.solvers.x.snapshot())
            .field("y", &self.solvers.y.snapshot())
            .finish()
    }
}
