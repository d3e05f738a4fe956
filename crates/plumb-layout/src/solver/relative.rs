//! Solver for elements positioned relative to other edges.

use std::cell::Cell;

use plumb_core::geometry::{Axis, half};

use super::{AxisSolver, ResolvedAxis};
use crate::constraint::{
    Point, PositionConstraint, SecondaryExtent, SizeConstraint, ValueProvider, truncating,
};
use crate::container::{ElementId, LayoutContainer};
use crate::measure::{MeasureSpec, SizeMode};
use crate::LayoutError;

/// Resolved edges on one axis, set together.
#[derive(Debug, Clone, Copy)]
struct Span {
    start: i32,
    mid: i32,
    end: i32,
}

/// Positions an element from an anchor edge plus either a second edge, an
/// explicit size, or the measured size.
///
/// The anchor pins one logical edge ([`Point::Start`] or [`Point::End`]). The
/// opposite edge is derived from the element's measured range, so asking for
/// it measures the element first.
///
/// ```
/// use plumb_layout::{ConstraintLayout, Intrinsic, MeasureSpec, Point, RelativeAxisSolver, SizeMode};
///
/// let mut layout = ConstraintLayout::new();
/// let label = layout.add(
///     RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10))
///         .end_to(SizeMode::Exact, |_| Ok(90)),
///     RelativeAxisSolver::vertical(Point::Start, |ctx| ctx.geometry().top()),
///     Intrinsic::new(30, 12),
/// );
/// let output = layout.layout(MeasureSpec::exact(100), MeasureSpec::exact(40))?;
/// let frame = output.frame(label).expect("label was placed");
/// assert_eq!((frame.left, frame.right), (10, 90));
/// # Ok::<(), plumb_layout::LayoutError>(())
/// ```
#[derive(Debug)]
pub struct RelativeAxisSolver {
    axis: Axis,
    element: Option<ElementId>,
    anchor: PositionConstraint,
    extent: SecondaryExtent,
    last_mirrored: Cell<Option<bool>>,
    start: Cell<Option<i32>>,
    mid: Cell<Option<i32>>,
    end: Cell<Option<i32>>,
    range: Cell<Option<i32>>,
}

impl RelativeAxisSolver {
    pub fn new<F>(axis: Axis, point: Point, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        Self {
            axis,
            element: None,
            anchor: PositionConstraint::new(point, provider),
            extent: SecondaryExtent::Unset,
            last_mirrored: Cell::new(None),
            start: Cell::new(None),
            mid: Cell::new(None),
            end: Cell::new(None),
            range: Cell::new(None),
        }
    }

    /// X-axis solver anchored at a logical start or end edge.
    pub fn horizontal<F>(point: Point, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        Self::new(Axis::Horizontal, point, provider)
    }

    /// Y-axis solver anchored at the top (`Start`) or bottom (`End`) edge.
    pub fn vertical<F>(point: Point, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        Self::new(Axis::Vertical, point, provider)
    }

    #[inline]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub const fn anchor_point(&self) -> Point {
        self.anchor.point()
    }

    #[inline]
    pub const fn extent(&self) -> &SecondaryExtent {
        &self.extent
    }

    // ── Builder ─────────────────────────────────────────────────────────

    /// Pin the start edge as well; the element spans the two edges.
    #[must_use]
    pub fn start_to<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.with_endpoint(Point::Start, mode, Box::new(provider))
    }

    #[must_use]
    pub fn start_to_float<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<f32, LayoutError> + 'static,
    {
        self.with_endpoint(Point::Start, mode, truncating(provider))
    }

    /// Pin the end edge as well; the element spans the two edges.
    #[must_use]
    pub fn end_to<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.with_endpoint(Point::End, mode, Box::new(provider))
    }

    #[must_use]
    pub fn end_to_float<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<f32, LayoutError> + 'static,
    {
        self.with_endpoint(Point::End, mode, truncating(provider))
    }

    /// Declare the size directly. Ignored if an endpoint is already pinned.
    #[must_use]
    pub fn width_of<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.with_size(mode, Box::new(provider))
    }

    #[must_use]
    pub fn width_of_float<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<f32, LayoutError> + 'static,
    {
        self.with_size(mode, truncating(provider))
    }

    #[must_use]
    pub fn top_to<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.start_to(mode, provider)
    }

    #[must_use]
    pub fn top_to_float<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<f32, LayoutError> + 'static,
    {
        self.start_to_float(mode, provider)
    }

    #[must_use]
    pub fn bottom_to<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.end_to(mode, provider)
    }

    #[must_use]
    pub fn bottom_to_float<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<f32, LayoutError> + 'static,
    {
        self.end_to_float(mode, provider)
    }

    #[must_use]
    pub fn height_of<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.width_of(mode, provider)
    }

    #[must_use]
    pub fn height_of_float<F>(self, mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<f32, LayoutError> + 'static,
    {
        self.width_of_float(mode, provider)
    }

    fn with_endpoint(mut self, point: Point, mode: SizeMode, provider: ValueProvider) -> Self {
        self.extent = SecondaryExtent::Endpoint {
            constraint: PositionConstraint::boxed(point, provider),
            mode,
        };
        self
    }

    fn with_size(mut self, mode: SizeMode, provider: ValueProvider) -> Self {
        if matches!(self.extent, SecondaryExtent::Endpoint { .. }) {
            plumb_core::warn!(
                axis = %self.axis,
                "size constraint ignored: the far endpoint is already pinned"
            );
            return self;
        }
        self.extent = SecondaryExtent::Size(SizeConstraint::boxed(mode, provider));
        self
    }

    // ── Resolution ──────────────────────────────────────────────────────

    fn element(&self) -> Result<ElementId, LayoutError> {
        self.element
            .ok_or(LayoutError::Detached { axis: self.axis })
    }

    /// Record the direction of this query, invalidating the cache if it
    /// differs from the previous one.
    fn observe_direction(&self, mirrored: bool) {
        let mirrored = mirrored && self.axis.is_mirrorable();
        match self.last_mirrored.get() {
            Some(previous) if previous != mirrored => {
                plumb_core::trace!(
                    element = ?self.element,
                    axis = %self.axis,
                    mirrored,
                    "direction changed, clearing cached edges"
                );
                self.clear();
                self.last_mirrored.set(Some(mirrored));
            }
            Some(_) => {}
            None => self.last_mirrored.set(Some(mirrored)),
        }
    }

    fn mirrored(&self) -> bool {
        self.last_mirrored.get().unwrap_or(false)
    }

    fn start(&self, ctx: &dyn LayoutContainer) -> Result<i32, LayoutError> {
        if let Some(start) = self.start.get() {
            return Ok(start);
        }
        match self.anchor.point() {
            Point::Start => {
                let start = self.anchor.resolve(ctx, self.element()?, self.axis)?;
                self.start.set(Some(start));
                Ok(start)
            }
            Point::End => Ok(self.resolve_axis(ctx)?.start),
        }
    }

    fn end(&self, ctx: &dyn LayoutContainer) -> Result<i32, LayoutError> {
        if let Some(end) = self.end.get() {
            return Ok(end);
        }
        match self.anchor.point() {
            Point::End => {
                let end = self.anchor.resolve(ctx, self.element()?, self.axis)?;
                self.end.set(Some(end));
                Ok(end)
            }
            Point::Start => Ok(self.resolve_axis(ctx)?.end),
        }
    }

    /// Derive all three edges from the anchor and the measured range:
    /// `start + range` from a start anchor, `end - range` from an end anchor.
    fn resolve_axis(&self, ctx: &dyn LayoutContainer) -> Result<Span, LayoutError> {
        if let (Some(start), Some(mid), Some(end)) =
            (self.start.get(), self.mid.get(), self.end.get())
        {
            return Ok(Span { start, mid, end });
        }

        let element = self.element()?;
        let range = self.range(ctx)?;
        let anchor = self.anchor.resolve(ctx, element, self.axis)?;
        let h = half(range);

        // Mirroring only changes which edge min/max report, never the span.
        let span = match self.anchor.point() {
            Point::Start => Span {
                start: anchor,
                mid: anchor.saturating_add(h),
                end: anchor.saturating_add(range),
            },
            Point::End => Span {
                start: anchor.saturating_sub(range),
                mid: anchor.saturating_sub(h),
                end: anchor,
            },
        };

        self.start.set(Some(span.start));
        self.mid.set(Some(span.mid));
        self.end.set(Some(span.end));
        plumb_core::trace!(
            element = %element,
            axis = %self.axis,
            start = span.start,
            mid = span.mid,
            end = span.end,
            range,
            "axis resolved"
        );
        Ok(span)
    }
}

impl AxisSolver for RelativeAxisSolver {
    fn min(&self, ctx: &dyn LayoutContainer, mirrored: bool) -> Result<i32, LayoutError> {
        self.observe_direction(mirrored);
        if self.mirrored() {
            self.end(ctx)
        } else {
            self.start(ctx)
        }
    }

    fn mid(&self, ctx: &dyn LayoutContainer, mirrored: bool) -> Result<i32, LayoutError> {
        self.observe_direction(mirrored);
        if let Some(mid) = self.mid.get() {
            return Ok(mid);
        }
        Ok(self.resolve_axis(ctx)?.mid)
    }

    fn max(&self, ctx: &dyn LayoutContainer, mirrored: bool) -> Result<i32, LayoutError> {
        self.observe_direction(mirrored);
        if self.mirrored() {
            self.start(ctx)
        } else {
            self.end(ctx)
        }
    }

    fn baseline(&self, _ctx: &dyn LayoutContainer) -> Result<i32, LayoutError> {
        Err(LayoutError::BaselineUnsupported {
            element: self.element()?,
            axis: self.axis,
        })
    }

    fn range(&self, ctx: &dyn LayoutContainer) -> Result<i32, LayoutError> {
        if let Some(range) = self.range.get() {
            return Ok(range);
        }
        let element = self.element()?;
        ctx.measure_element(element)?;
        self.range.get().ok_or(LayoutError::UnresolvedRange {
            element,
            axis: self.axis,
        })
    }

    fn measure_spec(&self, ctx: &dyn LayoutContainer) -> Result<MeasureSpec, LayoutError> {
        match &self.extent {
            SecondaryExtent::Endpoint { constraint, mode } => {
                let element = self.element()?;
                let anchor = self.anchor.resolve(ctx, element, self.axis)?;
                let other = constraint.resolve(ctx, element, self.axis)?;
                let size = i32::try_from(anchor.abs_diff(other)).unwrap_or(i32::MAX);
                Ok(MeasureSpec::new(size, *mode))
            }
            SecondaryExtent::Size(size) => {
                let value = size.resolve(ctx, self.element()?, self.axis)?;
                Ok(MeasureSpec::new(value, size.mode()))
            }
            SecondaryExtent::Unset => Ok(MeasureSpec::UNSPECIFIED),
        }
    }

    fn on_attach(&mut self, element: ElementId) {
        self.element = Some(element);
    }

    fn on_range_resolved(&self, range: i32, _baseline_range: Option<i32>) {
        self.range.set(Some(range));
    }

    fn clear(&self) {
        self.start.set(None);
        self.mid.set(None);
        self.end.set(None);
        self.range.set(None);
        self.last_mirrored.set(None);
        self.anchor.clear();
        self.extent.clear();
    }

    fn snapshot(&self) -> ResolvedAxis {
        ResolvedAxis {
            start: self.start.get(),
            mid: self.mid.get(),
            end: self.end.get(),
            range: self.range.get(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::test_support::FixedContainer;
    use std::rc::Rc;

    fn attached(solver: RelativeAxisSolver) -> RelativeAxisSolver {
        let mut solver = solver;
        solver.on_attach(ElementId::new(0));
        solver
    }

    #[test]
    fn start_anchor_resolves_without_measuring() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10)));
        assert_eq!(solver.min(&ctx, false), Ok(10));
        assert_eq!(ctx.measure_calls.get(), 0);
        assert_eq!(
            solver.snapshot(),
            ResolvedAxis {
                start: Some(10),
                ..ResolvedAxis::UNRESOLVED
            }
        );
    }

    #[test]
    fn start_anchor_is_independent_of_mirroring() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10)));
        // Under mirroring the logical start is the physical maximum.
        assert_eq!(solver.max(&ctx, true), Ok(10));
        assert_eq!(ctx.measure_calls.get(), 0);
    }

    #[test]
    fn far_edge_derives_from_range() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10)));
        solver.on_range_resolved(31, None);
        assert_eq!(solver.max(&ctx, false), Ok(41));
        assert_eq!(solver.mid(&ctx, false), Ok(25));
        assert_eq!(solver.min(&ctx, false), Ok(10));
        assert_eq!(ctx.measure_calls.get(), 0);
    }

    #[test]
    fn end_anchor_derives_start() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::End, |ctx| {
            ctx.geometry().end()
        }));
        solver.on_range_resolved(30, None);
        assert_eq!(solver.max(&ctx, false), Ok(100));
        assert_eq!(solver.min(&ctx, false), Ok(70));
        assert_eq!(solver.mid(&ctx, false), Ok(85));
    }

    #[test]
    fn mirroring_swaps_reported_edges_only() {
        let ctx = FixedContainer::new(100, 100).rtl(true);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |ctx| {
            ctx.geometry().start()
        }));
        solver.on_range_resolved(30, None);
        assert_eq!(solver.max(&ctx, true), Ok(100));
        assert_eq!(solver.min(&ctx, true), Ok(130));
        assert_eq!(solver.mid(&ctx, true), Ok(115));
    }

    #[test]
    fn mirrored_start_anchor_keeps_span_relations() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10)));
        solver.on_range_resolved(30, None);
        // Under mirroring min reports the logical end and max the logical start.
        assert_eq!(solver.min(&ctx, true), Ok(40));
        assert_eq!(solver.mid(&ctx, true), Ok(25));
        assert_eq!(solver.max(&ctx, true), Ok(10));
    }

    #[test]
    fn mirrored_end_anchor_keeps_span_relations() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::End, |_| Ok(50)));
        solver.on_range_resolved(20, None);
        assert_eq!(solver.max(&ctx, true), Ok(30));
        assert_eq!(solver.mid(&ctx, true), Ok(40));
        assert_eq!(solver.min(&ctx, true), Ok(50));
        assert_eq!(
            solver.snapshot(),
            ResolvedAxis {
                start: Some(30),
                mid: Some(40),
                end: Some(50),
                range: Some(20),
            }
        );
    }

    #[test]
    fn accessors_report_configuration() {
        let solver = RelativeAxisSolver::vertical(Point::End, |_| Ok(0));
        assert_eq!(solver.axis(), Axis::Vertical);
        assert_eq!(solver.anchor_point(), Point::End);
        assert!(!solver.extent().is_set());

        let solver = solver.top_to(SizeMode::AtMost, |_| Ok(4));
        assert!(matches!(
            solver.extent(),
            SecondaryExtent::Endpoint {
                mode: SizeMode::AtMost,
                ..
            }
        ));
    }

    #[test]
    fn direction_flip_re_resolves() {
        let ctx = FixedContainer::new(100, 100);
        let anchor = Rc::new(Cell::new(10));
        let source = Rc::clone(&anchor);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, move |_| {
            Ok(source.get())
        }));

        assert_eq!(solver.min(&ctx, false), Ok(10));
        anchor.set(20);
        assert_eq!(solver.min(&ctx, false), Ok(10), "same direction is a cache hit");
        assert_eq!(solver.max(&ctx, true), Ok(20), "flip must not return the stale value");
    }

    #[test]
    fn vertical_axis_never_mirrors() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::vertical(Point::Start, |_| Ok(10)));
        solver.on_range_resolved(20, None);
        assert_eq!(solver.min(&ctx, true), Ok(10));
        assert_eq!(solver.max(&ctx, true), Ok(30));
        assert_eq!(solver.min(&ctx, false), Ok(10));
    }

    #[test]
    fn clear_is_idempotent() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10)));
        solver.on_range_resolved(20, None);
        assert_eq!(solver.mid(&ctx, false), Ok(20));
        assert!(!solver.snapshot().is_unresolved());

        solver.clear();
        let once = solver.snapshot();
        solver.clear();
        assert_eq!(solver.snapshot(), once);
        assert!(once.is_unresolved());
    }

    #[test]
    fn clear_on_fresh_solver_is_harmless() {
        let solver = RelativeAxisSolver::horizontal(Point::End, |_| Ok(0));
        solver.clear();
        solver.clear();
        assert_eq!(solver.snapshot(), ResolvedAxis::UNRESOLVED);
    }

    #[test]
    fn unsatisfied_measurement_is_an_error() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10)));
        assert_eq!(
            solver.max(&ctx, false),
            Err(LayoutError::UnresolvedRange {
                element: ElementId::new(0),
                axis: Axis::Horizontal,
            })
        );
        assert_eq!(ctx.measure_calls.get(), 1);
    }

    #[test]
    fn detached_solver_cannot_measure() {
        let ctx = FixedContainer::new(100, 100);
        let solver = RelativeAxisSolver::vertical(Point::Start, |_| Ok(0));
        assert_eq!(
            solver.range(&ctx),
            Err(LayoutError::Detached {
                axis: Axis::Vertical
            })
        );
    }

    #[test]
    fn baseline_is_unsupported() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::vertical(Point::Start, |_| Ok(0)));
        assert_eq!(
            solver.baseline(&ctx),
            Err(LayoutError::BaselineUnsupported {
                element: ElementId::new(0),
                axis: Axis::Vertical,
            })
        );
    }

    #[test]
    fn measure_spec_from_endpoints() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(
            RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10))
                .end_to(SizeMode::Exact, |_| Ok(90)),
        );
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::exact(80)));
    }

    #[test]
    fn measure_spec_endpoint_distance_is_absolute() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(
            RelativeAxisSolver::horizontal(Point::End, |_| Ok(10))
                .start_to(SizeMode::AtMost, |_| Ok(90)),
        );
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::at_most(80)));
    }

    #[test]
    fn endpoint_wins_over_later_size() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(
            RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10))
                .end_to(SizeMode::Exact, |_| Ok(90))
                .width_of(SizeMode::AtMost, |_| Ok(5)),
        );
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::exact(80)));
    }

    #[test]
    fn endpoint_replaces_earlier_size() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(
            RelativeAxisSolver::horizontal(Point::Start, |_| Ok(10))
                .width_of(SizeMode::AtMost, |_| Ok(5))
                .end_to(SizeMode::Exact, |_| Ok(90)),
        );
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::exact(80)));
    }

    #[test]
    fn measure_spec_from_size() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(
            RelativeAxisSolver::vertical(Point::Start, |_| Ok(0))
                .height_of(SizeMode::AtMost, |ctx| ctx.geometry().center_y()),
        );
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::at_most(50)));
    }

    #[test]
    fn measure_spec_defaults_to_unspecified() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |_| Ok(0)));
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::UNSPECIFIED));
    }

    #[test]
    fn float_builders_truncate() {
        let ctx = FixedContainer::new(100, 100);
        let solver = attached(
            RelativeAxisSolver::horizontal(Point::Start, |_| Ok(0))
                .width_of_float(SizeMode::Exact, |ctx| Ok(ctx.geometry().width()? as f32 * 0.333)),
        );
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::exact(33)));

        let solver = attached(
            RelativeAxisSolver::vertical(Point::Start, |_| Ok(0))
                .bottom_to_float(SizeMode::Exact, |_| Ok(10.75)),
        );
        assert_eq!(solver.measure_spec(&ctx), Ok(MeasureSpec::exact(10)));
    }

    #[test]
    fn centred_on_odd_extent() {
        let ctx = FixedContainer::new(101, 0);
        let solver = attached(RelativeAxisSolver::horizontal(Point::Start, |ctx| {
            ctx.geometry().center_x()
        }));
        solver.on_range_resolved(0, None);
        assert_eq!(solver.mid(&ctx, false), Ok(50));
    }

    #[test]
    fn self_referencing_anchor_is_a_cycle() {
        let ctx = FixedContainer::new(100, 100);
        let anchor = Rc::new(Cell::new(None::<Rc<RelativeAxisSolver>>));
        let handle = Rc::clone(&anchor);
        let solver = Rc::new(attached(RelativeAxisSolver::horizontal(
            Point::Start,
            move |ctx| match handle.take() {
                Some(solver) => solver.min(ctx, false),
                None => Ok(0),
            },
        )));
        anchor.set(Some(Rc::clone(&solver)));
        assert_eq!(
            solver.min(&ctx, false),
            Err(LayoutError::ConstraintCycle {
                element: ElementId::new(0),
                axis: Axis::Horizontal,
            })
        );
    }
}
