//! Position and size constraints.
//!
//! A constraint wraps a reference function declared by the layout author. The
//! function is evaluated lazily against the container, at most once per pass.

use std::fmt;

use plumb_core::geometry::Axis;

use crate::container::{ElementId, LayoutContainer};
use crate::measure::SizeMode;
use crate::memo::Memo;
use crate::LayoutError;

/// Reference function producing an axis value from the container.
pub type ValueProvider = Box<dyn Fn(&dyn LayoutContainer) -> Result<i32, LayoutError>>;

/// Wrap a float-valued reference function; results truncate toward zero.
pub fn truncating<F>(provider: F) -> ValueProvider
where
    F: Fn(&dyn LayoutContainer) -> Result<f32, LayoutError> + 'static,
{
    Box::new(move |ctx| provider(ctx).map(|value| value as i32))
}

/// Which endpoint of an element a position constraint pins.
///
/// On the vertical axis `Start` is the top edge and `End` the bottom edge.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Point {
    Start,
    End,
}

/// "My `point` equals whatever `provider` returns."
pub struct PositionConstraint {
    point: Point,
    provider: ValueProvider,
    memo: Memo,
}

impl PositionConstraint {
    pub fn new<F>(point: Point, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        Self::boxed(point, Box::new(provider))
    }

    pub fn boxed(point: Point, provider: ValueProvider) -> Self {
        Self {
            point,
            provider,
            memo: Memo::new(),
        }
    }

    #[inline]
    pub const fn point(&self) -> Point {
        self.point
    }

    /// Evaluate the reference function, or return the value cached this pass.
    ///
    /// `element` and `axis` identify the owning solver in cycle reports.
    pub fn resolve(
        &self,
        ctx: &dyn LayoutContainer,
        element: ElementId,
        axis: Axis,
    ) -> Result<i32, LayoutError> {
        self.memo.resolve_with(
            || LayoutError::ConstraintCycle { element, axis },
            || (self.provider)(ctx),
        )
    }

    pub fn cached(&self) -> Option<i32> {
        self.memo.get()
    }

    pub fn clear(&self) {
        self.memo.clear();
    }
}

impl fmt::Debug for PositionConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("PositionConstraint")
            .field("point", &self.point)
            .field("cached", &self.memo.get())
            .finish_non_exhaustive()
    }
}

/// "My size equals whatever `provider` returns, negotiated with `mode`."
pub struct SizeConstraint {
    mode: SizeMode,
    provider: ValueProvider,
    memo: Memo,
}

impl SizeConstraint {
    pub fn new<F>(mode: SizeMode, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        Self::boxed(mode, Box::new(provider))
    }

    pub fn boxed(mode: SizeMode, provider: ValueProvider) -> Self {
        Self {
            mode,
            provider,
            memo: Memo::new(),
        }
    }

    #[inline]
    pub const fn mode(&self) -> SizeMode {
        self.mode
    }

    pub fn resolve(
        &self,
        ctx: &dyn LayoutContainer,
        element: ElementId,
        axis: Axis,
    ) -> Result<i32, LayoutError> {
        self.memo.resolve_with(
            || LayoutError::ConstraintCycle { element, axis },
            || (self.provider)(ctx),
        )
    }

    pub fn cached(&self) -> Option<i32> {
        self.memo.get()
    }

    pub fn clear(&self) {
        self.memo.clear();
    }
}

impl fmt::Debug for SizeConstraint {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeConstraint")
            .field("mode", &self.mode)
            .field("cached", &self.memo.get())
            .finish_non_exhaustive()
    }
}

/// What, besides the anchor, determines an element's extent on one axis.
///
/// An endpoint and a size are mutually exclusive. An endpoint always takes
/// the slot; a size only fills it while no endpoint is set.
#[derive(Debug, Default)]
pub enum SecondaryExtent {
    /// The extent comes entirely from measurement.
    #[default]
    Unset,
    /// The far edge is pinned; the extent is the distance between the edges.
    Endpoint {
        constraint: PositionConstraint,
        mode: SizeMode,
    },
    /// The extent is declared directly.
    Size(SizeConstraint),
}

impl SecondaryExtent {
    pub const fn is_set(&self) -> bool {
        !matches!(self, Self::Unset)
    }

    pub fn clear(&self) {
        match self {
            Self::Unset => {}
            Self::Endpoint { constraint, .. } => constraint.clear(),
            Self::Size(size) => size.clear(),
        }
    }
}
