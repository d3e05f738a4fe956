#![forbid(unsafe_code)]

//! Lazy relative layout.
//!
//! Each element is positioned by two independent one-dimensional solvers, one
//! per axis. A solver pins one edge of its element through a reference
//! function (a closure over the container, its geometry, and sibling
//! elements), optionally pins the opposite edge or declares a size, and
//! derives whatever remains from the element's measured size.
//!
//! Nothing is computed eagerly. Edges are resolved on first query, memoized
//! for the rest of the pass, and measurement happens at most once per element
//! per pass. Direction (LTR/RTL) is observed per query: a solver that sees the
//! direction change throws its cached values away and resolves again.
//!
//! # Example
//!
//! ```
//! use plumb_layout::{ConstraintLayout, Intrinsic, MeasureSpec, Point, RelativeAxisSolver, SizeMode};
//!
//! let mut layout = ConstraintLayout::new().padding(4);
//! let title = layout.add(
//!     RelativeAxisSolver::horizontal(Point::Start, |ctx| ctx.geometry().start())
//!         .end_to(SizeMode::Exact, |ctx| ctx.geometry().end()),
//!     RelativeAxisSolver::vertical(Point::Start, |ctx| ctx.geometry().top()),
//!     Intrinsic::new(10, 2),
//! );
//! let body = layout.add(
//!     RelativeAxisSolver::horizontal(Point::Start, move |ctx| ctx.element(title)?.start()),
//!     RelativeAxisSolver::vertical(Point::Start, move |ctx| Ok(ctx.element(title)?.bottom()? + 1)),
//!     Intrinsic::new(30, 5),
//! );
//!
//! let output = layout.layout(MeasureSpec::exact(80), MeasureSpec::exact(24))?;
//! let title = output.frame(title).expect("placed");
//! let body = output.frame(body).expect("placed");
//! assert_eq!((title.left, title.right), (4, 76));
//! assert_eq!((body.top, body.bottom), (7, 12));
//! # Ok::<(), plumb_layout::LayoutError>(())
//! ```

pub mod constraint;
pub mod container;
pub mod error;
pub mod geometry;
pub mod layout;
pub mod measure;
mod memo;
pub mod size_config;
pub mod solver;

#[cfg(test)]
mod test_support;

pub use constraint::{
    Point, PositionConstraint, SecondaryExtent, SizeConstraint, ValueProvider, truncating,
};
pub use container::{ElementId, ElementRef, LayoutContainer};
pub use error::LayoutError;
pub use geometry::ParentGeometry;
pub use layout::{ConstraintLayout, LayoutOutput};
pub use measure::{Intrinsic, Measure, MeasureSpec, Measured, SizeMode};
pub use size_config::SizeConfig;
pub use solver::{AxisSolver, AxisSolvers, RelativeAxisSolver, ResolvedAxis};

pub use plumb_core::geometry::{Axis, Frame, Padding, PaddingDirection};
