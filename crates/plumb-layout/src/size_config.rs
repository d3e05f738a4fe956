//! Container extent along one axis.

use std::fmt;

use plumb_core::geometry::Axis;

use crate::constraint::ValueProvider;
use crate::container::LayoutContainer;
use crate::measure::{MeasureSpec, SizeMode};
use crate::memo::Memo;
use crate::LayoutError;

/// Resolves the total extent of the container along one axis.
///
/// The host's size request (mode + available size) is applied with
/// [`adjust`](Self::adjust) at the start of each pass. An optional content
/// provider computes the size the container would like, typically from the
/// positions of its children.
pub struct SizeConfig {
    axis: Axis,
    mode: SizeMode,
    available: i32,
    content: Option<ValueProvider>,
    memo: Memo,
}

impl SizeConfig {
    /// An exact, zero-sized configuration without a content provider.
    pub fn new(axis: Axis) -> Self {
        Self {
            axis,
            mode: SizeMode::Exact,
            available: 0,
            content: None,
            memo: Memo::new(),
        }
    }

    /// Compute the wrap-content size from the container.
    #[must_use]
    pub fn with_content<F>(mut self, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.content = Some(Box::new(provider));
        self
    }

    /// Replace the content provider.
    pub fn set_content(&mut self, provider: Option<ValueProvider>) {
        self.content = provider;
        self.memo.clear();
    }

    /// Apply the host's size request for the coming pass.
    pub fn adjust(&mut self, spec: MeasureSpec) {
        self.mode = spec.mode;
        self.available = spec.size;
        self.memo.clear();
    }

    #[inline]
    pub const fn axis(&self) -> Axis {
        self.axis
    }

    #[inline]
    pub const fn mode(&self) -> SizeMode {
        self.mode
    }

    #[inline]
    pub const fn available(&self) -> i32 {
        self.available
    }

    /// Total extent for this pass.
    ///
    /// `Exact` returns the available size without evaluating anything. The
    /// other modes evaluate the content provider once per pass; its value is
    /// capped by the available size under `AtMost`.
    pub fn resolve(&self, ctx: &dyn LayoutContainer) -> Result<i32, LayoutError> {
        match self.mode {
            SizeMode::Exact => Ok(self.available),
            SizeMode::AtMost => Ok(self.content(ctx)?.min(self.available)),
            SizeMode::Unspecified => self.content(ctx),
        }
    }

    fn content(&self, ctx: &dyn LayoutContainer) -> Result<i32, LayoutError> {
        let Some(provider) = &self.content else {
            return Ok(self.available);
        };
        let axis = self.axis;
        self.memo
            .resolve_with(|| LayoutError::SizeCycle { axis }, || provider(ctx))
    }

    pub fn clear(&self) {
        self.memo.clear();
    }
}

impl fmt::Debug for SizeConfig {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SizeConfig")
            .field("axis", &self.axis)
            .field("mode", &self.mode)
            .field("available", &self.available)
            .field("has_content", &self.content.is_some())
            .finish()
    }
}
