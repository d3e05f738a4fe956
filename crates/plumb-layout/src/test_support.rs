//! Minimal container for exercising solvers in isolation.

use std::cell::Cell;

use plumb_core::geometry::{Axis, Padding, PaddingDirection};

use crate::container::{ElementId, LayoutContainer};
use crate::measure::MeasureSpec;
use crate::size_config::SizeConfig;
use crate::solver::AxisSolvers;
use crate::LayoutError;

/// A container with exact extents and no elements of its own.
///
/// Measurement requests are counted but never answered, so a solver that
/// needs its range from this container fails with `UnresolvedRange`.
pub(crate) struct FixedContainer {
    pub(crate) width: SizeConfig,
    pub(crate) height: SizeConfig,
    pub(crate) padding: Padding,
    pub(crate) rtl: bool,
    pub(crate) measure_calls: Cell<usize>,
}

impl FixedContainer {
    pub(crate) fn new(width: i32, height: i32) -> Self {
        let mut width_config = SizeConfig::new(Axis::Horizontal);
        width_config.adjust(MeasureSpec::exact(width));
        let mut height_config = SizeConfig::new(Axis::Vertical);
        height_config.adjust(MeasureSpec::exact(height));
        Self {
            width: width_config,
            height: height_config,
            padding: Padding::default(),
            rtl: false,
            measure_calls: Cell::new(0),
        }
    }

    pub(crate) fn with_padding(mut self, padding: Padding) -> Self {
        self.padding = padding;
        self
    }

    pub(crate) fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }
}

impl LayoutContainer for FixedContainer {
    fn is_rtl(&self) -> bool {
        self.rtl
    }

    fn padding(&self, direction: PaddingDirection) -> i32 {
        self.padding.resolve(direction, self.rtl)
    }

    fn width_config(&self) -> &SizeConfig {
        &self.width
    }

    fn height_config(&self) -> &SizeConfig {
        &self.height
    }

    fn solvers(&self, element: ElementId) -> Result<&AxisSolvers, LayoutError> {
        Err(LayoutError::UnknownElement { element })
    }

    fn measure_element(&self, _element: ElementId) -> Result<(), LayoutError> {
        self.measure_calls.set(self.measure_calls.get() + 1);
        Ok(())
    }
}
