//! Reference container: owns elements and drives layout passes.

use std::cell::{Cell, RefCell};
use std::fmt;

use plumb_core::geometry::{Axis, Frame, Padding, PaddingDirection};

use crate::container::{ElementId, LayoutContainer};
use crate::measure::{Measure, MeasureSpec, Measured};
use crate::size_config::SizeConfig;
use crate::solver::{AxisSolver, AxisSolvers};
use crate::LayoutError;

struct Element {
    solvers: AxisSolvers,
    content: Box<dyn Measure>,
}

/// Result of a full layout pass.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct LayoutOutput {
    pub width: i32,
    pub height: i32,
    /// One frame per element, in insertion order.
    pub frames: Vec<Frame>,
}

impl LayoutOutput {
    pub fn frame(&self, element: ElementId) -> Option<Frame> {
        self.frames.get(element.index()).copied()
    }
}

/// A container of relatively positioned elements.
///
/// Every pass starts from scratch: [`measure`](Self::measure) applies the
/// host's size requests and clears all solvers, then elements resolve lazily
/// as they are placed or referenced by their siblings.
///
/// ```
/// use plumb_layout::{ConstraintLayout, Intrinsic, MeasureSpec, Point, RelativeAxisSolver};
///
/// let mut layout = ConstraintLayout::new().padding(8);
/// let avatar = layout.add(
///     RelativeAxisSolver::horizontal(Point::Start, |ctx| ctx.geometry().start()),
///     RelativeAxisSolver::vertical(Point::Start, |ctx| ctx.geometry().top()),
///     Intrinsic::new(40, 40),
/// );
/// let name = layout.add(
///     RelativeAxisSolver::horizontal(Point::Start, move |ctx| Ok(ctx.element(avatar)?.end()? + 12)),
///     RelativeAxisSolver::vertical(Point::Start, move |ctx| ctx.element(avatar)?.top()),
///     Intrinsic::new(100, 16),
/// );
///
/// let output = layout.layout(MeasureSpec::exact(320), MeasureSpec::exact(56))?;
/// assert_eq!(output.frame(name).map(|f| f.left), Some(60));
/// # Ok::<(), plumb_layout::LayoutError>(())
/// ```
pub struct ConstraintLayout {
    elements: Vec<Element>,
    width: SizeConfig,
    height: SizeConfig,
    padding: Padding,
    rtl: bool,
    measuring: RefCell<Vec<ElementId>>,
    measure_calls: Cell<usize>,
}

impl Default for ConstraintLayout {
    fn default() -> Self {
        Self::new()
    }
}

impl ConstraintLayout {
    pub fn new() -> Self {
        Self {
            elements: Vec::new(),
            width: SizeConfig::new(Axis::Horizontal),
            height: SizeConfig::new(Axis::Vertical),
            padding: Padding::default(),
            rtl: false,
            measuring: RefCell::new(Vec::new()),
            measure_calls: Cell::new(0),
        }
    }

    /// Set the container insets.
    #[must_use]
    pub fn padding(mut self, padding: impl Into<Padding>) -> Self {
        self.padding = padding.into();
        self
    }

    /// Set the layout direction.
    #[must_use]
    pub fn rtl(mut self, rtl: bool) -> Self {
        self.rtl = rtl;
        self
    }

    /// Compute the container width from its content when the host does not
    /// impose an exact width.
    #[must_use]
    pub fn width_of<F>(mut self, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.width.set_content(Some(Box::new(provider)));
        self
    }

    /// Compute the container height from its content when the host does not
    /// impose an exact height.
    #[must_use]
    pub fn height_of<F>(mut self, provider: F) -> Self
    where
        F: Fn(&dyn LayoutContainer) -> Result<i32, LayoutError> + 'static,
    {
        self.height.set_content(Some(Box::new(provider)));
        self
    }

    /// Switch direction for subsequent passes.
    pub fn set_rtl(&mut self, rtl: bool) {
        self.rtl = rtl;
    }

    pub fn set_padding(&mut self, padding: impl Into<Padding>) {
        self.padding = padding.into();
    }

    /// Add an element and attach its solvers.
    pub fn add(
        &mut self,
        x: impl AxisSolver + 'static,
        y: impl AxisSolver + 'static,
        content: impl Measure + 'static,
    ) -> ElementId {
        let id = ElementId::new(self.elements.len());
        let mut solvers = AxisSolvers::new(x, y);
        solvers.on_attach(id);
        self.elements.push(Element {
            solvers,
            content: Box::new(content),
        });
        id
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.elements.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.elements.is_empty()
    }

    /// Measurements performed since the pass started.
    pub fn measure_calls(&self) -> usize {
        self.measure_calls.get()
    }

    /// Forget every value resolved in the current pass.
    pub fn clear(&self) {
        self.width.clear();
        self.height.clear();
        for element in &self.elements {
            element.solvers.clear();
        }
        self.measuring.borrow_mut().clear();
        self.measure_calls.set(0);
    }

    /// Start a pass: apply the host's size requests and resolve the
    /// container's own extent.
    pub fn measure(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<(i32, i32), LayoutError> {
        self.width.adjust(width);
        self.height.adjust(height);
        self.clear();

        let ctx: &dyn LayoutContainer = &*self;
        let geometry = ctx.geometry();
        Ok((geometry.width()?, geometry.height()?))
    }

    /// Run a full pass and place every element.
    pub fn layout(
        &mut self,
        width: MeasureSpec,
        height: MeasureSpec,
    ) -> Result<LayoutOutput, LayoutError> {
        let (width, height) = self.measure(width, height)?;
        let span = plumb_core::debug_span!(
            "layout_pass",
            elements = self.elements.len(),
            width,
            height,
            rtl = self.rtl
        );
        let _guard = span.enter();

        let frames = (0..self.elements.len())
            .map(|index| self.frame(ElementId::new(index)))
            .collect::<Result<Vec<_>, _>>()?;

        plumb_core::debug!(
            measure_calls = self.measure_calls.get(),
            "layout pass complete"
        );
        Ok(LayoutOutput {
            width,
            height,
            frames,
        })
    }

    /// Place one element using the current pass state.
    pub fn frame(&self, element: ElementId) -> Result<Frame, LayoutError> {
        let ctx: &dyn LayoutContainer = self;
        let element = ctx.element(element)?;
        Ok(Frame::new(
            element.left()?,
            element.top()?,
            element.right()?,
            element.bottom()?,
        ))
    }

    fn entry(&self, element: ElementId) -> Result<&Element, LayoutError> {
        self.elements
            .get(element.index())
            .ok_or(LayoutError::UnknownElement { element })
    }

    fn measure_entry(&self, entry: &Element) -> Result<Measured, LayoutError> {
        let width = entry.solvers.x.measure_spec(self)?;
        let height = entry.solvers.y.measure_spec(self)?;
        let measured = entry.content.measure(width, height);
        self.measure_calls.set(self.measure_calls.get() + 1);
        entry
            .solvers
            .x
            .on_range_resolved(measured.width, measured.baseline);
        entry
            .solvers
            .y
            .on_range_resolved(measured.height, measured.baseline);
        Ok(measured)
    }
}

impl LayoutContainer for ConstraintLayout {
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
        Ok(&self.entry(element)?.solvers)
    }

    fn measure_element(&self, element: ElementId) -> Result<(), LayoutError> {
        let entry = self.entry(element)?;
        if self.measuring.borrow().contains(&element) {
            plumb_core::debug!(element = %element, "re-entrant measurement");
            return Err(LayoutError::MeasureCycle { element });
        }
        self.measuring.borrow_mut().push(element);
        let result = self.measure_entry(entry);
        self.measuring.borrow_mut().retain(|active| *active != element);
        let measured = result?;
        plumb_core::trace!(
            element = %element,
            width = measured.width,
            height = measured.height,
            "element measured"
        );
        Ok(())
    }
}

impl fmt::Debug for ConstraintLayout {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("ConstraintLayout")
            .field("elements", &self.elements.len())
            .field("width", &self.width)
            .field("height", &self.height)
            .field("padding", &self.padding)
            .field("rtl", &self.rtl)
            .finish()
    }
}
