//! Container edges in a direction-aware coordinate space.

use plumb_core::geometry::{PaddingDirection, half};

use crate::container::LayoutContainer;
use crate::LayoutError;

/// Edges of the containing box.
///
/// `left`/`right`/`top`/`bottom` are physical. `start`/`end` swap under RTL:
/// `start` is measured from the right edge and `end` from the left edge.
/// Extents come from the container's [`SizeConfig`](crate::SizeConfig)s.
#[derive(Clone, Copy)]
pub struct ParentGeometry<'c> {
    container: &'c dyn LayoutContainer,
}

impl<'c> ParentGeometry<'c> {
    pub fn new(container: &'c dyn LayoutContainer) -> Self {
        Self { container }
    }

    fn padding(&self, direction: PaddingDirection) -> i32 {
        self.container.padding(direction)
    }

    pub fn left(&self) -> Result<i32, LayoutError> {
        Ok(self.padding(PaddingDirection::Left))
    }

    pub fn right(&self) -> Result<i32, LayoutError> {
        Ok(self.width()?.saturating_sub(self.padding(PaddingDirection::Right)))
    }

    pub fn start(&self) -> Result<i32, LayoutError> {
        let inset = self.padding(PaddingDirection::Start);
        if self.container.is_rtl() {
            Ok(self.width()?.saturating_sub(inset))
        } else {
            Ok(inset)
        }
    }

    pub fn end(&self) -> Result<i32, LayoutError> {
        let inset = self.padding(PaddingDirection::End);
        if self.container.is_rtl() {
            Ok(inset)
        } else {
            Ok(self.width()?.saturating_sub(inset))
        }
    }

    pub fn width(&self) -> Result<i32, LayoutError> {
        self.container.width_config().resolve(self.container)
    }

    pub fn center_x(&self) -> Result<i32, LayoutError> {
        Ok(half(self.width()?))
    }

    pub fn top(&self) -> Result<i32, LayoutError> {
        Ok(self.padding(PaddingDirection::Top))
    }

    pub fn bottom(&self) -> Result<i32, LayoutError> {
        Ok(self.height()?.saturating_sub(self.padding(PaddingDirection::Bottom)))
    }

    pub fn height(&self) -> Result<i32, LayoutError> {
        self.container.height_config().resolve(self.container)
    }

    pub fn center_y(&self) -> Result<i32, LayoutError> {
        Ok(half(self.height()?))
    }
}
