#![forbid(unsafe_code)]

//! Axis primitives.
//!
//! Coordinates are signed: a constraint may legitimately place an element
//! before the container origin (negative offsets) or mirror it past the end.

use std::fmt;

/// Halve an extent, rounding toward negative infinity.
///
/// Every centre computation in the engine goes through this function so that
/// a container centre and the midpoint of a centred child agree for both odd
/// and even extents, and for negative ranges.
#[inline]
pub const fn half(value: i32) -> i32 {
    value.div_euclid(2)
}

/// One of the two orthogonal layout axes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum Axis {
    /// Left to right (X).
    #[default]
    Horizontal,
    /// Top to bottom (Y).
    Vertical,
}

impl Axis {
    /// Whether logical start/end can be mirrored on this axis.
    #[inline]
    pub const fn is_mirrorable(self) -> bool {
        matches!(self, Self::Horizontal)
    }

    /// Stable lowercase label.
    pub const fn label(self) -> &'static str {
        match self {
            Self::Horizontal => "horizontal",
            Self::Vertical => "vertical",
        }
    }
}

impl fmt::Display for Axis {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.label())
    }
}

/// Named inset directions of a container.
///
/// `Start` and `End` are logical: they map onto `Left` and `Right` depending
/// on the current layout direction.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum PaddingDirection {
    Left,
    Start,
    Top,
    Right,
    End,
    Bottom,
}

impl PaddingDirection {
    /// All six directions, in declaration order.
    pub const ALL: [Self; 6] = [
        Self::Left,
        Self::Start,
        Self::Top,
        Self::Right,
        Self::End,
        Self::Bottom,
    ];

    /// Axis the inset applies to.
    pub const fn axis(self) -> Axis {
        match self {
            Self::Top | Self::Bottom => Axis::Vertical,
            Self::Left | Self::Start | Self::Right | Self::End => Axis::Horizontal,
        }
    }
}

/// Container insets.
///
/// Physical sides are always set. The relative `start`/`end` insets are
/// optional and, when present, take precedence for the logical directions.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Padding {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
    pub start: Option<i32>,
    pub end: Option<i32>,
}

impl Padding {
    /// Create padding with specific physical values.
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
            start: None,
            end: None,
        }
    }

    /// Create padding with equal values on every physical side.
    pub const fn all(value: i32) -> Self {
        Self::new(value, value, value, value)
    }

    /// Create padding with horizontal values only.
    pub const fn horizontal(value: i32) -> Self {
        Self::new(value, 0, value, 0)
    }

    /// Create padding with vertical values only.
    pub const fn vertical(value: i32) -> Self {
        Self::new(0, value, 0, value)
    }

    /// Set explicit logical start/end insets.
    #[must_use]
    pub const fn relative(mut self, start: i32, end: i32) -> Self {
        self.start = Some(start);
        self.end = Some(end);
        self
    }

    /// Inset along `direction` for the given layout direction.
    pub const fn resolve(&self, direction: PaddingDirection, rtl: bool) -> i32 {
        match direction {
            PaddingDirection::Left => self.left,
            PaddingDirection::Top => self.top,
            PaddingDirection::Right => self.right,
            PaddingDirection::Bottom => self.bottom,
            PaddingDirection::Start => match self.start {
                Some(start) => start,
                None if rtl => self.right,
                None => self.left,
            },
            PaddingDirection::End => match self.end {
                Some(end) => end,
                None if rtl => self.left,
                None => self.right,
            },
        }
    }
}

impl From<i32> for Padding {
    fn from(value: i32) -> Self {
        Self::all(value)
    }
}

impl From<(i32, i32)> for Padding {
    fn from((vertical, horizontal): (i32, i32)) -> Self {
        Self::new(horizontal, vertical, horizontal, vertical)
    }
}

/// A placed element: physical edges in container coordinates.
///
/// `right` and `bottom` are exclusive.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct Frame {
    pub left: i32,
    pub top: i32,
    pub right: i32,
    pub bottom: i32,
}

impl Frame {
    /// Create a frame from its four edges.
    #[inline]
    pub const fn new(left: i32, top: i32, right: i32, bottom: i32) -> Self {
        Self {
            left,
            top,
            right,
            bottom,
        }
    }

    /// Create a frame from an origin and a size.
    #[inline]
    pub const fn from_origin(left: i32, top: i32, width: i32, height: i32) -> Self {
        Self::new(
            left,
            top,
            left.saturating_add(width),
            top.saturating_add(height),
        )
    }

    /// Horizontal extent. Negative when the edges are inverted.
    #[inline]
    pub const fn width(&self) -> i32 {
        self.right.saturating_sub(self.left)
    }

    /// Vertical extent. Negative when the edges are inverted.
    #[inline]
    pub const fn height(&self) -> i32 {
        self.bottom.saturating_sub(self.top)
    }

    /// Horizontal centre, floor-rounded.
    #[inline]
    pub const fn center_x(&self) -> i32 {
        self.left.saturating_add(half(self.width()))
    }

    /// Vertical centre, floor-rounded.
    #[inline]
    pub const fn center_y(&self) -> i32 {
        self.top.saturating_add(half(self.height()))
    }

    /// Check if the frame has no area.
    #[inline]
    pub const fn is_empty(&self) -> bool {
        self.width() <= 0 || self.height() <= 0
    }

    /// Check if a point is inside the frame.
    #[inline]
    pub const fn contains(&self, x: i32, y: i32) -> bool {
        x >= self.left && x < self.right && y >= self.top && y < self.bottom
    }
}
