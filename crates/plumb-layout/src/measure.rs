//! Size negotiation between the solver and the measurement step.
//!
//! A solver turns its constraints into a [`MeasureSpec`] per axis; the
//! container hands both specs to the element's [`Measure`] implementation and
//! reports the [`Measured`] result back to the solvers.

/// How strictly a requested size must be honoured.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
#[cfg_attr(feature = "serde", serde(rename_all = "snake_case"))]
pub enum SizeMode {
    /// The element must take exactly the requested size.
    Exact,
    /// The element may shrink to fit, up to the requested size.
    AtMost,
    /// No bound: the element reports its own size.
    #[default]
    Unspecified,
}

/// A size request along one axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Default)]
#[cfg_attr(feature = "serde", derive(serde::Serialize, serde::Deserialize))]
pub struct MeasureSpec {
    pub size: i32,
    pub mode: SizeMode,
}

impl MeasureSpec {
    /// Zero-size request with no bound.
    pub const UNSPECIFIED: Self = Self::new(0, SizeMode::Unspecified);

    /// Create a request.
    #[inline]
    pub const fn new(size: i32, mode: SizeMode) -> Self {
        Self { size, mode }
    }

    /// Request exactly `size`.
    #[inline]
    pub const fn exact(size: i32) -> Self {
        Self::new(size, SizeMode::Exact)
    }

    /// Request at most `size`.
    #[inline]
    pub const fn at_most(size: i32) -> Self {
        Self::new(size, SizeMode::AtMost)
    }

    /// Reconcile the size an element would like with this request.
    ///
    /// ```
    /// use plumb_layout::MeasureSpec;
    ///
    /// assert_eq!(MeasureSpec::exact(80).resolve(30), 80);
    /// assert_eq!(MeasureSpec::at_most(20).resolve(30), 20);
    /// assert_eq!(MeasureSpec::at_most(40).resolve(30), 30);
    /// assert_eq!(MeasureSpec::UNSPECIFIED.resolve(30), 30);
    /// ```
    #[inline]
    pub fn resolve(self, desired: i32) -> i32 {
        match self.mode {
            SizeMode::Exact => self.size,
            SizeMode::AtMost => desired.min(self.size),
            SizeMode::Unspecified => desired,
        }
    }
}

/// Result of measuring an element.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Measured {
    pub width: i32,
    pub height: i32,
    /// Distance from the top edge to the text baseline, if the element has one.
    pub baseline: Option<i32>,
}

impl Measured {
    /// A measurement without a baseline.
    #[inline]
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            baseline: None,
        }
    }

    /// Attach a baseline offset.
    #[must_use]
    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

/// The renderable side of an element: computes its size for a pair of requests.
///
/// Implementations must be synchronous and must not call back into the
/// container.
pub trait Measure {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Measured;
}

impl<F> Measure for F
where
    F: Fn(MeasureSpec, MeasureSpec) -> Measured,
{
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Measured {
        self(width, height)
    }
}

/// Content with a fixed preferred size that honours the incoming requests.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct Intrinsic {
    pub width: i32,
    pub height: i32,
    pub baseline: Option<i32>,
}

impl Intrinsic {
    pub const fn new(width: i32, height: i32) -> Self {
        Self {
            width,
            height,
            baseline: None,
        }
    }

    #[must_use]
    pub const fn with_baseline(mut self, baseline: i32) -> Self {
        self.baseline = Some(baseline);
        self
    }
}

impl Measure for Intrinsic {
    fn measure(&self, width: MeasureSpec, height: MeasureSpec) -> Measured {
        Measured {
            width: width.resolve(self.width),
            height: height.resolve(self.height),
            baseline: self.baseline,
        }
    }
}
