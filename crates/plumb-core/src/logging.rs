#![forbid(unsafe_code)]

//! Logging and tracing support.
//!
//! With the `tracing` feature the solver emits structured events through the
//! [`tracing`](https://docs.rs/tracing) macros re-exported here. Without it the
//! same call sites expand to nothing.

#[cfg(feature = "tracing")]
pub use tracing::{debug, debug_span, trace, warn};

// When tracing is not enabled, provide no-op macros
#[cfg(not(feature = "tracing"))]
mod noop_macros {
    /// No-op debug macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug {
        ($($arg:tt)*) => {};
    }

    /// No-op debug_span macro when tracing is disabled.
    #[macro_export]
    macro_rules! debug_span {
        ($($arg:tt)*) => {
            $crate::logging::NoopSpan
        };
    }

    /// No-op trace macro when tracing is disabled.
    #[macro_export]
    macro_rules! trace {
        ($($arg:tt)*) => {};
    }

    /// No-op warn macro when tracing is disabled.
    #[macro_export]
    macro_rules! warn {
        ($($arg:tt)*) => {};
    }
}

/// Stand-in for a tracing span when tracing is disabled.
#[cfg(not(feature = "tracing"))]
#[derive(Debug, Clone, Copy, Default)]
pub struct NoopSpan;

#[cfg(not(feature = "tracing"))]
impl NoopSpan {
    /// Enter the no-op span. The guard does nothing on drop.
    pub fn enter(&self) -> NoopGuard {
        NoopGuard
    }
}

/// Guard returned by [`NoopSpan::enter`].
#[cfg(not(feature = "tracing"))]
#[derive(Debug)]
pub struct NoopGuard;
