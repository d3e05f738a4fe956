#![forbid(unsafe_code)]

//! Core: axis primitives, padding resolution, frames and logging support.

pub mod geometry;
pub mod logging;

// Re-export tracing macros at crate root for ergonomic use.
#[cfg(feature = "tracing")]
pub use logging::{debug, debug_span, trace, warn};
