//! Per-pass memoization with re-entrancy detection.

use std::cell::Cell;

use crate::LayoutError;

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
enum Slot {
    #[default]
    Unresolved,
    InProgress,
    Resolved(i32),
}

/// A lazily computed axis value.
///
/// While the computation runs the slot is marked in progress; asking for the
/// value again from inside that computation is a dependency cycle.
#[derive(Debug, Default)]
pub(crate) struct Memo {
    slot: Cell<Slot>,
}

impl Memo {
    pub(crate) const fn new() -> Self {
        Self {
            slot: Cell::new(Slot::Unresolved),
        }
    }

    /// The cached value, if resolved.
    pub(crate) fn get(&self) -> Option<i32> {
        match self.slot.get() {
            Slot::Resolved(value) => Some(value),
            Slot::Unresolved | Slot::InProgress => None,
        }
    }

    pub(crate) fn clear(&self) {
        self.slot.set(Slot::Unresolved);
    }

    /// Return the cached value or run `compute` to produce it.
    ///
    /// A failed computation leaves the slot unresolved.
    pub(crate) fn resolve_with(
        &self,
        on_cycle: impl FnOnce() -> LayoutError,
        compute: impl FnOnce() -> Result<i32, LayoutError>,
    ) -> Result<i32, LayoutError> {
        match self.slot.get() {
            Slot::Resolved(value) => Ok(value),
            Slot::InProgress => {
                let err = on_cycle();
                plumb_core::debug!(error = %err, "dependency cycle detected");
                Err(err)
            }
            Slot::Unresolved => {
                self.slot.set(Slot::InProgress);
                let result = compute();
                self.slot.set(match result {
                    Ok(value) => Slot::Resolved(value),
                    Err(_) => Slot::Unresolved,
                });
                result
            }
        }
    }
}
