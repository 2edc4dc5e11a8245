//! Tracing hooks for operator lifecycle events.
//!
//! Compiled to no-ops unless the `tracing` feature is enabled.

#[cfg(feature = "tracing")]
pub(crate) fn op_event(op: &'static str, event: &'static str) {
    tracing::trace!(op, event, "operator");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn op_event(_op: &'static str, _event: &'static str) {}

#[cfg(feature = "tracing")]
pub(crate) fn op_rows(op: &'static str, event: &'static str, rows: usize) {
    tracing::debug!(op, event, rows, "operator");
}

#[cfg(not(feature = "tracing"))]
pub(crate) fn op_rows(_op: &'static str, _event: &'static str, _rows: usize) {}
