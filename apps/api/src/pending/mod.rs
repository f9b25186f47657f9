//! Pending confidence writes: debounced slider edits, decoupled from the
//! readiness engine, which only ever sees committed values.

pub mod handlers;
pub mod queue;
