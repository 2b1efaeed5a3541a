//! wattgrid-scheduler — the energy-aware scheduling decision engine.
//!
//! Turns {per-variant quality/energy benchmarks, per-class request
//! rates, a green-power budget} into one selected configuration variant
//! per traffic class per endpoint, plus the expected savings of each
//! selection.
//!
//! The scheduler is a pure, synchronous computation over an immutable
//! catalog: no captured mutable state, no suspension points, safe to
//! call from any number of tasks. The concurrent shell around it (live
//! counters, forecast fetch, decision publication) lives in
//! `wattgrid-agent`.

pub mod extremum;
pub mod scheduler;

pub use extremum::{arg_extremum, Direction, ExtremumError};
pub use scheduler::{ClassRates, Scheduler};
