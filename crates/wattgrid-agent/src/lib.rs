//! wattgrid-agent — the concurrent shell around the pure scheduler.
//!
//! The scheduler itself is a pure function; this crate owns all shared
//! mutable state and the background work that feeds it:
//!
//! - `ClassCounters`: lock-free per-class request counters, drained
//!   once per recomputation window
//! - the forecast seam: a boxed async callback to the external
//!   green-power forecast collaborator, bounded by a timeout and backed
//!   by a configured default
//! - `DecisionBoard`: the published decision snapshot, replaced
//!   wholesale under a reader/writer lock
//! - `Agent::run`: the periodic, cancellable recomputation loop
//!
//! # Architecture
//!
//! ```text
//! request path ──record()──▶ ClassCounters
//!                                 │ drain() per tick
//! forecast collaborator ──▶ Agent::run ──▶ Scheduler::select_configurations
//!                                 │
//!                                 ▼ publish()
//! request path ◀──snapshot()── DecisionBoard
//! ```

pub mod agent;
pub mod board;
pub mod counters;
pub mod forecast;

pub use agent::Agent;
pub use board::DecisionBoard;
pub use counters::{ClassCounters, ClassCounts};
pub use forecast::{fetch_or_default, BoxForecast, ForecastFn};
