//! wattgrid-core — shared data model for energy-aware scheduling.
//!
//! Holds the types every other wattgrid crate speaks:
//!
//! - `TrafficClass`: the closed 3-way priority enumeration requests are
//!   classified into
//! - `VariantCatalog`: immutable per-endpoint benchmark columns
//!   (quality score, joules/request, substitution parameters)
//! - `EndpointDecision` / `DecisionSnapshot`: the scheduler's published
//!   output, one selected variant per class per endpoint
//! - `WattgridConfig`: the declarative TOML configuration the catalog is
//!   built from at startup

pub mod catalog;
pub mod config;
pub mod error;
pub mod types;

pub use catalog::VariantCatalog;
pub use config::{AgentConfig, BenchmarkEntry, EndpointConfig, ParameterSlot, WattgridConfig};
pub use error::{CatalogError, CatalogResult, LookupMiss};
pub use types::{
    ClassDecision, DecisionSnapshot, EndpointDecision, EndpointVariants, Parameter, ParameterSet,
    TrafficClass,
};
