//! Core error types.

use thiserror::Error;

/// Catalog or configuration validation failures.
///
/// All of these are fatal at startup: the scheduler must never run
/// against an endpoint that failed validation.
#[derive(Debug, Error)]
pub enum CatalogError {
    #[error("endpoint {0} has no benchmarked variants")]
    NoVariants(String),

    #[error(
        "endpoint {endpoint}: benchmark columns have mismatched lengths \
         (quality {quality}, energy {energy}, parameters {parameters})"
    )]
    ColumnMismatch {
        endpoint: String,
        quality: usize,
        energy: usize,
        parameters: usize,
    },

    #[error("endpoint {endpoint}: variant {variant} has negative energy ({joules} J/request)")]
    NegativeEnergy {
        endpoint: String,
        variant: usize,
        joules: f64,
    },

    #[error("recomputation interval must be a positive number of seconds")]
    ZeroInterval,
}

pub type CatalogResult<T> = Result<T, CatalogError>;

/// A parameter name with no match in a selected variant's parameter set.
///
/// Recoverable and per-request: the routing layer skips the affected
/// substitution and serves the request with a partial rewrite.
#[derive(Debug, Error, Clone, PartialEq, Eq)]
#[error("no parameter named {name} in the selected variant")]
pub struct LookupMiss {
    pub name: String,
}
