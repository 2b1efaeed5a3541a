//! wattgrid.toml configuration parser.
//!
//! Loaded once at startup. Validation is eager: a malformed catalog
//! aborts startup rather than letting the scheduler run against it.

use std::path::Path;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult};
use crate::types::Parameter;

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct WattgridConfig {
    pub agent: AgentConfig,
    #[serde(default)]
    pub endpoints: Vec<EndpointConfig>,
}

/// Settings for the recomputation agent.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct AgentConfig {
    /// Seconds between scheduling recomputations.
    pub interval_secs: u64,
    /// Fallback green power (average watts) used when the forecast
    /// source is unavailable or returns a malformed value.
    pub default_green_watts: f64,
    /// Location of the forecast source. Opaque here; consumed by the
    /// external forecast collaborator.
    pub forecast_url: Option<String>,
    /// Upper bound on a single forecast fetch.
    #[serde(default = "default_forecast_timeout_secs")]
    pub forecast_timeout_secs: u64,
}

fn default_forecast_timeout_secs() -> u64 {
    5
}

/// One endpoint and its benchmarked configuration variants.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct EndpointConfig {
    pub name: String,
    /// Rewrite target for the routing layer. Opaque here.
    pub redirect: Option<String>,
    /// Parameter slots the routing layer substitutes into the rewrite
    /// target (name plus slot kind, e.g. path or query). Opaque here.
    #[serde(default)]
    pub parameters: Vec<ParameterSlot>,
    pub benchmark: Vec<BenchmarkEntry>,
}

#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct ParameterSlot {
    pub name: String,
    pub kind: String,
}

/// One benchmarked operating point of an endpoint.
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct BenchmarkEntry {
    /// Quality-of-experience score; higher is better.
    pub qoe: i64,
    pub median_joules_per_request: f64,
    #[serde(default)]
    pub parameters: Vec<Parameter>,
}

impl WattgridConfig {
    pub fn from_file(path: &Path) -> anyhow::Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> anyhow::Result<Self> {
        let config: WattgridConfig = toml::from_str(content)?;
        config.validate()?;
        Ok(config)
    }

    /// Fail fast on input the scheduler must never see.
    pub fn validate(&self) -> CatalogResult<()> {
        if self.agent.interval_secs == 0 {
            return Err(CatalogError::ZeroInterval);
        }
        for endpoint in &self.endpoints {
            if endpoint.benchmark.is_empty() {
                return Err(CatalogError::NoVariants(endpoint.name.clone()));
            }
            for (variant, entry) in endpoint.benchmark.iter().enumerate() {
                if entry.median_joules_per_request < 0.0 {
                    return Err(CatalogError::NegativeEnergy {
                        endpoint: endpoint.name.clone(),
                        variant,
                        joules: entry.median_joules_per_request,
                    });
                }
            }
        }
        Ok(())
    }
}
