//! Variant catalog — immutable per-endpoint benchmark columns.
//!
//! Built once at startup from the declarative configuration; never
//! mutated afterwards. Construction is the validation boundary: a
//! catalog that exists is a catalog the scheduler can run against.

use std::collections::HashMap;

use crate::config::WattgridConfig;
use crate::error::CatalogResult;
use crate::types::{EndpointVariants, ParameterSet};

/// Endpoint name → benchmark columns.
#[derive(Debug, Clone, Default)]
pub struct VariantCatalog {
    endpoints: HashMap<String, EndpointVariants>,
}

impl VariantCatalog {
    /// Pure transform from the declarative config; no I/O.
    ///
    /// Fails fast with a `CatalogError` on an endpoint with zero
    /// variants or a negative energy figure.
    pub fn from_config(config: &WattgridConfig) -> CatalogResult<Self> {
        let entries = config.endpoints.iter().map(|endpoint| {
            let mut variants = EndpointVariants::default();
            for entry in &endpoint.benchmark {
                variants.quality.push(entry.qoe);
                variants
                    .joules_per_request
                    .push(entry.median_joules_per_request);
                variants
                    .parameters
                    .push(ParameterSet::new(entry.parameters.clone()));
            }
            (endpoint.name.clone(), variants)
        });
        Self::from_entries(entries)
    }

    /// Build from already-shaped benchmark columns, validating each.
    pub fn from_entries<I>(entries: I) -> CatalogResult<Self>
    where
        I: IntoIterator<Item = (String, EndpointVariants)>,
    {
        let mut endpoints = HashMap::new();
        for (name, variants) in entries {
            variants.validate(&name)?;
            endpoints.insert(name, variants);
        }
        Ok(Self { endpoints })
    }

    pub fn get(&self, endpoint: &str) -> Option<&EndpointVariants> {
        self.endpoints.get(endpoint)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&String, &EndpointVariants)> {
        self.endpoints.iter()
    }

    pub fn len(&self) -> usize {
        self.endpoints.len()
    }

    pub fn is_empty(&self) -> bool {
        self.endpoints.is_empty()
    }
}
