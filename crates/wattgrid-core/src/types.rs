//! Shared data model: traffic classes, benchmark columns, and decisions.

use std::collections::HashMap;

use serde::{Deserialize, Serialize};

use crate::error::{CatalogError, CatalogResult, LookupMiss};

/// Traffic priority class a request is classified into.
///
/// A closed 3-way enumeration; the variant order is the index order used
/// by every 3-slot per-class array in the system.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum TrafficClass {
    /// Lowest priority: accepts the most conservative variant.
    Sustained,
    /// Middle tier: improved when the green budget allows.
    Balanced,
    /// Highest priority: always served by the top-quality variant.
    Performance,
}

impl TrafficClass {
    /// All classes in index order.
    pub const ALL: [TrafficClass; 3] = [
        TrafficClass::Sustained,
        TrafficClass::Balanced,
        TrafficClass::Performance,
    ];

    /// Slot of this class in a per-class array.
    pub fn index(self) -> usize {
        match self {
            TrafficClass::Sustained => 0,
            TrafficClass::Balanced => 1,
            TrafficClass::Performance => 2,
        }
    }

    /// Classify from the client-declared energy objective.
    ///
    /// Unknown or absent objectives default to `Performance`.
    pub fn from_objective(objective: &str) -> Self {
        match objective {
            "eco" => TrafficClass::Sustained,
            "balanced" => TrafficClass::Balanced,
            _ => TrafficClass::Performance,
        }
    }

    pub fn as_str(self) -> &'static str {
        match self {
            TrafficClass::Sustained => "sustained",
            TrafficClass::Balanced => "balanced",
            TrafficClass::Performance => "performance",
        }
    }
}

/// One named substitution parameter of a benchmarked variant.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Parameter {
    pub name: String,
    pub value: String,
}

/// Ordered name → value mapping forwarded to the request-rewriting layer.
///
/// Opaque to the scheduler. Order is preserved from the benchmark data;
/// lookup is a linear scan, which is fine at the handful of parameters a
/// variant carries.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct ParameterSet(Vec<Parameter>);

impl ParameterSet {
    pub fn new(parameters: Vec<Parameter>) -> Self {
        Self(parameters)
    }

    /// Build from `(name, value)` pairs, preserving order.
    pub fn from_pairs<I, S>(pairs: I) -> Self
    where
        I: IntoIterator<Item = (S, S)>,
        S: Into<String>,
    {
        Self(
            pairs
                .into_iter()
                .map(|(name, value)| Parameter {
                    name: name.into(),
                    value: value.into(),
                })
                .collect(),
        )
    }

    /// Value of the first parameter with the given name, if any.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.0
            .iter()
            .find(|p| p.name == name)
            .map(|p| p.value.as_str())
    }

    /// Like [`get`](Self::get), but a miss carries the looked-up name so
    /// the caller can log it and skip the substitution.
    pub fn lookup(&self, name: &str) -> Result<&str, LookupMiss> {
        self.get(name).ok_or_else(|| LookupMiss {
            name: name.to_string(),
        })
    }

    pub fn iter(&self) -> impl Iterator<Item = &Parameter> {
        self.0.iter()
    }

    pub fn len(&self) -> usize {
        self.0.len()
    }

    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }
}

/// Benchmark columns for one endpoint, indexed by variant.
///
/// Index `i` refers to the same variant across all three columns. The
/// columns are immutable once the catalog is built.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct EndpointVariants {
    /// Quality-of-experience score per variant; higher is better, not
    /// required to be unique or ordered.
    pub quality: Vec<i64>,
    /// Median joules consumed per request when the variant is active.
    pub joules_per_request: Vec<f64>,
    /// Substitution parameters per variant.
    pub parameters: Vec<ParameterSet>,
}

impl EndpointVariants {
    /// Number of benchmarked variants.
    pub fn len(&self) -> usize {
        self.quality.len()
    }

    pub fn is_empty(&self) -> bool {
        self.quality.is_empty()
    }

    /// Instantaneous draw (watts) of variant `i` under `rate` requests/s.
    pub fn power(&self, variant: usize, rate: f64) -> f64 {
        self.joules_per_request[variant] * rate
    }

    /// Column-length, non-empty, and non-negative-energy checks.
    ///
    /// The TOML config cannot express a column mismatch (each benchmark
    /// row carries all three fields), but programmatic construction can.
    pub fn validate(&self, endpoint: &str) -> CatalogResult<()> {
        if self.quality.is_empty() {
            return Err(CatalogError::NoVariants(endpoint.to_string()));
        }
        if self.joules_per_request.len() != self.quality.len()
            || self.parameters.len() != self.quality.len()
        {
            return Err(CatalogError::ColumnMismatch {
                endpoint: endpoint.to_string(),
                quality: self.quality.len(),
                energy: self.joules_per_request.len(),
                parameters: self.parameters.len(),
            });
        }
        for (variant, &joules) in self.joules_per_request.iter().enumerate() {
            if joules < 0.0 {
                return Err(CatalogError::NegativeEnergy {
                    endpoint: endpoint.to_string(),
                    variant,
                    joules,
                });
            }
        }
        Ok(())
    }
}

/// The variant selected for one traffic class of one endpoint.
#[derive(Debug, Clone, PartialEq)]
pub struct ClassDecision {
    /// Substitution parameters of the selected variant, for the
    /// request-rewriting layer.
    pub parameters: ParameterSet,
    /// Joules/request saved relative to the performance-tier variant.
    /// Exactly zero for the performance class; negative when the
    /// performance variant happens to be cheaper (never clamped).
    pub expected_savings: f64,
    /// Expected draw (watts) of the selected variant at the rate the
    /// decision was computed for.
    pub expected_draw: f64,
}

/// One scheduling cycle's output for a single endpoint: a decision per
/// traffic class, indexed by [`TrafficClass::index`].
#[derive(Debug, Clone, PartialEq)]
pub struct EndpointDecision {
    classes: [ClassDecision; 3],
}

impl EndpointDecision {
    pub fn new(classes: [ClassDecision; 3]) -> Self {
        Self { classes }
    }

    pub fn for_class(&self, class: TrafficClass) -> &ClassDecision {
        &self.classes[class.index()]
    }
}

/// The full published decision: endpoint name → per-class selections.
///
/// An endpoint absent from the map has no energy decision; the routing
/// layer passes its requests through unmodified.
pub type DecisionSnapshot = HashMap<String, EndpointDecision>;
