//! Scheduler — constrained variant selection under a green-power budget.
//!
//! For every endpoint independently:
//!
//! - The performance class always gets the top-quality variant; it is
//!   excluded from the budget arithmetic.
//! - Sustained and balanced start at the lowest-quality baseline. If
//!   the green budget admits better-than-baseline draw for both, each
//!   is upgraded in turn, reserving the other class's just-chosen draw
//!   from the shared budget.
//! - Each upgrade maximizes quality among variants whose draw fits the
//!   remaining budget, then minimizes draw among quality ties.
//!
//! All quantities are watts: `joules_per_request × requests/s`. The
//! budget is average green watts over the scheduling interval.

use std::sync::Arc;

use wattgrid_core::{
    ClassDecision, DecisionSnapshot, EndpointDecision, EndpointVariants, TrafficClass,
    VariantCatalog,
};

use crate::extremum::{arg_extremum, Direction};

/// Per-class request rates (requests/second) for one scheduling cycle.
///
/// Negative or zero rates are accepted arithmetically; validating the
/// upstream counters is the agent's responsibility.
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct ClassRates {
    pub sustained: f64,
    pub balanced: f64,
    pub performance: f64,
}

impl ClassRates {
    pub fn get(self, class: TrafficClass) -> f64 {
        match class {
            TrafficClass::Sustained => self.sustained,
            TrafficClass::Balanced => self.balanced,
            TrafficClass::Performance => self.performance,
        }
    }
}

/// Stateless decision engine over an immutable catalog.
///
/// `select_configurations` is pure and synchronous; the scheduler is
/// safe to share across tasks.
#[derive(Debug, Clone)]
pub struct Scheduler {
    catalog: Arc<VariantCatalog>,
}

impl Scheduler {
    pub fn new(catalog: Arc<VariantCatalog>) -> Self {
        Self { catalog }
    }

    pub fn catalog(&self) -> &VariantCatalog {
        &self.catalog
    }

    /// Select one variant per traffic class for every endpoint.
    ///
    /// `green_budget` is the average green power (watts) available to
    /// the sustained and balanced classes for the coming interval.
    pub fn select_configurations(&self, rates: &ClassRates, green_budget: f64) -> DecisionSnapshot {
        let mut decisions = DecisionSnapshot::with_capacity(self.catalog.len());
        for (endpoint, variants) in self.catalog.iter() {
            // Catalog construction rejects empty variant lists, so the
            // full-range searches below always yield an index.
            let Some(decision) = select_for_endpoint(variants, rates, green_budget) else {
                continue;
            };
            decisions.insert(endpoint.clone(), decision);
        }
        decisions
    }
}

fn select_for_endpoint(
    variants: &EndpointVariants,
    rates: &ClassRates,
    green_budget: f64,
) -> Option<EndpointDecision> {
    let i_min = arg_extremum(&variants.quality, None, Direction::Min).ok()??;
    let i_max = arg_extremum(&variants.quality, None, Direction::Max).ok()??;

    let performance = i_max;
    let mut sustained = i_min;
    let mut balanced = i_min;

    // Admission check: upgrades are attempted only when the budget
    // covers the baseline draw of both non-performance classes.
    if variants.power(sustained, rates.sustained) + variants.power(i_min, rates.balanced)
        < green_budget
    {
        balanced =
            optimize(variants, rates.balanced, sustained, rates.sustained, green_budget)
                .unwrap_or(i_min);
        sustained =
            optimize(variants, rates.sustained, balanced, rates.balanced, green_budget)
                .unwrap_or(i_min);
    }

    let perf_joules = variants.joules_per_request[performance];
    let decide = |variant: usize, rate: f64| ClassDecision {
        parameters: variants.parameters[variant].clone(),
        expected_savings: perf_joules - variants.joules_per_request[variant],
        expected_draw: variants.power(variant, rate),
    };

    Some(EndpointDecision::new([
        decide(sustained, rates.sustained),
        decide(balanced, rates.balanced),
        decide(performance, rates.performance),
    ]))
}

/// Best variant for one class under the budget left after reserving the
/// other class's draw: maximize quality, then minimize draw among
/// quality ties (first-encountered index wins either tie).
///
/// `None` when no variant fits the remaining budget; the caller keeps
/// its baseline. Unreachable once the admission check has passed, since
/// the baseline variant itself always fits then.
fn optimize(
    variants: &EndpointVariants,
    rate: f64,
    reserve_variant: usize,
    reserve_rate: f64,
    green_budget: f64,
) -> Option<usize> {
    let remaining = green_budget - variants.power(reserve_variant, reserve_rate);
    let candidates: Vec<usize> = (0..variants.len())
        .filter(|&i| variants.power(i, rate) <= remaining)
        .collect();

    let best = arg_extremum(&variants.quality, Some(&candidates), Direction::Max).ok()??;
    let best_quality = variants.quality[best];

    let mut pick = best;
    let mut pick_draw = variants.power(best, rate);
    for &i in &candidates {
        if variants.quality[i] == best_quality {
            let draw = variants.power(i, rate);
            if draw < pick_draw {
                pick = i;
                pick_draw = draw;
            }
        }
    }
    Some(pick)
}
