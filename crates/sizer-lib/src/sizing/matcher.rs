//! Offering selection and ranking
//!
//! Filters the catalog down to offerings that satisfy a requirement on
//! both capacity axes, scores each survivor by how tightly it fits, and
//! returns the best candidates with derived monthly costs.

use std::cmp::Ordering;

use tracing::debug;

use crate::catalog::Catalog;
use crate::models::{MatchResult, RequirementResult};

/// Fixed 720-hour month used for cost derivation (not calendar-accurate)
pub const HOURS_PER_MONTH: f64 = 720.0;

/// How many ranked candidates are returned at most
pub const MAX_RESULTS: usize = 5;

/// Ranks catalog offerings against a requirement
pub struct OfferingMatcher {
    max_results: usize,
}

impl OfferingMatcher {
    pub fn new() -> Self {
        Self {
            max_results: MAX_RESULTS,
        }
    }

    pub fn with_max_results(max_results: usize) -> Self {
        Self { max_results }
    }

    /// Rank offerings that satisfy the requirement, tightest fit first
    ///
    /// Only offerings meeting both the compute and memory thresholds
    /// survive, so every returned efficiency ratio is at most 1.0. Ties
    /// keep catalog listing order (the sort is stable). An empty result
    /// means no offering fits; it is a valid outcome, not an error.
    pub fn rank(&self, catalog: &Catalog, requirement: &RequirementResult) -> Vec<MatchResult> {
        let mut matches: Vec<MatchResult> = catalog
            .offerings()
            .iter()
            .filter(|o| {
                o.compute_units >= requirement.compute_units
                    && o.memory_gb >= requirement.memory_gb
            })
            .map(|o| {
                let compute_efficiency =
                    requirement.compute_units as f64 / o.compute_units as f64;
                let memory_efficiency = requirement.memory_gb as f64 / o.memory_gb as f64;
                MatchResult {
                    offering: o.clone(),
                    compute_efficiency,
                    memory_efficiency,
                    overall_efficiency: (compute_efficiency + memory_efficiency) / 2.0,
                    on_demand_monthly: o.on_demand_hourly * HOURS_PER_MONTH,
                    reserved_monthly: o.reserved_hourly * HOURS_PER_MONTH,
                    spot_monthly: o.spot_hourly * HOURS_PER_MONTH,
                }
            })
            .collect();

        matches.sort_by(|a, b| {
            b.overall_efficiency
                .partial_cmp(&a.overall_efficiency)
                .unwrap_or(Ordering::Equal)
        });
        matches.truncate(self.max_results);

        debug!(
            compute_units = requirement.compute_units,
            memory_gb = requirement.memory_gb,
            candidates = matches.len(),
            "offerings ranked"
        );

        matches
    }
}

impl Default for OfferingMatcher {
    fn default() -> Self {
        Self::new()
    }
}
