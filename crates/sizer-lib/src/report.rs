//! Report-row assembly for tabular exports
//!
//! The core hands these rows to the presentation layer; encoding them
//! (CSV, JSON) and writing files stays outside the library.

use serde::{Deserialize, Serialize};

use crate::models::MatchResult;

/// Months in the annual reserved-savings projection
const MONTHS_PER_YEAR: f64 = 12.0;

/// One exportable row per ranked offering
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ReportRow {
    pub instance: String,
    pub compute_units: u32,
    pub memory_gb: u32,
    pub family: String,
    pub efficiency_percent: f64,
    pub on_demand_monthly: f64,
    pub reserved_monthly: f64,
    pub spot_monthly: f64,
    /// Yearly saving of the reserved tier over on-demand
    pub annual_reserved_savings: f64,
}

/// Build export rows for a ranked match list, preserving rank order
pub fn build_report(matches: &[MatchResult]) -> Vec<ReportRow> {
    matches
        .iter()
        .map(|m| ReportRow {
            instance: m.offering.id.clone(),
            compute_units: m.offering.compute_units,
            memory_gb: m.offering.memory_gb,
            family: m.offering.family.to_string(),
            efficiency_percent: m.overall_efficiency * 100.0,
            on_demand_monthly: m.on_demand_monthly,
            reserved_monthly: m.reserved_monthly,
            spot_monthly: m.spot_monthly,
            annual_reserved_savings: (m.on_demand_monthly - m.reserved_monthly)
                * MONTHS_PER_YEAR,
        })
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::Catalog;
    use crate::models::SizingInputs;
    use crate::sizing::{OfferingMatcher, RequirementCalculator};

    fn ranked() -> Vec<MatchResult> {
        let catalog = Catalog::builtin();
        let inputs = SizingInputs {
            profile: "web_server".to_string(),
            current_cores: 8.0,
            peak_cpu_util_percent: 75.0,
            current_memory_gb: 32.0,
            peak_memory_util_percent: 80.0,
            current_storage_gb: 500.0,
            ..SizingInputs::default()
        };
        let requirement = RequirementCalculator::new().compute(&catalog, &inputs).unwrap();
        OfferingMatcher::new().rank(&catalog, &requirement)
    }

    #[test]
    fn test_rows_preserve_rank_order() {
        let matches = ranked();
        let rows = build_report(&matches);

        assert_eq!(rows.len(), matches.len());
        for (row, m) in rows.iter().zip(&matches) {
            assert_eq!(row.instance, m.offering.id);
        }
    }

    #[test]
    fn test_annual_savings_is_twelve_monthly_deltas() {
        let matches = ranked();
        let rows = build_report(&matches);

        for (row, m) in rows.iter().zip(&matches) {
            let expected = (m.on_demand_monthly - m.reserved_monthly) * 12.0;
            assert!((row.annual_reserved_savings - expected).abs() < 1e-9);
            assert!(row.annual_reserved_savings >= 0.0);
        }
    }

    #[test]
    fn test_efficiency_rendered_as_percent() {
        let matches = ranked();
        let rows = build_report(&matches);

        for (row, m) in rows.iter().zip(&matches) {
            assert!((row.efficiency_percent - m.overall_efficiency * 100.0).abs() < 1e-9);
            assert!(row.efficiency_percent <= 100.0);
        }
    }

    #[test]
    fn test_empty_matches_yield_empty_report() {
        let rows = build_report(&[]);
        assert!(rows.is_empty());
    }
}
