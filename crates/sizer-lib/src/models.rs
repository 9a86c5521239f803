//! Core data models for the workload sizer

use serde::{Deserialize, Serialize};
use std::fmt;

/// Instance family an offering belongs to
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum InstanceFamily {
    General,
    Memory,
    Compute,
}

impl fmt::Display for InstanceFamily {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            InstanceFamily::General => write!(f, "general"),
            InstanceFamily::Memory => write!(f, "memory"),
            InstanceFamily::Compute => write!(f, "compute"),
        }
    }
}

/// One virtual-machine configuration in the fixed catalog
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Offering {
    pub id: String,
    pub compute_units: u32,
    pub memory_gb: u32,
    pub family: InstanceFamily,
    /// Price per hour, on-demand tier
    pub on_demand_hourly: f64,
    /// Price per hour, reserved tier (at most the on-demand price)
    pub reserved_hourly: f64,
    /// Price per hour, spot tier
    pub spot_hourly: f64,
    pub network_performance: String,
}

/// Named multiplier set describing how a workload class scales
/// compute, memory, and storage relative to raw usage
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct WorkloadProfile {
    pub key: String,
    pub display_name: String,
    pub compute_factor: f64,
    pub memory_factor: f64,
    pub storage_factor: f64,
    pub description: String,
}

/// Catalog region entry (display concern only, not used by calculations)
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Region {
    pub code: String,
    pub display_name: String,
}

/// Raw inputs for one sizing request
///
/// Utilization percentages are expected to be clamped to [0, 100] by the
/// caller before invocation; negative usage figures and a zero planning
/// horizon are rejected by the calculator.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SizingInputs {
    pub profile: String,
    pub current_cores: f64,
    pub peak_cpu_util_percent: f64,
    pub current_memory_gb: f64,
    pub peak_memory_util_percent: f64,
    pub current_storage_gb: f64,
    pub planning_horizon_years: u32,
    pub annual_growth_rate: f64,
}

impl Default for SizingInputs {
    fn default() -> Self {
        Self {
            profile: String::new(),
            current_cores: 0.0,
            peak_cpu_util_percent: 0.0,
            current_memory_gb: 0.0,
            peak_memory_util_percent: 0.0,
            current_storage_gb: 0.0,
            planning_horizon_years: 3,
            annual_growth_rate: 0.15,
        }
    }
}

/// Required capacity produced by the requirement calculator
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct RequirementResult {
    pub compute_units: u32,
    pub memory_gb: u32,
    pub storage_gb: u64,
    pub profile: WorkloadProfile,
}

/// One ranked candidate offering with fit and cost metrics
///
/// The offering always satisfies both capacity axes of the originating
/// requirement, so both efficiency ratios are at most 1.0.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct MatchResult {
    pub offering: Offering,
    pub compute_efficiency: f64,
    pub memory_efficiency: f64,
    pub overall_efficiency: f64,
    pub on_demand_monthly: f64,
    pub reserved_monthly: f64,
    pub spot_monthly: f64,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_sizing_inputs_defaults() {
        let inputs = SizingInputs::default();
        assert_eq!(inputs.planning_horizon_years, 3);
        assert!((inputs.annual_growth_rate - 0.15).abs() < f64::EPSILON);
    }

    #[test]
    fn test_instance_family_serializes_lowercase() {
        let json = serde_json::to_string(&InstanceFamily::General).unwrap();
        assert_eq!(json, "\"general\"");
        assert_eq!(InstanceFamily::Memory.to_string(), "memory");
    }
}
