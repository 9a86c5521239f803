//! Requirement calculation
//!
//! Converts raw current-usage inputs into forward-looking required
//! capacity by applying the resolved profile's multipliers and a fixed
//! set of buffer/efficiency factors.

use tracing::debug;

use crate::catalog::Catalog;
use crate::errors::{Result, SizingError};
use crate::models::{RequirementResult, SizingInputs};

/// Burst headroom applied above observed peak CPU (30%)
pub const PEAK_BUFFER: f64 = 1.3;

/// On-prem-to-cloud compute efficiency assumption
pub const CLOUD_EFFICIENCY: f64 = 0.7;

/// OS/hypervisor memory overhead
pub const MEMORY_OVERHEAD: f64 = 1.15;

/// Memory efficiency assumption
pub const MEMORY_EFFICIENCY: f64 = 0.85;

/// Storage headroom buffer (20%)
pub const STORAGE_HEADROOM: f64 = 1.2;

/// Smallest compute recommendation ever produced
pub const MIN_COMPUTE_UNITS: u32 = 2;

/// Smallest memory recommendation ever produced (GB)
pub const MIN_MEMORY_GB: u32 = 4;

/// Policy factors applied by the calculator
///
/// The defaults are the documented sizing policy; tests inject
/// alternative tables to pin individual formula terms.
#[derive(Debug, Clone)]
pub struct SizingConfig {
    pub peak_buffer: f64,
    pub cloud_efficiency: f64,
    pub memory_overhead: f64,
    pub memory_efficiency: f64,
    pub storage_headroom: f64,
    pub min_compute_units: u32,
    pub min_memory_gb: u32,
}

impl Default for SizingConfig {
    fn default() -> Self {
        Self {
            peak_buffer: PEAK_BUFFER,
            cloud_efficiency: CLOUD_EFFICIENCY,
            memory_overhead: MEMORY_OVERHEAD,
            memory_efficiency: MEMORY_EFFICIENCY,
            storage_headroom: STORAGE_HEADROOM,
            min_compute_units: MIN_COMPUTE_UNITS,
            min_memory_gb: MIN_MEMORY_GB,
        }
    }
}

/// Translates sizing inputs into required capacity
pub struct RequirementCalculator {
    config: SizingConfig,
}

impl RequirementCalculator {
    pub fn new() -> Self {
        Self {
            config: SizingConfig::default(),
        }
    }

    pub fn with_config(config: SizingConfig) -> Self {
        Self { config }
    }

    /// Compute required capacity for one sizing request
    ///
    /// Deterministic pure function of its inputs; the only lookup is the
    /// profile resolution, whose `UnknownProfile` error propagates
    /// unchanged. Utilization percentages are a documented caller-side
    /// precondition (clamped to [0, 100] before invocation) and are not
    /// re-validated here.
    pub fn compute(&self, catalog: &Catalog, inputs: &SizingInputs) -> Result<RequirementResult> {
        self.validate(inputs)?;

        let profile = catalog.profile(&inputs.profile)?.clone();

        let compute_units = (inputs.current_cores
            * (inputs.peak_cpu_util_percent / 100.0)
            * profile.compute_factor
            * self.config.peak_buffer
            / self.config.cloud_efficiency)
            .ceil() as u32;
        let compute_units = compute_units.max(self.config.min_compute_units);

        let memory_gb = (inputs.current_memory_gb
            * (inputs.peak_memory_util_percent / 100.0)
            * profile.memory_factor
            * self.config.memory_overhead
            / self.config.memory_efficiency)
            .ceil() as u32;
        let memory_gb = memory_gb.max(self.config.min_memory_gb);

        let growth_factor =
            (1.0 + inputs.annual_growth_rate).powi(inputs.planning_horizon_years as i32);
        let storage_gb = (inputs.current_storage_gb
            * profile.storage_factor
            * growth_factor
            * self.config.storage_headroom)
            .ceil() as u64;

        debug!(
            profile = %profile.key,
            compute_units,
            memory_gb,
            storage_gb,
            "requirement computed"
        );

        Ok(RequirementResult {
            compute_units,
            memory_gb,
            storage_gb,
            profile,
        })
    }

    fn validate(&self, inputs: &SizingInputs) -> Result<()> {
        if inputs.current_cores < 0.0 {
            return Err(SizingError::InvalidInput(format!(
                "current cores must be non-negative (got {})",
                inputs.current_cores
            )));
        }
        if inputs.current_memory_gb < 0.0 {
            return Err(SizingError::InvalidInput(format!(
                "current memory must be non-negative (got {} GB)",
                inputs.current_memory_gb
            )));
        }
        if inputs.current_storage_gb < 0.0 {
            return Err(SizingError::InvalidInput(format!(
                "current storage must be non-negative (got {} GB)",
                inputs.current_storage_gb
            )));
        }
        if inputs.planning_horizon_years == 0 {
            return Err(SizingError::InvalidInput(
                "planning horizon must be at least one year".to_string(),
            ));
        }
        Ok(())
    }
}

impl Default for RequirementCalculator {
    fn default() -> Self {
        Self::new()
    }
}
