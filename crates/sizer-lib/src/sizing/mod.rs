//! Sizing engine: requirement calculation and offering ranking

mod matcher;
mod requirements;


pub use matcher::{OfferingMatcher, HOURS_PER_MONTH, MAX_RESULTS};
pub use requirements::{
    RequirementCalculator, SizingConfig, CLOUD_EFFICIENCY, MEMORY_EFFICIENCY, MEMORY_OVERHEAD,
    MIN_COMPUTE_UNITS, MIN_MEMORY_GB, PEAK_BUFFER, STORAGE_HEADROOM,
};
