//! Core library for the cloud workload sizer
//!
//! This crate provides the core functionality for:
//! - The fixed offering/profile/region catalog
//! - Requirement calculation from on-prem usage inputs
//! - Offering matching and efficiency ranking
//! - Export report-row assembly

pub mod catalog;
pub mod errors;
pub mod models;
pub mod report;
pub mod sizing;

pub use catalog::Catalog;
pub use errors::{Result, SizingError};
pub use models::*;
pub use report::{build_report, ReportRow};
pub use sizing::{OfferingMatcher, RequirementCalculator, SizingConfig};
