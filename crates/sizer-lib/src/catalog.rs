//! Fixed offering, workload-profile, and region registry
//!
//! The catalog is pure data: built once, never mutated, shared freely
//! across concurrent readers. Lookups are by key; offerings keep their
//! listing order, which downstream ranking uses to break ties.

use std::sync::OnceLock;

use tracing::debug;

use crate::errors::{Result, SizingError};
use crate::models::{InstanceFamily, Offering, Region, WorkloadProfile};

/// Process-wide catalog instance (built once)
static GLOBAL_CATALOG: OnceLock<Catalog> = OnceLock::new();

/// Read-only registry of offerings, workload profiles, and regions
#[derive(Debug, Clone)]
pub struct Catalog {
    offerings: Vec<Offering>,
    profiles: Vec<WorkloadProfile>,
    regions: Vec<Region>,
}

impl Catalog {
    /// Construct a catalog from explicit tables
    pub fn new(
        offerings: Vec<Offering>,
        profiles: Vec<WorkloadProfile>,
        regions: Vec<Region>,
    ) -> Self {
        Self {
            offerings,
            profiles,
            regions,
        }
    }

    /// The process-wide built-in catalog, initialized on first use
    pub fn global() -> &'static Catalog {
        GLOBAL_CATALOG.get_or_init(|| {
            let catalog = Self::builtin();
            debug!(
                offerings = catalog.offerings.len(),
                profiles = catalog.profiles.len(),
                regions = catalog.regions.len(),
                "built-in catalog initialized"
            );
            catalog
        })
    }

    /// Offerings in catalog listing order
    pub fn offerings(&self) -> &[Offering] {
        &self.offerings
    }

    /// Resolve a workload profile by key
    pub fn profile(&self, key: &str) -> Result<&WorkloadProfile> {
        self.profiles
            .iter()
            .find(|p| p.key == key)
            .ok_or_else(|| SizingError::UnknownProfile(key.to_string()))
    }

    /// All workload profiles in listing order
    pub fn profiles(&self) -> &[WorkloadProfile] {
        &self.profiles
    }

    /// Region codes with display labels (presentation concern only)
    pub fn regions(&self) -> &[Region] {
        &self.regions
    }

    /// The fixed built-in tables
    pub fn builtin() -> Self {
        Self::new(builtin_offerings(), builtin_profiles(), builtin_regions())
    }
}

fn offering(
    id: &str,
    family: InstanceFamily,
    compute_units: u32,
    memory_gb: u32,
    on_demand_hourly: f64,
    reserved_hourly: f64,
    spot_hourly: f64,
    network_performance: &str,
) -> Offering {
    Offering {
        id: id.to_string(),
        compute_units,
        memory_gb,
        family,
        on_demand_hourly,
        reserved_hourly,
        spot_hourly,
        network_performance: network_performance.to_string(),
    }
}

fn builtin_offerings() -> Vec<Offering> {
    use InstanceFamily::{Compute, General, Memory};

    vec![
        offering("m5.large", General, 2, 8, 0.096, 0.060, 0.029, "Up to 10 Gigabit"),
        offering("m5.xlarge", General, 4, 16, 0.192, 0.121, 0.058, "Up to 10 Gigabit"),
        offering("m5.2xlarge", General, 8, 32, 0.384, 0.242, 0.115, "Up to 10 Gigabit"),
        offering("m5.4xlarge", General, 16, 64, 0.768, 0.484, 0.230, "Up to 10 Gigabit"),
        offering("m5.8xlarge", General, 32, 128, 1.536, 0.968, 0.461, "10 Gigabit"),
        offering("c5.large", Compute, 2, 4, 0.085, 0.054, 0.026, "Up to 10 Gigabit"),
        offering("c5.xlarge", Compute, 4, 8, 0.170, 0.107, 0.051, "Up to 10 Gigabit"),
        offering("c5.2xlarge", Compute, 8, 16, 0.340, 0.214, 0.102, "Up to 10 Gigabit"),
        offering("c5.4xlarge", Compute, 16, 32, 0.680, 0.428, 0.204, "Up to 10 Gigabit"),
        offering("c5.9xlarge", Compute, 36, 72, 1.530, 0.964, 0.459, "10 Gigabit"),
        offering("r5.large", Memory, 2, 16, 0.126, 0.079, 0.038, "Up to 10 Gigabit"),
        offering("r5.xlarge", Memory, 4, 32, 0.252, 0.158, 0.076, "Up to 10 Gigabit"),
        offering("r5.2xlarge", Memory, 8, 64, 0.504, 0.315, 0.151, "Up to 10 Gigabit"),
        offering("r5.4xlarge", Memory, 16, 128, 1.008, 0.630, 0.302, "10 Gigabit"),
    ]
}

fn profile(
    key: &str,
    display_name: &str,
    compute_factor: f64,
    memory_factor: f64,
    storage_factor: f64,
    description: &str,
) -> WorkloadProfile {
    WorkloadProfile {
        key: key.to_string(),
        display_name: display_name.to_string(),
        compute_factor,
        memory_factor,
        storage_factor,
        description: description.to_string(),
    }
}

fn builtin_profiles() -> Vec<WorkloadProfile> {
    vec![
        profile(
            "web_server",
            "Web Server",
            1.0,
            1.0,
            0.8,
            "Stateless request serving with modest local storage",
        ),
        profile(
            "app_server",
            "Application Server",
            1.2,
            1.1,
            1.0,
            "Business logic tier with session and cache overhead",
        ),
        profile(
            "database",
            "Database",
            1.1,
            1.4,
            1.5,
            "Transactional store favoring memory and durable storage",
        ),
        profile(
            "analytics",
            "Analytics",
            1.5,
            1.3,
            2.0,
            "Batch and query workloads with fast-growing datasets",
        ),
        profile(
            "compute",
            "Compute Intensive",
            1.8,
            0.9,
            0.7,
            "CPU-bound processing with little persistent state",
        ),
    ]
}

fn region(code: &str, display_name: &str) -> Region {
    Region {
        code: code.to_string(),
        display_name: display_name.to_string(),
    }
}

fn builtin_regions() -> Vec<Region> {
    vec![
        region("us-east-1", "US East (N. Virginia)"),
        region("us-west-2", "US West (Oregon)"),
        region("eu-west-1", "EU (Ireland)"),
        region("eu-central-1", "EU (Frankfurt)"),
        region("ap-southeast-1", "Asia Pacific (Singapore)"),
        region("ap-northeast-1", "Asia Pacific (Tokyo)"),
    ]
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_profile_lookup_known_keys() {
        let catalog = Catalog::builtin();
        for key in ["web_server", "app_server", "database", "analytics", "compute"] {
            let profile = catalog.profile(key).unwrap();
            assert_eq!(profile.key, key);
            assert!(profile.compute_factor > 0.0);
            assert!(profile.memory_factor > 0.0);
            assert!(profile.storage_factor > 0.0);
        }
    }

    #[test]
    fn test_profile_lookup_unknown_key() {
        let catalog = Catalog::builtin();
        let err = catalog.profile("nonexistent").unwrap_err();
        assert!(matches!(err, SizingError::UnknownProfile(_)));
    }

    #[test]
    fn test_offerings_are_positive_and_ordered() {
        let catalog = Catalog::builtin();
        assert!(!catalog.offerings().is_empty());
        assert_eq!(catalog.offerings()[0].id, "m5.large");
        for o in catalog.offerings() {
            assert!(o.compute_units > 0, "{} has zero compute units", o.id);
            assert!(o.memory_gb > 0, "{} has zero memory", o.id);
        }
    }

    #[test]
    fn test_reserved_price_never_exceeds_on_demand() {
        let catalog = Catalog::builtin();
        for o in catalog.offerings() {
            assert!(
                o.reserved_hourly <= o.on_demand_hourly,
                "{} reserved price exceeds on-demand",
                o.id
            );
            assert!(o.on_demand_hourly >= 0.0);
            assert!(o.spot_hourly >= 0.0);
        }
    }

    #[test]
    fn test_global_catalog_is_shared() {
        let a = Catalog::global();
        let b = Catalog::global();
        assert!(std::ptr::eq(a, b));
    }

    #[test]
    fn test_regions_have_labels() {
        let catalog = Catalog::builtin();
        assert!(!catalog.regions().is_empty());
        for r in catalog.regions() {
            assert!(!r.display_name.is_empty());
        }
    }
}
