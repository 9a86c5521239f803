//! Catalog inspection commands

use anyhow::Result;
use sizer_lib::Catalog;
use tabled::Tabled;

use crate::output::{format_hourly, OutputFormat};

/// Row for the offerings table
#[derive(Tabled)]
struct OfferingRow {
    #[tabled(rename = "Instance")]
    instance: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "vCPU")]
    compute_units: u32,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "On-Demand/hr")]
    on_demand: String,
    #[tabled(rename = "Reserved/hr")]
    reserved: String,
    #[tabled(rename = "Spot/hr")]
    spot: String,
    #[tabled(rename = "Network")]
    network: String,
}

/// Row for the profiles table
#[derive(Tabled)]
struct ProfileRow {
    #[tabled(rename = "Key")]
    key: String,
    #[tabled(rename = "Name")]
    name: String,
    #[tabled(rename = "CPU x")]
    compute_factor: f64,
    #[tabled(rename = "Mem x")]
    memory_factor: f64,
    #[tabled(rename = "Storage x")]
    storage_factor: f64,
    #[tabled(rename = "Description")]
    description: String,
}

/// Row for the regions table
#[derive(Tabled)]
struct RegionRow {
    #[tabled(rename = "Code")]
    code: String,
    #[tabled(rename = "Location")]
    location: String,
}

/// List instance offerings
pub fn show_offerings(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(catalog.offerings())?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows: Vec<OfferingRow> = catalog
                .offerings()
                .iter()
                .map(|o| OfferingRow {
                    instance: o.id.clone(),
                    family: o.family.to_string(),
                    compute_units: o.compute_units,
                    memory: format!("{} GB", o.memory_gb),
                    on_demand: format_hourly(o.on_demand_hourly),
                    reserved: format_hourly(o.reserved_hourly),
                    spot: format_hourly(o.spot_hourly),
                    network: o.network_performance.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} offerings", catalog.offerings().len());
        }
    }

    Ok(())
}

/// List workload profiles
pub fn show_profiles(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(catalog.profiles())?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows: Vec<ProfileRow> = catalog
                .profiles()
                .iter()
                .map(|p| ProfileRow {
                    key: p.key.clone(),
                    name: p.display_name.clone(),
                    compute_factor: p.compute_factor,
                    memory_factor: p.memory_factor,
                    storage_factor: p.storage_factor,
                    description: p.description.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}

/// List regions
pub fn show_regions(catalog: &Catalog, format: OutputFormat) -> Result<()> {
    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(catalog.regions())?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            let rows: Vec<RegionRow> = catalog
                .regions()
                .iter()
                .map(|r| RegionRow {
                    code: r.code.clone(),
                    location: r.display_name.clone(),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
        }
    }

    Ok(())
}
