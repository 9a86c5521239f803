//! Estimate command: compute requirements and rank offerings

use anyhow::Result;
use colored::Colorize;
use serde_json::json;
use sizer_lib::{Catalog, OfferingMatcher, RequirementCalculator, SizingInputs};
use tabled::Tabled;

use crate::output::{
    color_efficiency, format_currency, format_storage, print_warning, OutputFormat,
};

/// Row for the ranked offerings table
#[derive(Tabled)]
struct MatchRow {
    #[tabled(rename = "Instance")]
    instance: String,
    #[tabled(rename = "Family")]
    family: String,
    #[tabled(rename = "vCPU")]
    compute_units: u32,
    #[tabled(rename = "Memory")]
    memory: String,
    #[tabled(rename = "Fit")]
    fit: String,
    #[tabled(rename = "On-Demand/mo")]
    on_demand: String,
    #[tabled(rename = "Reserved/mo")]
    reserved: String,
    #[tabled(rename = "Spot/mo")]
    spot: String,
}

/// Run a sizing estimate and render the ranked offerings
pub fn run(
    catalog: &Catalog,
    inputs: &SizingInputs,
    region: Option<&str>,
    format: OutputFormat,
) -> Result<()> {
    let requirement = RequirementCalculator::new().compute(catalog, inputs)?;
    let matches = OfferingMatcher::new().rank(catalog, &requirement);

    match format {
        OutputFormat::Json => {
            let json = serde_json::to_string_pretty(&json!({
                "requirement": requirement,
                "matches": matches,
            }))?;
            println!("{}", json);
        }
        OutputFormat::Table => {
            println!("{}", "Sizing Estimate".bold());
            println!("{}", "=".repeat(50));
            println!(
                "Profile:                {}",
                requirement.profile.display_name.cyan()
            );
            if let Some(code) = region {
                println!("Region:                 {}", region_label(catalog, code).cyan());
            }
            println!();

            println!("{}", "Required Capacity".bold());
            println!("{}", "-".repeat(50));
            println!("Compute units:          {}", requirement.compute_units);
            println!("Memory:                 {} GB", requirement.memory_gb);
            println!(
                "Storage:                {}",
                format_storage(requirement.storage_gb)
            );
            println!();

            if matches.is_empty() {
                print_warning("No offering in the catalog meets the required capacity");
                return Ok(());
            }

            let rows: Vec<MatchRow> = matches
                .iter()
                .map(|m| MatchRow {
                    instance: m.offering.id.clone(),
                    family: m.offering.family.to_string(),
                    compute_units: m.offering.compute_units,
                    memory: format!("{} GB", m.offering.memory_gb),
                    fit: color_efficiency(m.overall_efficiency),
                    on_demand: format_currency(m.on_demand_monthly),
                    reserved: format_currency(m.reserved_monthly),
                    spot: format_currency(m.spot_monthly),
                })
                .collect();

            let table = tabled::Table::new(rows)
                .with(tabled::settings::Style::rounded())
                .to_string();
            println!("{}", table);
            println!("\nTotal: {} candidate offerings", matches.len());
        }
    }

    Ok(())
}

/// Resolve a region code to its display label, falling back to the code
fn region_label(catalog: &Catalog, code: &str) -> String {
    catalog
        .regions()
        .iter()
        .find(|r| r.code == code)
        .map(|r| r.display_name.clone())
        .unwrap_or_else(|| code.to_string())
}
