//! Export command: write the sizing report to a file

use anyhow::{Context, Result};
use clap::ValueEnum;
use sizer_lib::{build_report, Catalog, OfferingMatcher, ReportRow, RequirementCalculator, SizingInputs};
use std::path::Path;

use crate::output::{print_info, print_success, print_warning};

/// File format for exported reports
#[derive(Debug, Clone, Copy, ValueEnum)]
pub enum ExportFormat {
    /// Comma-separated values with a header row
    Csv,
    /// Pretty-printed JSON array
    Json,
}

const CSV_HEADER: &str = "instance,compute_units,memory_gb,family,efficiency_percent,\
on_demand_monthly,reserved_monthly,spot_monthly,annual_reserved_savings";

/// Run an estimate and write the report rows to `output`
pub fn run(
    catalog: &Catalog,
    inputs: &SizingInputs,
    output: &Path,
    format: ExportFormat,
) -> Result<()> {
    let requirement = RequirementCalculator::new().compute(catalog, inputs)?;
    let matches = OfferingMatcher::new().rank(catalog, &requirement);
    let rows = build_report(&matches);

    if rows.is_empty() {
        print_warning("No offering meets the required capacity; writing an empty report");
    }

    let content = match format {
        ExportFormat::Csv => to_csv(&rows),
        ExportFormat::Json => serde_json::to_string_pretty(&rows)?,
    };

    std::fs::write(output, content)
        .with_context(|| format!("Failed to write report to {}", output.display()))?;

    print_success(&format!("Report written to {}", output.display()));
    println!("Exported {} offerings", rows.len());
    print_info(&format!(
        "Generated at {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    ));

    Ok(())
}

/// Encode report rows as CSV, preserving field order and semantics
fn to_csv(rows: &[ReportRow]) -> String {
    let mut out = String::from(CSV_HEADER);
    out.push('\n');
    for row in rows {
        out.push_str(&format!(
            "{},{},{},{},{:.1},{:.2},{:.2},{:.2},{:.2}\n",
            row.instance,
            row.compute_units,
            row.memory_gb,
            row.family,
            row.efficiency_percent,
            row.on_demand_monthly,
            row.reserved_monthly,
            row.spot_monthly,
            row.annual_reserved_savings,
        ));
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_inputs() -> SizingInputs {
        SizingInputs {
            profile: "web_server".to_string(),
            current_cores: 8.0,
            peak_cpu_util_percent: 75.0,
            current_memory_gb: 32.0,
            peak_memory_util_percent: 80.0,
            current_storage_gb: 500.0,
            ..SizingInputs::default()
        }
    }

    #[test]
    fn test_csv_has_header_and_one_line_per_row() {
        let catalog = Catalog::builtin();
        let requirement = RequirementCalculator::new()
            .compute(&catalog, &sample_inputs())
            .unwrap();
        let matches = OfferingMatcher::new().rank(&catalog, &requirement);
        let rows = build_report(&matches);

        let csv = to_csv(&rows);
        let lines: Vec<&str> = csv.lines().collect();

        assert_eq!(lines[0], CSV_HEADER);
        assert_eq!(lines.len(), rows.len() + 1);
        assert!(lines[1].starts_with("m5.4xlarge,16,64,general,"));
    }

    #[test]
    fn test_empty_report_is_header_only() {
        let csv = to_csv(&[]);
        assert_eq!(csv, format!("{}\n", CSV_HEADER));
    }

    #[test]
    fn test_export_writes_file() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.csv");
        let catalog = Catalog::builtin();

        run(&catalog, &sample_inputs(), &path, ExportFormat::Csv).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        assert!(content.starts_with("instance,"));
        assert!(content.contains("m5.4xlarge"));
    }

    #[test]
    fn test_export_json_is_parseable() {
        let dir = tempfile::tempdir().unwrap();
        let path = dir.path().join("report.json");
        let catalog = Catalog::builtin();

        run(&catalog, &sample_inputs(), &path, ExportFormat::Json).unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let rows: Vec<ReportRow> = serde_json::from_str(&content).unwrap();
        assert!(!rows.is_empty());
        assert_eq!(rows[0].instance, "m5.4xlarge");
    }
}
