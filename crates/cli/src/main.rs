//! Cloud Workload Sizer CLI
//!
//! A command-line tool for estimating cloud VM requirements from
//! on-premises usage figures and ranking catalog offerings by fit
//! and cost.

mod commands;
mod config;
mod output;

use anyhow::Result;
use clap::{Args, Parser, Subcommand};
use sizer_lib::{Catalog, SizingInputs};
use std::path::PathBuf;
use tracing_subscriber::{fmt, prelude::*, EnvFilter};

use commands::export::ExportFormat;
use commands::{catalog, estimate, export};

/// Cloud Workload Sizer CLI
#[derive(Parser)]
#[command(name = "cws")]
#[command(author, version, about = "CLI for Cloud Workload Sizer", long_about = None)]
pub struct Cli {
    /// Output format (falls back to the config file default)
    #[arg(long, short, value_enum)]
    pub format: Option<output::OutputFormat>,

    /// Enable verbose output
    #[arg(long, short)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Estimate required capacity and rank matching offerings
    Estimate(SizingArgs),

    /// Inspect the built-in catalog
    #[command(subcommand)]
    Catalog(CatalogCommands),

    /// Run an estimate and write the report table to a file
    Export {
        #[command(flatten)]
        sizing: SizingArgs,

        /// Output file path
        #[arg(long, short)]
        output: PathBuf,

        /// File format for the report
        #[arg(long, value_enum, default_value = "csv")]
        export_format: ExportFormat,
    },
}

#[derive(Subcommand)]
pub enum CatalogCommands {
    /// List instance offerings with prices
    Offerings,

    /// List workload profiles and their scaling factors
    Profiles,

    /// List region codes and display labels
    Regions,
}

/// Sizing inputs shared by estimate and export
#[derive(Args)]
pub struct SizingArgs {
    /// Workload profile key (web_server, app_server, database, analytics, compute)
    #[arg(long, short)]
    pub profile: Option<String>,

    /// Current CPU core count
    #[arg(long)]
    pub cores: f64,

    /// Peak CPU utilization percent (clamped to 0-100)
    #[arg(long, default_value_t = 100.0)]
    pub cpu_util: f64,

    /// Current memory in GB
    #[arg(long)]
    pub memory_gb: f64,

    /// Peak memory utilization percent (clamped to 0-100)
    #[arg(long, default_value_t = 100.0)]
    pub memory_util: f64,

    /// Current storage in GB
    #[arg(long, default_value_t = 0.0)]
    pub storage_gb: f64,

    /// Planning horizon in years
    #[arg(long, default_value_t = 3)]
    pub years: u32,

    /// Annual growth rate as a fraction (0.15 = 15%)
    #[arg(long, default_value_t = 0.15)]
    pub growth: f64,

    /// Region code shown in the report header (can also be set via CWS_REGION)
    #[arg(long, short, env = "CWS_REGION")]
    pub region: Option<String>,
}

impl SizingArgs {
    /// Build core sizing inputs, applying the documented caller-side
    /// clamp of utilization percentages
    fn to_inputs(&self, config: &config::Config) -> Result<SizingInputs> {
        let profile = self
            .profile
            .clone()
            .or_else(|| config.default_profile.clone())
            .ok_or_else(|| {
                anyhow::anyhow!("no workload profile given (use --profile or set a default)")
            })?;

        Ok(SizingInputs {
            profile,
            current_cores: self.cores,
            peak_cpu_util_percent: self.cpu_util.clamp(0.0, 100.0),
            current_memory_gb: self.memory_gb,
            peak_memory_util_percent: self.memory_util.clamp(0.0, 100.0),
            current_storage_gb: self.storage_gb,
            planning_horizon_years: self.years,
            annual_growth_rate: self.growth,
        })
    }

    fn region_code<'a>(&'a self, config: &'a config::Config) -> Option<&'a str> {
        self.region.as_deref().or(config.default_region.as_deref())
    }
}

fn main() -> Result<()> {
    let cli = Cli::parse();

    // Initialize tracing with env filter; --verbose forces debug level
    let filter = if cli.verbose {
        EnvFilter::new("debug")
    } else {
        EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new("warn"))
    };
    tracing_subscriber::registry()
        .with(filter)
        .with(fmt::layer().with_writer(std::io::stderr))
        .init();

    let config = config::Config::load().unwrap_or_default();
    tracing::debug!(?config, "configuration loaded");
    let format = cli
        .format
        .or_else(|| {
            config
                .default_format
                .as_deref()
                .and_then(output::OutputFormat::from_config)
        })
        .unwrap_or_default();

    let catalog = Catalog::global();

    match cli.command {
        Commands::Estimate(sizing) => {
            let inputs = sizing.to_inputs(&config)?;
            estimate::run(catalog, &inputs, sizing.region_code(&config), format)?;
        }
        Commands::Catalog(catalog_cmd) => match catalog_cmd {
            CatalogCommands::Offerings => catalog::show_offerings(catalog, format)?,
            CatalogCommands::Profiles => catalog::show_profiles(catalog, format)?,
            CatalogCommands::Regions => catalog::show_regions(catalog, format)?,
        },
        Commands::Export {
            sizing,
            output,
            export_format,
        } => {
            let inputs = sizing.to_inputs(&config)?;
            export::run(catalog, &inputs, &output, export_format)?;
        }
    }

    Ok(())
}
