//! Output formatting utilities

use clap::ValueEnum;
use colored::Colorize;

/// Output format for CLI commands
#[derive(Debug, Clone, Copy, Default, ValueEnum)]
pub enum OutputFormat {
    /// Table format (default)
    #[default]
    Table,
    /// JSON format
    Json,
}

impl OutputFormat {
    /// Parse a config-file value ("table"/"json", case-insensitive)
    pub fn from_config(value: &str) -> Option<Self> {
        <Self as ValueEnum>::from_str(value, true).ok()
    }
}

/// Print a success message
pub fn print_success(message: &str) {
    println!("{} {}", "✓".green().bold(), message);
}

/// Print an error message
#[allow(dead_code)]
pub fn print_error(message: &str) {
    eprintln!("{} {}", "✗".red().bold(), message);
}

/// Print a warning message
pub fn print_warning(message: &str) {
    println!("{} {}", "⚠".yellow().bold(), message);
}

/// Print an info message
pub fn print_info(message: &str) {
    println!("{} {}", "ℹ".blue().bold(), message);
}

/// Format a USD amount
pub fn format_currency(amount: f64) -> String {
    format!("${:.2}", amount)
}

/// Format an hourly USD price
pub fn format_hourly(amount: f64) -> String {
    format!("${:.3}", amount)
}

/// Format an efficiency ratio as a percentage
pub fn format_efficiency(efficiency: f64) -> String {
    format!("{:.1}%", efficiency * 100.0)
}

/// Color an efficiency ratio: green is a tight fit, red heavily
/// over-provisioned
pub fn color_efficiency(efficiency: f64) -> String {
    let formatted = format_efficiency(efficiency);
    if efficiency >= 0.75 {
        formatted.green().to_string()
    } else if efficiency >= 0.5 {
        formatted.yellow().to_string()
    } else {
        formatted.red().to_string()
    }
}

/// Format a storage figure in GB
pub fn format_storage(gb: u64) -> String {
    if gb >= 1024 {
        format!("{:.2} TB", gb as f64 / 1024.0)
    } else {
        format!("{} GB", gb)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_currency() {
        assert_eq!(format_currency(552.96), "$552.96");
        assert_eq!(format_currency(0.0), "$0.00");
    }

    #[test]
    fn test_format_efficiency() {
        assert_eq!(format_efficiency(0.648), "64.8%");
        assert_eq!(format_efficiency(1.0), "100.0%");
    }

    #[test]
    fn test_format_storage_switches_to_tb() {
        assert_eq!(format_storage(731), "731 GB");
        assert_eq!(format_storage(2048), "2.00 TB");
    }

    #[test]
    fn test_output_format_from_config() {
        assert!(matches!(
            OutputFormat::from_config("json"),
            Some(OutputFormat::Json)
        ));
        assert!(matches!(
            OutputFormat::from_config("Table"),
            Some(OutputFormat::Table)
        ));
        assert!(OutputFormat::from_config("yaml").is_none());
    }
}
