pub mod cli;
pub mod toml_config;

#[cfg(feature = "cli")]
pub use self::cli_config::CliConfig;

#[cfg(feature = "cli")]
mod cli_config {
    use crate::core::ConfigProvider;
    use crate::domain::model::{OutputFormat, DEFAULT_MIN_DRIVE_COUNT};
    use crate::utils::error::Result;
    use crate::utils::validation::{self, Validate};
    use clap::Parser;
    use serde::{Deserialize, Serialize};

    #[derive(Debug, Clone, Serialize, Deserialize, Parser)]
    #[command(name = "raid-selector")]
    #[command(about = "Find the cost-efficient drive combinations for a RAID array")]
    pub struct CliConfig {
        /// Path to JSON of pricing information
        pub input_path: String,

        /// Maximum number of drives
        pub max_drive_count: u32,

        /// Path for the ranked combinations (JSON unless it ends in .csv)
        #[arg(short, long)]
        pub output_path: Option<String>,

        /// Minimum number of drives
        #[arg(short, long, default_value_t = DEFAULT_MIN_DRIVE_COUNT)]
        pub min_drive_count: u32,

        /// RAID level
        #[arg(short, long, default_value = "RAID5")]
        pub raid_level: String,

        /// Output format (json or csv), overrides the file extension
        #[arg(long)]
        pub format: Option<String>,

        #[arg(short, long, help = "Enable verbose output")]
        pub verbose: bool,

        #[arg(long, help = "Emit logs as JSON")]
        pub log_json: bool,

        #[arg(long, help = "Run the selection without writing output or printing results")]
        pub dry_run: bool,
    }

    impl ConfigProvider for CliConfig {
        fn catalog_path(&self) -> &str {
            &self.input_path
        }

        fn min_drive_count(&self) -> u32 {
            self.min_drive_count
        }

        fn max_drive_count(&self) -> u32 {
            self.max_drive_count
        }

        fn raid_level(&self) -> &str {
            &self.raid_level
        }

        fn output_path(&self) -> Option<&str> {
            self.output_path.as_deref()
        }

        fn output_format(&self) -> OutputFormat {
            self.format
                .as_deref()
                .and_then(|format| format.parse().ok())
                .or_else(|| self.output_path.as_deref().map(OutputFormat::from_path))
                .unwrap_or_default()
        }
    }

    impl Validate for CliConfig {
        fn validate(&self) -> Result<()> {
            validation::validate_selection(
                &self.input_path,
                self.min_drive_count,
                self.max_drive_count,
                &self.raid_level,
            )?;
            if let Some(path) = &self.output_path {
                validation::validate_path("output_path", path)?;
            }
            validation::validate_output_format("format", self.format.as_deref())
        }
    }

    #[cfg(test)]
    mod tests {
        use super::*;

        #[test]
        fn test_positional_args_and_defaults() {
            let config = CliConfig::parse_from(["raid-selector", "prices.json", "8"]);
            assert_eq!(config.input_path, "prices.json");
            assert_eq!(config.max_drive_count, 8);
            assert_eq!(config.min_drive_count, 3);
            assert_eq!(config.raid_level, "RAID5");
            assert!(config.output_path.is_none());
            assert!(config.validate().is_ok());
        }

        #[test]
        fn test_short_flags() {
            let config = CliConfig::parse_from([
                "raid-selector",
                "prices.json",
                "10",
                "-o",
                "ranked.csv",
                "-m",
                "4",
                "-r",
                "RAID6",
            ]);
            assert_eq!(config.min_drive_count, 4);
            assert_eq!(config.raid_level, "RAID6");
            assert_eq!(config.output_format(), OutputFormat::Csv);
        }

        #[test]
        fn test_format_flag_overrides_extension() {
            let config = CliConfig::parse_from([
                "raid-selector",
                "prices.json",
                "10",
                "-o",
                "ranked.csv",
                "--format",
                "json",
            ]);
            assert_eq!(config.output_format(), OutputFormat::Json);
        }

        #[test]
        fn test_validation_rejects_bad_inputs() {
            let config = CliConfig::parse_from(["raid-selector", "prices.json", "2"]);
            assert!(config.validate().is_err());

            let config = CliConfig::parse_from(["raid-selector", "prices.json", "8", "-r", "RAID9"]);
            assert!(config.validate().is_err());

            let config =
                CliConfig::parse_from(["raid-selector", "prices.json", "8", "--format", "xml"]);
            assert!(config.validate().is_err());
        }
    }
}
