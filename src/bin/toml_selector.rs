use clap::Parser;
use raid_selector::core::report;
use raid_selector::core::ConfigProvider;
use raid_selector::utils::{logger, validation::Validate};
use raid_selector::{LocalStorage, RaidLevel, SelectionPipeline, SelectorEngine, TomlConfig};

#[derive(Parser)]
#[command(name = "toml-selector")]
#[command(about = "RAID drive selector driven by a TOML configuration file")]
struct Args {
    /// Path to TOML configuration file
    #[arg(short, long, default_value = "raid-selector.toml")]
    config: String,

    /// Enable verbose output
    #[arg(short, long)]
    verbose: bool,

    /// Override the RAID level from config
    #[arg(short, long)]
    raid_level: Option<String>,

    /// Override the output path from config
    #[arg(short, long)]
    output: Option<String>,

    /// Dry run - select without writing output
    #[arg(long)]
    dry_run: bool,
}

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let args = Args::parse();

    // 載入 TOML 配置；日誌設定在設定檔內，先載入再初始化
    let mut config = match TomlConfig::from_file(&args.config) {
        Ok(config) => config,
        Err(e) => {
            logger::init_cli_logger(args.verbose);
            eprintln!("❌ Failed to load config file '{}': {}", args.config, e);
            eprintln!("💡 Make sure the file exists and is valid TOML format");
            std::process::exit(e.exit_code());
        }
    };

    match config.log_level() {
        Some(level) if !args.verbose => {
            logger::init_with_level(level, args.verbose, config.json_logs())
        }
        _ if config.json_logs() => logger::init_json_logger(args.verbose),
        _ => logger::init_cli_logger(args.verbose),
    }

    tracing::info!("🚀 Starting TOML-based RAID selector");
    tracing::info!("📁 Loaded configuration from: {}", args.config);

    // 應用命令列覆蓋設定
    if let Some(level) = args.raid_level {
        tracing::info!("🔧 RAID level overridden to: {}", level);
        config.selection.raid_level = Some(level);
    }
    if let Some(output) = args.output {
        tracing::info!("🔧 Output path overridden to: {}", output);
        config
            .output
            .get_or_insert_with(|| raid_selector::config::toml_config::OutputConfig {
                path: None,
                format: None,
                print_results: None,
            })
            .path = Some(output);
    }

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    display_config_summary(&config);

    let print_results = config.print_results() && !args.dry_run;
    let storage = LocalStorage::new(".");
    let engine = SelectorEngine::new(SelectionPipeline::new(storage, config));

    let result = if args.dry_run {
        engine.dry_run().await
    } else {
        engine.run().await
    };

    match result {
        Ok(outcome) => {
            if print_results {
                for line in report::render_lines(&outcome.ranked) {
                    println!("{}", line);
                }
            }
            tracing::info!("✅ Selection completed successfully!");
        }
        Err(e) => {
            tracing::error!(
                "❌ Selection failed: {} (Category: {:?}, Severity: {:?})",
                e,
                e.category(),
                e.severity()
            );
            tracing::error!("💡 Recovery suggestion: {}", e.recovery_suggestion());
            eprintln!("❌ {}", e.user_friendly_message());
            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}

fn display_config_summary(config: &TomlConfig) {
    tracing::info!("📋 Configuration Summary:");
    tracing::info!("  Catalog: {}", config.catalog_path());
    tracing::info!(
        "  Drives: {}..={} ({})",
        config.min_drive_count(),
        config.max_drive_count(),
        config.raid_level()
    );
    if let Ok(level) = config.raid_level().parse::<RaidLevel>() {
        tracing::info!(
            "  Fault tolerance: {} to {} drive(s)",
            level.fault_tolerance(config.min_drive_count()),
            level.fault_tolerance(config.max_drive_count())
        );
    }
    match config.output_path() {
        Some(path) => tracing::info!("  Output: {} ({:?})", path, config.output_format()),
        None => tracing::info!("  Output: stdout only"),
    }
}
