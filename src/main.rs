use clap::Parser;
use raid_selector::core::report;
use raid_selector::utils::{logger, validation::Validate};
use raid_selector::{CliConfig, LocalStorage, SelectionPipeline, SelectorEngine};

#[tokio::main]
async fn main() -> Result<(), Box<dyn std::error::Error>> {
    let config = CliConfig::parse();

    // 初始化日誌
    if config.log_json {
        logger::init_json_logger(config.verbose);
    } else {
        logger::init_cli_logger(config.verbose);
    }

    tracing::info!("Starting raid-selector");
    tracing::debug!("CLI config: {:?}", config);

    // 驗證配置
    if let Err(e) = config.validate() {
        tracing::error!("❌ Configuration validation failed: {}", e);
        tracing::error!("💡 Suggestion: {}", e.recovery_suggestion());
        eprintln!("❌ {}", e.user_friendly_message());
        std::process::exit(e.exit_code());
    }

    let dry_run = config.dry_run;
    let storage = LocalStorage::new(".");
    let engine = SelectorEngine::new(SelectionPipeline::new(storage, config));

    let result = if dry_run {
        engine.dry_run().await
    } else {
        engine.run().await
    };

    match result {
        Ok(outcome) => {
            if !dry_run {
                for line in report::render_lines(&outcome.ranked) {
                    println!("{}", line);
                }
            }
            if let Some(path) = outcome.output_path {
                tracing::info!("📁 Ranked combinations saved to: {}", path);
            }
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
            eprintln!("💡 {}", e.recovery_suggestion());

            std::process::exit(e.exit_code());
        }
    }

    Ok(())
}
