use tracing_subscriber::fmt::MakeWriter;
use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

fn default_filter(verbose: bool) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| {
        if verbose {
            EnvFilter::new("raid_selector=debug,info")
        } else {
            EnvFilter::new("raid_selector=info")
        }
    })
}

/// 日誌寫到 stderr，stdout 只保留排名結果
pub fn init_cli_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .compact(),
        )
        .init();
}

pub fn init_json_logger(verbose: bool) {
    tracing_subscriber::registry()
        .with(default_filter(verbose))
        .with(
            tracing_subscriber::fmt::layer()
                .with_writer(std::io::stderr)
                .with_target(false)
                .with_thread_ids(false)
                .with_file(false)
                .with_line_number(false)
                .json(),
        )
        .init();
}

/// 以設定檔中的 log_level 初始化；RUST_LOG 仍然優先
pub fn init_with_level(level: &str, verbose: bool, json: bool) {
    level_subscriber(level, verbose, json, std::io::stderr).init();
}

fn level_subscriber<W>(
    level: &str,
    verbose: bool,
    json: bool,
    writer: W,
) -> Box<dyn tracing::Subscriber + Send + Sync>
where
    W: for<'w> MakeWriter<'w> + Send + Sync + 'static,
{
    let filter = EnvFilter::try_from_default_env()
        .or_else(|_| EnvFilter::try_new(format!("raid_selector={}", level)))
        .unwrap_or_else(|_| default_filter(verbose));

    let layer = tracing_subscriber::fmt::layer()
        .with_writer(writer)
        .with_target(false);

    if json {
        Box::new(tracing_subscriber::registry().with(filter).with(layer.json()))
    } else {
        Box::new(tracing_subscriber::registry().with(filter).with(layer.compact()))
    }
}
