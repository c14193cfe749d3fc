use construction_asserter::{config::Config, runner::ConformanceRunner};
use tracing::{error, info};

/// Entry point for a conformance run.
///
/// Loads the configuration (first argument, or `config/default.toml`),
/// checks every configured response file and exits non-zero if any of them
/// is rejected.
#[tokio::main]
async fn main() -> anyhow::Result<()> {
    let path = std::env::args()
        .nth(1)
        .unwrap_or_else(|| "config/default.toml".to_string());
    let config = Config::load(&path)?;

    tracing_subscriber::fmt()
        .with_max_level(config.logging.max_level()?)
        .init();
    info!("Construction asserter starting with config: {:?}", config);

    let report = ConformanceRunner::new(config.responses).run().await;

    for outcome in &report.outcomes {
        match &outcome.result {
            Ok(()) => info!("{} ({}): ok", outcome.source.path.display(), outcome.source.endpoint),
            Err(e) => error!("{} ({}): {}", outcome.source.path.display(), outcome.source.endpoint, e),
        }
    }

    if !report.is_success() {
        anyhow::bail!("{} of {} responses failed", report.failed(), report.outcomes.len());
    }

    Ok(())
}
