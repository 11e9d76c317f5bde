//! zk-analysis - Main entry point.

use anyhow::Result;
use zk_analysis::config::Config;
use zk_analysis::logging::init_logging;

#[tokio::main]
async fn main() -> Result<()> {
    let config = Config::from_env();

    init_logging(&config.log_level, &config.log_format);

    tracing::info!("zk-analysis v{}", env!("CARGO_PKG_VERSION"));

    zk_analysis::start_server(&config).await
}
