use anyhow::Context;
use clap::Parser;
use sample_model::utils::logger;
use sample_model::{CliConfig, ScriptRunner};

fn main() -> anyhow::Result<()> {
    let config = CliConfig::parse();

    // 初始化日誌
    logger::init_cli_logger(config.verbose);

    tracing::info!("Starting sample-model");
    if config.verbose {
        tracing::debug!("CLI config: {:?}", config);
    }

    let server_config = match config.server_config() {
        Ok(server_config) => server_config,
        Err(e) => {
            tracing::error!("Configuration failed: {}", e);
            return Err(e).context("could not load server configuration");
        }
    };

    // 執行腳本
    let runner = ScriptRunner::new(server_config);
    let stdout = std::io::stdout();
    let mut out = stdout.lock();
    runner.run(&mut out).context("script trace aborted")?;

    tracing::info!("Script trace completed");
    Ok(())
}
