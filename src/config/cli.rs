use clap::Parser;
use crate::domain::model::ServerConfig;
use crate::utils::error::Result;
use crate::utils::validation::Validate;
use std::path::PathBuf;

#[derive(Debug, Clone, Parser)]
#[command(name = "sample-model")]
#[command(about = "Runs the sample object-model trace and prints it to stdout")]
pub struct CliConfig {
    #[arg(long, help = "TOML file with host, port and debug settings")]
    pub config: Option<PathBuf>,

    #[arg(long, help = "Enable verbose output")]
    pub verbose: bool,
}

impl CliConfig {
    /// 從 `--config` 載入設定，未指定時使用預設值
    pub fn server_config(&self) -> Result<ServerConfig> {
        let config = match &self.config {
            Some(path) => ServerConfig::from_file(path)?,
            None => ServerConfig::default(),
        };
        config.validate()?;
        Ok(config)
    }
}
