use crate::domain::model::ServerConfig;
use crate::utils::error::{ModelError, Result};
use crate::utils::validation::{validate_non_empty_string, validate_range, Validate};
use std::path::Path;

impl ServerConfig {
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        let content = std::fs::read_to_string(&path).map_err(ModelError::IoError)?;
        Self::from_toml_str(&content)
    }

    pub fn from_toml_str(content: &str) -> Result<Self> {
        Ok(toml::from_str(content)?)
    }

    pub fn to_toml_string(&self) -> Result<String> {
        toml::to_string(self).map_err(|e| ModelError::ConfigError {
            message: format!("TOML serialization error: {}", e),
        })
    }
}

impl Validate for ServerConfig {
    fn validate(&self) -> Result<()> {
        validate_non_empty_string("host", &self.host)?;
        validate_range("port", self.port, 1, u16::MAX)?;
        Ok(())
    }
}
