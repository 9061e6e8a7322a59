pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use crate::config::CliConfig;

pub use crate::core::{
    functions::{multiply, standalone_function},
    logger::{ConsoleLog, Logger},
    script::ScriptRunner,
};
pub use crate::domain::model::{Employee, Person, PersonUpdate, ServerConfig};
pub use crate::domain::ports::{Greeter, Loggable};
pub use crate::utils::error::{ModelError, Result};
