use crate::core::functions::{self, standalone_function};
use crate::core::logger::{ConsoleLog, Logger};
use crate::domain::model::{Employee, Person, ServerConfig};
use crate::domain::ports::Greeter;
use crate::utils::error::Result;
use std::io::Write;

pub const NUMBERS: [i64; 5] = [1, 2, 3, 4, 5];

/// 依固定順序執行示範腳本並寫入 writer
pub struct ScriptRunner {
    config: ServerConfig,
}

impl ScriptRunner {
    pub fn new(config: ServerConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ServerConfig {
        &self.config
    }

    pub fn run<W: Write>(&self, out: &mut W) -> Result<()> {
        tracing::debug!("Starting script trace");

        let person = Person::new("Alice", 30, Some("alice@example.com".to_string()));
        writeln!(out, "{}", person.greeting())?;
        tracing::debug!(person = ?person, "Greeted person");

        let employee = Employee::new("Bob", 25, "Developer", 75000.0, None);
        writeln!(out, "{}", employee.greeting())?;
        tracing::debug!(employee = ?employee, "Greeted employee");

        // Logger 只在寫自己那一行時借用 out
        {
            let _logger = Logger::new(ConsoleLog::new(&mut *out))?;
        }

        let config = &self.config;
        tracing::debug!(
            host = %config.host,
            port = config.port,
            debug = config.debug,
            "Server config in scope"
        );

        for number in NUMBERS {
            writeln!(out, "Number: {}", number)?;
        }

        let multiply = |x: i64, y: i64| functions::multiply(x, y);
        writeln!(out, "{}", multiply(5, 3))?;

        writeln!(out, "{}", standalone_function("Hello, world!"))?;

        out.flush()?;
        tracing::debug!("Script trace finished");
        Ok(())
    }
}

impl Default for ScriptRunner {
    fn default() -> Self {
        Self::new(ServerConfig::default())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_run_writes_ten_lines() {
        let mut out = Vec::new();
        ScriptRunner::default().run(&mut out).unwrap();

        let text = String::from_utf8(out).unwrap();
        assert_eq!(text.lines().count(), 10);
        assert_eq!(
            text.lines().next(),
            Some("Hello, my name is Alice and I am 30 years old.")
        );
    }

    #[test]
    fn test_config_does_not_change_output() {
        let custom = ServerConfig {
            host: "example.org".to_string(),
            port: 8080,
            debug: false,
        };

        let mut default_out = Vec::new();
        let mut custom_out = Vec::new();
        ScriptRunner::default().run(&mut default_out).unwrap();
        ScriptRunner::new(custom).run(&mut custom_out).unwrap();

        let strip_log = |bytes: Vec<u8>| -> Vec<String> {
            String::from_utf8(bytes)
                .unwrap()
                .lines()
                .filter(|line| !line.starts_with("[LOG]"))
                .map(str::to_string)
                .collect()
        };
        assert_eq!(strip_log(default_out), strip_log(custom_out));
    }
}
