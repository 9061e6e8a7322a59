use crate::domain::ports::Loggable;
use crate::utils::error::Result;
use chrono::{DateTime, Local, TimeZone};
use std::fmt::Display;
use std::io::Write;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S %z";

pub fn format_log_line<Tz>(timestamp: &DateTime<Tz>, message: &str) -> String
where
    Tz: TimeZone,
    Tz::Offset: Display,
{
    format!("[LOG] {}: {}", timestamp.format(TIMESTAMP_FORMAT), message)
}

/// 將帶時間戳的日誌行寫入 writer（CLI 中為 stdout）
#[derive(Debug)]
pub struct ConsoleLog<W: Write> {
    out: W,
}

impl<W: Write> ConsoleLog<W> {
    pub fn new(out: W) -> Self {
        Self { out }
    }

    pub fn into_inner(self) -> W {
        self.out
    }
}

impl<W: Write> Loggable for ConsoleLog<W> {
    fn log(&mut self, message: &str) -> Result<()> {
        let line = format_log_line(&Local::now(), message);
        writeln!(self.out, "{}", line)?;
        self.out.flush()?;
        Ok(())
    }
}

#[derive(Debug)]
pub struct Logger<L: Loggable> {
    sink: L,
}

impl<L: Loggable> Logger<L> {
    pub const INIT_MESSAGE: &'static str = "Logger initialized";

    pub fn new(sink: L) -> Result<Self> {
        let mut logger = Self { sink };
        logger.log(Self::INIT_MESSAGE)?;
        tracing::debug!("Logger constructed");
        Ok(logger)
    }

    pub fn into_sink(self) -> L {
        self.sink
    }
}

impl<L: Loggable> Loggable for Logger<L> {
    fn log(&mut self, message: &str) -> Result<()> {
        self.sink.log(message)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::Utc;

    #[derive(Default)]
    struct Recorder {
        messages: Vec<String>,
    }

    impl Loggable for Recorder {
        fn log(&mut self, message: &str) -> Result<()> {
            self.messages.push(message.to_string());
            Ok(())
        }
    }

    struct BrokenPipe;

    impl Write for BrokenPipe {
        fn write(&mut self, _buf: &[u8]) -> std::io::Result<usize> {
            Err(std::io::Error::new(std::io::ErrorKind::BrokenPipe, "closed"))
        }

        fn flush(&mut self) -> std::io::Result<()> {
            Ok(())
        }
    }

    #[test]
    fn test_format_log_line() {
        let timestamp = Utc.with_ymd_and_hms(2024, 1, 2, 3, 4, 5).unwrap();
        assert_eq!(
            format_log_line(&timestamp, "hello"),
            "[LOG] 2024-01-02 03:04:05 +0000: hello"
        );
    }

    #[test]
    fn test_logger_logs_once_on_construction() {
        let logger = Logger::new(Recorder::default()).unwrap();
        assert_eq!(logger.into_sink().messages, vec!["Logger initialized"]);
    }

    #[test]
    fn test_logger_delegates_to_sink() {
        let mut logger = Logger::new(Recorder::default()).unwrap();
        logger.log("second").unwrap();
        assert_eq!(
            logger.into_sink().messages,
            vec!["Logger initialized", "second"]
        );
    }

    #[test]
    fn test_console_log_writes_stamped_line() {
        let logger = Logger::new(ConsoleLog::new(Vec::new())).unwrap();
        let output = String::from_utf8(logger.into_sink().into_inner()).unwrap();

        assert_eq!(output.lines().count(), 1);
        assert!(output.starts_with("[LOG] "));
        assert!(output.ends_with(": Logger initialized\n"));
    }

    #[test]
    fn test_console_log_propagates_write_failure() {
        let result = Logger::new(ConsoleLog::new(BrokenPipe));
        assert!(matches!(
            result,
            Err(crate::utils::error::ModelError::IoError(_))
        ));
    }
}
