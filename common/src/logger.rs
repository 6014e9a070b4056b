use std::io::Write;
use std::sync::OnceLock;

use chrono::Local;

static LOGGER: OnceLock<Logger> = OnceLock::new();

pub struct Logger {
    prefix: Option<String>,
}

impl Logger {
    fn new(prefix: Option<String>) -> Self {
        Self { prefix }
    }

    fn format_line(&self, timestamp: &str, message: &str) -> String {
        match self.prefix {
            Some(ref prefix) => format!("[{}][{}] {}", timestamp, prefix, message),
            None => format!("[{}] {}", timestamp, message),
        }
    }

    /// Log lines go to stderr; stdout belongs to whatever renders the board.
    pub fn log(&self, message: &str) {
        let timestamp = Local::now().format("%Y-%m-%d %H:%M:%S").to_string();
        let line = self.format_line(&timestamp, message);
        let _ = writeln!(std::io::stderr().lock(), "{}", line);
    }
}

pub fn init_logger(prefix: Option<String>) {
    LOGGER.get_or_init(|| Logger::new(prefix));
}

pub fn is_initialized() -> bool {
    LOGGER.get().is_some()
}

/// No-op until `init_logger` has been called, so the library stays quiet
/// unless the embedding binary opts in.
pub fn log(message: &str) {
    if let Some(logger) = LOGGER.get() {
        logger.log(message);
    }
}

#[macro_export]
macro_rules! log {
    ($($arg:tt)*) => {
        if $crate::logger::is_initialized() {
            $crate::logger::log(&format!($($arg)*))
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_line_with_prefix() {
        let logger = Logger::new(Some("tictactoe".to_string()));

        let line = logger.format_line("2026-01-02 03:04:05", "game started");

        assert_eq!(line, "[2026-01-02 03:04:05][tictactoe] game started");
    }

    #[test]
    fn test_format_line_without_prefix() {
        let logger = Logger::new(None);

        let line = logger.format_line("2026-01-02 03:04:05", "game started");

        assert_eq!(line, "[2026-01-02 03:04:05] game started");
    }

    #[test]
    fn test_log_before_init_does_not_panic() {
        log("nobody is listening");
    }
}
