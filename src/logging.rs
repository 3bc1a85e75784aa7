use lazy_static::lazy_static;

#[derive(Debug, Clone, Copy, PartialEq, PartialOrd)]
pub enum LogLevel {
    Error,
    Info,
    Debug,
    Trace,
}

impl LogLevel {
    pub fn tag(self) -> &'static str {
        match self {
            LogLevel::Error => "error",
            LogLevel::Info => "info",
            LogLevel::Debug => "debug",
            LogLevel::Trace => "trace",
        }
    }

    fn from_env() -> LogLevel {
        let raw = std::env::var("CYPHER_ENIGMA_LOG").unwrap_or_default();
        match raw.to_ascii_lowercase().as_str() {
            "error" => LogLevel::Error,
            "debug" => LogLevel::Debug,
            "trace" => LogLevel::Trace,
            _ => LogLevel::Info,
        }
    }
}

lazy_static! {
    /// Verbosity for the whole process, read once from CYPHER_ENIGMA_LOG.
    pub static ref LOG_LEVEL: LogLevel = LogLevel::from_env();
}

#[macro_export]
macro_rules! log {
    ($level:expr, $($arg:tt)*) => {
        if $level <= *$crate::logging::LOG_LEVEL {
            println!("[{}] {}", $level.tag(), format!($($arg)*));
        }
    };
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn levels_order_by_verbosity() {
        assert!(LogLevel::Error < LogLevel::Info);
        assert!(LogLevel::Info < LogLevel::Debug);
        assert!(LogLevel::Debug < LogLevel::Trace);
        assert_eq!(LogLevel::Debug.tag(), "debug");
    }
}
