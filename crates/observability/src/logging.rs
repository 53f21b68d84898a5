/// Environment variable selecting the log output format.
pub const LOG_FORMAT_ENV: &str = "STOREFRONT_LOG_FORMAT";

/// Output format of the fmt subscriber.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum LogFormat {
    #[default]
    Json,
    Compact,
}

impl LogFormat {
    /// Parse a format name; `None` for anything unrecognised.
    pub fn parse(value: &str) -> Option<Self> {
        match value.trim().to_ascii_lowercase().as_str() {
            "json" => Some(LogFormat::Json),
            "compact" => Some(LogFormat::Compact),
            _ => None,
        }
    }

    /// Read [`LOG_FORMAT_ENV`]; unset or unknown values fall back to JSON.
    ///
    /// Returns the raw value when it was rejected so the caller can report it
    /// once a subscriber is installed.
    pub fn from_env() -> (Self, Option<String>) {
        match std::env::var(LOG_FORMAT_ENV) {
            Ok(raw) => match Self::parse(&raw) {
                Some(format) => (format, None),
                None => (LogFormat::default(), Some(raw)),
            },
            Err(_) => (LogFormat::default(), None),
        }
    }
}
