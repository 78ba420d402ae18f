//! Errors raised while loading rendering configuration.

/// Rendering configuration could not be read, parsed or validated.
///
/// # Examples
///
/// ```
/// use bucket_error::ConfigError;
///
/// let parse = toml::from_str::<toml::Table>("page_sizes = [20, 50").unwrap_err();
/// let err = ConfigError::from(parse);
/// assert!(err.message.starts_with("Failed to parse config"));
/// ```
#[derive(Debug, Clone, derive_more::Display, derive_more::Error)]
#[display("Configuration Error: {} at line {} in {}", message, line, file)]
pub struct ConfigError {
    /// What went wrong
    pub message: String,
    /// Line where the error was raised
    pub line: u32,
    /// File where the error was raised
    pub file: &'static str,
}

impl ConfigError {
    /// Records `message` at the caller's location.
    #[track_caller]
    pub fn new(message: impl Into<String>) -> Self {
        let location = std::panic::Location::caller();
        Self {
            message: message.into(),
            line: location.line(),
            file: location.file(),
        }
    }
}

#[cfg(feature = "config")]
impl From<toml::de::Error> for ConfigError {
    #[track_caller]
    fn from(err: toml::de::Error) -> Self {
        ConfigError::new(format!("Failed to parse config: {}", err))
    }
}
