//! Error handling for the scatter editor
//!
//! Point operations never fail; these errors only cover the startup plumbing
//! (configuration file and log directory).

use thiserror::Error;

/// Main error type for scatter editor operations
#[derive(Error, Debug)]
pub enum ScatterError {
    /// Errors related to configuration loading/saving
    #[error("Configuration error: {0}")]
    Config(String),

    /// IO errors
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    /// Serialization errors
    #[error("Serialization error: {0}")]
    Serialization(String),

    /// Generic errors with context
    #[error("{context}: {source}")]
    WithContext {
        context: String,
        #[source]
        source: Box<ScatterError>,
    },
}

impl ScatterError {
    /// Add context to an error
    pub fn with_context(self, context: impl Into<String>) -> Self {
        ScatterError::WithContext {
            context: context.into(),
            source: Box::new(self),
        }
    }
}

impl From<toml::de::Error> for ScatterError {
    fn from(err: toml::de::Error) -> Self {
        ScatterError::Serialization(err.to_string())
    }
}

impl From<toml::ser::Error> for ScatterError {
    fn from(err: toml::ser::Error) -> Self {
        ScatterError::Serialization(err.to_string())
    }
}

/// Result type alias for scatter editor operations
pub type Result<T> = std::result::Result<T, ScatterError>;

/// Extension trait for adding context to Results
pub trait ResultExt<T> {
    /// Add context to an error result
    fn context(self, context: impl Into<String>) -> Result<T>;

    /// Add context lazily to an error result
    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String;
}

impl<T, E> ResultExt<T> for std::result::Result<T, E>
where
    E: Into<ScatterError>,
{
    fn context(self, context: impl Into<String>) -> Result<T> {
        self.map_err(|e| Into::<ScatterError>::into(e).with_context(context))
    }

    fn with_context<F>(self, f: F) -> Result<T>
    where
        F: FnOnce() -> String,
    {
        self.map_err(|e| Into::<ScatterError>::into(e).with_context(f()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_error_display() {
        let err = ScatterError::Config("missing data directory".to_string());
        assert_eq!(
            err.to_string(),
            "Configuration error: missing data directory"
        );
    }

    #[test]
    fn test_error_with_context() {
        let err = ScatterError::Serialization("bad value".to_string());
        let with_ctx = err.with_context("Failed to parse config");
        assert!(with_ctx.to_string().contains("Failed to parse config"));
        assert!(with_ctx.to_string().contains("bad value"));
    }

    #[test]
    fn test_io_error_context() {
        let io: std::result::Result<(), std::io::Error> = Err(std::io::Error::new(
            std::io::ErrorKind::NotFound,
            "no such file",
        ));
        let err = io.context("Failed to read config").unwrap_err();
        assert!(matches!(err, ScatterError::WithContext { .. }));
        assert!(err.to_string().starts_with("Failed to read config"));
    }

    #[test]
    fn test_toml_error_conversion() {
        let parsed: std::result::Result<toml::Value, toml::de::Error> =
            toml::from_str("chart = [");
        let err: ScatterError = parsed.unwrap_err().into();
        assert!(matches!(err, ScatterError::Serialization(_)));
    }
}
