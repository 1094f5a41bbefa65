//! Error types for configuration loading and validation.

/// Errors that can occur when loading or validating an `axigen.toml` configuration.
#[derive(Debug, thiserror::Error)]
pub enum ConfigError {
    /// An I/O error occurred while reading the configuration file.
    #[error("failed to read configuration: {0}")]
    IoError(#[from] std::io::Error),

    /// The TOML content could not be parsed.
    #[error("failed to parse configuration: {0}")]
    ParseError(String),

    /// A required field is missing from the configuration.
    #[error("missing required field: {0}")]
    MissingField(String),

    /// Two interfaces share the same name.
    #[error("duplicate interface '{0}'")]
    DuplicateInterface(String),

    /// A referenced interface name does not exist in the configuration.
    #[error("unknown interface '{0}'")]
    UnknownInterface(String),

    /// A configuration value failed validation.
    #[error("validation error: {0}")]
    ValidationError(String),
}
