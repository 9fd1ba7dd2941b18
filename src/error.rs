use thiserror::Error;

/// Configuration-related errors with structured variants.
#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("missing required field: {field}")]
    MissingField { field: &'static str },

    #[error("invalid value for {field}: {reason}")]
    InvalidValue { field: &'static str, reason: String },

    #[error("failed to read config file: {0}")]
    ReadFile(#[source] std::io::Error),

    #[error("failed to parse config: {0}")]
    Parse(#[source] toml::de::Error),
}

#[derive(Error, Debug)]
pub enum Error {
    #[error(transparent)]
    Config(#[from] ConfigError),

    /// The terminal session could not be established or authenticated.
    #[error("connection error: {0}")]
    Connection(String),

    /// The provider was reachable but returned no usable result.
    ///
    /// Distinct from an empty-but-valid result, which is not an error.
    #[error("fetch failed: {0}")]
    Fetch(String),

    #[error("invalid date '{input}': expected one of {expected}")]
    InvalidDate { input: String, expected: String },

    #[error("order rejected: {0}")]
    OrderRejected(String),

    #[error("JSON parsing error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
