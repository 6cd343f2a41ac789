use thiserror::Error;

/// Core error type shared across ludogen crates.
#[derive(Debug, Error)]
pub enum Error {
    /// The run configuration violates internal invariants.
    #[error("invalid config: {0}")]
    InvalidConfig(String),
    /// Failure reading a configuration file.
    #[error("config io error: {0}")]
    Io(#[from] std::io::Error),
    /// Failure parsing a configuration file.
    #[error("config parse error: {0}")]
    Parse(#[from] toml::de::Error),
}

/// Convenience alias for results returned by ludogen crates.
pub type Result<T> = std::result::Result<T, Error>;
