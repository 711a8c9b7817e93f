use thiserror::Error;

pub type Result<T> = std::result::Result<T, Error>;

#[derive(Error, Debug)]
pub enum Error {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Configuration error: {0}")]
    Config(#[from] config::ConfigError),

    #[error("YAML error: {0}")]
    Yaml(#[from] serde_yaml::Error),

    #[error("TOML error: {0}")]
    Toml(#[from] toml::de::Error),

    #[error("JSON error: {0}")]
    Json(#[from] serde_json::Error),

    #[error("Unsupported signature file format: {0}")]
    UnsupportedFormat(String),

    #[error("Unknown C type: {0}")]
    UnknownType(String),

    #[error("Invalid signature: {0}")]
    InvalidSignature(String),

    #[error("Duplicate function: {0}")]
    DuplicateFunction(String),
}
