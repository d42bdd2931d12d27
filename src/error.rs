// Error types for policy configuration loading

use thiserror::Error;

#[derive(Error, Debug)]
pub enum ConfigError {
    #[error("failed to read policy config: {0}")]
    Io(#[from] std::io::Error),

    #[error("failed to parse policy config: {0}")]
    Parse(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, ConfigError>;
