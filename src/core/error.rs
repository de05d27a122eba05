use thiserror::Error;

#[derive(Error, Debug)]
pub enum RapportError {
    #[error("Invalid configuration: {0}")]
    InvalidConfig(String),

    #[error("Unknown perception event type: {0:?}")]
    UnknownEventType(String),

    #[error("Invalid NLU packet: {0}")]
    InvalidPacket(String),

    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serde(#[from] serde_json::Error),

    #[error("Config parse error: {0}")]
    ConfigParse(#[from] toml::de::Error),
}

pub type Result<T> = std::result::Result<T, RapportError>;
