use thiserror::Error;

#[derive(Error, Debug)]
pub enum SagdecError {
    #[error("IO error: {0}")]
    Io(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    Serialize(String),

    #[error("Unknown filter dimension: {0}")]
    UnknownDimension(String),

    #[error("Invalid config value for {key}: {value}")]
    InvalidConfig { key: String, value: String },
}

impl From<serde_json::Error> for SagdecError {
    fn from(e: serde_json::Error) -> Self {
        SagdecError::Serialize(e.to_string())
    }
}

pub type Result<T> = std::result::Result<T, SagdecError>;
