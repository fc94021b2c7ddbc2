use thiserror::Error;

#[derive(Error, Debug)]
pub enum EngineError {
    #[error("Unknown monster kind: {0}")]
    UnknownMonsterKind(String),

    #[error("Unknown weather condition: {0}")]
    UnknownWeather(String),

    #[error("IO error: {0}")]
    IoError(#[from] std::io::Error),

    #[error("Serialization error: {0}")]
    SerdeError(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, EngineError>;
