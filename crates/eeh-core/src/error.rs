//! Unified Error Model
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum EehError {
    #[error("NOT_FOUND/{0}")]
    NotFound(String),

    #[error("INPUT/{0}")]
    MalformedInput(String),

    #[error("STORE/token already present: {0}")]
    TokenCollision(String),

    #[error("SERIALIZE/{0}")]
    Serialize(String),
}

impl From<serde_json::Error> for EehError {
    fn from(err: serde_json::Error) -> Self {
        EehError::Serialize(err.to_string())
    }
}
