use thiserror::Error;

/// Errors produced when reading an action record from JSON.
#[derive(Debug, Error)]
pub enum Error {
    #[error("action record must be a JSON object")]
    NotAnObject,
    #[error("action record has no \"type\" field")]
    MissingType,
    #[error("action record \"type\" field must be a string")]
    TypeNotString,
    #[error("payload field \"{0}\" is reserved for the action type")]
    ReservedField(String),
    #[error("malformed action JSON: {0}")]
    Json(#[from] serde_json::Error),
}

pub type Result<T> = std::result::Result<T, Error>;
