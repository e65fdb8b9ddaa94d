use thiserror::Error;

#[derive(Debug, Error, PartialEq, Eq)]
pub enum EngineError {
    #[error("Invalid card token: {token:?}")]
    InvalidCard { token: String },
}
