use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum DsaError {
    #[error("structure is empty")]
    EmptyStructure,

    #[error("index {index} out of range for length {len}")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("key {key} not found")]
    NotFound { key: i32 },

    #[error("stack overflow: capacity {capacity} reached")]
    Overflow { capacity: usize },

    #[error("invalid expression: {0}")]
    InvalidExpression(String),

    #[error("invalid input: {0}")]
    InvalidInput(String),
}

pub type Result<T> = std::result::Result<T, DsaError>;
