use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ModelError {
    #[error("PNR must be exactly 10 characters, got {length}")]
    InvalidPnrLength { length: usize },
    #[error("PNR must contain only digits: {0:?}")]
    InvalidPnrDigits(String),
    #[error("unknown status label: {0}")]
    UnknownStatusLabel(String),
}

pub type Result<T> = std::result::Result<T, ModelError>;
