use thiserror::Error;

/// Core sizing errors - every failure is a deterministic caller-input
/// defect, reported once and never retried
#[derive(Error, Debug)]
pub enum SizingError {
    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error("unknown workload profile: {0}")]
    UnknownProfile(String),
}

pub type Result<T> = std::result::Result<T, SizingError>;
