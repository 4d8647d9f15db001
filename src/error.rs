use std::path::PathBuf;
use thiserror::Error;

pub type Result<T> = std::result::Result<T, QualifierError>;

#[derive(Debug, Error)]
pub enum QualifierError {
    /// Income or home value was zero, so the ratio is undefined.
    #[error("cannot calculate the {ratio} ratio: {denominator} must not be zero")]
    DivisionByZero {
        ratio: &'static str,
        denominator: &'static str,
    },

    #[error("can't find this path: {}", .0.display())]
    NotFound(PathBuf),

    /// A rate sheet row with the wrong shape or a non-numeric field.
    #[error("invalid rate sheet row {row}: {message}")]
    InvalidRow { row: usize, message: String },

    #[error("invalid input: {0}")]
    InvalidInput(String),

    #[error(transparent)]
    Csv(#[from] csv::Error),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}
