use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq)]
pub enum RadarError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Invalid data: {0}")]
    InvalidData(String),

    #[error("Not found: {0}")]
    NotFound(String),
}

pub type RadarResult<T> = Result<T, RadarError>;
