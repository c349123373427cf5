use thiserror::Error;

#[derive(Error, Debug, Clone, Copy, PartialEq)]
pub enum GaussError {
    #[error("standard deviation must be finite and non-negative, got {0}")]
    InvalidStdDev(f64),

    #[error("mean must be finite, got {0}")]
    InvalidMean(f64),
}

pub type Result<T> = std::result::Result<T, GaussError>;
