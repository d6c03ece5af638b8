use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Error)]
pub enum OrientationError {
    #[error("landmark index {index} out of range for a set of {len} landmarks")]
    IndexOutOfRange { index: usize, len: usize },

    #[error("vector has zero or non-finite length")]
    DegenerateVector,

    #[error("tolerance must be finite and >= 0.0, got {0}")]
    InvalidTolerance(f64),

    #[error("invalid forward policy: {0}")]
    InvalidPolicy(String),
}

impl From<serde_json::Error> for OrientationError {
    fn from(e: serde_json::Error) -> Self {
        OrientationError::InvalidPolicy(e.to_string())
    }
}
