use thiserror::Error;

#[derive(Debug, Error, Clone, Copy, PartialEq)]
pub enum CarError {
    /// Raised when a car is asked to take a negative (or NaN) value.
    #[error("invalid value: {value}")]
    InvalidValue { value: f64 },
}
