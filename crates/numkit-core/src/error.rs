use thiserror::Error;

#[derive(Debug, Error, PartialEq)]
pub enum NumError {
    #[error("invalid argument: {0}")]
    InvalidArgument(String),

    #[error("precision of {digits} digits exceeds the maximum of {max}")]
    PrecisionOutOfRange { digits: u32, max: u32 },

    #[error("{0} must be non-negative")]
    NegativeInput(&'static str),

    #[error("{0} must be a finite number")]
    NotFinite(&'static str),

    #[error("unknown {quantity} unit: {unit}")]
    UnknownUnit { quantity: &'static str, unit: String },

    #[error("{0} is below absolute zero")]
    BelowAbsoluteZero(String),

    #[error("invalid card number: {0}")]
    InvalidCardNumber(String),

    #[error("overflow: {0}")]
    Overflow(String),
}

pub type NumResult<T> = Result<T, NumError>;
