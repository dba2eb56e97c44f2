pub type DieResult<T> = Result<T, DieError>;

/// Errors raised while turning attributes or preset files into a `DieConfig`.
///
/// The controller itself never fails: everything it receives has already
/// passed through [`DieConfig::validate`](super::DieConfig::validate).
#[derive(thiserror::Error, Debug)]
pub enum DieError {
    #[error("attribute `{attribute}` is not a number: {value:?}")]
    InvalidNumber { attribute: String, value: String },

    #[error("attribute `{attribute}` is not a CSS color: {value:?}")]
    InvalidColor { attribute: String, value: String },

    #[error("min roll value {min} is greater than max roll value {max}")]
    InvertedRange { min: u32, max: u32 },

    #[error("allowed rolls must not be negative (got {0})")]
    NegativeBudget(i64),

    #[error("roll time must be a positive number of seconds (got {0})")]
    InvalidRollTime(f64),

    #[error("roll time must be at most {max} seconds (got {0})", max = super::config::MAX_ROLL_TIME_SECONDS)]
    RollTimeTooLong(f64),

    #[error("serialization error: {0}")]
    Serde(String),

    #[error(transparent)]
    Io(#[from] std::io::Error),
}

impl DieError {
    pub fn invalid_number(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidNumber {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn invalid_color(attribute: impl Into<String>, value: impl Into<String>) -> Self {
        Self::InvalidColor {
            attribute: attribute.into(),
            value: value.into(),
        }
    }

    pub fn serde(msg: impl Into<String>) -> Self {
        Self::Serde(msg.into())
    }
}
