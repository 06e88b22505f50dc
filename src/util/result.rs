use num_bigint::BigInt;
use thiserror::Error;

#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum Error {
    /// `high < low`: there is no integer to pick from.
    #[error("InvalidRange: empty range [{low}, {high}]")]
    InvalidRange { low: BigInt, high: BigInt },
}

impl Error {
    pub fn invalid_range(low: impl Into<BigInt>, high: impl Into<BigInt>) -> Self {
        Self::InvalidRange {
            low: low.into(),
            high: high.into(),
        }
    }

    pub fn is_invalid_range(&self) -> bool {
        matches!(self, Error::InvalidRange { .. })
    }
}

pub type Result<T> = std::result::Result<T, Error>;
