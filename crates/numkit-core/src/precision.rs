use serde::{Deserialize, Serialize};
use std::fmt;

use crate::error::{NumError, NumResult};

/// Largest digit count for which the `f64` pi and e results still round
/// correctly in the last place. At `f64::DIGITS` (15) both are one off.
pub const MAX_DIGITS: u32 = 14;

/// A validated count of decimal places, `0..=MAX_DIGITS`.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(try_from = "u32", into = "u32")]
pub struct Precision(u32);

impl Precision {
    pub fn new(digits: u32) -> NumResult<Self> {
        if digits > MAX_DIGITS {
            return Err(NumError::PrecisionOutOfRange {
                digits,
                max: MAX_DIGITS,
            });
        }
        Ok(Self(digits))
    }

    pub fn digits(self) -> u32 {
        self.0
    }

    /// Convergence threshold `10^-n`. Zero digits gives 1.
    pub fn threshold(self) -> f64 {
        10f64.powi(-(self.0 as i32))
    }

    /// Round `value` to this many decimal places, halves away from zero.
    pub fn round(self, value: f64) -> f64 {
        let factor = 10f64.powi(self.0 as i32);
        (value * factor).round() / factor
    }

    /// Render `value` with exactly this many digits after the decimal point.
    pub fn format(self, value: f64) -> String {
        format!("{value:.prec$}", prec = self.0 as usize)
    }
}

impl TryFrom<u32> for Precision {
    type Error = NumError;

    fn try_from(digits: u32) -> Result<Self, Self::Error> {
        Self::new(digits)
    }
}

impl From<Precision> for u32 {
    fn from(p: Precision) -> Self {
        p.0
    }
}

impl fmt::Display for Precision {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}
