use tracing::debug;

use crate::approximator::Approximator;
use crate::precision::Precision;

/// Euler's number from the series `sum 1/k!`.
///
/// Summation stops right after adding the first term that is smaller than
/// `10^-n`; that term is part of the result.
#[derive(Debug, Clone, Copy, Default)]
pub struct TaylorSeries;

impl Approximator for TaylorSeries {
    fn name(&self) -> &'static str {
        "E"
    }

    fn approximate(&self, precision: Precision) -> f64 {
        let accuracy = precision.threshold();

        let mut e = 0.0f64;
        let mut factorial = 1.0f64;
        let mut k = 0.0f64;

        loop {
            let term = 1.0 / factorial;
            e += term;
            if term < accuracy {
                break;
            }
            k += 1.0;
            factorial *= k;
        }

        debug!(digits = precision.digits(), terms = k as u64 + 1, "series summed");
        precision.round(e)
    }
}

/// e rounded to `precision` decimal places.
pub fn find_e(precision: Precision) -> f64 {
    TaylorSeries.approximate(precision)
}
