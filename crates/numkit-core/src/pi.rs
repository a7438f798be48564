//! Pi via the Gauss–Legendre algorithm.
//!
//! Each AGM step roughly doubles the number of correct digits, so even the
//! full `f64` precision is reached in three iterations.

use tracing::debug;

use crate::approximator::Approximator;
use crate::precision::Precision;

#[derive(Debug, Clone, Copy, Default)]
pub struct GaussLegendre;

impl Approximator for GaussLegendre {
    fn name(&self) -> &'static str {
        "Pi"
    }

    fn approximate(&self, precision: Precision) -> f64 {
        let accuracy = precision.threshold();

        let mut a = 1.0f64;
        let mut b = 1.0 / 2f64.sqrt();
        let mut t = 0.25f64;
        let mut p = 1.0f64;
        let mut iterations = 0u32;

        while (a - b).abs() > accuracy {
            let a_next = (a + b) / 2.0;
            b = (a * b).sqrt();
            t -= p * (a - a_next).powi(2);
            a = a_next;
            p *= 2.0;
            iterations += 1;
        }

        let pi = (a + b).powi(2) / (4.0 * t);
        debug!(digits = precision.digits(), iterations, "gauss-legendre converged");
        precision.round(pi)
    }
}

/// Pi rounded to `precision` decimal places.
pub fn find_pi(precision: Precision) -> f64 {
    GaussLegendre.approximate(precision)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::precision::MAX_DIGITS;
    use std::f64::consts::PI;

    #[test]
    fn test_matches_reference_digits() {
        for n in 0..=MAX_DIGITS {
            let p = Precision::new(n).unwrap();
            assert_eq!(p.format(find_pi(p)), p.format(PI), "digits = {n}");
        }
    }

    #[test]
    fn test_zero_digits_rounds_to_three() {
        assert_eq!(find_pi(Precision::new(0).unwrap()), 3.0);
    }

    #[test]
    fn test_rounds_last_digit() {
        // 3.14159... rounds up at the fourth place
        assert_eq!(find_pi(Precision::new(4).unwrap()), 3.1416);
        assert_eq!(find_pi(Precision::new(2).unwrap()), 3.14);
    }

    #[test]
    fn test_max_precision_terminates() {
        let p = Precision::new(MAX_DIGITS).unwrap();
        assert_eq!(find_pi(p), 3.14159265358979);
    }

    #[test]
    fn test_idempotent() {
        let p = Precision::new(9).unwrap();
        assert_eq!(find_pi(p).to_bits(), find_pi(p).to_bits());
    }
}
