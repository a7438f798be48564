use crate::precision::Precision;

/// An iterative approximation of a mathematical constant.
pub trait Approximator {
    /// Short display name, e.g. "Pi".
    fn name(&self) -> &'static str;
    /// Approximate the constant, rounded to `precision` decimal places.
    fn approximate(&self, precision: Precision) -> f64;
}
