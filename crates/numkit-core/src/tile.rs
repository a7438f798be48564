use crate::error::{NumError, NumResult};

/// Cost of covering a `width` x `height` floor at `unit_cost` per unit area.
///
/// Inputs are not validated; callers run [`check_dimensions`] first.
pub fn tile_cost(width: f64, height: f64, unit_cost: f64) -> f64 {
    width * height * unit_cost
}

/// Every tile input must be finite and non-negative. NaN fails both.
pub fn check_dimensions(width: f64, height: f64, unit_cost: f64) -> NumResult<()> {
    for (value, what) in [(width, "width"), (height, "height"), (unit_cost, "unit cost")] {
        if !value.is_finite() {
            return Err(NumError::NotFinite(what));
        }
        if value < 0.0 {
            return Err(NumError::NegativeInput(what));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_tile_cost() {
        assert_eq!(tile_cost(3.0, 4.0, 2.5), 30.0);
    }

    #[test]
    fn test_tile_cost_zero_area() {
        assert_eq!(tile_cost(0.0, 12.0, 9.99), 0.0);
    }

    #[test]
    fn test_check_dimensions_accepts_zero() {
        assert_eq!(check_dimensions(0.0, 0.0, 0.0), Ok(()));
        assert_eq!(check_dimensions(3.0, 4.0, 2.5), Ok(()));
    }

    #[test]
    fn test_check_dimensions_rejects_negative() {
        assert_eq!(
            check_dimensions(3.0, -4.0, 2.0),
            Err(NumError::NegativeInput("height"))
        );
    }

    #[test]
    fn test_check_dimensions_rejects_nan_and_infinity() {
        assert_eq!(
            check_dimensions(f64::NAN, 1.0, 1.0),
            Err(NumError::NotFinite("width"))
        );
        assert_eq!(
            check_dimensions(1.0, 1.0, f64::INFINITY),
            Err(NumError::NotFinite("unit cost"))
        );
        assert_eq!(
            check_dimensions(1.0, f64::NEG_INFINITY, 1.0),
            Err(NumError::NotFinite("height"))
        );
    }
}
