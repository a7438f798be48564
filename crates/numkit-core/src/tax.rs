use serde::Serialize;

use crate::error::{NumError, NumResult};

#[derive(Debug, Clone, Copy, PartialEq, Serialize)]
pub struct TaxBreakdown {
    pub cost: f64,
    pub rate: f64,
    pub tax: f64,
    pub total: f64,
}

/// Sales tax on `cost` at `rate` (0.08 for 8%).
pub fn apply_tax(cost: f64, rate: f64) -> NumResult<TaxBreakdown> {
    for (value, what) in [(cost, "cost"), (rate, "tax rate")] {
        if !value.is_finite() {
            return Err(NumError::NotFinite(what));
        }
        if value < 0.0 {
            return Err(NumError::NegativeInput(what));
        }
    }

    let tax = cost * rate;
    Ok(TaxBreakdown {
        cost,
        rate,
        tax,
        total: cost + tax,
    })
}
