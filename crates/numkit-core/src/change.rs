use serde::Serialize;

use crate::error::{NumError, NumResult};

/// US bills and coins, largest first, valued in cents.
pub const DENOMINATIONS: [(&str, u64); 11] = [
    ("hundred-dollar bills", 10_000),
    ("fifty-dollar bills", 5_000),
    ("twenty-dollar bills", 2_000),
    ("ten-dollar bills", 1_000),
    ("five-dollar bills", 500),
    ("two-dollar bills", 200),
    ("one-dollar bills", 100),
    ("quarters", 25),
    ("dimes", 10),
    ("nickels", 5),
    ("pennies", 1),
];

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ChangeItem {
    pub name: &'static str,
    pub cents: u64,
    pub count: u64,
}

/// Greedy breakdown of `amount` dollars into bills and coins.
///
/// The amount is rounded to whole cents first; denominations with a zero
/// count are left out.
pub fn make_change(amount: f64) -> NumResult<Vec<ChangeItem>> {
    if amount < 0.0 || amount.is_nan() {
        return Err(NumError::NegativeInput("amount"));
    }
    let cents = (amount * 100.0).round();
    if cents > u64::MAX as f64 {
        return Err(NumError::Overflow(format!("amount {amount} is too large")));
    }

    let mut remaining = cents as u64;
    let mut items = Vec::new();
    for (name, value) in DENOMINATIONS {
        let count = remaining / value;
        if count > 0 {
            items.push(ChangeItem {
                name,
                cents: value,
                count,
            });
            remaining %= value;
        }
    }
    Ok(items)
}
