use crate::error::{NumError, NumResult};

/// Steps for `n` to reach 1 under `n -> 3n + 1` (odd) / `n -> n / 2` (even).
pub fn collatz_steps(mut n: u64) -> NumResult<u64> {
    if n <= 1 {
        return Err(NumError::InvalidArgument(format!(
            "collatz start {n} must be greater than 1"
        )));
    }

    let start = n;
    let mut steps = 0u64;
    while n != 1 {
        n = if n % 2 == 1 {
            n.checked_mul(3)
                .and_then(|m| m.checked_add(1))
                .ok_or_else(|| NumError::Overflow(format!("collatz orbit of {start} leaves u64")))?
        } else {
            n / 2
        };
        steps += 1;
    }
    Ok(steps)
}
