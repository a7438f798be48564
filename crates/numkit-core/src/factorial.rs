//! `n!` two ways. Both stop with `Overflow` past 20!, the largest that fits
//! in a `u64`.

use crate::error::{NumError, NumResult};

fn overflow(n: u32) -> NumError {
    NumError::Overflow(format!("{n}! does not fit in 64 bits"))
}

pub fn factorial_loop(n: u32) -> NumResult<u64> {
    (2..=u64::from(n)).try_fold(1u64, |acc, k| acc.checked_mul(k).ok_or_else(|| overflow(n)))
}

pub fn factorial_recursive(n: u32) -> NumResult<u64> {
    if n <= 1 {
        return Ok(1);
    }
    factorial_recursive(n - 1)?
        .checked_mul(u64::from(n))
        .ok_or_else(|| overflow(n))
}
