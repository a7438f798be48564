use tracing::debug;

use crate::error::{NumError, NumResult};

/// Prime factors of `n` with multiplicity, in non-decreasing order.
///
/// The odd-divisor search limit is taken once, from `n` with its factors of
/// two removed, and is not tightened as further factors are divided out. Any
/// cofactor left above 2 after the search is prime and closes the list.
pub fn prime_factors(mut n: u64) -> NumResult<Vec<u64>> {
    if n < 2 {
        return Err(NumError::InvalidArgument(format!(
            "cannot factorize {n}: value must be at least 2"
        )));
    }

    let mut factors = Vec::new();
    while n % 2 == 0 {
        factors.push(2);
        n /= 2;
    }

    let limit = n.isqrt() + 1;
    debug!(reduced = n, limit, "odd factor search");

    let mut i = 3u64;
    while i < limit {
        while n % i == 0 {
            factors.push(i);
            n /= i;
        }
        i += 2;
    }

    if n > 2 {
        factors.push(n);
    }

    Ok(factors)
}
