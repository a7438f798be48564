//! Primality testing, an on-demand prime stream, and a sieve.

use tracing::debug;

use crate::error::{NumError, NumResult};

/// Trial division by odd divisors up to the square root.
pub fn is_prime(n: u64) -> bool {
    if n <= 1 {
        return false;
    }
    if n == 2 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }

    let mut i = 3u64;
    // i <= n / i is i * i <= n without the overflow
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 2;
    }
    true
}

/// Yields primes in increasing order, one per call to [`PrimeStream::advance`].
///
/// Each stream owns its cursor, so independent streams never interfere.
/// There is no reset: build a new stream to start over from 2.
#[derive(Debug, Clone)]
pub struct PrimeStream {
    current: u64,
}

impl PrimeStream {
    pub fn new() -> Self {
        Self { current: 2 }
    }

    /// Next prime at or after the cursor. `None` only once `u64` is exhausted.
    pub fn advance(&mut self) -> Option<u64> {
        loop {
            let candidate = self.current;
            self.current = self.current.checked_add(1)?;
            if is_prime(candidate) {
                debug!(prime = candidate, "prime stream advanced");
                return Some(candidate);
            }
        }
    }

    /// The next candidate that will be tested.
    pub fn cursor(&self) -> u64 {
        self.current
    }
}

impl Default for PrimeStream {
    fn default() -> Self {
        Self::new()
    }
}

impl Iterator for PrimeStream {
    type Item = u64;

    fn next(&mut self) -> Option<u64> {
        self.advance()
    }
}

/// Largest bound the sieve accepts. The table holds one byte per candidate.
pub const MAX_SIEVE_BOUND: u64 = 100_000_000;

/// Every prime `<= n`, ascending.
pub fn sieve_of_eratosthenes(n: u64) -> NumResult<Vec<u64>> {
    if n <= 1 {
        return Err(NumError::InvalidArgument(format!(
            "sieve bound {n} must be greater than 1"
        )));
    }
    if n > MAX_SIEVE_BOUND {
        return Err(NumError::InvalidArgument(format!(
            "sieve bound {n} exceeds the maximum of {MAX_SIEVE_BOUND}"
        )));
    }
    let size = usize::try_from(n)
        .ok()
        .and_then(|n| n.checked_add(1))
        .ok_or_else(|| NumError::Overflow(format!("sieve bound {n} exceeds addressable memory")))?;

    let mut sieve = Vec::new();
    sieve
        .try_reserve_exact(size)
        .map_err(|e| NumError::Overflow(format!("sieve table for {n}: {e}")))?;
    sieve.resize(size, true);
    sieve[0] = false;
    sieve[1] = false;

    let mut i = 2usize;
    while i * i < size {
        if sieve[i] {
            for multiple in (i * i..size).step_by(i) {
                sieve[multiple] = false;
            }
        }
        i += 1;
    }

    Ok(sieve
        .iter()
        .enumerate()
        .filter_map(|(k, &prime)| prime.then_some(k as u64))
        .collect())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_is_prime_small() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn test_is_prime_squares_and_large() {
        assert!(!is_prime(9));
        assert!(!is_prime(25));
        assert!(!is_prime(121));
        assert!(is_prime(7919));
        assert!(is_prime(4_294_967_291));
        assert!(!is_prime(4_294_967_297)); // 641 * 6700417
    }

    #[test]
    fn test_stream_first_five() {
        let mut stream = PrimeStream::new();
        let firsts: Vec<u64> = (0..5).filter_map(|_| stream.advance()).collect();
        assert_eq!(firsts, vec![2, 3, 5, 7, 11]);
        assert_eq!(stream.cursor(), 12);
    }

    #[test]
    fn test_streams_are_independent() {
        let mut a = PrimeStream::new();
        let mut b = PrimeStream::default();
        a.advance();
        a.advance();
        assert_eq!(b.advance(), Some(2));
        assert_eq!(a.advance(), Some(5));
    }

    #[test]
    fn test_stream_as_iterator() {
        let hundredth = PrimeStream::new().nth(99);
        assert_eq!(hundredth, Some(541));
    }

    #[test]
    fn test_sieve_thirty() {
        assert_eq!(
            sieve_of_eratosthenes(30).unwrap(),
            vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]
        );
        assert_eq!(sieve_of_eratosthenes(2).unwrap(), vec![2]);
    }

    #[test]
    fn test_sieve_agrees_with_stream() {
        let sieved = sieve_of_eratosthenes(1000).unwrap();
        let streamed: Vec<u64> = PrimeStream::new().take_while(|&p| p <= 1000).collect();
        assert_eq!(sieved, streamed);
    }

    #[test]
    fn test_sieve_rejects_small_bound() {
        assert!(matches!(sieve_of_eratosthenes(1), Err(NumError::InvalidArgument(_))));
    }

    #[test]
    fn test_sieve_rejects_huge_bound() {
        assert!(matches!(
            sieve_of_eratosthenes(MAX_SIEVE_BOUND + 1),
            Err(NumError::InvalidArgument(_))
        ));
        assert!(matches!(
            sieve_of_eratosthenes(u64::MAX),
            Err(NumError::InvalidArgument(_))
        ));
    }
}
