use crate::error::{NumError, NumResult};

/// Largest term count whose last term still fits in a `u64` (F(0)..=F(93)).
pub const MAX_FIBONACCI_COUNT: usize = 94;

/// Fibonacci terms not exceeding `bound`.
///
/// 0 is emitted for any non-negative bound and 1 for any bound of at least 1;
/// the running sum then starts again from 0 + 1, so the sequence reads
/// `0 1 1 2 3 ...`. Terms never exceed `i64::MAX`, so the `u64` sum of two of
/// them cannot overflow.
pub fn fibonacci_to(bound: i64) -> Vec<u64> {
    let mut seq = Vec::new();
    if bound < 0 {
        return seq;
    }
    let limit = bound as u64;

    seq.push(0);
    if limit >= 1 {
        seq.push(1);
    }

    let (mut f1, mut f2) = (0u64, 1u64);
    loop {
        let next = f1 + f2;
        if next > limit {
            break;
        }
        seq.push(next);
        f1 = f2;
        f2 = next;
    }
    seq
}

/// The first `count` Fibonacci terms.
pub fn fibonacci_first(count: usize) -> NumResult<Vec<u64>> {
    if count > MAX_FIBONACCI_COUNT {
        return Err(NumError::Overflow(format!(
            "{count} Fibonacci terms do not fit in u64 (max {MAX_FIBONACCI_COUNT})"
        )));
    }

    let mut seq = Vec::with_capacity(count);
    if count >= 1 {
        seq.push(0);
    }
    if count >= 2 {
        seq.push(1);
    }

    let (mut f1, mut f2) = (0u64, 1u64);
    for _ in 2..count {
        let next = f1 + f2;
        seq.push(next);
        f1 = f2;
        f2 = next;
    }
    Ok(seq)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bounded_to_ten() {
        assert_eq!(fibonacci_to(10), vec![0, 1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_bounded_negative_is_empty() {
        assert!(fibonacci_to(-1).is_empty());
        assert!(fibonacci_to(i64::MIN).is_empty());
    }

    #[test]
    fn test_bounded_small() {
        assert_eq!(fibonacci_to(0), vec![0]);
        assert_eq!(fibonacci_to(1), vec![0, 1, 1]);
        assert_eq!(fibonacci_to(8), vec![0, 1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_bounded_at_i64_max_does_not_overflow() {
        let seq = fibonacci_to(i64::MAX);
        assert_eq!(seq.last().copied(), Some(7_540_113_804_746_346_429));
    }

    #[test]
    fn test_counted_seven() {
        assert_eq!(fibonacci_first(7).unwrap(), vec![0, 1, 1, 2, 3, 5, 8]);
    }

    #[test]
    fn test_counted_boundaries() {
        assert!(fibonacci_first(0).unwrap().is_empty());
        assert_eq!(fibonacci_first(1).unwrap(), vec![0]);
        assert_eq!(fibonacci_first(2).unwrap(), vec![0, 1]);
    }

    #[test]
    fn test_counted_exact_length_and_recurrence() {
        let seq = fibonacci_first(40).unwrap();
        assert_eq!(seq.len(), 40);
        for k in 2..seq.len() {
            assert_eq!(seq[k], seq[k - 1] + seq[k - 2]);
        }
    }

    #[test]
    fn test_counted_overflow_boundary() {
        let seq = fibonacci_first(MAX_FIBONACCI_COUNT).unwrap();
        assert_eq!(seq.last().copied(), Some(12_200_160_415_121_876_738));
        assert!(matches!(
            fibonacci_first(MAX_FIBONACCI_COUNT + 1),
            Err(NumError::Overflow(_))
        ));
    }
}
