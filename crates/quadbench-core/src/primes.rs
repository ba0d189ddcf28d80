//! Prime counting, the second benchmark workload.

use rayon::prelude::*;

/// Trial-division primality test.
#[must_use]
pub fn is_prime(n: u64) -> bool {
    if n < 2 {
        return false;
    }
    if n < 4 {
        return true;
    }
    if n % 2 == 0 {
        return false;
    }
    let mut divisor = 3u64;
    while divisor <= n / divisor {
        if n % divisor == 0 {
            return false;
        }
        divisor += 2;
    }
    true
}

/// Count primes in `[0, limit)`, optionally on the rayon pool.
#[must_use]
pub fn count_primes(limit: u64, parallel: bool) -> u64 {
    if parallel {
        (0..limit).into_par_iter().filter(|&n| is_prime(n)).count() as u64
    } else {
        (0..limit).filter(|&n| is_prime(n)).count() as u64
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn small_primes() {
        let primes: Vec<u64> = (0..30).filter(|&n| is_prime(n)).collect();
        assert_eq!(primes, vec![2, 3, 5, 7, 11, 13, 17, 19, 23, 29]);
    }

    #[test]
    fn odd_composites_are_rejected() {
        for n in [9u64, 15, 21, 25, 27, 49, 91, 7_919 * 7_907] {
            assert!(!is_prime(n), "{n} reported prime");
        }
    }

    #[test]
    fn large_prime() {
        assert!(is_prime(1_000_000_007));
    }

    #[test]
    fn counts_match_pi() {
        assert_eq!(count_primes(100, false), 25);
        assert_eq!(count_primes(10_000, false), 1_229);
    }

    #[test]
    fn parallel_count_matches_sequential() {
        assert_eq!(count_primes(50_000, true), count_primes(50_000, false));
    }

    #[test]
    fn empty_range() {
        assert_eq!(count_primes(0, true), 0);
        assert_eq!(count_primes(2, false), 0);
    }
}
