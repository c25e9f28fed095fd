//! Trial-division primality test

/// Returns `true` when `n` is prime.
///
/// Checks every divisor from 2 through `floor(sqrt(n))`. The bound is written
/// as `i <= n / i` so the loop never overflows, even near `i64::MAX`.
#[inline]
pub fn is_prime(n: i64) -> bool {
    if n <= 1 {
        return false;
    }
    if n <= 3 {
        return true;
    }

    let mut i = 2;
    while i <= n / i {
        if n % i == 0 {
            return false;
        }
        i += 1;
    }
    true
}
