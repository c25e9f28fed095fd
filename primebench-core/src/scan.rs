//! Sequential range scanner

use crate::{PrimeList, Range, is_prime};

/// Collect every prime in `range`, in ascending order.
pub fn scan(range: &Range) -> PrimeList {
    range.iter().filter(|&n| is_prime(n)).collect()
}
