//! The fixed small-prime table.
//!
//! Two slots are reserved: index 0 is the zero marker (not a prime) and
//! index 1 is the sign marker `-1`, whose exponent parity encodes the
//! sign of a factored value. Indices 2.. hold the primes below 200.
//!
//! The table is deliberately finite: any prime factor beyond its largest
//! entry is absorbed whole into a factored value's remainder instead of
//! being factored further, which bounds factorization cost.

use surdus_integers::Integer;

/// Number of slots in the prime table, sentinels included.
pub const NUM_PRIMES: usize = 48;

/// Index of the zero marker slot.
pub const ZERO_MARKER: usize = 0;

/// Index of the sign marker slot.
pub const SIGN_MARKER: usize = 1;

/// Index of the first real prime.
pub const FIRST_PRIME: usize = 2;

/// The table entries. `PRIMES[0]` and `PRIMES[1]` are the sentinels.
pub const PRIMES: [i64; NUM_PRIMES] = [
    0, -1, 2, 3, 5, 7, 11, 13, 17, 19, 23, 29, 31, 37, 41, 43, 47, 53, 59, 61, 67, 71, 73, 79, 83,
    89, 97, 101, 103, 107, 109, 113, 127, 131, 137, 139, 149, 151, 157, 163, 167, 173, 179, 181,
    191, 193, 197, 199,
];

/// Returns the i-th table entry as a big integer.
///
/// # Panics
///
/// Panics if `index` is out of range.
#[must_use]
pub fn prime(index: usize) -> Integer {
    Integer::new(PRIMES[index])
}
