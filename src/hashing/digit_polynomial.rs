//! # Digit Polynomial Hash
//!
//! Maps a non-negative integer key to a bucket index in `[0, modulus)` by treating the key's
//! **decimal digits** as polynomial coefficients, least-significant digit first:
//!
//! `hash(k) = (d0 * base^0 + d1 * base^1 + ... + dn * base^n) mod modulus`
//!
//! ## Key Features
//! - **Configurable base** (defaults to 31) and **modulus** (the table size).
//! - Powers of the base are carried **incrementally mod modulus**, and every product is widened
//!   to 128 bits, so no intermediate overflows for any `u64` modulus.
//! - **Builder pattern** for a validated, reusable hasher bound to one table size.
//!
//! A key of `0` has no digits to fold and always maps to bucket `0`. That is intentional and
//! consistent between build and search.
//!
//! **Note**: This is not a general-purpose or DoS-resistant hash. It exists to study how the
//! choice of table size affects chain lengths for a fixed, simple hash.

use crate::error::{Error, Result};

/// Default polynomial base.
pub const DEFAULT_BASE: u64 = 31;

/// Computes the digit polynomial hash of `key` for a table of `modulus` buckets.
///
/// # Panics
/// - if `modulus == 0`. Use [`DigitHasherBuilder`] for a validated hasher.
///
/// # Examples
/// ```
/// use chainbench::hashing::digit_polynomial_hash;
///
/// // digits of 32 are [2, 3] => 2*1 + 3*31 = 95, and 95 mod 31 = 2
/// assert_eq!(digit_polynomial_hash(32, 31, 31), 2);
/// assert_eq!(digit_polynomial_hash(0, 97, 31), 0);
/// ```
pub fn digit_polynomial_hash(key: u64, modulus: u64, base: u64) -> u64 {
    let mut hash_value = 0u64;
    let mut base_power = 1u64;
    let mut remaining = key;

    while remaining > 0 {
        let digit = remaining % 10;
        hash_value = add_mod(hash_value, mul_mod(digit, base_power, modulus), modulus);
        base_power = mul_mod(base_power, base, modulus);
        remaining /= 10;
    }

    hash_value
}

/// A builder for [`DigitHasher`], allowing you to set base and modulus.
#[derive(Debug, Clone)]
pub struct DigitHasherBuilder {
    base: u64,
    modulus: u64,
}

impl Default for DigitHasherBuilder {
    fn default() -> Self {
        Self {
            base: DEFAULT_BASE,
            modulus: 1,
        }
    }
}

impl DigitHasherBuilder {
    /// Creates a new builder with the default base and a single bucket.
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the base (the multiplier used in the polynomial).
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Sets the modulus, i.e. the number of buckets the hash addresses.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Validates the parameters and builds the hasher.
    ///
    /// # Errors
    /// - [`Error::InvalidModulus`] if the modulus is zero.
    /// - [`Error::InvalidBase`] if the base is below 2.
    pub fn build(self) -> Result<DigitHasher> {
        if self.modulus == 0 {
            return Err(Error::InvalidModulus {
                modulus: self.modulus,
            });
        }
        if self.base < 2 {
            return Err(Error::InvalidBase { base: self.base });
        }
        Ok(DigitHasher {
            base: self.base,
            modulus: self.modulus,
        })
    }
}

/// A digit polynomial hasher bound to one table size.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DigitHasher {
    base: u64,
    modulus: u64,
}

impl DigitHasher {
    /// Hasher with the default base for a table of `modulus` buckets.
    pub fn new(modulus: u64) -> Result<Self> {
        DigitHasherBuilder::new().with_modulus(modulus).build()
    }

    pub fn base(&self) -> u64 {
        self.base
    }

    pub fn modulus(&self) -> u64 {
        self.modulus
    }

    /// Returns the hash of `key`, always `< modulus`.
    #[inline]
    pub fn hash(&self, key: u64) -> u64 {
        digit_polynomial_hash(key, self.modulus, self.base)
    }

    /// Returns the bucket index of `key`.
    #[inline]
    pub fn bucket(&self, key: u64) -> usize {
        self.hash(key) as usize
    }
}

// internal ops

#[inline]
fn add_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 + b as u128) % m as u128) as u64
}

#[inline]
fn mul_mod(a: u64, b: u64, m: u64) -> u64 {
    ((a as u128 * b as u128) % m as u128) as u64
}
