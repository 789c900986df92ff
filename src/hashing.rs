//! Hashing primitives: the digit polynomial bucket hash and the separate-chaining table built on it.

pub mod digit_polynomial;
pub mod separate;

pub use digit_polynomial::{digit_polynomial_hash, DigitHasher, DigitHasherBuilder, DEFAULT_BASE};
pub use separate::{ChainedTable, ChainedTableBuilder, LoadStats, Lookup};
