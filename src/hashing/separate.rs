//! # Separate Chaining Table
//!
//! A fixed-size hash table using **separate chaining**, built to measure lookup cost rather than
//! to serve as a general map:
//! - The bucket count (the **modulus**) is fixed at construction. There is no resizing.
//! - Buckets are **append-only**: duplicate ids are kept, in insertion order, and nothing is removed.
//! - The table borrows its records; it never owns or copies them.
//! - [`ChainedTable::lookup`] reports how many **comparisons** the scan needed, charging one
//!   unit for an empty bucket.

use crate::error::{Error, Result};
use crate::hashing::digit_polynomial::{DigitHasher, DigitHasherBuilder, DEFAULT_BASE};
use crate::record::Record;

/// A "bucket" is a vector of borrowed records for separate chaining.
type Bucket<'a> = Vec<&'a Record>;

/// Outcome of a single lookup: the scan cost and the first matching record, if any.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Lookup<'a> {
    /// Entries compared before a match or exhaustion; `1` for an empty bucket.
    pub comparisons: usize,
    pub found: Option<&'a Record>,
}

/// Raw load figures gathered in one pass over the buckets.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct LoadStats {
    pub non_empty_buckets: usize,
    pub max_chain_length: usize,
    pub total_entries: usize,
}

/// A builder for [`ChainedTable`].
#[derive(Debug, Clone)]
pub struct ChainedTableBuilder {
    modulus: u64,
    base: u64,
}

impl Default for ChainedTableBuilder {
    fn default() -> Self {
        Self {
            modulus: 1,
            base: DEFAULT_BASE,
        }
    }
}

impl ChainedTableBuilder {
    pub fn new() -> Self {
        Self::default()
    }

    /// Sets the number of buckets.
    pub fn with_modulus(mut self, modulus: u64) -> Self {
        self.modulus = modulus;
        self
    }

    /// Sets the polynomial base of the bucket hash.
    pub fn with_base(mut self, base: u64) -> Self {
        self.base = base;
        self
    }

    /// Allocates `modulus` empty buckets.
    ///
    /// # Errors
    /// - [`Error::InvalidModulus`] if the modulus is zero or cannot be addressed on this platform.
    /// - [`Error::InvalidBase`] if the base is below 2.
    pub fn build<'a>(self) -> Result<ChainedTable<'a>> {
        let hasher = DigitHasherBuilder::new()
            .with_modulus(self.modulus)
            .with_base(self.base)
            .build()?;
        let bucket_count = usize::try_from(self.modulus).map_err(|_| Error::InvalidModulus {
            modulus: self.modulus,
        })?;

        let mut buckets = Vec::with_capacity(bucket_count);
        buckets.resize_with(bucket_count, Default::default);

        Ok(ChainedTable {
            buckets,
            len: 0,
            hasher,
        })
    }
}

/// A separate-chaining table of borrowed [`Record`]s keyed by `Record::id`.
#[derive(Debug, Clone)]
pub struct ChainedTable<'a> {
    buckets: Vec<Bucket<'a>>,
    /// The number of stored records, duplicates included.
    len: usize,
    hasher: DigitHasher,
}

impl<'a> ChainedTable<'a> {
    /// Creates a table of `modulus` buckets with the default base.
    pub fn new(modulus: u64) -> Result<Self> {
        ChainedTableBuilder::new().with_modulus(modulus).build()
    }

    pub fn modulus(&self) -> u64 {
        self.hasher.modulus()
    }

    pub fn base(&self) -> u64 {
        self.hasher.base()
    }

    /// Returns the number of records in the table.
    pub fn len(&self) -> usize {
        self.len
    }

    pub fn is_empty(&self) -> bool {
        self.len == 0
    }

    /// Appends `record` to the bucket of its id. Duplicate ids are kept.
    pub fn insert(&mut self, record: &'a Record) {
        let idx = self.hasher.bucket(record.id);
        self.buckets[idx].push(record);
        self.len += 1;
    }

    /// Scans the bucket of `key` in insertion order, stopping at the first record with that id.
    pub fn lookup(&self, key: u64) -> Lookup<'a> {
        let bucket = &self.buckets[self.hasher.bucket(key)];
        if bucket.is_empty() {
            // an empty bucket still costs one probe
            return Lookup {
                comparisons: 1,
                found: None,
            };
        }

        let mut comparisons = 0;
        for &record in bucket {
            comparisons += 1;
            if record.id == key {
                return Lookup {
                    comparisons,
                    found: Some(record),
                };
            }
        }
        Lookup {
            comparisons,
            found: None,
        }
    }

    /// Returns the chain stored at bucket `index`.
    ///
    /// # Panics
    /// - if `index >= modulus`.
    pub fn bucket(&self, index: usize) -> &[&'a Record] {
        &self.buckets[index]
    }

    /// Chain length of every bucket, in bucket order.
    pub fn chain_lengths(&self) -> impl Iterator<Item = usize> + '_ {
        self.buckets.iter().map(Vec::len)
    }

    /// Walks all buckets once, collecting occupancy and chain-length figures.
    pub fn load_stats(&self) -> LoadStats {
        self.chain_lengths()
            .filter(|&len| len > 0)
            .fold(LoadStats::default(), |mut acc, len| {
                acc.non_empty_buckets += 1;
                acc.max_chain_length = acc.max_chain_length.max(len);
                acc.total_entries += len;
                acc
            })
    }

    /// Iterates over every stored record, bucket by bucket.
    pub fn iter(&self) -> impl Iterator<Item = &'a Record> + '_ {
        self.buckets.iter().flat_map(|bucket| bucket.iter().copied())
    }
}
