//! Separate-chaining hash table keyed by owned strings with `i32` values.
//!
//! Each bucket holds its chain as a `Vec` of entries in insertion order
//! (new keys are appended at the tail). The bucket for a key is
//! `hash(key) mod capacity`, normalised into `[0, capacity)` even when the
//! raw hash is negative. The table doubles its bucket array whenever a new
//! key would bring the load factor to [`MAX_TABLE_LOAD`] or above, so the
//! load factor stays below the threshold after every insert.

use std::fmt;
use std::mem;

use serde::{Deserialize, Serialize};

use crate::error::{HashSpellError, Result};

/// Load factor at which the table grows.
pub const MAX_TABLE_LOAD: f64 = 0.75;

/// Strategy that maps a key to a raw (possibly negative) hash value.
///
/// The strategy is a type parameter of [`HashTable`], so a table can never
/// switch hash functions once entries have been placed.
pub trait KeyHasher: Default {
    fn hash(&self, key: &str) -> i32;
}

/// Sum of the key's byte values.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharSum;

impl KeyHasher for CharSum {
    fn hash(&self, key: &str) -> i32 {
        key.bytes()
            .fold(0i32, |acc, b| acc.wrapping_add(i32::from(b)))
    }
}

/// Position-weighted byte sum, `sum((i + 1) * key[i])`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PositionWeighted;

impl KeyHasher for PositionWeighted {
    fn hash(&self, key: &str) -> i32 {
        key.bytes().enumerate().fold(0i32, |acc, (i, b)| {
            let weight = (i as i32).wrapping_add(1);
            acc.wrapping_add(weight.wrapping_mul(i32::from(b)))
        })
    }
}

#[derive(Debug, Clone)]
struct Entry {
    key: Box<str>,
    value: i32,
}

type Chain = Vec<Entry>;

/// Point-in-time summary of a table, for diagnostics.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct TableStats {
    pub size: usize,
    pub capacity: usize,
    pub empty_buckets: usize,
    pub load_factor: f64,
}

#[derive(Debug, Clone)]
pub struct HashTable<H: KeyHasher = CharSum> {
    buckets: Vec<Chain>,
    size: usize,
    hasher: H,
}

impl HashTable<CharSum> {
    /// Creates a table with `capacity` empty buckets using the char-sum hash.
    pub fn new(capacity: usize) -> Result<Self> {
        Self::with_hasher(capacity)
    }
}

impl<H: KeyHasher> HashTable<H> {
    /// Creates a table with `capacity` empty buckets using the hash strategy `H`.
    pub fn with_hasher(capacity: usize) -> Result<Self> {
        Ok(HashTable {
            buckets: allocate_buckets(capacity)?,
            size: 0,
            hasher: H::default(),
        })
    }

    /// Inserts `key` with `value`, or overwrites the value if `key` is present.
    ///
    /// The key is copied into the table. When the new key would push the load
    /// factor to the threshold, the table grows first; if growth fails the
    /// table is left untouched and the key is not inserted.
    pub fn put(&mut self, key: &str, value: i32) -> Result<()> {
        if key.is_empty() {
            return Err(HashSpellError::invalid_argument("key must not be empty"));
        }

        if let Some(slot) = self.get_mut(key) {
            *slot = value;
            return Ok(());
        }

        let target = grown_capacity(self.capacity(), self.size + 1)?;
        if target != self.capacity() {
            self.resize(target)?;
        }

        let index = self.bucket_index(key);
        self.buckets[index].push(Entry {
            key: key.into(),
            value,
        });
        self.size += 1;
        Ok(())
    }

    pub fn get(&self, key: &str) -> Option<&i32> {
        self.buckets[self.bucket_index(key)]
            .iter()
            .find(|entry| &*entry.key == key)
            .map(|entry| &entry.value)
    }

    /// Mutable handle to the stored value, for in-place updates.
    pub fn get_mut(&mut self, key: &str) -> Option<&mut i32> {
        let index = self.bucket_index(key);
        self.buckets[index]
            .iter_mut()
            .find(|entry| &*entry.key == key)
            .map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &str) -> bool {
        self.get(key).is_some()
    }

    /// Removes `key`, returning its value. Absent keys are a no-op.
    pub fn remove(&mut self, key: &str) -> Option<i32> {
        let index = self.bucket_index(key);
        let chain = &mut self.buckets[index];
        let position = chain.iter().position(|entry| &*entry.key == key)?;
        // Vec::remove keeps the rest of the chain in insertion order.
        let entry = chain.remove(position);
        self.size -= 1;
        Some(entry.value)
    }

    pub fn size(&self) -> usize {
        self.size
    }

    pub fn is_empty(&self) -> bool {
        self.size == 0
    }

    pub fn capacity(&self) -> usize {
        self.buckets.len()
    }

    pub fn empty_bucket_count(&self) -> usize {
        self.buckets.iter().filter(|chain| chain.is_empty()).count()
    }

    pub fn load_factor(&self) -> f64 {
        self.size as f64 / self.capacity() as f64
    }

    pub fn stats(&self) -> TableStats {
        TableStats {
            size: self.size,
            capacity: self.capacity(),
            empty_buckets: self.empty_bucket_count(),
            load_factor: self.load_factor(),
        }
    }

    /// Rebuilds the table with `new_capacity` buckets.
    ///
    /// The new bucket array is allocated before anything moves, so on error
    /// the table is unchanged. Entries are re-placed bucket by bucket, chain
    /// by chain, which keeps the relative order of colliding keys.
    pub fn resize(&mut self, new_capacity: usize) -> Result<()> {
        let mut buckets = allocate_buckets(new_capacity)?;
        let old_capacity = self.capacity();

        for chain in mem::take(&mut self.buckets) {
            for entry in chain {
                let index = normalize(self.hasher.hash(&entry.key), new_capacity);
                buckets[index].push(entry);
            }
        }
        self.buckets = buckets;

        log::debug!(
            "resized hash table from {} to {} buckets ({} entries)",
            old_capacity,
            new_capacity,
            self.size
        );
        Ok(())
    }

    /// Entries in bucket order, then chain order.
    pub fn iter(&self) -> Iter<'_> {
        Iter {
            buckets: self.buckets.iter(),
            chain: Default::default(),
            remaining: self.size,
        }
    }

    pub fn keys(&self) -> impl Iterator<Item = &str> + '_ {
        self.iter().map(|(key, _)| key)
    }

    fn bucket_index(&self, key: &str) -> usize {
        normalize(self.hasher.hash(key), self.capacity())
    }
}

impl<'a, H: KeyHasher> IntoIterator for &'a HashTable<H> {
    type Item = (&'a str, i32);
    type IntoIter = Iter<'a>;

    fn into_iter(self) -> Iter<'a> {
        self.iter()
    }
}

/// Prints every bucket as `Bucket i -> (key, value) -> ...`, one per line.
impl<H: KeyHasher> fmt::Display for HashTable<H> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        for (index, chain) in self.buckets.iter().enumerate() {
            write!(f, "Bucket {} -> ", index)?;
            for entry in chain {
                write!(f, "({}, {}) -> ", entry.key, entry.value)?;
            }
            writeln!(f)?;
        }
        Ok(())
    }
}

pub struct Iter<'a> {
    buckets: std::slice::Iter<'a, Chain>,
    chain: std::slice::Iter<'a, Entry>,
    remaining: usize,
}

impl<'a> Iterator for Iter<'a> {
    type Item = (&'a str, i32);

    fn next(&mut self) -> Option<Self::Item> {
        loop {
            if let Some(entry) = self.chain.next() {
                self.remaining -= 1;
                return Some((&*entry.key, entry.value));
            }
            self.chain = self.buckets.next()?.iter();
        }
    }

    fn size_hint(&self) -> (usize, Option<usize>) {
        (self.remaining, Some(self.remaining))
    }
}

impl ExactSizeIterator for Iter<'_> {}

fn normalize(hash: i32, capacity: usize) -> usize {
    (i64::from(hash)).rem_euclid(capacity as i64) as usize
}

fn allocate_buckets(capacity: usize) -> Result<Vec<Chain>> {
    if capacity == 0 {
        return Err(HashSpellError::invalid_argument(
            "capacity must be at least 1",
        ));
    }
    let mut buckets = Vec::new();
    buckets.try_reserve_exact(capacity).map_err(|e| {
        HashSpellError::resource_exhausted(format!(
            "cannot allocate {} buckets: {}",
            capacity, e
        ))
    })?;
    buckets.resize_with(capacity, Vec::new);
    Ok(buckets)
}

/// Smallest doubling of `capacity` that keeps `size / capacity` below the threshold.
fn grown_capacity(capacity: usize, size: usize) -> Result<usize> {
    let mut target = capacity;
    while size as f64 / target as f64 >= MAX_TABLE_LOAD {
        target = target.checked_mul(2).ok_or_else(|| {
            HashSpellError::resource_exhausted(format!(
                "doubling capacity {} overflows",
                target
            ))
        })?;
    }
    Ok(target)
}
