use std::collections::HashSet;
use std::iter::repeat_with;

use log::debug;

use crate::common::config::{DEFAULT_BUCKET_COUNT, GROWTH_FACTOR, HashValue, MAX_LOAD_FACTOR};
use crate::container::hash_function::HashFunction;

/// A single key/value pair stored in a bucket chain.
///
/// The key is an owned copy of the caller's bytes; the raw hash is cached so
/// a rehash never re-scans key bytes.
struct Entry<V> {
    key: Box<[u8]>,
    hash: HashValue,
    value: V,
}

/**
 * ChainedHashTable maps byte-sequence keys to caller-defined values using an
 * array of buckets with chained collision resolution.
 *
 * Each stored key has exactly one entry, located in bucket
 * `hash(key) % bucket_count`. Keys are copied into the table on insert, so
 * the caller's buffer may be freed or reused afterwards. Values are moved in;
 * callers that want reference semantics instantiate `V` as a reference into
 * storage they own themselves.
 *
 * When an insert pushes the load factor (num_keys / num_buckets) above
 * MAX_LOAD_FACTOR, the bucket array doubles and every entry is redistributed
 * by its cached hash. Growth is invisible to callers.
 *
 * Not safe for concurrent mutation; callers needing that must add their own
 * synchronization. Allocation failure aborts through the global allocator,
 * so a failed insert never leaves a partially applied table behind.
 */
pub struct ChainedHashTable<V> {
    buckets: Vec<Vec<Entry<V>>>,
    num_keys: usize,
    hash_fn: HashFunction,
}

impl<V> ChainedHashTable<V> {
    /// Creates a table with `DEFAULT_BUCKET_COUNT` buckets.
    pub fn new() -> Self {
        Self::with_capacity(DEFAULT_BUCKET_COUNT)
    }

    /// Creates a table with `initial_buckets` buckets (clamped to at least one).
    pub fn with_capacity(initial_buckets: usize) -> Self {
        let count = initial_buckets.max(1);
        Self {
            buckets: repeat_with(Vec::new).take(count).collect(),
            num_keys: 0,
            hash_fn: HashFunction::new(),
        }
    }

    /// Number of distinct keys currently stored.
    pub fn len(&self) -> usize {
        self.num_keys
    }

    pub fn is_empty(&self) -> bool {
        self.num_keys == 0
    }

    /// Current bucket array capacity, independent of the entry count.
    pub fn bucket_count(&self) -> usize {
        self.buckets.len()
    }

    pub fn load_factor(&self) -> f64 {
        self.num_keys as f64 / self.buckets.len() as f64
    }

    /// Inserts a key/value pair, copying the key bytes into the table.
    ///
    /// If the key is already present its value is replaced in place and the
    /// displaced value is returned; the key count does not change. Otherwise
    /// a new entry is appended to its bucket chain and `None` is returned.
    /// The empty key is a valid key. May grow the table afterwards.
    pub fn insert(&mut self, key: &[u8], value: V) -> Option<V> {
        let hash = self.hash_fn.get_hash(key);
        let index = self.bucket_index(hash);
        for entry in &mut self.buckets[index] {
            if entry.key.as_ref() == key {
                return Some(std::mem::replace(&mut entry.value, value));
            }
        }

        self.buckets[index].push(Entry {
            key: key.into(),
            hash,
            value,
        });
        self.num_keys += 1;

        if self.load_factor() > MAX_LOAD_FACTOR {
            self.grow();
        }
        None
    }

    /// Returns a reference to the value stored under `key`, if any.
    ///
    /// Absence is reported through `Option`, so stored values are never
    /// inspected or conflated with "not found".
    pub fn get(&self, key: &[u8]) -> Option<&V> {
        let index = self.bucket_index(self.hash_fn.get_hash(key));
        self.buckets[index]
            .iter()
            .find(|entry| entry.key.as_ref() == key)
            .map(|entry| &entry.value)
    }

    pub fn get_mut(&mut self, key: &[u8]) -> Option<&mut V> {
        let index = self.bucket_index(self.hash_fn.get_hash(key));
        self.buckets[index]
            .iter_mut()
            .find(|entry| entry.key.as_ref() == key)
            .map(|entry| &mut entry.value)
    }

    pub fn contains_key(&self, key: &[u8]) -> bool {
        self.get(key).is_some()
    }

    /// Removes the entry stored under `key` and returns its value.
    ///
    /// Returns `None` when the key is absent, leaving the table untouched.
    pub fn remove(&mut self, key: &[u8]) -> Option<V> {
        let index = self.bucket_index(self.hash_fn.get_hash(key));
        let position = self.buckets[index]
            .iter()
            .position(|entry| entry.key.as_ref() == key)?;
        let entry = self.buckets[index].remove(position);
        self.num_keys -= 1;
        Some(entry.value)
    }

    /// Iterates over all entries, bucket by bucket, chain order within each.
    ///
    /// The traversal is deterministic for a given table state but no ordering
    /// across buckets is guaranteed, and growth reshuffles it.
    pub fn iter(&self) -> impl Iterator<Item = (&[u8], &V)> {
        self.buckets
            .iter()
            .flatten()
            .map(|entry| (entry.key.as_ref(), &entry.value))
    }

    /// Walks the whole table asserting its structural invariants.
    ///
    /// Panics if any entry sits outside its home bucket, a cached hash
    /// disagrees with a recomputation, a key appears twice, or the key count
    /// drifts from the entry count. Intended for tests.
    pub fn verify_integrity(&self) {
        let mut seen: HashSet<&[u8]> = HashSet::with_capacity(self.num_keys);
        let mut counted = 0;
        for (index, bucket) in self.buckets.iter().enumerate() {
            for entry in bucket {
                counted += 1;
                assert_eq!(
                    entry.hash,
                    self.hash_fn.get_hash(&entry.key),
                    "stale cached hash for key {:?}",
                    entry.key
                );
                assert_eq!(
                    self.bucket_index(entry.hash),
                    index,
                    "key {:?} stored outside its home bucket",
                    entry.key
                );
                assert!(
                    seen.insert(entry.key.as_ref()),
                    "duplicate entry for key {:?}",
                    entry.key
                );
            }
        }
        assert_eq!(counted, self.num_keys, "num_keys drifted from entry count");
    }

    fn bucket_index(&self, hash: HashValue) -> usize {
        (hash % self.buckets.len() as HashValue) as usize
    }

    fn grow(&mut self) {
        let old_count = self.buckets.len();
        let new_count = old_count * GROWTH_FACTOR;
        let mut new_buckets: Vec<Vec<Entry<V>>> = repeat_with(Vec::new).take(new_count).collect();

        for bucket in self.buckets.drain(..) {
            for entry in bucket {
                let index = (entry.hash % new_count as HashValue) as usize;
                new_buckets[index].push(entry);
            }
        }
        self.buckets = new_buckets;

        debug!(
            "grew table from {} to {} buckets ({} keys, load factor now {:.2})",
            old_count,
            new_count,
            self.num_keys,
            self.load_factor()
        );
    }
}

impl<V> Default for ChainedHashTable<V> {
    fn default() -> Self {
        Self::new()
    }
}
