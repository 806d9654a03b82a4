use std::collections::HashSet;
use std::fmt;

use rand::Rng;

use crate::common::config::{BENCH_INT_BOUND, BENCH_KEY_MAX_LEN, BENCH_KEY_MIN_LEN};

/// Payload stored against each benchmark key: either a small integer or a
/// short random string.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum DemoValue {
    Int(i32),
    Str(String),
}

impl fmt::Display for DemoValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            DemoValue::Int(integer) => write!(f, "{}", integer),
            DemoValue::Str(string) => write!(f, "{}", string),
        }
    }
}

/// One benchmark record. The record owns its key; both lookup structures
/// reference records rather than copying payloads.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ValueRecord {
    pub key: String,
    pub value: DemoValue,
}

/// Draws a random lowercase ASCII key of 1..=10 characters.
pub fn random_key<R: Rng>(rng: &mut R) -> String {
    let len = rng.random_range(BENCH_KEY_MIN_LEN..=BENCH_KEY_MAX_LEN);
    (0..len)
        .map(|_| rng.random_range(b'a'..=b'z') as char)
        .collect()
}

/// Generates `count` records with distinct keys.
///
/// Keys that collide with an earlier draw are re-drawn, so the returned set
/// is duplicate-free and every record is individually retrievable.
pub fn generate_records<R: Rng>(rng: &mut R, count: usize) -> Vec<ValueRecord> {
    let mut seen: HashSet<String> = HashSet::with_capacity(count);
    let mut records = Vec::with_capacity(count);
    while records.len() < count {
        let key = random_key(rng);
        if !seen.insert(key.clone()) {
            continue;
        }
        let value = if rng.random_bool(0.5) {
            DemoValue::Int(rng.random_range(0..BENCH_INT_BOUND))
        } else {
            DemoValue::Str(random_key(rng))
        };
        records.push(ValueRecord { key, value });
    }
    records
}
