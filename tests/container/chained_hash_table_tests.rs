use std::collections::HashSet;

use chaintable::bench::value::generate_records;
use chaintable::container::chained_hash_table::ChainedHashTable;
use rand::rngs::StdRng;
use rand::SeedableRng;

use crate::common::logger::init_test_logger;

#[test]
fn test_insert_three_keys_scenario() {
    init_test_logger();
    let mut table = ChainedHashTable::new();
    table.insert(b"ab", 1);
    table.insert(b"cd", 2);
    table.insert(b"ef", 3);

    assert_eq!(table.get(b"cd"), Some(&2));
    assert_eq!(table.len(), 3);
}

#[test]
fn test_duplicate_insert_keeps_latest_value() {
    init_test_logger();
    let mut table = ChainedHashTable::new();
    table.insert(b"x", 10);
    table.insert(b"x", 20);

    assert_eq!(table.len(), 1);
    assert_eq!(table.get(b"x"), Some(&20));
}

#[test]
fn test_get_never_inserted_key() {
    init_test_logger();
    let mut table = ChainedHashTable::new();
    table.insert(b"present", 1);
    assert_eq!(table.get(b"absent"), None);
}

#[test]
fn test_values_survive_later_insertions() {
    init_test_logger();
    let mut table = ChainedHashTable::with_capacity(4);
    table.insert(b"pinned", 777u32);

    // Pile on enough other keys to force several growth steps.
    for i in 0..500u32 {
        table.insert(format!("filler_{}", i).as_bytes(), i);
        assert_eq!(table.get(b"pinned"), Some(&777));
    }
    assert_eq!(table.len(), 501);
}

#[test]
fn test_remove_decrements_size_once() {
    init_test_logger();
    let mut table = ChainedHashTable::new();
    table.insert(b"a", 1);
    table.insert(b"b", 2);

    assert_eq!(table.remove(b"a"), Some(1));
    assert_eq!(table.get(b"a"), None);
    assert_eq!(table.len(), 1);

    // Removing an absent key is a no-op.
    assert_eq!(table.remove(b"a"), None);
    assert_eq!(table.len(), 1);
    assert_eq!(table.get(b"b"), Some(&2));
}

#[test]
fn test_thousand_random_keys_growth() {
    init_test_logger();
    let mut rng = StdRng::seed_from_u64(20240817);
    let records = generate_records(&mut rng, 1000);

    let mut table = ChainedHashTable::with_capacity(16);
    for record in &records {
        table.insert(record.key.as_bytes(), &record.value);
    }

    assert_eq!(table.len(), 1000);
    // Doubling from 16 with a 0.75 threshold must land on a power of two
    // large enough to hold 1000 keys within the load bound.
    assert!(table.bucket_count().is_power_of_two());
    assert!(table.bucket_count() as f64 >= 1000.0 / 0.75);
    assert!(table.load_factor() <= 0.75);

    for record in &records {
        assert_eq!(table.get(record.key.as_bytes()), Some(&&record.value));
    }
    table.verify_integrity();
}

#[test]
fn test_iteration_is_deterministic_and_complete() {
    init_test_logger();
    let mut table = ChainedHashTable::with_capacity(8);
    for i in 0..100u32 {
        table.insert(format!("key_{}", i).as_bytes(), i);
    }

    let first: Vec<(Vec<u8>, u32)> = table.iter().map(|(k, v)| (k.to_vec(), *v)).collect();
    let second: Vec<(Vec<u8>, u32)> = table.iter().map(|(k, v)| (k.to_vec(), *v)).collect();
    assert_eq!(first, second);

    let keys: HashSet<_> = first.iter().map(|(k, _)| k.clone()).collect();
    assert_eq!(keys.len(), 100);
}

#[test]
fn test_reference_values_like_external_storage() {
    init_test_logger();
    // The table can hold references into caller-owned storage, mirroring a
    // caller that keeps payloads in its own flat vector.
    let storage: Vec<String> = (0..50).map(|i| format!("payload_{}", i)).collect();

    let mut table: ChainedHashTable<&String> = ChainedHashTable::with_capacity(16);
    for (i, payload) in storage.iter().enumerate() {
        table.insert(format!("k{}", i).as_bytes(), payload);
    }

    assert_eq!(table.get(b"k7"), Some(&&storage[7]));
    table.verify_integrity();
}
