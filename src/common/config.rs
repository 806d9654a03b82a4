/** Number of buckets a table starts with when the caller does not pick one. */
pub const DEFAULT_BUCKET_COUNT: usize = 16;

/** An insert that pushes num_keys / num_buckets above this triggers a doubling rehash. */
pub const MAX_LOAD_FACTOR: f64 = 0.75;

/** Bucket count multiplier applied on each growth step. */
pub const GROWTH_FACTOR: usize = 2;

// Benchmark harness defaults, mirroring the demo workload.
pub const DEFAULT_BENCH_ENTRIES: usize = 10_000;
pub const BENCH_KEY_MIN_LEN: usize = 1; // generated keys are 1..=10 lowercase letters
pub const BENCH_KEY_MAX_LEN: usize = 10;
pub const BENCH_INT_BOUND: i32 = 1000; // integer payloads are drawn from 0..BENCH_INT_BOUND

pub type HashValue = u64; // raw hash type
