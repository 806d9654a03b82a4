use std::hint::black_box;
use std::time::{Duration, Instant};

use log::info;
use rand::rngs::StdRng;
use rand::{Rng, SeedableRng};

use crate::bench::linear_scan::LinearScanIndex;
use crate::bench::value::{generate_records, ValueRecord};
use crate::common::exception::BenchError;
use crate::container::chained_hash_table::ChainedHashTable;

/// Timing outcome of one harness run.
#[derive(Debug, Clone)]
pub struct BenchmarkReport {
    pub entries: usize,
    pub hash_table_time: Duration,
    pub linear_scan_time: Duration,
    pub final_bucket_count: usize,
}

impl BenchmarkReport {
    /// How many times faster the hash table lookups were. Infinite when the
    /// hash table pass was too fast for the clock to register.
    pub fn speedup(&self) -> f64 {
        let hash_table = self.hash_table_time.as_secs_f64();
        if hash_table == 0.0 {
            return f64::INFINITY;
        }
        self.linear_scan_time.as_secs_f64() / hash_table
    }
}

/// Drives the comparison workload: generates distinct random records, loads
/// them into a `ChainedHashTable`, then times an identical randomized lookup
/// schedule against the table and against a `LinearScanIndex` baseline.
///
/// The harness owns its record vector and hands the table references into it,
/// mirroring how a caller with out-of-table value storage would use the
/// container. It only consumes the table's public contract.
pub struct BenchmarkHarness {
    records: Vec<ValueRecord>,
    rng: StdRng,
    initial_buckets: usize,
}

impl BenchmarkHarness {
    /// Generates `entries` distinct records up front. Pass a seed for
    /// reproducible runs.
    pub fn new(
        entries: usize,
        initial_buckets: usize,
        seed: Option<u64>,
    ) -> Result<Self, BenchError> {
        if entries == 0 {
            return Err(BenchError::InvalidEntryCount(entries));
        }
        let mut rng = match seed {
            Some(seed) => StdRng::seed_from_u64(seed),
            None => StdRng::from_os_rng(),
        };
        info!("generating {} distinct records", entries);
        let records = generate_records(&mut rng, entries);
        Ok(Self {
            records,
            rng,
            initial_buckets,
        })
    }

    pub fn records(&self) -> &[ValueRecord] {
        &self.records
    }

    /// Runs one insert-then-lookup pass and reports the timings.
    pub fn run(&mut self) -> Result<BenchmarkReport, BenchError> {
        if self.records.is_empty() {
            return Err(BenchError::EmptyKeyPool);
        }

        // One lookup per record, each aimed at a uniformly sampled stored key.
        let schedule: Vec<usize> = (0..self.records.len())
            .map(|_| self.rng.random_range(0..self.records.len()))
            .collect();

        let mut table: ChainedHashTable<&ValueRecord> =
            ChainedHashTable::with_capacity(self.initial_buckets);
        for record in &self.records {
            table.insert(record.key.as_bytes(), record);
        }
        info!(
            "inserted {} keys into {} buckets (load factor {:.2})",
            table.len(),
            table.bucket_count(),
            table.load_factor()
        );

        let start = Instant::now();
        for &index in &schedule {
            black_box(table.get(self.records[index].key.as_bytes()));
        }
        let hash_table_time = start.elapsed();

        let linear = LinearScanIndex::new(&self.records);
        let start = Instant::now();
        for &index in &schedule {
            black_box(linear.find(&self.records[index].key));
        }
        let linear_scan_time = start.elapsed();

        info!(
            "lookups done: hash table {:?}, linear scan {:?}",
            hash_table_time, linear_scan_time
        );

        Ok(BenchmarkReport {
            entries: self.records.len(),
            hash_table_time,
            linear_scan_time,
            final_bucket_count: table.bucket_count(),
        })
    }
}
