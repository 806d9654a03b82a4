use clap::Parser;
use colored::*;

use crate::bench::harness::{BenchmarkHarness, BenchmarkReport};
use crate::common::config::{DEFAULT_BENCH_ENTRIES, DEFAULT_BUCKET_COUNT};
use crate::common::exception::BenchError;
use crate::common::logger::initialize_logger;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
struct Args {
    /// Number of distinct records to generate and insert
    #[arg(short, long, default_value_t = DEFAULT_BENCH_ENTRIES)]
    entries: usize,

    /// RNG seed for reproducible runs
    #[arg(short, long)]
    seed: Option<u64>,

    /// Bucket count the table starts with
    #[arg(short = 'b', long, default_value_t = DEFAULT_BUCKET_COUNT)]
    initial_buckets: usize,
}

pub struct CLI {
    args: Args,
}

impl CLI {
    pub fn new() -> Result<Self, BenchError> {
        Ok(Self {
            args: Args::parse(),
        })
    }

    pub fn run(&mut self) -> Result<(), BenchError> {
        initialize_logger();

        let mut harness =
            BenchmarkHarness::new(self.args.entries, self.args.initial_buckets, self.args.seed)?;
        let report = harness.run()?;
        print_report(&report);
        Ok(())
    }
}

fn print_report(report: &BenchmarkReport) {
    println!("{}", "Lookup benchmark".bold());
    println!("  entries:       {}", report.entries);
    println!("  final buckets: {}", report.final_bucket_count);
    println!("  hash table:    {:?}", report.hash_table_time);
    println!("  linear scan:   {:?}", report.linear_scan_time);
    println!(
        "hash table is {} times faster ({:?} vs. {:?})",
        format!("{:.0}", report.speedup()).green().bold(),
        report.hash_table_time,
        report.linear_scan_time
    );
}
