use thiserror::Error;

/// Failures surfaced by the benchmark harness and its CLI.
///
/// Table operations themselves are infallible by contract: duplicate insert
/// is an update, lookup of an absent key is `None`, and allocation failure
/// aborts through the global allocator rather than being silently ignored.
#[derive(Error, Debug)]
pub enum BenchError {
    #[error("entry count must be at least 1 (got {0})")]
    InvalidEntryCount(usize),
    #[error("lookup schedule requested from an empty record set")]
    EmptyKeyPool,
}
