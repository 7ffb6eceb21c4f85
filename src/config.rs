//! Benchmark parameters, passed explicitly into the runner.

/// Everything a benchmark run needs to know: where the server is, how many
/// rows to load, and the chunk sizes the chunked strategies use.
#[derive(Debug, Clone)]
pub struct BenchConfig {
    /// MySQL connection URL (host, credentials, database name).
    pub database_url: String,
    /// Fixture rows generated for each strategy run.
    pub rows: usize,
    /// Base RNG seed; each run derives its own from this and the run index.
    pub seed: u64,
    /// Rows per hand-built multi-row INSERT statement.
    pub multi_row_batch: usize,
    /// Rows per driver-batched parameter chunk.
    pub bind_batch: usize,
    /// Untimed insert+truncate passes before the timed run.
    pub warmup_runs: usize,
}

impl BenchConfig {
    /// Standard run: 50k rows, the batch sizes the original workload used.
    pub fn standard() -> Self {
        Self {
            database_url: "mysql://root@127.0.0.1:3306/testing".to_string(),
            rows: 50_000,
            seed: 0xFEED_FACE_CAFE_BEEF,
            multi_row_batch: 5_000,
            bind_batch: 5_000,
            warmup_runs: 0,
        }
    }

    /// Small run for quick local sanity checks.
    pub fn smoke() -> Self {
        Self {
            rows: 500,
            multi_row_batch: 100,
            bind_batch: 100,
            ..Self::standard()
        }
    }
}

impl Default for BenchConfig {
    fn default() -> Self {
        Self::standard()
    }
}
