//! Report module: prints human-readable benchmark results.

use std::time::Duration;

/// Result of one timed strategy run.
#[derive(Debug, Clone)]
pub struct StrategyRun {
    pub strategy: &'static str,
    pub rows: usize,
    pub elapsed: Duration,
}

impl StrategyRun {
    pub fn elapsed_ms(&self) -> f64 {
        self.elapsed.as_secs_f64() * 1e3
    }

    pub fn rows_per_sec(&self) -> f64 {
        let secs = self.elapsed.as_secs_f64();
        if secs <= 0.0 {
            return 0.0;
        }
        self.rows as f64 / secs
    }

    /// How many times faster this run was than `baseline`.
    pub fn speedup_vs(&self, baseline: &StrategyRun) -> f64 {
        let own = self.elapsed.as_secs_f64();
        if own <= 0.0 {
            return 0.0;
        }
        baseline.elapsed.as_secs_f64() / own
    }
}

/// Print a formatted comparison of all strategy runs. The first entry is
/// used as the speedup baseline.
pub fn print_report(results: &[StrategyRun]) {
    println!("\n{}", "=".repeat(72));
    println!("  MySQL Bulk-Insert Benchmark Report");
    println!("{}", "=".repeat(72));

    if results.is_empty() {
        println!("  (no results)");
        return;
    }

    let baseline = &results[0];

    println!(
        "\n  {:20} {:>10} {:>12} {:>12} {:>10}",
        "Strategy", "Rows", "Elapsed", "Rows/s", "Speedup"
    );
    println!("  {}", "-".repeat(68));

    for run in results {
        println!(
            "  {:20} {:>10} {:>10.1}ms {:>12.0} {:>9.1}x",
            run.strategy,
            run.rows,
            run.elapsed_ms(),
            run.rows_per_sec(),
            run.speedup_vs(baseline),
        );
    }

    println!();
}
