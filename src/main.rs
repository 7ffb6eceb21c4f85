//! Benchmark entry point.
//!
//! Runs all five insertion strategies sequentially against the configured
//! server and prints the comparison report. Each run gets its own fixture
//! batch, connection, and an emptied table.
//!
//! Usage:
//!   cargo run --release
//!   RUST_LOG=debug cargo run --release   # driver-level diagnostics

use anyhow::Result;
use log::info;

use mysql_insert_bench::config::BenchConfig;
use mysql_insert_bench::{db, fixture, report, runner, strategy};

#[tokio::main]
async fn main() -> Result<()> {
    env_logger::init();

    let config = BenchConfig::standard();

    println!("Running MySQL bulk-insert benchmark...");
    println!("  Server:            {}", config.database_url);
    println!("  Rows per strategy: {}", config.rows);

    let mut conn = db::connect(&config.database_url).await?;
    db::ensure_schema(&mut conn).await?;
    conn.disconnect().await?;

    let strategies = strategy::all(&config);
    let mut results = Vec::new();

    for (run_index, strat) in strategies.iter().enumerate() {
        let seed = config.seed.wrapping_add(run_index as u64);
        let people = fixture::generate(config.rows, seed);
        info!("generated {} records for {}", people.len(), strat.name());

        eprint!("  Benchmarking {}...", strat.name());
        let run = runner::run_strategy(&config, strat.as_ref(), &people).await?;
        eprintln!(" done ({:.1}ms)", run.elapsed_ms());
        results.push(run);
    }

    report::print_report(&results);

    Ok(())
}
