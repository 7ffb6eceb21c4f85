//! Benchmark runner: one connection per strategy run, truncation between
//! runs, the clock wrapping only the insert itself.

use std::time::Instant;

use anyhow::Result;

use crate::config::BenchConfig;
use crate::db;
use crate::fixture::Person;
use crate::report::StrategyRun;
use crate::strategy::InsertStrategy;

/// Run one strategy against a fresh connection and an emptied table.
///
/// Warmup passes (if configured) insert and truncate without being timed.
/// The connection is released on every exit path: dropped on error,
/// disconnected cleanly on success.
pub async fn run_strategy(
    config: &BenchConfig,
    strategy: &dyn InsertStrategy,
    people: &[Person],
) -> Result<StrategyRun> {
    let mut conn = db::connect(&config.database_url).await?;
    db::truncate(&mut conn).await?;

    for pass in 0..config.warmup_runs {
        log::debug!("{}: warmup pass {}", strategy.name(), pass + 1);
        strategy.insert(&mut conn, people).await?;
        db::truncate(&mut conn).await?;
    }

    let start = Instant::now();
    strategy.insert(&mut conn, people).await?;
    let elapsed = start.elapsed();

    conn.disconnect().await?;

    Ok(StrategyRun {
        strategy: strategy.name(),
        rows: people.len(),
        elapsed,
    })
}
