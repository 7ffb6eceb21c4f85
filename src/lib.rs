//! MySQL Bulk-Insert Latency Benchmark
//!
//! Measures how long five different client code paths take to load the same
//! batch of synthetic person records into a MySQL `person` table:
//!
//! - **row-by-row**: one INSERT statement per record, autocommit
//! - **transaction**: one INSERT per record inside a single transaction
//! - **multi-row-sql**: hand-built `INSERT ... VALUES (...),(...),...`
//!   statements, chunked
//! - **batched-bind**: one prepared statement executed over parameter
//!   batches inside a transaction
//! - **load-data-infile**: `LOAD DATA LOCAL INFILE` streaming the batch as
//!   tab-separated bytes
//!
//! Run against a live server: `cargo run --release`
//! Run offline tests: `cargo test`

pub mod config;
pub mod db;
pub mod fixture;
pub mod report;
pub mod runner;
pub mod strategy;
