//! Insertion strategies and the common `InsertStrategy` trait.
//!
//! Five implementations are provided, one per client code path:
//! - [`row_by_row::RowByRow`] — one INSERT per record, autocommit
//! - [`transactional::SingleTransaction`] — one INSERT per record, one transaction
//! - [`multi_row::MultiRowSql`] — chunked hand-built multi-row INSERT
//! - [`batched::BatchedBind`] — prepared statement over parameter batches
//! - [`load_data::LoadDataInfile`] — `LOAD DATA LOCAL INFILE` streaming

pub mod batched;
pub mod load_data;
pub mod multi_row;
pub mod row_by_row;
pub mod transactional;

use anyhow::Result;
use async_trait::async_trait;
use mysql_async::{Conn, Value};

use crate::config::BenchConfig;
use crate::fixture::Person;

/// Positional single-row INSERT shared by the per-record strategies.
pub const INSERT_SQL: &str = "INSERT INTO person (Id, FirstName, LastName, Street, City, State, PostalCode) \
     VALUES (?, ?, ?, ?, ?, ?, ?)";

/// Columns per row in the `person` table.
pub const COLUMN_COUNT: usize = 7;

/// One way of getting a batch of records into the database. Implementations
/// receive a live connection, perform the insert through their particular
/// client code path, and let driver errors propagate.
#[async_trait]
pub trait InsertStrategy: Send + Sync {
    /// Short name used in progress lines and the report.
    fn name(&self) -> &'static str;

    /// Insert every record in `people`. An empty batch is a no-op.
    async fn insert(&self, conn: &mut Conn, people: &[Person]) -> Result<()>;
}

/// All five strategies, in the order they are benchmarked. Row-by-row comes
/// first so the report can use it as the baseline.
pub fn all(config: &BenchConfig) -> Vec<Box<dyn InsertStrategy>> {
    vec![
        Box::new(row_by_row::RowByRow),
        Box::new(transactional::SingleTransaction),
        Box::new(multi_row::MultiRowSql::new(config.multi_row_batch)),
        Box::new(batched::BatchedBind::new(config.bind_batch)),
        Box::new(load_data::LoadDataInfile),
    ]
}

/// Positional parameter values for one record, in table column order.
pub fn bind_values(person: &Person) -> Vec<Value> {
    vec![
        Value::from(person.id.to_string()),
        Value::from(person.first_name.as_str()),
        Value::from(person.last_name.as_str()),
        Value::from(person.street.as_str()),
        Value::from(person.city.as_str()),
        Value::from(person.state.as_str()),
        Value::from(person.postal_code.as_str()),
    ]
}
