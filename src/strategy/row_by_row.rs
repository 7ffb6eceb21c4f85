//! Row-by-row inserts: one statement per record, autocommit.
//!
//! The slowest path by construction — every record pays a full round-trip
//! and its own implicit commit. Serves as the baseline in the report.

use anyhow::Result;
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::Conn;

use super::{bind_values, InsertStrategy, INSERT_SQL};
use crate::fixture::Person;

pub struct RowByRow;

#[async_trait]
impl InsertStrategy for RowByRow {
    fn name(&self) -> &'static str {
        "row-by-row"
    }

    async fn insert(&self, conn: &mut Conn, people: &[Person]) -> Result<()> {
        for person in people {
            conn.exec_drop(INSERT_SQL, bind_values(person)).await?;
        }
        Ok(())
    }
}
