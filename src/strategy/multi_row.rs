//! Hand-built multi-row INSERT: string concatenation of placeholder groups.
//!
//! Builds `INSERT INTO person (...) VALUES (?,...),(?,...),...` for up to
//! `batch_size` rows at a time and executes one statement per chunk. All
//! values still travel as bound parameters; only the statement text is
//! concatenated.

use anyhow::Result;
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{Conn, Value};

use super::{bind_values, InsertStrategy, COLUMN_COUNT};
use crate::fixture::Person;

pub struct MultiRowSql {
    batch_size: usize,
}

impl MultiRowSql {
    pub fn new(batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        Self { batch_size }
    }
}

/// Statement text for a `rows`-row INSERT: one `(?,...)` group per row.
pub fn batch_sql(rows: usize) -> String {
    let group = format!("({})", vec!["?"; COLUMN_COUNT].join(", "));
    let mut sql = String::from(
        "INSERT INTO person (Id, FirstName, LastName, Street, City, State, PostalCode) VALUES ",
    );
    for i in 0..rows {
        if i > 0 {
            sql.push_str(", ");
        }
        sql.push_str(&group);
    }
    sql
}

#[async_trait]
impl InsertStrategy for MultiRowSql {
    fn name(&self) -> &'static str {
        "multi-row-sql"
    }

    async fn insert(&self, conn: &mut Conn, people: &[Person]) -> Result<()> {
        for chunk in people.chunks(self.batch_size) {
            let sql = batch_sql(chunk.len());
            let mut params: Vec<Value> = Vec::with_capacity(chunk.len() * COLUMN_COUNT);
            for person in chunk {
                params.extend(bind_values(person));
            }
            conn.exec_drop(sql, params).await?;
        }
        Ok(())
    }
}
