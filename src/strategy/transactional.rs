//! Row-by-row inserts wrapped in a single transaction.
//!
//! Same per-record statement as [`super::row_by_row::RowByRow`], but the
//! implicit per-statement commit is deferred to one COMMIT at the end.

use anyhow::Result;
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{Conn, TxOpts};

use super::{bind_values, InsertStrategy, INSERT_SQL};
use crate::fixture::Person;

pub struct SingleTransaction;

#[async_trait]
impl InsertStrategy for SingleTransaction {
    fn name(&self) -> &'static str {
        "transaction"
    }

    async fn insert(&self, conn: &mut Conn, people: &[Person]) -> Result<()> {
        let mut tx = conn.start_transaction(TxOpts::default()).await?;
        for person in people {
            tx.exec_drop(INSERT_SQL, bind_values(person)).await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
