//! Driver-level batched parameter binding.
//!
//! One prepared named-parameter statement, executed over parameter batches
//! with `exec_batch` inside a single transaction. The driver prepares once
//! and pipelines the executions.

use anyhow::Result;
use async_trait::async_trait;
use mysql_async::prelude::*;
use mysql_async::{params, Conn, TxOpts};

use super::InsertStrategy;
use crate::fixture::Person;

const INSERT_SQL_NAMED: &str = "INSERT INTO person (Id, FirstName, LastName, Street, City, State, PostalCode) \
     VALUES (:id, :first_name, :last_name, :street, :city, :state, :postal_code)";

pub struct BatchedBind {
    batch_size: usize,
}

impl BatchedBind {
    pub fn new(batch_size: usize) -> Self {
        assert!(batch_size > 0, "batch size must be positive");
        Self { batch_size }
    }
}

#[async_trait]
impl InsertStrategy for BatchedBind {
    fn name(&self) -> &'static str {
        "batched-bind"
    }

    async fn insert(&self, conn: &mut Conn, people: &[Person]) -> Result<()> {
        let mut tx = conn.start_transaction(TxOpts::default()).await?;
        for chunk in people.chunks(self.batch_size) {
            tx.exec_batch(
                INSERT_SQL_NAMED,
                chunk.iter().map(|p| {
                    params! {
                        "id" => p.id.to_string(),
                        "first_name" => p.first_name.as_str(),
                        "last_name" => p.last_name.as_str(),
                        "street" => p.street.as_str(),
                        "city" => p.city.as_str(),
                        "state" => p.state.as_str(),
                        "postal_code" => p.postal_code.as_str(),
                    }
                }),
            )
            .await?;
        }
        tx.commit().await?;
        Ok(())
    }
}
