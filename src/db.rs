//! Connection handling and table maintenance for the target schema.

use anyhow::Result;
use mysql_async::prelude::*;
use mysql_async::{Conn, Opts};

/// DDL for the target table. `Id` holds the canonical 36-character UUID
/// rendering; everything else is free text.
const CREATE_TABLE_SQL: &str = r"CREATE TABLE IF NOT EXISTS person (
    Id         CHAR(36)     NOT NULL PRIMARY KEY,
    FirstName  VARCHAR(255) NOT NULL,
    LastName   VARCHAR(255) NOT NULL,
    Street     VARCHAR(255) NOT NULL,
    City       VARCHAR(255) NOT NULL,
    State      VARCHAR(255) NOT NULL,
    PostalCode VARCHAR(255) NOT NULL
)";

/// Open a single connection from a MySQL URL.
pub async fn connect(database_url: &str) -> Result<Conn> {
    let opts = Opts::from_url(database_url)?;
    let conn = Conn::new(opts).await?;
    log::debug!("connected to {}", database_url);
    Ok(conn)
}

/// Create the `person` table if it does not exist. Idempotent.
pub async fn ensure_schema(conn: &mut Conn) -> Result<()> {
    conn.query_drop(CREATE_TABLE_SQL).await?;
    Ok(())
}

/// Empty the `person` table. Idempotent; used between strategy runs.
pub async fn truncate(conn: &mut Conn) -> Result<()> {
    conn.query_drop("TRUNCATE TABLE person").await?;
    Ok(())
}
