//! Ordered schema steps for the catalog database.
//!
//! Step `n` in [`STEPS`] upgrades the schema from version `n` to `n + 1`.
//! Steps are append-only.

use crate::db::{DbError, DbResult};
use log::info;
use rusqlite::Connection;

const STEPS: &[&str] = &[include_str!("0001_catalog_documents.sql")];

/// Schema version produced by running every step.
pub fn schema_version() -> u32 {
    STEPS.len() as u32
}

/// Runs the steps missing from `conn` inside one transaction.
pub fn migrate(conn: &mut Connection) -> DbResult<()> {
    let found: u32 = conn.query_row("PRAGMA user_version;", [], |row| row.get(0))?;
    let supported = schema_version();
    if found > supported {
        return Err(DbError::SchemaTooNew { found, supported });
    }

    let pending = &STEPS[found as usize..];
    if pending.is_empty() {
        return Ok(());
    }

    let tx = conn.transaction()?;
    for (offset, step) in pending.iter().enumerate() {
        tx.execute_batch(step)?;
        let version = found + offset as u32 + 1;
        tx.pragma_update(None, "user_version", version)?;
        info!("event=db_migrate module=db status=ok version={version}");
    }
    tx.commit()?;
    Ok(())
}
