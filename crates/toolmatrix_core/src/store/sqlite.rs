//! SQLite key-value document backend.
//!
//! Stores the canonical JSON body under one key in `catalog_documents`, so
//! several catalogs can share one database file.

use crate::db::{open_db, open_db_in_memory};
use crate::model::catalog::CatalogDocument;
use crate::store::codec::{decode_document, encode_document};
use crate::store::{CatalogStore, StoreResult, StoredDocument};
use log::{error, info};
use rusqlite::{params, Connection, OptionalExtension};
use std::path::Path;
use std::time::Instant;

/// Key used when the caller does not pick one.
pub const DEFAULT_DOCUMENT_KEY: &str = "catalog";

/// Catalog store backed by a SQLite `catalog_documents` row.
pub struct SqliteCatalogStore {
    conn: Connection,
    key: String,
}

impl SqliteCatalogStore {
    /// Opens (and migrates) a database file.
    pub fn open(path: impl AsRef<Path>) -> StoreResult<Self> {
        Ok(Self::from_connection(open_db(path)?))
    }

    pub fn open_in_memory() -> StoreResult<Self> {
        Ok(Self::from_connection(open_db_in_memory()?))
    }

    /// Wraps an already migrated connection.
    pub fn from_connection(conn: Connection) -> Self {
        Self {
            conn,
            key: DEFAULT_DOCUMENT_KEY.to_string(),
        }
    }

    pub fn with_key(mut self, key: impl Into<String>) -> Self {
        self.key = key.into();
        self
    }

    pub fn key(&self) -> &str {
        &self.key
    }

    pub fn connection(&self) -> &Connection {
        &self.conn
    }
}

impl CatalogStore for SqliteCatalogStore {
    fn backend(&self) -> &'static str {
        "sqlite"
    }

    fn load(&self) -> StoreResult<Option<StoredDocument>> {
        let started_at = Instant::now();
        let body: Option<String> = self
            .conn
            .query_row(
                "SELECT body FROM catalog_documents WHERE key = ?1;",
                [self.key.as_str()],
                |row| row.get(0),
            )
            .optional()?;

        let Some(body) = body else {
            info!(
                "event=catalog_load module=store status=ok backend=sqlite found=false duration_ms={}",
                started_at.elapsed().as_millis()
            );
            return Ok(None);
        };

        let stored = decode_document(&body).inspect_err(|err| {
            error!(
                "event=catalog_load module=store status=error backend=sqlite key={} error_code=decode_failed error={}",
                self.key, err
            );
        })?;
        info!(
            "event=catalog_load module=store status=ok backend=sqlite found=true tools={} legacy={} duration_ms={}",
            stored.document.tools.len(),
            stored.upgraded_from_legacy,
            started_at.elapsed().as_millis()
        );
        Ok(Some(stored))
    }

    fn save(&self, document: &CatalogDocument) -> StoreResult<()> {
        let started_at = Instant::now();
        let body = encode_document(document)?;
        self.conn.execute(
            "INSERT INTO catalog_documents (key, body, updated_at)
             VALUES (?1, ?2, (strftime('%s', 'now') * 1000))
             ON CONFLICT(key) DO UPDATE SET
                body = excluded.body,
                updated_at = excluded.updated_at;",
            params![self.key.as_str(), body],
        )?;
        info!(
            "event=catalog_save module=store status=ok backend=sqlite tools={} duration_ms={}",
            document.tools.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}
