//! Catalog persistence boundary.
//!
//! # Responsibility
//! - Define the whole-document load/save contract (`CatalogStore`).
//! - Provide JSON-file and SQLite document-store backends.
//! - Seed, upgrade and backfill documents on open (`open_catalog`).
//!
//! # Invariants
//! - A store is read and written wholesale; last writer wins.
//! - A missing store is `Ok(None)`, never an error.
//! - Every backend stores the same canonical JSON body.

use crate::db::DbError;
use crate::model::catalog::CatalogDocument;
use std::error::Error;
use std::fmt::{Display, Formatter};
use std::path::PathBuf;

pub mod codec;
pub mod json_file;
pub mod loader;
pub mod seed;
pub mod sqlite;

pub type StoreResult<T> = Result<T, StoreError>;

/// Persistence-layer error for catalog stores.
#[derive(Debug)]
pub enum StoreError {
    Io {
        path: PathBuf,
        source: std::io::Error,
    },
    Db(DbError),
    /// Stored body is not valid JSON or does not fit the catalog schema.
    Decode(serde_json::Error),
    Encode(serde_json::Error),
    /// Stored body is JSON but its shape cannot be mapped to a catalog.
    InvalidShape(String),
}

impl Display for StoreError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Io { path, source } => {
                write!(f, "catalog store I/O failed at `{}`: {source}", path.display())
            }
            Self::Db(err) => write!(f, "{err}"),
            Self::Decode(err) => write!(f, "invalid catalog document: {err}"),
            Self::Encode(err) => write!(f, "failed to encode catalog document: {err}"),
            Self::InvalidShape(message) => write!(f, "unsupported catalog shape: {message}"),
        }
    }
}

impl Error for StoreError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Io { source, .. } => Some(source),
            Self::Db(err) => Some(err),
            Self::Decode(err) | Self::Encode(err) => Some(err),
            Self::InvalidShape(_) => None,
        }
    }
}

impl From<DbError> for StoreError {
    fn from(value: DbError) -> Self {
        Self::Db(value)
    }
}

impl From<rusqlite::Error> for StoreError {
    fn from(value: rusqlite::Error) -> Self {
        Self::Db(DbError::Sqlite(value))
    }
}

/// Document as read from a store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct StoredDocument {
    pub document: CatalogDocument,
    /// The body used a legacy field layout and was mapped to the canonical one.
    pub upgraded_from_legacy: bool,
}

/// Whole-document persistence contract.
pub trait CatalogStore {
    /// Short backend name used in log events.
    fn backend(&self) -> &'static str;
    /// Reads the full document. Returns `Ok(None)` when nothing is stored yet.
    fn load(&self) -> StoreResult<Option<StoredDocument>>;
    /// Replaces the stored document.
    fn save(&self, document: &CatalogDocument) -> StoreResult<()>;
}

impl<S: CatalogStore + ?Sized> CatalogStore for &S {
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn load(&self) -> StoreResult<Option<StoredDocument>> {
        (**self).load()
    }

    fn save(&self, document: &CatalogDocument) -> StoreResult<()> {
        (**self).save(document)
    }
}

impl<S: CatalogStore + ?Sized> CatalogStore for Box<S> {
    fn backend(&self) -> &'static str {
        (**self).backend()
    }

    fn load(&self) -> StoreResult<Option<StoredDocument>> {
        (**self).load()
    }

    fn save(&self, document: &CatalogDocument) -> StoreResult<()> {
        (**self).save(document)
    }
}
