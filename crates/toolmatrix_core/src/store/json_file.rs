//! Flat JSON file backend.
//!
//! # Invariants
//! - The file holds exactly one UTF-8 JSON document.
//! - Saves rewrite the whole file; there is no locking.

use crate::model::catalog::CatalogDocument;
use crate::store::codec::{decode_document, encode_document};
use crate::store::{CatalogStore, StoreError, StoreResult, StoredDocument};
use log::{error, info};
use std::io::ErrorKind;
use std::path::{Path, PathBuf};
use std::time::Instant;

/// Catalog store backed by a single JSON file.
#[derive(Debug, Clone)]
pub struct JsonFileStore {
    path: PathBuf,
}

impl JsonFileStore {
    pub fn new(path: impl Into<PathBuf>) -> Self {
        Self { path: path.into() }
    }

    pub fn path(&self) -> &Path {
        &self.path
    }

    fn io_error(&self, source: std::io::Error) -> StoreError {
        StoreError::Io {
            path: self.path.clone(),
            source,
        }
    }
}

impl CatalogStore for JsonFileStore {
    fn backend(&self) -> &'static str {
        "json_file"
    }

    fn load(&self) -> StoreResult<Option<StoredDocument>> {
        let started_at = Instant::now();
        let text = match std::fs::read_to_string(&self.path) {
            Ok(text) => text,
            Err(err) if err.kind() == ErrorKind::NotFound => {
                info!(
                    "event=catalog_load module=store status=ok backend=json_file found=false duration_ms={}",
                    started_at.elapsed().as_millis()
                );
                return Ok(None);
            }
            Err(err) => {
                error!(
                    "event=catalog_load module=store status=error backend=json_file error_code=read_failed error={}",
                    err
                );
                return Err(self.io_error(err));
            }
        };

        let stored = decode_document(&text).inspect_err(|err| {
            error!(
                "event=catalog_load module=store status=error backend=json_file error_code=decode_failed error={}",
                err
            );
        })?;
        info!(
            "event=catalog_load module=store status=ok backend=json_file found=true tools={} legacy={} duration_ms={}",
            stored.document.tools.len(),
            stored.upgraded_from_legacy,
            started_at.elapsed().as_millis()
        );
        Ok(Some(stored))
    }

    fn save(&self, document: &CatalogDocument) -> StoreResult<()> {
        let started_at = Instant::now();
        let body = encode_document(document)?;

        if let Some(parent) = self
            .path
            .parent()
            .filter(|parent| !parent.as_os_str().is_empty())
        {
            std::fs::create_dir_all(parent).map_err(|err| self.io_error(err))?;
        }

        if let Err(err) = std::fs::write(&self.path, body) {
            error!(
                "event=catalog_save module=store status=error backend=json_file error_code=write_failed error={}",
                err
            );
            return Err(self.io_error(err));
        }

        info!(
            "event=catalog_save module=store status=ok backend=json_file tools={} duration_ms={}",
            document.tools.len(),
            started_at.elapsed().as_millis()
        );
        Ok(())
    }
}
