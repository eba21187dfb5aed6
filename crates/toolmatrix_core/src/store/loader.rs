//! Catalog open path: seed, legacy upgrade and structural backfill.
//!
//! # Invariants
//! - A missing store is replaced by the seed document, persisted immediately.
//! - Backfilled categories or a legacy upgrade trigger exactly one save.
//! - An unchanged canonical document is never written back.

use crate::config::CatalogConfig;
use crate::model::catalog::CatalogDocument;
use crate::store::seed::default_document;
use crate::store::{CatalogStore, StoreResult};
use log::{error, info};

/// Result of opening a catalog store.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoadOutcome {
    pub document: CatalogDocument,
    /// The store was empty and the seed document was written.
    pub seeded: bool,
    pub upgraded_from_legacy: bool,
    /// Required categories injected into the loaded document.
    pub backfilled_categories: Vec<String>,
}

impl LoadOutcome {
    /// Whether opening wrote to the store.
    pub fn persisted(&self) -> bool {
        self.seeded || self.upgraded_from_legacy || !self.backfilled_categories.is_empty()
    }
}

/// Loads the catalog from `store`, seeding and backfilling as needed.
///
/// # Errors
/// - Returns store errors from load, decode or the backfill save.
pub fn open_catalog<S: CatalogStore + ?Sized>(
    store: &S,
    config: &CatalogConfig,
) -> StoreResult<LoadOutcome> {
    let (mut document, seeded, upgraded_from_legacy) = match store.load()? {
        Some(stored) => (stored.document, false, stored.upgraded_from_legacy),
        None => (default_document(), true, false),
    };

    let backfilled_categories = backfill_required_categories(&mut document, config);
    let outcome = LoadOutcome {
        document,
        seeded,
        upgraded_from_legacy,
        backfilled_categories,
    };

    if outcome.persisted() {
        if let Err(err) = store.save(&outcome.document) {
            error!(
                "event=catalog_open module=store status=error backend={} error_code=backfill_save_failed error={}",
                store.backend(),
                err
            );
            return Err(err);
        }
    }

    info!(
        "event=catalog_open module=store status=ok backend={} seeded={} legacy={} backfilled={} tools={}",
        store.backend(),
        outcome.seeded,
        outcome.upgraded_from_legacy,
        outcome.backfilled_categories.len(),
        outcome.document.tools.len()
    );
    Ok(outcome)
}

/// Injects required filter categories missing from `document`.
///
/// Returns the names of the injected categories in config order.
pub fn backfill_required_categories(
    document: &mut CatalogDocument,
    config: &CatalogConfig,
) -> Vec<String> {
    let mut injected = Vec::new();
    for required in &config.required_categories {
        if document
            .filters
            .insert_category(required.name.as_str(), required.values.clone())
        {
            injected.push(required.name.clone());
        }
    }
    injected
}
