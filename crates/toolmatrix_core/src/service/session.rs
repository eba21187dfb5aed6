//! Request-scoped matrix session.
//!
//! One session covers one interaction: open the catalog, apply at most the
//! mutations the caller asks for, render. Nothing is cached across sessions.

use crate::config::{CatalogConfig, MatrixConfig};
use crate::engine::detail::{scenario_detail, ScenarioDetail};
use crate::engine::matrix::{build_matrix, Matrix};
use crate::engine::selection::{normalize_selection, RawSelection, SelectionError};
use crate::engine::taxonomy::FilterTaxonomy;
use crate::engine::validate::{validate_references, CatalogWarning};
use crate::model::catalog::CatalogDocument;
use crate::model::scenario::ScenarioKey;
use crate::service::catalog_editor::{CatalogEditor, EditorError};
use crate::store::loader::{open_catalog, LoadOutcome};
use crate::store::{CatalogStore, StoreResult};

/// Loaded catalog plus the editor bound to its store.
pub struct MatrixSession<S: CatalogStore> {
    editor: CatalogEditor<S>,
    document: CatalogDocument,
    seeded: bool,
    backfilled_categories: Vec<String>,
}

impl<S: CatalogStore> MatrixSession<S> {
    /// Opens the catalog behind `store`, seeding/backfilling as needed.
    pub fn open(store: S, config: &CatalogConfig) -> StoreResult<Self> {
        let LoadOutcome {
            document,
            seeded,
            backfilled_categories,
            ..
        } = open_catalog(&store, config)?;
        Ok(Self {
            editor: CatalogEditor::new(store),
            document,
            seeded,
            backfilled_categories,
        })
    }

    pub fn document(&self) -> &CatalogDocument {
        &self.document
    }

    /// Whether opening wrote the seed document.
    pub fn seeded(&self) -> bool {
        self.seeded
    }

    pub fn backfilled_categories(&self) -> &[String] {
        &self.backfilled_categories
    }

    /// Runs one editor mutation against the session document.
    pub fn apply<T>(
        &mut self,
        mutation: impl FnOnce(&CatalogEditor<S>, &mut CatalogDocument) -> Result<T, EditorError>,
    ) -> Result<T, EditorError> {
        mutation(&self.editor, &mut self.document)
    }

    /// Normalizes `raw` and builds the matrix.
    pub fn render(&self, raw: &RawSelection, config: &MatrixConfig) -> Result<Matrix, SelectionError> {
        let taxonomy = FilterTaxonomy::from_document(&self.document, config);
        let selection = normalize_selection(raw, &taxonomy)?;
        Ok(build_matrix(&self.document, &selection, config))
    }

    pub fn validate(&self, config: &MatrixConfig) -> Vec<CatalogWarning> {
        let taxonomy = FilterTaxonomy::from_document(&self.document, config);
        validate_references(&self.document, &taxonomy)
    }

    pub fn detail(&self, goal: &str, tool: &str) -> Option<ScenarioDetail> {
        scenario_detail(&self.document, &ScenarioKey::new(goal, tool))
    }
}
