//! Core engine for the tool matrix.
//!
//! Cross-references tools against goals, filters them by a per-category
//! selection and builds a display grid. Persistence is a whole-document
//! store (JSON file or SQLite). This crate owns every business invariant;
//! presentation layers only consume [`Matrix`].

pub mod config;
pub mod db;
pub mod engine;
pub mod logging;
pub mod model;
pub mod service;
pub mod store;

pub use config::{CatalogConfig, MatrixConfig, RequiredCategory, CATALOG_PATH_ENV};
pub use engine::detail::{focused_detail, scenario_detail, ScenarioDetail};
pub use engine::matching::{filter_tools, matches};
pub use engine::matrix::{
    attribute_row_label, build_matrix, CellContent, GoalAxisOrientation, Matrix, MatrixAxis,
    ToolRef,
};
pub use engine::selection::{
    normalize_selection, CategoryInput, CategoryRestriction, FilterSelection, RawSelection,
    SelectionError,
};
pub use engine::taxonomy::{CategoryArity, CategorySpec, EmptySelectionPolicy, FilterTaxonomy};
pub use engine::validate::{validate_references, CatalogWarning};
pub use logging::{default_log_level, init_logging, logging_status, LoggingError};
pub use model::catalog::CatalogDocument;
pub use model::filters::{FilterCategories, FilterCategory};
pub use model::scenario::{Scenario, ScenarioKey};
pub use model::tool::{Tool, ToolValidationError};
pub use service::catalog_editor::{CatalogEditor, EditorError, ToolUpdate};
pub use service::session::MatrixSession;
pub use store::json_file::JsonFileStore;
pub use store::loader::{open_catalog, LoadOutcome};
pub use store::sqlite::SqliteCatalogStore;
pub use store::{CatalogStore, StoreError, StoreResult, StoredDocument};
