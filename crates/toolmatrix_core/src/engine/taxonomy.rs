//! Filter taxonomy: per-category arity and empty-selection policy.

use crate::config::MatrixConfig;
use crate::model::catalog::CatalogDocument;

/// Meaning of an explicit but empty value selection for a category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum EmptySelectionPolicy {
    /// No tool can match on the category.
    #[default]
    NoneMatch,
    /// The category imposes no constraint.
    AllMatch,
}

/// How many values a tool may carry in one category.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum CategoryArity {
    Single,
    #[default]
    Multi,
}

/// Resolved description of one filter category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CategorySpec {
    pub name: String,
    pub values: Vec<String>,
    pub arity: CategoryArity,
    pub empty_selection: EmptySelectionPolicy,
}

/// Category descriptions derived from a document and a matrix config.
///
/// Categories that are selected but unknown to the document fall back to
/// the config's defaults.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FilterTaxonomy {
    categories: Vec<CategorySpec>,
    config: MatrixConfig,
}

impl FilterTaxonomy {
    pub fn from_document(document: &CatalogDocument, config: &MatrixConfig) -> Self {
        let categories = document
            .filters
            .iter()
            .map(|category| CategorySpec {
                name: category.name.clone(),
                values: category.values.clone(),
                arity: config.arity_for(&category.name),
                empty_selection: config.empty_selection_for(&category.name),
            })
            .collect();
        Self {
            categories,
            config: config.clone(),
        }
    }

    /// Categories in document order.
    pub fn categories(&self) -> &[CategorySpec] {
        &self.categories
    }

    pub fn category(&self, name: &str) -> Option<&CategorySpec> {
        self.categories.iter().find(|category| category.name == name)
    }

    pub fn empty_selection_for(&self, name: &str) -> EmptySelectionPolicy {
        self.category(name)
            .map_or_else(|| self.config.empty_selection_for(name), |spec| spec.empty_selection)
    }

    pub fn arity_for(&self, name: &str) -> CategoryArity {
        self.category(name)
            .map_or_else(|| self.config.arity_for(name), |spec| spec.arity)
    }
}
