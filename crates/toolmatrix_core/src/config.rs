//! Runtime configuration for catalog opening and matrix building.
//!
//! The catalog location is the only process-level parameter; everything
//! else here is chosen by the embedding caller (CLI flags, tests).

use crate::engine::matrix::MatrixAxis;
use crate::engine::taxonomy::{CategoryArity, EmptySelectionPolicy};
use std::collections::BTreeMap;

/// Environment variable consulted for the catalog path.
pub const CATALOG_PATH_ENV: &str = "TOOLMATRIX_CATALOG";
/// Placeholder for attribute-axis cells without tools.
pub const DEFAULT_TOOLS_PLACEHOLDER: &str = "Keine Tools";
/// Placeholder for goal-axis cells without scenario text.
pub const DEFAULT_SCENARIO_PLACEHOLDER: &str = "Keine Szenarien";

/// Filter category that must exist in every loaded catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequiredCategory {
    pub name: String,
    /// Values injected when the category is missing.
    pub values: Vec<String>,
}

/// Options for [`crate::store::loader::open_catalog`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct CatalogConfig {
    pub required_categories: Vec<RequiredCategory>,
}

impl Default for CatalogConfig {
    fn default() -> Self {
        Self {
            required_categories: vec![RequiredCategory {
                name: "Lizenz".to_string(),
                values: ["Kostenlos", "Freemium", "Abonnement"]
                    .iter()
                    .map(|value| value.to_string())
                    .collect(),
            }],
        }
    }
}

impl CatalogConfig {
    /// Config that never injects categories.
    pub fn without_backfill() -> Self {
        Self {
            required_categories: Vec::new(),
        }
    }
}

/// Options for taxonomy derivation and matrix building.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub struct MatrixConfig {
    pub axis: MatrixAxis,
    /// Overrides the axis-specific placeholder for empty cells.
    pub empty_placeholder: Option<String>,
    pub default_empty_selection: EmptySelectionPolicy,
    pub empty_selection_overrides: BTreeMap<String, EmptySelectionPolicy>,
    /// Categories not listed here are multi-valued.
    pub category_arity: BTreeMap<String, CategoryArity>,
}

impl MatrixConfig {
    pub fn with_axis(mut self, axis: MatrixAxis) -> Self {
        self.axis = axis;
        self
    }

    pub fn with_placeholder(mut self, placeholder: impl Into<String>) -> Self {
        self.empty_placeholder = Some(placeholder.into());
        self
    }

    pub fn with_empty_selection(mut self, policy: EmptySelectionPolicy) -> Self {
        self.default_empty_selection = policy;
        self
    }

    pub fn with_category_policy(
        mut self,
        category: impl Into<String>,
        policy: EmptySelectionPolicy,
    ) -> Self {
        self.empty_selection_overrides.insert(category.into(), policy);
        self
    }

    pub fn with_single_valued(mut self, category: impl Into<String>) -> Self {
        self.category_arity
            .insert(category.into(), CategoryArity::Single);
        self
    }

    pub fn empty_selection_for(&self, category: &str) -> EmptySelectionPolicy {
        self.empty_selection_overrides
            .get(category)
            .copied()
            .unwrap_or(self.default_empty_selection)
    }

    pub fn arity_for(&self, category: &str) -> CategoryArity {
        self.category_arity
            .get(category)
            .copied()
            .unwrap_or_default()
    }

    /// Text used for cells with nothing to show.
    pub fn placeholder(&self) -> &str {
        if let Some(placeholder) = self.empty_placeholder.as_deref() {
            return placeholder;
        }
        match self.axis {
            MatrixAxis::FilterAttributes => DEFAULT_TOOLS_PLACEHOLDER,
            MatrixAxis::Goals(_) => DEFAULT_SCENARIO_PLACEHOLDER,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::{MatrixConfig, DEFAULT_SCENARIO_PLACEHOLDER, DEFAULT_TOOLS_PLACEHOLDER};
    use crate::engine::matrix::{GoalAxisOrientation, MatrixAxis};
    use crate::engine::taxonomy::{CategoryArity, EmptySelectionPolicy};

    #[test]
    fn placeholder_follows_axis_unless_overridden() {
        let config = MatrixConfig::default();
        assert_eq!(config.placeholder(), DEFAULT_TOOLS_PLACEHOLDER);

        let config = config.with_axis(MatrixAxis::Goals(GoalAxisOrientation::GoalRows));
        assert_eq!(config.placeholder(), DEFAULT_SCENARIO_PLACEHOLDER);

        let config = config.with_placeholder("-");
        assert_eq!(config.placeholder(), "-");
    }

    #[test]
    fn category_overrides_take_precedence() {
        let config = MatrixConfig::default()
            .with_empty_selection(EmptySelectionPolicy::AllMatch)
            .with_category_policy("Lizenz", EmptySelectionPolicy::NoneMatch)
            .with_single_valued("Plattform");

        assert_eq!(
            config.empty_selection_for("Lizenz"),
            EmptySelectionPolicy::NoneMatch
        );
        assert_eq!(
            config.empty_selection_for("Zielgruppe"),
            EmptySelectionPolicy::AllMatch
        );
        assert_eq!(config.arity_for("Plattform"), CategoryArity::Single);
        assert_eq!(config.arity_for("Lizenz"), CategoryArity::Multi);
    }
}
