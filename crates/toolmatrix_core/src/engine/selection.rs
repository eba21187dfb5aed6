//! Filter selection input and normalization.
//!
//! # Responsibility
//! - Hold raw per-category user input (`All` or explicit values).
//! - Normalize it into `Unrestricted` / `RestrictedTo` restrictions using
//!   the taxonomy's empty-selection policy.
//!
//! # Invariants
//! - Categories absent from the raw input are absent from the selection and
//!   never exclude a tool.
//! - Blank values are dropped before the empty-selection policy applies.
//! - A single-valued category accepts at most one selected value.

use crate::engine::taxonomy::{CategoryArity, EmptySelectionPolicy, FilterTaxonomy};
use crate::model::catalog::CatalogDocument;
use crate::model::scenario::ScenarioKey;
use std::collections::{BTreeMap, BTreeSet};
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Raw user input for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryInput {
    /// The "all" sentinel: no restriction.
    All,
    /// Explicitly chosen values, possibly none.
    Values(BTreeSet<String>),
}

/// Raw selection as collected from a UI or command line.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct RawSelection {
    inputs: BTreeMap<String, CategoryInput>,
    focus: Option<ScenarioKey>,
}

impl RawSelection {
    pub fn new() -> Self {
        Self::default()
    }

    /// Selects every allowed value of every category in `document`.
    ///
    /// Mirrors UIs that pre-select the full attribute list, which makes the
    /// initial state unrestrictive.
    pub fn everything_selected(document: &CatalogDocument) -> Self {
        let mut raw = Self::new();
        for category in document.filters.iter() {
            raw.set_values(category.name.as_str(), category.values.iter().cloned());
        }
        raw
    }

    /// Marks `category` as unrestricted.
    pub fn set_all(&mut self, category: impl Into<String>) -> &mut Self {
        self.inputs.insert(category.into(), CategoryInput::All);
        self
    }

    /// Replaces the explicit values of `category`.
    pub fn set_values<I, V>(&mut self, category: impl Into<String>, values: I) -> &mut Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        let values = values.into_iter().map(Into::into).collect();
        self.inputs
            .insert(category.into(), CategoryInput::Values(values));
        self
    }

    /// Adds one explicit value to `category`.
    ///
    /// A category previously set to `All` switches to explicit values.
    pub fn add_value(&mut self, category: impl Into<String>, value: impl Into<String>) -> &mut Self {
        let entry = self
            .inputs
            .entry(category.into())
            .or_insert_with(|| CategoryInput::Values(BTreeSet::new()));
        if *entry == CategoryInput::All {
            *entry = CategoryInput::Values(BTreeSet::new());
        }
        if let CategoryInput::Values(values) = entry {
            values.insert(value.into());
        }
        self
    }

    /// Records the (goal, tool) pair chosen for detail lookup.
    pub fn set_focus(&mut self, goal: impl Into<String>, tool: impl Into<String>) -> &mut Self {
        self.focus = Some(ScenarioKey::new(goal, tool));
        self
    }

    pub fn input(&self, category: &str) -> Option<&CategoryInput> {
        self.inputs.get(category)
    }

    pub fn is_empty(&self) -> bool {
        self.inputs.is_empty()
    }
}

/// Normalized restriction for one category.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CategoryRestriction {
    Unrestricted,
    RestrictedTo(BTreeSet<String>),
}

impl CategoryRestriction {
    /// Whether `value` survives this restriction.
    pub fn admits(&self, value: &str) -> bool {
        match self {
            Self::Unrestricted => true,
            Self::RestrictedTo(allowed) => allowed.contains(value),
        }
    }
}

/// Canonical selection consumed by matching and matrix building.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct FilterSelection {
    restrictions: BTreeMap<String, CategoryRestriction>,
    focus: Option<ScenarioKey>,
}

impl FilterSelection {
    /// Selection with no categories: every tool matches.
    pub fn unrestricted() -> Self {
        Self::default()
    }

    pub fn restrict<I, V>(mut self, category: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.restrictions.insert(
            category.into(),
            CategoryRestriction::RestrictedTo(values.into_iter().map(Into::into).collect()),
        );
        self
    }

    pub fn allow_all(mut self, category: impl Into<String>) -> Self {
        self.restrictions
            .insert(category.into(), CategoryRestriction::Unrestricted);
        self
    }

    pub fn with_focus(mut self, goal: impl Into<String>, tool: impl Into<String>) -> Self {
        self.focus = Some(ScenarioKey::new(goal, tool));
        self
    }

    pub fn restriction(&self, category: &str) -> Option<&CategoryRestriction> {
        self.restrictions.get(category)
    }

    pub fn iter(&self) -> impl Iterator<Item = (&str, &CategoryRestriction)> {
        self.restrictions
            .iter()
            .map(|(category, restriction)| (category.as_str(), restriction))
    }

    pub fn is_empty(&self) -> bool {
        self.restrictions.is_empty()
    }

    pub fn focus(&self) -> Option<&ScenarioKey> {
        self.focus.as_ref()
    }

    /// Whether an attribute row `category: value` is shown.
    pub fn admits_value(&self, category: &str, value: &str) -> bool {
        self.restriction(category)
            .map_or(true, |restriction| restriction.admits(value))
    }
}

/// Normalization failures.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SelectionError {
    /// A single-valued category received several values.
    TooManyValues { category: String, count: usize },
}

impl Display for SelectionError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::TooManyValues { category, count } => write!(
                f,
                "category `{category}` accepts a single value, got {count}"
            ),
        }
    }
}

impl Error for SelectionError {}

/// Converts raw input into a canonical selection.
///
/// # Errors
/// - `TooManyValues` when a single-valued category gets more than one value.
pub fn normalize_selection(
    raw: &RawSelection,
    taxonomy: &FilterTaxonomy,
) -> Result<FilterSelection, SelectionError> {
    let mut restrictions = BTreeMap::new();
    for (category, input) in &raw.inputs {
        let restriction = match input {
            CategoryInput::All => CategoryRestriction::Unrestricted,
            CategoryInput::Values(values) => {
                let values = normalize_values(values);
                if values.is_empty() {
                    match taxonomy.empty_selection_for(category) {
                        EmptySelectionPolicy::NoneMatch => {
                            CategoryRestriction::RestrictedTo(BTreeSet::new())
                        }
                        EmptySelectionPolicy::AllMatch => CategoryRestriction::Unrestricted,
                    }
                } else {
                    if taxonomy.arity_for(category) == CategoryArity::Single && values.len() > 1 {
                        return Err(SelectionError::TooManyValues {
                            category: category.clone(),
                            count: values.len(),
                        });
                    }
                    CategoryRestriction::RestrictedTo(values)
                }
            }
        };
        restrictions.insert(category.clone(), restriction);
    }

    Ok(FilterSelection {
        restrictions,
        focus: raw.focus.clone(),
    })
}

/// Trims values and drops blanks.
fn normalize_values(values: &BTreeSet<String>) -> BTreeSet<String> {
    values
        .iter()
        .map(|value| value.trim())
        .filter(|value| !value.is_empty())
        .map(str::to_string)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::{
        normalize_selection, CategoryRestriction, RawSelection, SelectionError,
    };
    use crate::config::MatrixConfig;
    use crate::engine::taxonomy::{EmptySelectionPolicy, FilterTaxonomy};
    use crate::store::seed::default_document;
    use std::collections::BTreeSet;

    fn taxonomy(config: &MatrixConfig) -> FilterTaxonomy {
        FilterTaxonomy::from_document(&default_document(), config)
    }

    #[test]
    fn all_sentinel_is_unrestricted() {
        let mut raw = RawSelection::new();
        raw.set_all("Lizenz");
        let selection = normalize_selection(&raw, &taxonomy(&MatrixConfig::default())).unwrap();
        assert_eq!(
            selection.restriction("Lizenz"),
            Some(&CategoryRestriction::Unrestricted)
        );
    }

    #[test]
    fn empty_values_follow_category_policy() {
        let config = MatrixConfig::default()
            .with_category_policy("Plattform", EmptySelectionPolicy::AllMatch);
        let mut raw = RawSelection::new();
        raw.set_values("Lizenz", Vec::<String>::new());
        raw.set_values("Plattform", ["  "]);

        let selection = normalize_selection(&raw, &taxonomy(&config)).unwrap();
        assert_eq!(
            selection.restriction("Lizenz"),
            Some(&CategoryRestriction::RestrictedTo(BTreeSet::new()))
        );
        assert_eq!(
            selection.restriction("Plattform"),
            Some(&CategoryRestriction::Unrestricted)
        );
    }

    #[test]
    fn single_valued_category_rejects_multiple_values() {
        let config = MatrixConfig::default().with_single_valued("Lizenz");
        let mut raw = RawSelection::new();
        raw.set_values("Lizenz", ["Kostenlos", "Freemium"]);

        let err = normalize_selection(&raw, &taxonomy(&config)).unwrap_err();
        assert_eq!(
            err,
            SelectionError::TooManyValues {
                category: "Lizenz".to_string(),
                count: 2,
            }
        );
    }

    #[test]
    fn add_value_replaces_all_sentinel() {
        let mut raw = RawSelection::new();
        raw.set_all("Lizenz").add_value("Lizenz", "Freemium");
        let selection = normalize_selection(&raw, &taxonomy(&MatrixConfig::default())).unwrap();
        assert!(selection.admits_value("Lizenz", "Freemium"));
        assert!(!selection.admits_value("Lizenz", "Kostenlos"));
        assert!(selection.admits_value("Plattform", "Desktop"));
    }

    #[test]
    fn everything_selected_restricts_to_full_lists() {
        let raw = RawSelection::everything_selected(&default_document());
        let selection = normalize_selection(&raw, &taxonomy(&MatrixConfig::default())).unwrap();
        assert!(selection.admits_value("Zielgruppe", "Unternehmen"));
        assert!(!selection.admits_value("Zielgruppe", "Behörden"));
    }
}
