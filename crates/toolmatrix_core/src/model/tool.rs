//! Tool entity: one product row in the catalog.
//!
//! # Invariants
//! - `name` must not be blank when a tool enters the catalog.
//! - An absent category in `filter_values` is the empty set.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Catalog record for one tool.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Tool {
    /// Display label and soft identity key for edit/delete.
    pub name: String,
    /// Product URL. Empty when unknown.
    #[serde(default)]
    pub link: String,
    /// Free-text description shown on hover.
    #[serde(default)]
    pub tooltip: String,
    /// Serialized as `filters` to match the stored schema.
    #[serde(rename = "filters", default)]
    pub filter_values: BTreeMap<String, Vec<String>>,
    /// Goals this tool addresses.
    #[serde(default)]
    pub goals: Vec<String>,
}

/// Validation failures for tool records.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ToolValidationError {
    EmptyName,
}

impl Display for ToolValidationError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::EmptyName => write!(f, "tool name cannot be empty"),
        }
    }
}

impl Error for ToolValidationError {}

impl Tool {
    /// Creates a tool with no link, tooltip, filter values or goals.
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            ..Self::default()
        }
    }

    pub fn with_link(mut self, link: impl Into<String>) -> Self {
        self.link = link.into();
        self
    }

    pub fn with_tooltip(mut self, tooltip: impl Into<String>) -> Self {
        self.tooltip = tooltip.into();
        self
    }

    /// Replaces the values assigned for `category`.
    pub fn with_values<I, V>(mut self, category: impl Into<String>, values: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.filter_values.insert(
            category.into(),
            values.into_iter().map(Into::into).collect(),
        );
        self
    }

    pub fn with_goals<I, V>(mut self, goals: I) -> Self
    where
        I: IntoIterator<Item = V>,
        V: Into<String>,
    {
        self.goals = goals.into_iter().map(Into::into).collect();
        self
    }

    /// Values recorded for `category`; empty when the category is absent.
    pub fn values_for(&self, category: &str) -> &[String] {
        self.filter_values
            .get(category)
            .map(Vec::as_slice)
            .unwrap_or(&[])
    }

    pub fn has_value(&self, category: &str, value: &str) -> bool {
        self.values_for(category).iter().any(|current| current == value)
    }

    pub fn addresses_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|current| current == goal)
    }

    /// Checks the invariants required before a tool enters the catalog.
    pub fn validate(&self) -> Result<(), ToolValidationError> {
        if self.name.trim().is_empty() {
            return Err(ToolValidationError::EmptyName);
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::{Tool, ToolValidationError};

    #[test]
    fn absent_category_reads_as_empty_set() {
        let tool = Tool::new("ChatGPT").with_values("Lizenz", ["Freemium"]);
        assert!(tool.values_for("Plattform").is_empty());
        assert!(tool.has_value("Lizenz", "Freemium"));
        assert!(!tool.has_value("Lizenz", "Kostenlos"));
    }

    #[test]
    fn blank_name_is_rejected() {
        assert_eq!(
            Tool::new("   ").validate(),
            Err(ToolValidationError::EmptyName)
        );
        assert!(Tool::new("DALL-E").validate().is_ok());
    }

    #[test]
    fn filter_values_serialize_under_filters_key() {
        let tool = Tool::new("DataRobot").with_values("Lizenz", ["Abonnement"]);
        let value = serde_json::to_value(&tool).unwrap();
        assert_eq!(value["filters"]["Lizenz"][0], "Abonnement");
        assert!(value.get("filter_values").is_none());
    }
}
