//! Root catalog document.
//!
//! # Responsibility
//! - Aggregate goals, filter taxonomy, tools and scenario texts.
//! - Provide name-based lookups used by the editor and the engine.
//!
//! # Invariants
//! - The document is loaded and saved wholesale; there is no partial update.
//! - Lookups by tool name resolve to the first tool in `tools` order.

use crate::model::filters::FilterCategories;
use crate::model::scenario::{Scenario, ScenarioKey};
use crate::model::tool::Tool;
use serde::{Deserialize, Serialize};

/// Full in-memory catalog.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct CatalogDocument {
    /// Matrix columns, in display order.
    #[serde(default)]
    pub goals: Vec<String>,
    /// Category -> allowed values, in display order.
    #[serde(default)]
    pub filters: FilterCategories,
    /// Tools in insertion order; cell lists follow this order.
    #[serde(default)]
    pub tools: Vec<Tool>,
    #[serde(default, skip_serializing_if = "Vec::is_empty")]
    pub scenarios: Vec<Scenario>,
}

impl CatalogDocument {
    pub fn has_goal(&self, goal: &str) -> bool {
        self.goals.iter().any(|current| current == goal)
    }

    /// Position of the first tool named `name`.
    pub fn tool_position(&self, name: &str) -> Option<usize> {
        self.tools.iter().position(|tool| tool.name == name)
    }

    pub fn find_tool(&self, name: &str) -> Option<&Tool> {
        self.tools.iter().find(|tool| tool.name == name)
    }

    pub fn find_tool_mut(&mut self, name: &str) -> Option<&mut Tool> {
        self.tools.iter_mut().find(|tool| tool.name == name)
    }

    pub fn scenario(&self, key: &ScenarioKey) -> Option<&Scenario> {
        self.scenarios.iter().find(|scenario| scenario.matches_key(key))
    }

    /// Scenario text for the (goal, tool) pair, if one is recorded.
    pub fn scenario_text(&self, goal: &str, tool: &str) -> Option<&str> {
        self.scenarios
            .iter()
            .find(|scenario| scenario.goal == goal && scenario.tool == tool)
            .map(|scenario| scenario.text.as_str())
    }

    /// Inserts or replaces the scenario for `key`.
    ///
    /// Returns `true` when a new scenario was created.
    pub fn upsert_scenario(&mut self, key: &ScenarioKey, text: impl Into<String>) -> bool {
        let text = text.into();
        if let Some(existing) = self
            .scenarios
            .iter_mut()
            .find(|scenario| scenario.matches_key(key))
        {
            existing.text = text;
            return false;
        }
        self.scenarios
            .push(Scenario::new(key.goal.as_str(), key.tool.as_str(), text));
        true
    }
}
