//! Goal/tool scenario texts used by the goal axis of the matrix.

use serde::{Deserialize, Serialize};

/// Composite identity of a scenario: one goal paired with one tool.
#[derive(Debug, Clone, PartialEq, Eq, PartialOrd, Ord, Hash)]
pub struct ScenarioKey {
    pub goal: String,
    pub tool: String,
}

impl ScenarioKey {
    pub fn new(goal: impl Into<String>, tool: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            tool: tool.into(),
        }
    }
}

/// Descriptive text for how one tool serves one goal.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Scenario {
    pub goal: String,
    pub tool: String,
    pub text: String,
}

impl Scenario {
    pub fn new(goal: impl Into<String>, tool: impl Into<String>, text: impl Into<String>) -> Self {
        Self {
            goal: goal.into(),
            tool: tool.into(),
            text: text.into(),
        }
    }

    pub fn matches_key(&self, key: &ScenarioKey) -> bool {
        self.goal == key.goal && self.tool == key.tool
    }
}
