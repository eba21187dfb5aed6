//! Scenario detail lookup for a chosen (goal, tool) pair.

use crate::engine::selection::FilterSelection;
use crate::model::catalog::CatalogDocument;
use crate::model::scenario::ScenarioKey;
use serde::Serialize;

/// Detail view data for one scenario.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ScenarioDetail {
    pub goal: String,
    pub tool: String,
    pub text: String,
    /// Tool link when the tool exists and has one.
    pub link: Option<String>,
}

/// Looks up the scenario recorded for `key`.
pub fn scenario_detail(document: &CatalogDocument, key: &ScenarioKey) -> Option<ScenarioDetail> {
    let scenario = document.scenario(key)?;
    let link = document
        .find_tool(&key.tool)
        .map(|tool| tool.link.clone())
        .filter(|link| !link.is_empty());
    Some(ScenarioDetail {
        goal: scenario.goal.clone(),
        tool: scenario.tool.clone(),
        text: scenario.text.clone(),
        link,
    })
}

/// Detail for the selection's focus pair, if any.
pub fn focused_detail(
    document: &CatalogDocument,
    selection: &FilterSelection,
) -> Option<ScenarioDetail> {
    scenario_detail(document, selection.focus()?)
}

#[cfg(test)]
mod tests {
    use super::{focused_detail, scenario_detail};
    use crate::engine::selection::FilterSelection;
    use crate::model::scenario::ScenarioKey;
    use crate::store::seed::default_document;

    #[test]
    fn detail_carries_scenario_text_and_tool_link() {
        let document = default_document();
        let detail =
            scenario_detail(&document, &ScenarioKey::new("Daten analysieren", "DataRobot"))
                .unwrap();
        assert_eq!(detail.text, "Automatisiere deine Datenanalysen mit DataRobot.");
        assert_eq!(detail.link.as_deref(), Some("https://www.datarobot.com"));
    }

    #[test]
    fn missing_pair_has_no_detail() {
        let document = default_document();
        assert!(scenario_detail(&document, &ScenarioKey::new("Daten analysieren", "DALL-E")).is_none());
        assert!(focused_detail(&document, &FilterSelection::unrestricted()).is_none());
    }

    #[test]
    fn focus_is_resolved_from_selection() {
        let document = default_document();
        let selection = FilterSelection::unrestricted().with_focus("Bilder bearbeiten", "DALL-E");
        let detail = focused_detail(&document, &selection).unwrap();
        assert_eq!(detail.tool, "DALL-E");
    }
}
