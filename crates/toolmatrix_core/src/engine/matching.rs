//! Tool matching predicate.

use crate::engine::selection::{CategoryRestriction, FilterSelection};
use crate::model::tool::Tool;

/// Returns whether `tool` satisfies `selection`.
///
/// For every `RestrictedTo(S)` category the tool must carry at least one
/// value in `S`. `Unrestricted` categories never exclude. A tool without
/// values for a restricted category fails it, and an empty selection
/// matches every tool.
pub fn matches(tool: &Tool, selection: &FilterSelection) -> bool {
    selection
        .iter()
        .all(|(category, restriction)| match restriction {
            CategoryRestriction::Unrestricted => true,
            CategoryRestriction::RestrictedTo(allowed) => tool
                .values_for(category)
                .iter()
                .any(|value| allowed.contains(value)),
        })
}

/// Tools satisfying `selection`, in catalog order.
pub fn filter_tools<'a>(tools: &'a [Tool], selection: &FilterSelection) -> Vec<&'a Tool> {
    tools.iter().filter(|tool| matches(tool, selection)).collect()
}
