//! Reference validation pass over a catalog document.
//!
//! # Responsibility
//! - Report drift between tools and the declared goals/filters.
//! - Never fail: every finding is a non-fatal [`CatalogWarning`].
//!
//! # Invariants
//! - Warnings are emitted in document order (goals, filters, tools,
//!   scenarios).

use crate::engine::taxonomy::{CategoryArity, FilterTaxonomy};
use crate::model::catalog::CatalogDocument;
use log::{debug, warn};
use once_cell::sync::Lazy;
use regex::Regex;
use std::collections::BTreeSet;
use std::fmt::{Display, Formatter};

static HTTP_URL_RE: Lazy<Regex> =
    Lazy::new(|| Regex::new(r"(?i)^https?://[^\s/?#]+[^\s]*$").expect("valid url regex"));

/// One non-fatal inconsistency found in a catalog.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum CatalogWarning {
    DuplicateGoal(String),
    DuplicateFilterValue {
        category: String,
        value: String,
    },
    DuplicateToolName(String),
    UnknownFilterCategory {
        tool: String,
        category: String,
    },
    UnknownFilterValue {
        tool: String,
        category: String,
        value: String,
    },
    UnknownGoal {
        tool: String,
        goal: String,
    },
    TooManyValues {
        tool: String,
        category: String,
        count: usize,
    },
    InvalidLink {
        tool: String,
        link: String,
    },
    OrphanScenario {
        goal: String,
        tool: String,
    },
}

impl Display for CatalogWarning {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::DuplicateGoal(goal) => write!(f, "goal `{goal}` is declared more than once"),
            Self::DuplicateFilterValue { category, value } => {
                write!(f, "value `{value}` is declared twice in category `{category}`")
            }
            Self::DuplicateToolName(name) => write!(f, "tool name `{name}` is not unique"),
            Self::UnknownFilterCategory { tool, category } => {
                write!(f, "tool `{tool}` uses undeclared category `{category}`")
            }
            Self::UnknownFilterValue {
                tool,
                category,
                value,
            } => write!(
                f,
                "tool `{tool}` uses value `{value}` not declared in category `{category}`"
            ),
            Self::UnknownGoal { tool, goal } => {
                write!(f, "tool `{tool}` references undeclared goal `{goal}`")
            }
            Self::TooManyValues {
                tool,
                category,
                count,
            } => write!(
                f,
                "tool `{tool}` has {count} values in single-valued category `{category}`"
            ),
            Self::InvalidLink { tool, link } => {
                write!(f, "tool `{tool}` has a link that is not an http(s) URL: `{link}`")
            }
            Self::OrphanScenario { goal, tool } => write!(
                f,
                "scenario for goal `{goal}` and tool `{tool}` references an unknown goal or tool"
            ),
        }
    }
}

/// Collects reference warnings for `document`.
pub fn validate_references(
    document: &CatalogDocument,
    taxonomy: &FilterTaxonomy,
) -> Vec<CatalogWarning> {
    let mut warnings = Vec::new();

    let mut seen_goals = BTreeSet::new();
    for goal in &document.goals {
        if !seen_goals.insert(goal.as_str()) {
            warnings.push(CatalogWarning::DuplicateGoal(goal.clone()));
        }
    }

    for category in document.filters.iter() {
        let mut seen_values = BTreeSet::new();
        for value in &category.values {
            if !seen_values.insert(value.as_str()) {
                warnings.push(CatalogWarning::DuplicateFilterValue {
                    category: category.name.clone(),
                    value: value.clone(),
                });
            }
        }
    }

    let mut seen_tools = BTreeSet::new();
    for tool in &document.tools {
        if !seen_tools.insert(tool.name.as_str()) {
            warnings.push(CatalogWarning::DuplicateToolName(tool.name.clone()));
        }

        for (category, values) in &tool.filter_values {
            let Some(declared) = document.filters.get(category) else {
                warnings.push(CatalogWarning::UnknownFilterCategory {
                    tool: tool.name.clone(),
                    category: category.clone(),
                });
                continue;
            };
            for value in values.iter().filter(|value| !declared.allows(value)) {
                warnings.push(CatalogWarning::UnknownFilterValue {
                    tool: tool.name.clone(),
                    category: category.clone(),
                    value: value.clone(),
                });
            }
            if taxonomy.arity_for(category) == CategoryArity::Single && values.len() > 1 {
                warnings.push(CatalogWarning::TooManyValues {
                    tool: tool.name.clone(),
                    category: category.clone(),
                    count: values.len(),
                });
            }
        }

        for goal in tool.goals.iter().filter(|goal| !document.has_goal(goal)) {
            warnings.push(CatalogWarning::UnknownGoal {
                tool: tool.name.clone(),
                goal: goal.clone(),
            });
        }

        if !tool.link.is_empty() && !HTTP_URL_RE.is_match(&tool.link) {
            warnings.push(CatalogWarning::InvalidLink {
                tool: tool.name.clone(),
                link: tool.link.clone(),
            });
        }
    }

    for scenario in &document.scenarios {
        if !document.has_goal(&scenario.goal) || document.find_tool(&scenario.tool).is_none() {
            warnings.push(CatalogWarning::OrphanScenario {
                goal: scenario.goal.clone(),
                tool: scenario.tool.clone(),
            });
        }
    }

    if warnings.is_empty() {
        debug!("event=catalog_validate module=engine status=ok warnings=0");
    } else {
        warn!(
            "event=catalog_validate module=engine status=warn warnings={}",
            warnings.len()
        );
    }
    warnings
}
