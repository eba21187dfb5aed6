//! Matrix construction for presentation layers.
//!
//! # Responsibility
//! - Build the attribute-axis grid: one row per admitted `(category, value)`,
//!   one column per goal, cells listing matching tools.
//! - Build the goal-axis grid: goals against matching tools, cells holding
//!   scenario text.
//!
//! # Invariants
//! - Column order of the attribute axis equals `document.goals` order.
//! - Row order equals filter category order, then value order.
//! - Tools inside a cell keep `document.tools` order.

use crate::config::MatrixConfig;
use crate::engine::matching::filter_tools;
use crate::engine::selection::FilterSelection;
use crate::model::catalog::CatalogDocument;
use crate::model::tool::Tool;
use log::debug;
use serde::Serialize;
use std::time::Instant;

/// Row layout of the matrix.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum MatrixAxis {
    /// Rows are `(category, value)` pairs, columns are goals.
    #[default]
    FilterAttributes,
    /// Goals against tools, cells hold scenario text.
    Goals(GoalAxisOrientation),
}

/// Orientation of the goal axis.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum GoalAxisOrientation {
    /// One row per goal, one column per tool.
    #[default]
    GoalRows,
    /// One row per tool, one column per goal.
    ToolRows,
}

/// Structured tool reference rendered inside a cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ToolRef {
    pub display_name: String,
    pub link: String,
    pub tooltip: String,
}

impl From<&Tool> for ToolRef {
    fn from(tool: &Tool) -> Self {
        Self {
            display_name: tool.name.clone(),
            link: tool.link.clone(),
            tooltip: tool.tooltip.clone(),
        }
    }
}

/// Content of one matrix cell.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
#[serde(tag = "kind", content = "value", rename_all = "snake_case")]
pub enum CellContent {
    Text(String),
    Tools(Vec<ToolRef>),
    /// Nothing qualifies; carries the configured placeholder.
    Empty(String),
}

impl CellContent {
    pub fn is_empty(&self) -> bool {
        matches!(self, Self::Empty(_))
    }

    /// Tool references of a `Tools` cell; empty for other cells.
    pub fn tools(&self) -> &[ToolRef] {
        match self {
            Self::Tools(tools) => tools,
            _ => &[],
        }
    }
}

/// Display grid: `cells[row][column]`.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct Matrix {
    pub row_labels: Vec<String>,
    pub column_labels: Vec<String>,
    pub cells: Vec<Vec<CellContent>>,
}

impl Matrix {
    /// Cell at the first row/column carrying the given labels.
    pub fn cell(&self, row_label: &str, column_label: &str) -> Option<&CellContent> {
        let row = self.row_labels.iter().position(|label| label == row_label)?;
        let column = self
            .column_labels
            .iter()
            .position(|label| label == column_label)?;
        self.cells.get(row)?.get(column)
    }

    pub fn has_row(&self, row_label: &str) -> bool {
        self.row_labels.iter().any(|label| label == row_label)
    }
}

/// Label of an attribute-axis row.
pub fn attribute_row_label(category: &str, value: &str) -> String {
    format!("{category}: {value}")
}

/// Builds the matrix for `selection` using the configured axis.
pub fn build_matrix(
    document: &CatalogDocument,
    selection: &FilterSelection,
    config: &MatrixConfig,
) -> Matrix {
    let started_at = Instant::now();
    let matching = filter_tools(&document.tools, selection);
    let placeholder = config.placeholder();

    let (axis_name, matrix) = match config.axis {
        MatrixAxis::FilterAttributes => (
            "attributes",
            build_attribute_matrix(document, selection, &matching, placeholder),
        ),
        MatrixAxis::Goals(orientation) => (
            "goals",
            build_goal_matrix(document, &matching, orientation, placeholder),
        ),
    };

    debug!(
        "event=matrix_build module=engine status=ok axis={} rows={} columns={} matching_tools={} duration_ms={}",
        axis_name,
        matrix.row_labels.len(),
        matrix.column_labels.len(),
        matching.len(),
        started_at.elapsed().as_millis()
    );
    matrix
}

fn build_attribute_matrix(
    document: &CatalogDocument,
    selection: &FilterSelection,
    matching: &[&Tool],
    placeholder: &str,
) -> Matrix {
    let mut matrix = Matrix {
        column_labels: document.goals.clone(),
        ..Matrix::default()
    };

    for category in document.filters.iter() {
        for value in &category.values {
            if !selection.admits_value(&category.name, value) {
                continue;
            }

            let row = document
                .goals
                .iter()
                .map(|goal| {
                    let tools: Vec<ToolRef> = matching
                        .iter()
                        .filter(|tool| tool.has_value(&category.name, value))
                        .filter(|tool| tool.addresses_goal(goal))
                        .map(|tool| ToolRef::from(*tool))
                        .collect();
                    if tools.is_empty() {
                        CellContent::Empty(placeholder.to_string())
                    } else {
                        CellContent::Tools(tools)
                    }
                })
                .collect();

            matrix
                .row_labels
                .push(attribute_row_label(&category.name, value));
            matrix.cells.push(row);
        }
    }

    matrix
}

fn build_goal_matrix(
    document: &CatalogDocument,
    matching: &[&Tool],
    orientation: GoalAxisOrientation,
    placeholder: &str,
) -> Matrix {
    let tool_names: Vec<String> = matching.iter().map(|tool| tool.name.clone()).collect();
    let cell = |goal: &str, tool: &str| match document.scenario_text(goal, tool) {
        Some(text) => CellContent::Text(text.to_string()),
        None => CellContent::Empty(placeholder.to_string()),
    };

    match orientation {
        GoalAxisOrientation::GoalRows => Matrix {
            cells: document
                .goals
                .iter()
                .map(|goal| {
                    tool_names
                        .iter()
                        .map(|tool| cell(goal.as_str(), tool.as_str()))
                        .collect()
                })
                .collect(),
            row_labels: document.goals.clone(),
            column_labels: tool_names,
        },
        GoalAxisOrientation::ToolRows => Matrix {
            cells: tool_names
                .iter()
                .map(|tool| {
                    document
                        .goals
                        .iter()
                        .map(|goal| cell(goal.as_str(), tool.as_str()))
                        .collect()
                })
                .collect(),
            row_labels: tool_names,
            column_labels: document.goals.clone(),
        },
    }
}

#[cfg(test)]
mod tests {
    use super::{attribute_row_label, build_matrix, CellContent, GoalAxisOrientation, MatrixAxis};
    use crate::config::MatrixConfig;
    use crate::engine::selection::FilterSelection;
    use crate::store::seed::default_document;

    #[test]
    fn row_label_joins_category_and_value() {
        assert_eq!(attribute_row_label("Lizenz", "Freemium"), "Lizenz: Freemium");
    }

    #[test]
    fn goal_rows_show_scenarios_for_matching_tools() {
        let document = default_document();
        let config = MatrixConfig::default()
            .with_axis(MatrixAxis::Goals(GoalAxisOrientation::GoalRows));
        let selection = FilterSelection::unrestricted().restrict("Lizenz", ["Freemium"]);

        let matrix = build_matrix(&document, &selection, &config);
        assert_eq!(matrix.column_labels, vec!["ChatGPT", "DALL-E"]);
        assert_eq!(
            matrix.cell("Texte schreiben", "ChatGPT"),
            Some(&CellContent::Text(
                "Nutze ChatGPT, um Blogposts schnell zu erstellen.".to_string()
            ))
        );
        assert_eq!(
            matrix.cell("Daten analysieren", "ChatGPT"),
            Some(&CellContent::Empty("Keine Szenarien".to_string()))
        );
    }

    #[test]
    fn tool_rows_transpose_goal_rows() {
        let document = default_document();
        let selection = FilterSelection::unrestricted();
        let by_goal = build_matrix(
            &document,
            &selection,
            &MatrixConfig::default().with_axis(MatrixAxis::Goals(GoalAxisOrientation::GoalRows)),
        );
        let by_tool = build_matrix(
            &document,
            &selection,
            &MatrixConfig::default().with_axis(MatrixAxis::Goals(GoalAxisOrientation::ToolRows)),
        );

        assert_eq!(by_goal.row_labels, by_tool.column_labels);
        assert_eq!(by_goal.column_labels, by_tool.row_labels);
        assert_eq!(
            by_goal.cell("Bilder bearbeiten", "DALL-E"),
            by_tool.cell("DALL-E", "Bilder bearbeiten")
        );
    }

    #[test]
    fn cell_serializes_with_kind_tag() {
        let value = serde_json::to_value(CellContent::Empty("-".to_string())).unwrap();
        assert_eq!(value["kind"], "empty");
        assert_eq!(value["value"], "-");
    }
}
