//! Catalog editor: admin mutations over an in-memory document.
//!
//! # Responsibility
//! - Validate and apply add/update/delete operations to a document.
//! - Delegate durability to a [`CatalogStore`].
//!
//! # Invariants
//! - Rejected input leaves the document untouched.
//! - `update_tool` only stages edits; `commit` persists them.
//! - A failed save is reported as `EditorError::Store` and the in-memory
//!   change is kept. Callers re-open the catalog to resync with the store.

use crate::model::catalog::CatalogDocument;
use crate::model::scenario::ScenarioKey;
use crate::model::tool::{Tool, ToolValidationError};
use crate::store::{CatalogStore, StoreError};
use log::{error, info};
use std::collections::BTreeMap;
use std::error::Error;
use std::fmt::{Display, Formatter};

/// Editor error for admin mutations.
#[derive(Debug)]
pub enum EditorError {
    Validation(ToolValidationError),
    /// A required text field was blank.
    EmptyField(&'static str),
    ToolNotFound(String),
    /// Persistence failed after the in-memory change was applied.
    Store(StoreError),
}

impl Display for EditorError {
    fn fmt(&self, f: &mut Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Validation(err) => write!(f, "{err}"),
            Self::EmptyField(field) => write!(f, "{field} cannot be empty"),
            Self::ToolNotFound(name) => write!(f, "tool not found: `{name}`"),
            Self::Store(err) => write!(f, "{err}"),
        }
    }
}

impl Error for EditorError {
    fn source(&self) -> Option<&(dyn Error + 'static)> {
        match self {
            Self::Validation(err) => Some(err),
            Self::Store(err) => Some(err),
            _ => None,
        }
    }
}

impl From<ToolValidationError> for EditorError {
    fn from(value: ToolValidationError) -> Self {
        Self::Validation(value)
    }
}

impl From<StoreError> for EditorError {
    fn from(value: StoreError) -> Self {
        Self::Store(value)
    }
}

/// Field changes for [`CatalogEditor::update_tool`]. `None` keeps a field.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ToolUpdate {
    pub link: Option<String>,
    pub tooltip: Option<String>,
    pub filter_values: Option<BTreeMap<String, Vec<String>>>,
    pub goals: Option<Vec<String>>,
}

impl ToolUpdate {
    pub fn is_empty(&self) -> bool {
        self.link.is_none()
            && self.tooltip.is_none()
            && self.filter_values.is_none()
            && self.goals.is_none()
    }
}

/// Applies admin mutations and persists them through `S`.
pub struct CatalogEditor<S: CatalogStore> {
    store: S,
}

impl<S: CatalogStore> CatalogEditor<S> {
    pub fn new(store: S) -> Self {
        Self { store }
    }

    pub fn store(&self) -> &S {
        &self.store
    }

    /// Appends `tool` and persists.
    ///
    /// # Errors
    /// - `Validation` for a blank name; the document is unchanged.
    /// - `Store` when the save fails; the tool stays appended in memory.
    pub fn add_tool(&self, document: &mut CatalogDocument, tool: Tool) -> Result<(), EditorError> {
        tool.validate()?;
        document.tools.push(tool);
        self.persist(document, "add_tool")
    }

    /// Stages field changes on the first tool named `name`.
    ///
    /// Nothing is written until [`CatalogEditor::commit`]. An empty update
    /// only checks that the tool exists.
    pub fn update_tool(
        &self,
        document: &mut CatalogDocument,
        name: &str,
        update: ToolUpdate,
    ) -> Result<(), EditorError> {
        let tool = document
            .find_tool_mut(name)
            .ok_or_else(|| EditorError::ToolNotFound(name.to_string()))?;
        if update.is_empty() {
            return Ok(());
        }

        if let Some(link) = update.link {
            tool.link = link;
        }
        if let Some(tooltip) = update.tooltip {
            tool.tooltip = tooltip;
        }
        if let Some(filter_values) = update.filter_values {
            tool.filter_values = filter_values;
        }
        if let Some(goals) = update.goals {
            tool.goals = goals;
        }
        info!("event=catalog_edit module=service status=staged op=update_tool");
        Ok(())
    }

    /// Persists staged edits.
    pub fn commit(&self, document: &CatalogDocument) -> Result<(), EditorError> {
        self.persist(document, "commit")
    }

    /// Removes the first tool named `name` and persists.
    ///
    /// Returns the removed tool.
    pub fn delete_tool(
        &self,
        document: &mut CatalogDocument,
        name: &str,
    ) -> Result<Tool, EditorError> {
        let position = document
            .tool_position(name)
            .ok_or_else(|| EditorError::ToolNotFound(name.to_string()))?;
        let removed = document.tools.remove(position);
        self.persist(document, "delete_tool")?;
        Ok(removed)
    }

    /// Appends `value` to `category`, creating the category when missing.
    ///
    /// Returns `false` without persisting when the value already exists.
    pub fn add_filter_value(
        &self,
        document: &mut CatalogDocument,
        category: &str,
        value: &str,
    ) -> Result<bool, EditorError> {
        let category = non_blank(category, "filter category")?;
        let value = non_blank(value, "filter value")?;
        if !document.filters.push_value(category, value) {
            return Ok(false);
        }
        self.persist(document, "add_filter_value")?;
        Ok(true)
    }

    /// Appends a goal column.
    ///
    /// Returns `false` without persisting when the goal already exists.
    pub fn add_goal(&self, document: &mut CatalogDocument, goal: &str) -> Result<bool, EditorError> {
        let goal = non_blank(goal, "goal")?;
        if document.has_goal(goal) {
            return Ok(false);
        }
        document.goals.push(goal.to_string());
        self.persist(document, "add_goal")?;
        Ok(true)
    }

    /// Inserts or replaces the scenario text for `key` and persists.
    ///
    /// Returns `true` when a new scenario was created.
    pub fn set_scenario(
        &self,
        document: &mut CatalogDocument,
        key: &ScenarioKey,
        text: &str,
    ) -> Result<bool, EditorError> {
        non_blank(&key.goal, "scenario goal")?;
        non_blank(&key.tool, "scenario tool")?;
        let created = document.upsert_scenario(key, text);
        self.persist(document, "set_scenario")?;
        Ok(created)
    }

    fn persist(&self, document: &CatalogDocument, op: &'static str) -> Result<(), EditorError> {
        match self.store.save(document) {
            Ok(()) => {
                info!(
                    "event=catalog_edit module=service status=ok op={} backend={} tools={}",
                    op,
                    self.store.backend(),
                    document.tools.len()
                );
                Ok(())
            }
            Err(err) => {
                error!(
                    "event=catalog_edit module=service status=error op={} backend={} error_code=save_failed error={}",
                    op,
                    self.store.backend(),
                    err
                );
                Err(err.into())
            }
        }
    }
}

fn non_blank<'a>(value: &'a str, field: &'static str) -> Result<&'a str, EditorError> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        return Err(EditorError::EmptyField(field));
    }
    Ok(trimmed)
}
