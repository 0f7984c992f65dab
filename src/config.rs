//! App Configuration
//!
//! Defaults reproduce the stock page. A page may override any field with an
//! inline JSON block: `<script id="todo-config" type="application/json">`.

use std::collections::HashSet;
use std::str::FromStr;

use log::LevelFilter;
use serde::Deserialize;

use crate::error::{TodoError, TodoResult};
use crate::models::{seed_todos, Todo};

/// Element id of the optional inline config block
pub const CONFIG_ELEMENT_ID: &str = "todo-config";

/// How fresh todo ids are assigned
#[derive(Debug, Clone, Copy, PartialEq, Eq, Deserialize, Default)]
#[serde(rename_all = "snake_case")]
pub enum IdPolicy {
    /// Counter that only moves forward; ids are never reused
    #[default]
    Monotonic,
    /// Collection length + 1. Reuses ids after a delete.
    LengthPlusOne,
}

#[derive(Debug, Clone, PartialEq, Deserialize)]
#[serde(default)]
pub struct AppConfig {
    pub title: String,
    pub placeholder: String,
    pub empty_message: String,
    pub log_level: String,
    pub id_policy: IdPolicy,
    pub seed: Vec<Todo>,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            title: "✅ Todo App".to_string(),
            placeholder: "Enter todo...".to_string(),
            empty_message: "No todos yet!".to_string(),
            log_level: "info".to_string(),
            id_policy: IdPolicy::default(),
            seed: seed_todos(),
        }
    }
}

impl AppConfig {
    pub fn from_json(raw: &str) -> TodoResult<Self> {
        let config: Self = serde_json::from_str(raw).map_err(|e| TodoError::InvalidConfig(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    /// Seed ids must be unique and leave room for a fresh id
    pub fn validate(&self) -> TodoResult<()> {
        let mut seen = HashSet::new();
        for todo in &self.seed {
            if todo.id == u32::MAX {
                return Err(TodoError::InvalidConfig(format!("seed id {} is out of range", todo.id)));
            }
            if !seen.insert(todo.id) {
                return Err(TodoError::InvalidConfig(format!("duplicate seed id {}", todo.id)));
            }
        }
        Ok(())
    }

    /// Unknown level names fall back to `Info`
    pub fn level_filter(&self) -> LevelFilter {
        LevelFilter::from_str(&self.log_level).unwrap_or(LevelFilter::Info)
    }
}

/// Read the inline config block from the current document.
///
/// Returns defaults when there is no document, no block, or the block is
/// empty. Only malformed JSON is an error.
pub fn load_from_page() -> TodoResult<AppConfig> {
    let raw = web_sys::window()
        .and_then(|w| w.document())
        .and_then(|d| d.get_element_by_id(CONFIG_ELEMENT_ID))
        .and_then(|el| el.text_content());

    match raw {
        Some(raw) if !raw.trim().is_empty() => AppConfig::from_json(&raw),
        _ => Ok(AppConfig::default()),
    }
}
