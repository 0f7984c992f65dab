//! Frontend Models
//!
//! Todo records and the editing selection.

use serde::{Deserialize, Serialize};

/// A single task record
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: u32,
    pub text: String,
    #[serde(rename = "isFinished", default)]
    pub is_finished: bool,
}

impl Todo {
    /// Create an unfinished todo
    pub fn new(id: u32, text: impl Into<String>) -> Self {
        Self {
            id,
            text: text.into(),
            is_finished: false,
        }
    }

    /// Copy of this todo with the text replaced
    pub fn with_text(&self, text: impl Into<String>) -> Self {
        Self {
            text: text.into(),
            ..self.clone()
        }
    }
}

/// Items shown when the page opens
pub fn seed_todos() -> Vec<Todo> {
    vec![
        Todo::new(1, "Learn React"),
        Todo {
            id: 2,
            text: "Practice coding".to_string(),
            is_finished: true,
        },
    ]
}

/// What the add/edit form is currently bound to
///
/// `Editing` holds a snapshot taken when the edit began, not a live
/// reference into the collection.
#[derive(Debug, Clone, PartialEq, Eq, Default)]
pub enum EditingSelection {
    /// Form creates new items
    #[default]
    Idle,
    /// Form updates the item with this snapshot's id
    Editing(Todo),
}

impl EditingSelection {
    pub fn todo(&self) -> Option<&Todo> {
        match self {
            EditingSelection::Idle => None,
            EditingSelection::Editing(todo) => Some(todo),
        }
    }

    pub fn is_editing(&self) -> bool {
        matches!(self, EditingSelection::Editing(_))
    }

    /// Text the form buffer should hold for this selection
    pub fn buffer_text(&self) -> String {
        self.todo().map(|t| t.text.clone()).unwrap_or_default()
    }
}
