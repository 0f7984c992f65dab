//! Todo Context
//!
//! Explicit state-and-setters handle passed down from `App` as a prop.

use leptos::prelude::*;

use crate::config::IdPolicy;
use crate::error::TodoResult;
use crate::models::{EditingSelection, Todo};
use crate::store::{
    allocate_id, count_todos, remove_todo, rename_todo, toggle_todo, validate_text, TodoCounts,
    TodoStateStoreFields, TodoStore,
};

/// Result of an accepted form submission
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitOutcome {
    /// New todo appended with this id
    Added(u32),
    /// Text of this todo replaced
    Updated(u32),
    /// The todo being edited was deleted before submit; nothing changed
    Missing(u32),
}

/// Read access and mutations for the todo state
#[derive(Clone, Copy)]
pub struct TodoContext {
    store: TodoStore,
    id_policy: IdPolicy,
}

impl TodoContext {
    pub fn new(store: TodoStore, id_policy: IdPolicy) -> Self {
        Self { store, id_policy }
    }

    /// All todos in display order (tracked)
    pub fn todos(&self) -> Vec<Todo> {
        self.store.todos().get()
    }

    /// Current editing selection (tracked)
    pub fn editing(&self) -> EditingSelection {
        self.store.editing().get()
    }

    pub fn counts(&self) -> TodoCounts {
        count_todos(&self.store.todos().read())
    }

    /// True when there is nothing to list (tracked)
    pub fn is_empty(&self) -> bool {
        self.store.todos().read().is_empty()
    }

    /// Apply the form buffer: update the selected todo or append a new one.
    ///
    /// Empty or whitespace-only buffers are rejected with `EmptyText` and
    /// leave the state untouched.
    pub fn submit(&self, buffer: &str) -> TodoResult<SubmitOutcome> {
        let text = validate_text(buffer)?;

        match self.store.editing().get_untracked() {
            EditingSelection::Editing(target) => {
                let renamed = rename_todo(&mut self.store.todos().write(), target.id, text);
                self.store.editing().set(EditingSelection::Idle);
                if renamed > 0 {
                    log::info!("[TODO] Updated #{}", target.id);
                    Ok(SubmitOutcome::Updated(target.id))
                } else {
                    log::warn!("[TODO] #{} was removed while being edited", target.id);
                    Ok(SubmitOutcome::Missing(target.id))
                }
            }
            EditingSelection::Idle => {
                let mut next_id = self.store.next_id().get_untracked();
                let id = allocate_id(self.id_policy, &self.store.todos().read_untracked(), &mut next_id)?;
                self.store.next_id().set(next_id);
                self.store.todos().write().push(Todo::new(id, text));
                log::info!("[TODO] Added #{}", id);
                Ok(SubmitOutcome::Added(id))
            }
        }
    }

    /// Flip completion of every todo with `id`; unknown ids are ignored
    pub fn toggle(&self, id: u32) {
        if toggle_todo(&mut self.store.todos().write(), id) == 0 {
            log::debug!("[TODO] Toggle ignored, no #{}", id);
        }
    }

    /// Remove every todo with `id`; unknown ids are ignored. Clears the
    /// selection if it pointed at a removed todo.
    pub fn delete(&self, id: u32) {
        let removed = remove_todo(&mut self.store.todos().write(), id);
        if removed == 0 {
            log::debug!("[TODO] Delete ignored, no #{}", id);
            return;
        }
        log::info!("[TODO] Deleted #{}", id);

        let was_editing = self
            .store
            .editing()
            .with_untracked(|sel| sel.todo().is_some_and(|t| t.id == id));
        if was_editing {
            self.store.editing().set(EditingSelection::Idle);
        }
    }

    /// Load a snapshot of `todo` into the form
    pub fn begin_edit(&self, todo: Todo) {
        log::debug!("[TODO] Editing #{}", todo.id);
        self.store.editing().set(EditingSelection::Editing(todo));
    }

    pub fn cancel_edit(&self) {
        self.store.editing().set(EditingSelection::Idle);
    }
}
