//! Application State Store
//!
//! Uses Leptos reactive_stores so the list and the form subscribe to
//! separate fields.

use reactive_stores::Store;

use crate::config::{AppConfig, IdPolicy};
use crate::error::{TodoError, TodoResult};
use crate::models::{EditingSelection, Todo};

/// Canonical page state with field-level reactivity
#[derive(Clone, Debug, Default, Store)]
pub struct TodoState {
    /// Todos in display order
    pub todos: Vec<Todo>,
    /// Item currently loaded into the form, if any
    pub editing: EditingSelection,
    /// Next id handed out under `IdPolicy::Monotonic`
    pub next_id: u32,
}

impl TodoState {
    /// Start state built from the configured seed items.
    ///
    /// Fails when the largest seed id leaves no room for a fresh id.
    pub fn seeded(config: &AppConfig) -> TodoResult<Self> {
        let todos = config.seed.clone();
        let max_id = todos.iter().map(|t| t.id).max().unwrap_or(0);
        let next_id = max_id
            .checked_add(1)
            .ok_or_else(|| TodoError::InvalidConfig(format!("seed id {} is out of range", max_id)))?;
        Ok(Self {
            todos,
            editing: EditingSelection::Idle,
            next_id,
        })
    }

    /// No todos; ids start at 1
    pub fn empty() -> Self {
        Self {
            todos: Vec::new(),
            editing: EditingSelection::Idle,
            next_id: 1,
        }
    }
}

/// Type alias for the store
pub type TodoStore = Store<TodoState>;

/// Total and finished item counts
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct TodoCounts {
    pub total: usize,
    pub finished: usize,
}

// ========================
// Collection Helpers
// ========================

/// Accept the form buffer unless it is empty after trimming.
/// The returned text is untrimmed.
pub fn validate_text(buffer: &str) -> TodoResult<&str> {
    if buffer.trim().is_empty() {
        return Err(TodoError::EmptyText);
    }
    Ok(buffer)
}

/// Pick the id for a new todo
pub fn allocate_id(policy: IdPolicy, todos: &[Todo], next_id: &mut u32) -> TodoResult<u32> {
    match policy {
        IdPolicy::Monotonic => {
            let id = *next_id;
            *next_id = id.checked_add(1).ok_or(TodoError::IdsExhausted)?;
            Ok(id)
        }
        IdPolicy::LengthPlusOne => u32::try_from(todos.len())
            .ok()
            .and_then(|len| len.checked_add(1))
            .ok_or(TodoError::IdsExhausted),
    }
}

/// Replace the text of every todo with `id`. Returns how many matched.
pub fn rename_todo(todos: &mut [Todo], id: u32, text: &str) -> usize {
    let mut matched = 0;
    for todo in todos.iter_mut().filter(|t| t.id == id) {
        *todo = todo.with_text(text);
        matched += 1;
    }
    matched
}

/// Flip completion of every todo with `id`. Returns how many matched.
pub fn toggle_todo(todos: &mut [Todo], id: u32) -> usize {
    let mut matched = 0;
    for todo in todos.iter_mut().filter(|t| t.id == id) {
        todo.is_finished = !todo.is_finished;
        matched += 1;
    }
    matched
}

/// Remove every todo with `id`, keeping the order of the rest.
/// Returns how many were removed.
pub fn remove_todo(todos: &mut Vec<Todo>, id: u32) -> usize {
    let before = todos.len();
    todos.retain(|t| t.id != id);
    before - todos.len()
}

pub fn count_todos(todos: &[Todo]) -> TodoCounts {
    TodoCounts {
        total: todos.len(),
        finished: todos.iter().filter(|t| t.is_finished).count(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::seed_todos;

    fn ids(todos: &[Todo]) -> Vec<u32> {
        todos.iter().map(|t| t.id).collect()
    }

    /// Seed state after delete(1) then add("Test") under length + 1 ids
    fn colliding_todos() -> Vec<Todo> {
        vec![
            Todo { id: 2, text: "Practice coding".to_string(), is_finished: true },
            Todo::new(2, "Test"),
        ]
    }

    #[test]
    fn test_seeded_state() {
        let state = TodoState::seeded(&AppConfig::default()).unwrap();
        assert_eq!(state.todos, seed_todos());
        assert_eq!(state.editing, EditingSelection::Idle);
        assert_eq!(state.next_id, 3);
    }

    #[test]
    fn test_seeded_with_empty_seed() {
        let config = AppConfig { seed: Vec::new(), ..Default::default() };
        let state = TodoState::seeded(&config).unwrap();
        assert!(state.todos.is_empty());
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn test_seeded_rejects_max_id() {
        let config = AppConfig { seed: vec![Todo::new(u32::MAX, "x")], ..Default::default() };
        let err = TodoState::seeded(&config).unwrap_err();
        assert!(matches!(err, TodoError::InvalidConfig(_)));

        let config = AppConfig { seed: vec![Todo::new(u32::MAX - 1, "x")], ..Default::default() };
        assert_eq!(TodoState::seeded(&config).unwrap().next_id, u32::MAX);
    }

    #[test]
    fn test_empty_state() {
        let state = TodoState::empty();
        assert!(state.todos.is_empty());
        assert_eq!(state.next_id, 1);
    }

    #[test]
    fn test_validate_text() {
        assert_eq!(validate_text("  Buy milk "), Ok("  Buy milk "));
        assert_eq!(validate_text(""), Err(TodoError::EmptyText));
        assert_eq!(validate_text(" \t\n "), Err(TodoError::EmptyText));
    }

    #[test]
    fn test_allocate_monotonic_never_reuses() {
        let mut todos = seed_todos();
        let mut next_id = 3;
        remove_todo(&mut todos, 1);
        assert_eq!(allocate_id(IdPolicy::Monotonic, &todos, &mut next_id), Ok(3));
        assert_eq!(allocate_id(IdPolicy::Monotonic, &todos, &mut next_id), Ok(4));
        assert_eq!(next_id, 5);
    }

    #[test]
    fn test_allocate_monotonic_exhausted() {
        let mut next_id = u32::MAX;
        assert_eq!(allocate_id(IdPolicy::Monotonic, &[], &mut next_id), Err(TodoError::IdsExhausted));
        assert_eq!(next_id, u32::MAX);
    }

    #[test]
    fn test_allocate_length_plus_one_collides_after_delete() {
        let mut todos = seed_todos();
        let mut next_id = 3;
        remove_todo(&mut todos, 1);
        let id = allocate_id(IdPolicy::LengthPlusOne, &todos, &mut next_id).unwrap();
        assert_eq!(id, 2);
        assert!(todos.iter().any(|t| t.id == id));
        assert_eq!(next_id, 3);
    }

    #[test]
    fn test_rename_keeps_id_and_flag() {
        let mut todos = seed_todos();
        assert_eq!(rename_todo(&mut todos, 2, "Practice Rust"), 1);
        assert_eq!(todos[1], Todo { id: 2, text: "Practice Rust".to_string(), is_finished: true });
        assert_eq!(todos[0], seed_todos()[0]);
        assert_eq!(rename_todo(&mut todos, 99, "nope"), 0);
    }

    #[test]
    fn test_toggle_only_target() {
        let mut todos = seed_todos();
        assert_eq!(toggle_todo(&mut todos, 1), 1);
        assert!(todos[0].is_finished);
        assert!(todos[1].is_finished);
        assert_eq!(ids(&todos), vec![1, 2]);

        toggle_todo(&mut todos, 1);
        assert!(!todos[0].is_finished);
    }

    #[test]
    fn test_toggle_missing_is_noop() {
        let mut todos = seed_todos();
        assert_eq!(toggle_todo(&mut todos, 42), 0);
        assert_eq!(todos, seed_todos());
    }

    #[test]
    fn test_remove_preserves_order() {
        let mut todos = vec![Todo::new(1, "a"), Todo::new(2, "b"), Todo::new(3, "c")];
        assert_eq!(remove_todo(&mut todos, 2), 1);
        assert_eq!(ids(&todos), vec![1, 3]);
        assert_eq!(remove_todo(&mut todos, 2), 0);
        assert_eq!(ids(&todos), vec![1, 3]);
    }

    #[test]
    fn test_helpers_touch_every_duplicate() {
        let mut todos = colliding_todos();
        assert_eq!(toggle_todo(&mut todos, 2), 2);
        assert!(!todos[0].is_finished);
        assert!(todos[1].is_finished);

        assert_eq!(rename_todo(&mut todos, 2, "Same"), 2);
        assert!(todos.iter().all(|t| t.text == "Same"));

        assert_eq!(remove_todo(&mut todos, 2), 2);
        assert!(todos.is_empty());
    }

    #[test]
    fn test_count_todos() {
        assert_eq!(count_todos(&seed_todos()), TodoCounts { total: 2, finished: 1 });
        assert_eq!(count_todos(&[]), TodoCounts::default());
    }
}
