//! UI Components
//!
//! Leptos components for the todo page.

mod todo_item;
mod todo_list;
mod todo_form;

pub use todo_item::TodoItem;
pub use todo_list::TodoList;
pub use todo_form::TodoForm;
