//! Todo Item Component
//!
//! One row of the todo list.

use leptos::prelude::*;

use crate::models::Todo;

fn text_class(is_finished: bool) -> &'static str {
    if is_finished { "todo-text finished" } else { "todo-text" }
}

/// A single todo row: checkbox, text, edit and delete buttons
///
/// Rows are rebuilt by the parent's keyed `<For>` only when this todo changes.
#[component]
pub fn TodoItem(
    todo: Todo,
    #[prop(into)] on_toggle: Callback<u32>,
    #[prop(into)] on_edit: Callback<Todo>,
    #[prop(into)] on_delete: Callback<u32>,
) -> impl IntoView {
    log::debug!("[ITEM] Rendering #{}: {}", todo.id, todo.text);

    let id = todo.id;
    let is_finished = todo.is_finished;
    let text = todo.text.clone();

    view! {
        <div class="todo-row">
            <div class="todo-main">
                <input
                    type="checkbox"
                    prop:checked=is_finished
                    on:change=move |_| on_toggle.run(id)
                />
                <span class=text_class(is_finished)>{text}</span>
            </div>
            <div class="todo-actions">
                <button class="edit-btn" on:click=move |_| on_edit.run(todo.clone())>"Edit"</button>
                <button class="delete-btn" on:click=move |_| on_delete.run(id)>"Delete"</button>
            </div>
        </div>
    }
}
