//! Todo List Component
//!
//! Renders the collection and owns the row callbacks.

use leptos::prelude::*;

use crate::components::TodoItem;
use crate::context::TodoContext;
use crate::models::Todo;

/// Key over every mutable field so a row rebuilds only when its todo changes
fn row_key(todo: &Todo) -> (u32, String, bool) {
    (todo.id, todo.text.clone(), todo.is_finished)
}

fn count_label(total: usize, finished: usize) -> String {
    let noun = if total == 1 { "item" } else { "items" };
    format!("{} {}, {} done", total, noun, finished)
}

#[component]
pub fn TodoList(
    ctx: TodoContext,
    #[prop(into)] empty_message: String,
) -> impl IntoView {
    // Created once, so rows receive the same handles on every render
    let on_toggle = Callback::new(move |id: u32| ctx.toggle(id));
    let on_delete = Callback::new(move |id: u32| ctx.delete(id));
    let on_edit = Callback::new(move |todo: Todo| ctx.begin_edit(todo));

    view! {
        <div class="todo-list">
            <Show
                when=move || !ctx.is_empty()
                fallback=move || view! { <p class="empty-state">{empty_message.clone()}</p> }
            >
                <For
                    each=move || ctx.todos()
                    key=row_key
                    children=move |todo| {
                        view! {
                            <TodoItem
                                todo=todo
                                on_toggle=on_toggle
                                on_edit=on_edit
                                on_delete=on_delete
                            />
                        }
                    }
                />
            </Show>
            <p class="item-count">
                {move || {
                    let counts = ctx.counts();
                    count_label(counts.total, counts.finished)
                }}
            </p>
        </div>
    }
}
