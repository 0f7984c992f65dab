//! Todo Form Component
//!
//! One form for both adding and editing. The input buffer mirrors the
//! editing selection.

use leptos::prelude::*;

use crate::context::TodoContext;
use crate::models::EditingSelection;

fn submit_label(selection: &EditingSelection) -> &'static str {
    if selection.is_editing() { "Update" } else { "Add" }
}

/// Input buffer that mirrors the editing selection.
///
/// The buffer is reset whenever the selection changes and left alone
/// otherwise, so writes to other store fields don't clobber typed text.
fn selection_buffer(ctx: TodoContext) -> (Memo<EditingSelection>, ReadSignal<String>, WriteSignal<String>) {
    let (text, set_text) = signal(String::new());
    let selection = Memo::new(move |_| ctx.editing());

    Effect::new(move |_| {
        set_text.set(selection.get().buffer_text());
    });

    (selection, text, set_text)
}

/// Add/edit form
#[component]
pub fn TodoForm(
    ctx: TodoContext,
    #[prop(into)] placeholder: String,
) -> impl IntoView {
    let (selection, text, set_text) = selection_buffer(ctx);

    let on_submit = move |ev: web_sys::SubmitEvent| {
        ev.prevent_default();
        match ctx.submit(&text.get_untracked()) {
            Ok(outcome) => {
                log::debug!("[FORM] Submitted: {:?}", outcome);
                set_text.set(String::new());
            }
            Err(e) => log::debug!("[FORM] Submit ignored: {}", e),
        }
    };

    view! {
        <form class="todo-form" on:submit=on_submit>
            <input
                type="text"
                placeholder=placeholder
                prop:value=move || text.get()
                on:input=move |ev| set_text.set(event_target_value(&ev))
            />
            <button type="submit" class="submit-btn">
                {move || submit_label(&selection.get())}
            </button>
            <Show when=move || selection.get().is_editing()>
                <button type="button" class="cancel-btn" on:click=move |_| ctx.cancel_edit()>
                    "Cancel"
                </button>
            </Show>
        </form>
    }
}
