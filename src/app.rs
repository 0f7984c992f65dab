//! Todo App
//!
//! Page shell. Owns the store and hands the context to the form and list.

use leptos::prelude::*;
use reactive_stores::Store;

use crate::components::{TodoForm, TodoList};
use crate::config::AppConfig;
use crate::context::TodoContext;
use crate::store::TodoState;

#[component]
pub fn App(config: AppConfig) -> impl IntoView {
    let state = TodoState::seeded(&config).unwrap_or_else(|e| {
        log::error!("[APP] {}, starting empty", e);
        TodoState::empty()
    });
    let store = Store::new(state);
    let ctx = TodoContext::new(store, config.id_policy);

    log::info!("[APP] Started with {} todos, id policy {:?}", config.seed.len(), config.id_policy);

    view! {
        <div class="page">
            <div class="card">
                <h1>{config.title}</h1>
                <TodoForm ctx=ctx placeholder=config.placeholder />
                <TodoList ctx=ctx empty_message=config.empty_message />
            </div>
        </div>
    }
}
