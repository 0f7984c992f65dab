//! Todo Frontend Entry Point

mod models;
mod error;
mod config;
mod logger;
mod store;
mod context;
mod components;
mod app;

use app::App;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = config::load_from_page();
    let config = loaded.clone().unwrap_or_default();
    logger::init(config.level_filter());
    if let Err(e) = loaded {
        log::warn!("[APP] {}, using defaults", e);
    }

    mount_to_body(move || view! { <App config=config.clone() /> });
}
