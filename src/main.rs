//! Task List Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod context;
mod controller;
mod error;
mod logging;
mod models;
mod notify;
mod render;
mod store;
mod task_list;

use app::App;
use config::ClientConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let loaded = ClientConfig::load();
    let config = loaded.clone().unwrap_or_default();
    logging::init(&config);
    if let Err(err) = loaded {
        tracing::warn!(error = %err, "ignoring malformed client config");
    }

    mount_to_body(move || view! { <App config=config /> });
}
