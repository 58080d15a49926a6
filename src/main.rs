//! Pokémon Explorer Frontend Entry Point

mod app;
mod catalog;
mod components;
mod config;
mod context;
mod display;
mod error;
mod filter;
mod models;
mod store;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Lines kept in the in-memory log ring
const LOG_HISTORY: usize = 500;

fn main() {
    // Report the panic, then replay recent log lines for context
    std::panic::set_hook(Box::new(|info| {
        console_error_panic_hook::hook(info);
        for line in rolling_logger::recent() {
            web_sys::console::error_1(&line.into());
        }
    }));

    let level = if cfg!(debug_assertions) { LevelFilter::Debug } else { LevelFilter::Info };
    if let Err(e) = rolling_logger::init(LOG_HISTORY, level) {
        web_sys::console::warn_1(&format!("logger already installed: {}", e).into());
    }

    mount_to_body(App);
}
