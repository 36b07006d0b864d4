#![allow(non_snake_case)]

mod app;
mod browser;
mod components;
mod config;
mod content;
pub mod context;
mod theme;

use dioxus::logger::tracing::Level;

fn main() {
    if let Err(e) = dioxus::logger::init(Level::INFO) {
        // Logging is best effort; the page works without it.
        gloo::console::warn!(format!("logger init failed: {e}"));
    }

    tracing::info!("Starting portfolio page");

    dioxus::launch(app::App);
}
