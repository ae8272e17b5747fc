//! Far Away Frontend Entry Point

mod models;
mod item_list;
mod config;
mod context;
mod store;
mod dialog;
mod components;
mod app;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();

    let (config, config_error) = match AppConfig::load() {
        Ok(config) => (config, None),
        Err(err) => (AppConfig::default(), Some(err)),
    };

    let level = config.level_filter().unwrap_or(LevelFilter::Info);
    if let Err(err) = console_logger::init(level) {
        web_sys::console::warn_1(&format!("[APP] Logger already set: {}", err).into());
    }
    if let Some(err) = config_error {
        log::warn!("[APP] {}, using default config", err);
    }

    mount_to_body(move || view! { <App config=config /> });
}
