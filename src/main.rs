//! Specialists Frontend Entry Point

mod app;
mod commands;
mod components;
mod config;
mod controller;
mod error;
mod form;
mod logger;
mod models;
mod store;
mod toast;

#[cfg(test)]
mod test_utils;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    logger::init(config.log_level);
    log::info!("[app] Starting, API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config=config /> });
}
