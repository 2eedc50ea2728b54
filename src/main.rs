#![allow(warnings)]
//! Invoice Dashboard Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod dashboard;
mod format;
mod models;
mod navigation;
mod pages;
mod store;

use app::App;
use config::AppConfig;
use leptos::prelude::*;

fn main() {
    console_error_panic_hook::set_once();

    let config = AppConfig::from_build_env();
    if let Some(level) = config.console_level() {
        if let Err(e) = console_log::init_with_level(level) {
            web_sys::console::warn_1(&format!("[main] logger not installed: {}", e).into());
        }
    }
    log::info!("Starting invoice dashboard, API at {}", config.api_base_url);

    mount_to_body(move || view! { <App config /> });
}
