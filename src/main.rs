//! Recipe Frontend Entry Point

mod api;
mod app;
mod components;
mod config;
mod context;
mod favorite_toggle;
mod models;
mod pages;
mod store;
mod validation;

use app::App;
use config::AppConfig;
use leptos::prelude::*;
use log::LevelFilter;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(err) = console_logger::init(LevelFilter::Debug) {
        web_sys::console::error_1(&format!("Logger init failed: {}", err).into());
    }
    log::info!("[APP] Backend at {}", AppConfig::get().api_base_url);
    mount_to_body(App);
}
