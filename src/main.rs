//! Split Bill Frontend Entry Point

mod app;
mod components;
mod config;
mod context;
mod store;
mod summary;

use app::App;
use leptos::prelude::*;
use log::LevelFilter;

/// Log lines kept in memory for the session
const LOG_CAPACITY: usize = 500;

fn main() {
    console_error_panic_hook::set_once();
    if let Err(e) = rolling_logger::init_logger("SplitBill", LOG_CAPACITY, LevelFilter::Debug) {
        web_sys::console::warn_1(&format!("logger already set: {}", e).into());
    }
    log::info!("[APP] Starting");
    mount_to_body(App);
}
