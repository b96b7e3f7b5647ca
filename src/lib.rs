// ============================================================================
// FOODIE - Food ordering demo (Yew, client-side only)
// ============================================================================
// Layout:
// - models: catalog, cart, checkout form and order-status types
// - stores: shared reducible state (cart, toasts)
// - viewmodels: listing derivation and the status simulator
// - services: order placement, profile saves, tickers
// - hooks / components / views: the Yew UI
// ============================================================================

pub mod components;
pub mod config;
pub mod error;
pub mod hooks;
pub mod models;
pub mod routes;
pub mod services;
pub mod stores;
pub mod utils;
pub mod viewmodels;
pub mod views;

use crate::components::App;
use crate::config::CONFIG;

/// Installs the panic hook and console logger, then mounts the app on `<body>`
pub fn run() {
    console_error_panic_hook::set_once();

    if CONFIG.is_logging_enabled() {
        wasm_logger::init(wasm_logger::Config::new(CONFIG.log_level()));
    }
    log::info!("🚀 Foodie starting ({})", CONFIG.environment);

    yew::Renderer::<App>::new().render();
}
