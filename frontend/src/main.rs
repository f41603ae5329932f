mod aggregate;
mod api;
mod app;
mod components;
mod config;
mod edit;
mod error;
mod filter;
mod format;
mod models;
mod notify;
mod pages;
mod route;
mod scope;
mod store;

fn main() {
    wasm_logger::init(wasm_logger::Config::new(config::log_level()));
    if config::google_client_id().is_none() {
        log::warn!("GOOGLE_CLIENT_ID not set at build time; Google sign-in is disabled");
    }
    log::info!("MoneyMind frontend talking to {}", config::api_base_url());
    yew::Renderer::<app::App>::new().render();
}
