mod app;
mod components;
mod export;
mod hooks;
mod models;
mod services;
mod session;
mod utils;
mod validate;
mod views;

use app::App;

fn main() {
    wasm_logger::init(wasm_logger::Config::default());
    console_error_panic_hook::set_once();

    log::info!("🚀 Starting attendance admin panel");
    log::info!("🌐 API base: {}", utils::API_URL);

    yew::Renderer::<App>::new().render();
}
