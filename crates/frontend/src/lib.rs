pub mod app;
pub mod demo;
pub mod lovelace;
pub mod shared;

use leptos::prelude::*;
use wasm_bindgen::prelude::wasm_bindgen;

use app::App;
use shared::settings::load_settings;

#[wasm_bindgen]
pub fn hydrate() {
    let settings = load_settings();
    // initializes logging using the `log` crate
    _ = console_log::init_with_level(settings.log_level());
    console_error_panic_hook::set_once();

    leptos::mount::mount_to_body(move || view! { <App settings=settings.clone() /> });
}

#[wasm_bindgen(start)]
pub fn start() {
    hydrate();
}
