pub mod app;
pub mod domain;
pub mod shared;

use wasm_bindgen::prelude::wasm_bindgen;

/// Точка входа wasm: логирование в консоль браузера и монтирование виджета
#[wasm_bindgen(start)]
pub fn start() {
    _ = console_log::init_with_level(log::Level::Debug);
    console_error_panic_hook::set_once();

    log::debug!("Mounting PDF chat widget");
    leptos::mount::mount_to_body(app::App);
}
