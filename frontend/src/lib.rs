pub mod api;
pub mod components;
pub mod config;
pub mod pages;
pub mod router;
pub mod state;
pub mod utils;

#[cfg(test)]
mod test_support;

#[wasm_bindgen::prelude::wasm_bindgen]
pub fn start() {
    console_error_panic_hook::set_once();
    #[cfg(target_arch = "wasm32")]
    {
        if let Err(err) = console_log::init_with_level(log::Level::Info) {
            web_sys::console::warn_1(&format!("logger already set: {}", err).into());
        }
    }
    log::info!("starting campus attendance frontend");

    // Base URL resolution runs in the background; requests await it.
    leptos::spawn_local(async {
        config::init().await;
        log::info!("runtime config resolved");
    });

    router::mount_app();
}
