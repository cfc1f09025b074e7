#![cfg(target_arch = "wasm32")]
use wasm_bindgen::prelude::*;
use web_sys as web;

mod audio;
mod constants;
mod dom;
mod element;
mod events;
mod style;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("landing-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;
    let root = document
        .document_element()
        .ok_or_else(|| anyhow::anyhow!("no document element"))?;

    let tilts = events::wire_tilt_regions(&root);
    let parallaxes = events::wire_parallax_regions(&root);
    log::info!("[fx] tilt regions={} parallax regions={}", tilts, parallaxes);

    // Sections are optional on a given page; a missing one only loses its effect.
    if let Err(e) = events::wire_nav_scroll(&window, &document) {
        log::warn!("[nav] not wired: {:?}", e);
    }
    if let Err(e) = events::wire_audio_toggle(&document) {
        log::warn!("[audio] not wired: {:?}", e);
    }
    Ok(())
}
