#![cfg(target_arch = "wasm32")]
use anyhow::anyhow;
use wasm_bindgen::prelude::*;

mod background;
mod canvas;
mod constants;
mod dom;
mod flag;
mod frame;
mod palette;
mod registry;
mod theme;
mod typing;

pub use background::ParticleBackground;

/// Handle to the hero background started at load, mounting it if the page
/// added the canvas later.
#[wasm_bindgen]
pub fn hero_background() -> ParticleBackground {
    ParticleBackground::mount(constants::HERO_CANVAS_ID)
}

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    if let Err(e) = init() {
        log::error!("init error: {:?}", e);
    }
    Ok(())
}

fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow!("no document"))?;

    // Decorative; an inert handle when the page has no hero canvas.
    let hero = hero_background();
    theme::wire_theme_toggle(&document, hero);

    if let Err(e) = typing::mount_typewriter(&document) {
        log::debug!("[typing] not mounted: {:?}", e);
    }
    Ok(())
}
