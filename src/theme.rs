use crate::background::ParticleBackground;
use crate::constants::THEME_TOGGLE_ID;
use crate::dom;
use web_sys as web;

/// Flip the `light`/`dark` class on `<html>` when the toggle is clicked and
/// push the new ink to the background. The choice is not persisted.
pub fn wire_theme_toggle(document: &web::Document, background: ParticleBackground) {
    let doc = document.clone();
    dom::add_click_listener(document, THEME_TOGGLE_ID, move || {
        let next = dom::current_theme(&doc).toggled();
        dom::set_theme(&doc, next);
        log::info!("[theme] {}", next.class_name());
        background.refresh_theme();
    });
}
