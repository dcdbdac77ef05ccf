use anyhow::anyhow;
use folio_core::{Bounds, Theme};
use wasm_bindgen::JsCast;
use web_sys as web;

use crate::constants::FOREGROUND_TOKEN;

#[inline]
pub fn window_document() -> Option<web::Document> {
    web::window().and_then(|w| w.document())
}

#[inline]
pub fn add_click_listener(
    document: &web::Document,
    element_id: &str,
    mut handler: impl FnMut() + 'static,
) {
    if let Some(el) = document.get_element_by_id(element_id) {
        let closure = wasm_bindgen::closure::Closure::wrap(Box::new(move || handler()) as Box<dyn FnMut()>);
        _ = el.add_event_listener_with_callback("click", closure.as_ref().unchecked_ref());
        closure.forget();
    }
}

/// Viewport size in CSS pixels (`innerWidth` x `innerHeight`).
pub fn viewport_bounds(window: &web::Window) -> Bounds {
    let w = window.inner_width().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    let h = window.inner_height().ok().and_then(|v| v.as_f64()).unwrap_or(0.0);
    Bounds::new(w, h)
}

pub fn size_canvas(canvas: &web::HtmlCanvasElement, bounds: Bounds) {
    canvas.set_width(bounds.width as u32);
    canvas.set_height(bounds.height as u32);
}

pub fn canvas_by_id(document: &web::Document, id: &str) -> anyhow::Result<web::HtmlCanvasElement> {
    document
        .get_element_by_id(id)
        .ok_or_else(|| anyhow!("missing #{}", id))?
        .dyn_into::<web::HtmlCanvasElement>()
        .map_err(|e| anyhow!(format!("#{} is not a canvas: {:?}", id, e)))
}

pub fn context_2d(canvas: &web::HtmlCanvasElement) -> anyhow::Result<web::CanvasRenderingContext2d> {
    canvas
        .get_context("2d")
        .map_err(|e| anyhow!("{:?}", e))?
        .ok_or_else(|| anyhow!("2d context unavailable"))?
        .dyn_into::<web::CanvasRenderingContext2d>()
        .map_err(|e| anyhow!("{:?}", e))
}

/// Computed value of the foreground custom property on `<html>`.
pub fn foreground_token(window: &web::Window, document: &web::Document) -> Option<String> {
    let root = document.document_element()?;
    let style = window.get_computed_style(&root).ok().flatten()?;
    style.get_property_value(FOREGROUND_TOKEN).ok()
}

pub fn current_theme(document: &web::Document) -> Theme {
    document
        .document_element()
        .map_or_else(Theme::default, |root| {
            Theme::from_classes(root.class_name().split_whitespace())
        })
}

pub fn set_theme(document: &web::Document, theme: Theme) {
    if let Some(root) = document.document_element() {
        let cl = root.class_list();
        _ = cl.remove_2(Theme::Light.class_name(), Theme::Dark.class_name());
        _ = cl.add_1(theme.class_name());
    }
}
