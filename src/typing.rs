use crate::constants::{DELETING_ATTR, PHRASES_ATTR, TYPING_MAX_DT_MS, TYPING_TARGET_ID};
use crate::flag::FlagMirror;
use crate::frame;
use anyhow::anyhow;
use folio_core::{TypingEffect, TypingTimings};
use instant::Instant;
use std::time::Duration;
use web_sys as web;

/// Drive the typewriter banner inside `#hero-role` from its `data-phrases`.
pub fn mount_typewriter(document: &web::Document) -> anyhow::Result<()> {
    let el = document
        .get_element_by_id(TYPING_TARGET_ID)
        .ok_or_else(|| anyhow!("missing #{}", TYPING_TARGET_ID))?;
    let phrases = el
        .get_attribute(PHRASES_ATTR)
        .map(|raw| TypingEffect::parse_phrases(&raw))
        .unwrap_or_default();
    if phrases.is_empty() {
        return Err(anyhow!("#{} has no {}", TYPING_TARGET_ID, PHRASES_ATTR));
    }
    log::info!("[typing] {} phrases", phrases.len());

    let mut effect = TypingEffect::new(phrases, TypingTimings::default());
    el.set_text_content(Some(effect.text()));
    let mut deleting = FlagMirror::default();
    if let Some(flag) = deleting.update(effect.is_deleting()) {
        _ = el.set_attribute(DELETING_ATTR, flag);
    }
    let max_dt = Duration::from_millis(TYPING_MAX_DT_MS);
    let mut last = Instant::now();
    frame::run_forever(move || {
        let now = Instant::now();
        let dt = (now - last).min(max_dt);
        last = now;
        if effect.advance(dt) {
            el.set_text_content(Some(effect.text()));
        }
        // the pause can end without the text changing
        if let Some(flag) = deleting.update(effect.is_deleting()) {
            _ = el.set_attribute(DELETING_ATTR, flag);
        }
    });
    Ok(())
}

