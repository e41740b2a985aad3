#![cfg(target_arch = "wasm32")]
use std::rc::Rc;
use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;
use web_sys as web;

pub mod constants;
mod dom;
pub mod effects;
mod events;
pub mod gaze;
pub mod hover;

use effects::{EffectParams, Effects};

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("watching-eyes starting");

    spawn_local(async move {
        if let Err(e) = init(EffectParams::default()).await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init(params: EffectParams) -> anyhow::Result<()> {
    let window = web::window().ok_or_else(|| anyhow::anyhow!("no window"))?;
    let document = window
        .document()
        .ok_or_else(|| anyhow::anyhow!("no document"))?;

    dom::when_ready(&document).await?;

    let pupils = dom::discover_pupils(&document, &params.pupil_selector)?;
    let characters = dom::discover_characters(&document, &params.character_selector)?;
    let effects = Rc::new(Effects::new(pupils, characters, &params));
    log::info!(
        "[setup] tracking {} pupils, {} characters",
        effects.tracker.len(),
        effects.hover.len()
    );

    events::wire_input_handlers(&document, effects);
    Ok(())
}
