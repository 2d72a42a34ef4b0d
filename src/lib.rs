#![cfg(target_arch = "wasm32")]
//! Portfolio front-end: six WebGPU wireframe scenes plus the page's DOM
//! interactions (entrance transitions, navigation, contact stub, menu,
//! secondary effects, and the form-mirror widget).
//!
//! Construction is eager: `init` builds every scene and registers every
//! listener up front; afterwards the system is purely reactive. Missing
//! page elements degrade to silent skips, never errors.

use wasm_bindgen::prelude::*;
use wasm_bindgen_futures::spawn_local;

mod contact;
mod core;
mod dom;
mod effects;
mod entrance;
mod menu;
mod mirror;
mod nav;
mod render;
mod scenes;

#[wasm_bindgen(start)]
pub fn start() -> Result<(), JsValue> {
    console_error_panic_hook::set_once();
    console_log::init_with_level(log::Level::Info).ok();
    log::info!("folio-web starting");

    spawn_local(async move {
        if let Err(e) = init().await {
            log::error!("init error: {:?}", e);
        }
    });
    Ok(())
}

async fn init() -> anyhow::Result<()> {
    let document = dom::window_document().ok_or_else(|| anyhow::anyhow!("no window/document"))?;

    // Form-preview widget (independent of the animation layer).
    mirror::wire(&document);

    // Scenes first, then the listener wiring; all are independent and
    // could run in any order.
    let registry = scenes::init_scenes(&document).await;
    scenes::wire_resize(registry);

    entrance::wire(&document);
    nav::wire(&document);
    contact::wire(&document);
    menu::wire(&document);
    effects::wire(&document);

    log::info!("folio-web ready");
    Ok(())
}
