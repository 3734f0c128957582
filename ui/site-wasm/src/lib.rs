//! KeyStart restaurant site, WASM frontend.
//!
//! Fills the static page from `assets/data/config.json` and
//! `assets/data/menu.json`. All page logic lives in `ks-site-core`; this crate
//! binds it to the live DOM and `fetch`.

pub mod api;
pub mod dom;
pub mod events;
pub mod logging;
pub mod state;
pub mod surface;

use ks_site_core::PageLoader;
use ks_site_core::apply::apply_year;
use wasm_bindgen::prelude::*;

/// WASM entry point – called automatically when the module is instantiated.
#[wasm_bindgen(start)]
pub async fn start() -> Result<(), JsValue> {
    // Improve panic messages in the browser console
    console_error_panic_hook::set_once();
    logging::init(tracing::Level::INFO);

    init().await;
    Ok(())
}

/// Load sequence: year stamp, config, then menu.
async fn init() {
    let els = dom::Elements::bind();
    let mut surface = surface::DomSurface::new(els.clone());

    apply_year(&mut surface, js_sys::Date::new_0().get_full_year() as i32);

    // Listeners go on before any src changes
    events::bind_image_fallbacks(&els);

    let settings = state::settings();
    let loader = PageLoader::new(&api::FetchSource, &settings);

    // Image chains go into state before the menu fetch so their listeners
    // see the live fallback state.
    let phase = loader.config_phase(&mut surface).await;
    state::set_config(phase.config.clone(), phase.images);

    let menu = loader.menu_phase(&phase.config, &mut surface).await;
    state::set_menu(menu);

    events::bind_filters(&els);
}
