//! Event binding.
//!
//! Image `error` listeners drive the logo/hero fallback chains; a single
//! delegated click listener on the filter bar drives category filtering.

use ks_site_core::ImageRole;
use wasm_bindgen::JsCast;
use wasm_bindgen::prelude::*;
use web_sys::Element;

use crate::dom::Elements;
use crate::state;
use crate::surface::DomSurface;

/// Wire `error` on the logo and hero images. Must run before the config
/// phase points them at remote URLs, so no failure goes unseen.
pub fn bind_image_fallbacks(els: &Elements) {
    for (role, img) in [
        (ImageRole::Logo, els.logo_img.as_ref()),
        (ImageRole::Hero, els.hero_img.as_ref()),
    ] {
        let Some(img) = img else {
            continue;
        };
        let els2 = els.clone();
        let cb = Closure::wrap(Box::new(move |_: web_sys::Event| {
            let mut surface = DomSurface::new(els2.clone());
            state::with_mut(|s| {
                s.images.get_mut(role).on_load_error(&mut surface);
            });
        }) as Box<dyn FnMut(_)>);
        let _ = img.add_event_listener_with_callback("error", cb.as_ref().unchecked_ref());
        cb.forget();
    }
}

/// Wire clicks on the filter chips. Chips are re-rendered on every selection,
/// so the listener sits on the container.
pub fn bind_filters(els: &Elements) {
    let Some(filters) = els.filters.as_ref() else {
        return;
    };
    let els2 = els.clone();
    let cb = Closure::wrap(Box::new(move |e: web_sys::MouseEvent| {
        let Some(index) = clicked_chip_index(&e) else {
            return;
        };
        let mut surface = DomSurface::new(els2.clone());
        state::with_mut(|s| {
            if let Some(menu) = s.menu.as_mut() {
                menu.on_filter_click(index, &mut surface, &s.settings);
            }
        });
    }) as Box<dyn FnMut(_)>);
    let _ = filters.add_event_listener_with_callback("click", cb.as_ref().unchecked_ref());
    cb.forget();
}

fn clicked_chip_index(e: &web_sys::MouseEvent) -> Option<usize> {
    let target: Element = e.target()?.dyn_into().ok()?;
    let chip = target.closest("button.chip").ok()??;
    chip.get_attribute("data-filter-index")?.parse().ok()
}
