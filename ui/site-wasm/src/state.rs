//! Load session state.
//!
//! Uses `RefCell`-wrapped `thread_local!` storage (WASM is single-threaded).
//! Written once per phase during page load and read by event handlers.

use ks_site_core::apply::ImageChains;
use ks_site_core::{LoaderSettings, MenuSession};
use ks_site_types::SiteConfig;
use std::cell::RefCell;

pub struct SiteState {
    pub settings: LoaderSettings,
    pub config: SiteConfig,
    pub images: ImageChains,
    /// `None` until the menu phase finishes.
    pub menu: Option<MenuSession>,
}

impl Default for SiteState {
    fn default() -> Self {
        Self {
            settings: LoaderSettings::default(),
            config: SiteConfig::default(),
            images: ImageChains::idle(),
            menu: None,
        }
    }
}

// ── Thread-local singleton ──

thread_local! {
    static STATE: RefCell<SiteState> = RefCell::new(SiteState::default());
}

/// Run a closure with shared read access to the state.
pub fn with<F, R>(f: F) -> R
where
    F: FnOnce(&SiteState) -> R,
{
    STATE.with(|s| f(&s.borrow()))
}

/// Run a closure with mutable access to the state.
pub fn with_mut<F, R>(f: F) -> R
where
    F: FnOnce(&mut SiteState) -> R,
{
    STATE.with(|s| f(&mut s.borrow_mut()))
}

// ── Convenience accessors ──

pub fn settings() -> LoaderSettings {
    with(|s| s.settings.clone())
}

pub fn set_config(config: SiteConfig, images: ImageChains) {
    with_mut(|s| {
        s.config = config;
        s.images = images;
    });
}

pub fn set_menu(menu: MenuSession) {
    with_mut(|s| s.menu = Some(menu));
}
