//! Two-level image fallback.
//!
//! States: `Primary` (configured remote URL) → `Secondary` (bundled asset) →
//! `Exhausted`. Each image load error advances exactly one level; there is no
//! retry. Reaching `Exhausted` on the logo hides the image and reveals the
//! text label next to it. The hero just stops.

use tracing::warn;

use crate::surface::{Slot, TargetSurface};

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum FallbackState {
    Primary,
    Secondary,
    Exhausted,
}

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum ImageRole {
    Logo,
    Hero,
}

impl ImageRole {
    pub fn image_slot(self) -> Slot {
        match self {
            ImageRole::Logo => Slot::LogoImage,
            ImageRole::Hero => Slot::HeroImage,
        }
    }

    /// Text shown once every image source failed.
    pub fn text_slot(self) -> Option<Slot> {
        match self {
            ImageRole::Logo => Some(Slot::LogoFallback),
            ImageRole::Hero => None,
        }
    }
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageFallback {
    role: ImageRole,
    state: FallbackState,
    local_src: String,
}

impl ImageFallback {
    /// Point the image at `remote` and arm the chain. Without a remote URL (or
    /// without the image element) the markup stays as authored and the chain
    /// starts exhausted.
    pub fn start<S: TargetSurface + ?Sized>(
        role: ImageRole,
        remote: Option<&str>,
        local_src: &str,
        surface: &mut S,
    ) -> Self {
        let slot = role.image_slot();
        let remote = remote.map(str::trim).filter(|url| !url.is_empty());

        let state = match remote {
            Some(url) if surface.exists(slot) => {
                surface.set_attribute(slot, "referrerpolicy", "no-referrer");
                surface.set_visible(slot, true);
                surface.set_attribute(slot, "src", url);
                FallbackState::Primary
            }
            _ => FallbackState::Exhausted,
        };

        Self {
            role,
            state,
            local_src: local_src.to_owned(),
        }
    }

    /// A chain that never reacts, for pages whose config failed to load.
    pub fn idle(role: ImageRole) -> Self {
        Self {
            role,
            state: FallbackState::Exhausted,
            local_src: String::new(),
        }
    }

    pub fn role(&self) -> ImageRole {
        self.role
    }

    pub fn state(&self) -> FallbackState {
        self.state
    }

    /// Handle one load-error event for this image.
    pub fn on_load_error<S: TargetSurface + ?Sized>(&mut self, surface: &mut S) -> FallbackState {
        let slot = self.role.image_slot();
        match self.state {
            FallbackState::Primary => {
                warn!(image = ?self.role, local = %self.local_src, "external image failed, using bundled asset");
                self.state = FallbackState::Secondary;
                if surface.exists(slot) {
                    surface.set_attribute(slot, "src", &self.local_src);
                }
            }
            FallbackState::Secondary => {
                warn!(image = ?self.role, "bundled image failed");
                self.state = FallbackState::Exhausted;
                if let Some(text_slot) = self.role.text_slot() {
                    if surface.exists(slot) {
                        surface.set_visible(slot, false);
                    }
                    if surface.exists(text_slot) {
                        surface.set_class(text_slot, "is-visible", true);
                    }
                }
            }
            FallbackState::Exhausted => {}
        }
        self.state
    }
}
