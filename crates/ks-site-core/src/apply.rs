//! Writing the site configuration into the page.

use ks_site_types::{SiteConfig, WhatsLink};

use crate::fallback::{ImageFallback, ImageRole};
use crate::link::{build_link, mailto};
use crate::settings::LoaderSettings;
use crate::surface::{Group, Slot, TargetSurface, write_attribute, write_text};

/// Image fallback chains started while applying a config.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ImageChains {
    pub logo: ImageFallback,
    pub hero: ImageFallback,
}

impl ImageChains {
    pub fn idle() -> Self {
        Self {
            logo: ImageFallback::idle(ImageRole::Logo),
            hero: ImageFallback::idle(ImageRole::Hero),
        }
    }

    pub fn get_mut(&mut self, role: ImageRole) -> &mut ImageFallback {
        match role {
            ImageRole::Logo => &mut self.logo,
            ImageRole::Hero => &mut self.hero,
        }
    }
}

pub fn apply_year<S: TargetSurface + ?Sized>(surface: &mut S, year: i32) {
    write_text(surface, Slot::Year, Some(&year.to_string()));
}

/// Apply every present config field to its page slot.
pub fn apply_config<S: TargetSurface + ?Sized>(
    config: &SiteConfig,
    surface: &mut S,
    settings: &LoaderSettings,
) -> ImageChains {
    // Branding
    if let Some(name) = config.site_name.as_deref() {
        surface.set_document_title(&format!("{name} \u{2022} {}", settings.title_suffix));
    }
    write_text(surface, Slot::FooterName, config.site_name.as_deref());
    write_text(surface, Slot::LogoFallback, config.site_name.as_deref());

    let logo = ImageFallback::start(
        ImageRole::Logo,
        config.logo.as_deref(),
        &settings.local_logo,
        surface,
    );

    // Hero
    let hero = ImageFallback::start(
        ImageRole::Hero,
        config.hero_image_url(),
        &settings.local_hero,
        surface,
    );
    write_text(surface, Slot::HeroTitle, config.hero_title());
    write_text(surface, Slot::HeroSubtitle, config.hero_subtitle());

    // About
    if let Some(about) = &config.about {
        write_text(surface, Slot::AboutTitle, about.title.as_deref());
        write_attribute(surface, Slot::AboutImage, "src", about.image.as_deref());
        if let Some(paragraphs) = &about.paragraphs {
            reconcile_paragraphs(surface, paragraphs);
        }
        write_text(surface, Slot::AboutCta(0), about.cta_primary.as_deref());
        write_text(surface, Slot::AboutCta(1), about.cta_secondary.as_deref());
    }

    // Contact
    write_text(surface, Slot::ContactPhone, config.phone.as_deref());
    write_text(surface, Slot::ContactAddress, config.address.as_deref());
    write_attribute(
        surface,
        Slot::ContactEmail,
        "href",
        config.email.as_deref().map(mailto).as_deref(),
    );
    write_attribute(surface, Slot::MapFrame, "src", config.map_src.as_deref());

    set_messaging_links(surface, config.whatsapp.as_deref());

    ImageChains { logo, hero }
}

/// Bring the about paragraphs in line with `desired`.
///
/// Missing paragraphs are inserted before the actions block; surplus ones are
/// emptied and hidden, never removed. An empty entry behaves like a surplus
/// slot. Running twice with the same list changes nothing.
pub fn reconcile_paragraphs<S: TargetSurface + ?Sized>(surface: &mut S, desired: &[String]) {
    if !surface.exists(Slot::AboutText) {
        return;
    }

    let mut existing = surface.count(Group::AboutParagraphs);
    while existing < desired.len() && surface.insert_paragraph() {
        existing += 1;
    }

    for index in 0..existing {
        let slot = Slot::AboutParagraph(index);
        match desired.get(index).filter(|text| !text.is_empty()) {
            Some(text) => {
                surface.set_visible(slot, true);
                surface.set_text(slot, text);
            }
            None => {
                surface.set_text(slot, "");
                surface.set_visible(slot, false);
            }
        }
    }
}

/// Point every messaging control at `number`, or disable them all when the
/// number has no digits.
pub fn set_messaging_links<S: TargetSurface + ?Sized>(surface: &mut S, number: Option<&str>) {
    let link = build_link(number.unwrap_or_default(), None);
    for index in 0..surface.count(Group::MessagingControls) {
        let slot = Slot::MessagingControl(index);
        match &link {
            WhatsLink::Url(href) => {
                surface.remove_attribute(slot, "aria-disabled");
                surface.set_attribute(slot, "href", href);
            }
            WhatsLink::Disabled => {
                surface.set_attribute(slot, "aria-disabled", "true");
                surface.remove_attribute(slot, "href");
            }
        }
    }
}

pub fn disable_messaging_links<S: TargetSurface + ?Sized>(surface: &mut S) {
    set_messaging_links(surface, None);
}
