//! `TargetSurface` over the live document.

use ks_site_core::{Group, Slot, TargetSurface};
use web_sys::Element;

use crate::dom::{self, Elements};

pub struct DomSurface {
    els: Elements,
}

impl DomSurface {
    pub fn new(els: Elements) -> Self {
        Self { els }
    }

    fn element(&self, slot: Slot) -> Option<Element> {
        let els = &self.els;
        match slot {
            Slot::LogoImage => els.logo_img.clone(),
            Slot::LogoFallback => els.logo_fallback.clone(),
            Slot::HeroTitle => els.hero_title.clone(),
            Slot::HeroSubtitle => els.hero_subtitle.clone(),
            Slot::HeroImage => els.hero_img.clone(),
            Slot::Filters => els.filters.clone(),
            Slot::Grid => els.grid.clone(),
            Slot::AboutText => els.about_text.clone(),
            Slot::AboutTitle => els.about_title.clone(),
            Slot::AboutImage => els.about_img.clone(),
            Slot::AboutParagraph(i) => els.about_paragraphs().into_iter().nth(i),
            Slot::AboutCta(i) => els.about_ctas().into_iter().nth(i),
            Slot::ContactPhone => els.contact_phone.clone(),
            Slot::ContactAddress => els.contact_address.clone(),
            Slot::ContactEmail => els.contact_email.clone(),
            Slot::MapFrame => els.map_frame.clone(),
            Slot::FooterName => els.footer_name.clone(),
            Slot::Year => els.year.clone(),
            Slot::MessagingControl(i) => els.whats_links.get(i).cloned(),
        }
    }
}

impl TargetSurface for DomSurface {
    fn exists(&self, slot: Slot) -> bool {
        self.element(slot).is_some()
    }

    fn count(&self, group: Group) -> usize {
        match group {
            Group::AboutParagraphs => self.els.about_paragraphs().len(),
            Group::AboutCtas => self.els.about_ctas().len(),
            Group::MessagingControls => self.els.whats_links.len(),
        }
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        if let Some(el) = self.element(slot) {
            el.set_text_content(Some(text));
        }
    }

    fn set_markup(&mut self, slot: Slot, markup: &str) {
        if let Some(el) = self.element(slot) {
            el.set_inner_html(markup);
        }
    }

    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str) {
        if let Some(el) = self.element(slot) {
            let _ = el.set_attribute(name, value);
        }
    }

    fn remove_attribute(&mut self, slot: Slot, name: &str) {
        if let Some(el) = self.element(slot) {
            let _ = el.remove_attribute(name);
        }
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        if let Some(el) = self.element(slot) {
            dom::set_display(&el, visible);
        }
    }

    fn set_class(&mut self, slot: Slot, class: &str, on: bool) {
        if let Some(el) = self.element(slot) {
            dom::toggle_class(&el, class, on);
        }
    }

    fn insert_paragraph(&mut self) -> bool {
        let Some(about) = self.els.about_text.as_ref() else {
            return false;
        };
        let Some(p) = dom::create_element("p") else {
            return false;
        };
        // the anchor must be a direct child for insertBefore
        let anchor = about
            .query_selector(":scope > .actions")
            .ok()
            .flatten();
        about.insert_before(&p, anchor.as_deref()).is_ok()
    }

    fn set_document_title(&mut self, title: &str) {
        dom::document().set_title(title);
    }
}
