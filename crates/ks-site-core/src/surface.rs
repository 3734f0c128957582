//! Page capability interface.
//!
//! Every page element the site writes to is a named [`Slot`]. Any slot may be
//! missing on a given page variant; writers check [`TargetSurface::exists`]
//! first and skip silently when it is absent.

/// Named attachment points on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub enum Slot {
    // Header
    LogoImage,
    LogoFallback,

    // Hero
    HeroTitle,
    HeroSubtitle,
    HeroImage,

    // Menu
    Filters,
    Grid,

    // About
    AboutText,
    AboutTitle,
    AboutImage,
    AboutParagraph(usize),
    AboutCta(usize),

    // Contact
    ContactPhone,
    ContactAddress,
    ContactEmail,
    MapFrame,

    // Footer
    FooterName,
    Year,

    /// Nth element tagged as a messaging (WhatsApp) control.
    MessagingControl(usize),
}

/// Indexed slot families whose size depends on the page.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Group {
    AboutParagraphs,
    AboutCtas,
    MessagingControls,
}

impl Group {
    pub fn slot(self, index: usize) -> Slot {
        match self {
            Group::AboutParagraphs => Slot::AboutParagraph(index),
            Group::AboutCtas => Slot::AboutCta(index),
            Group::MessagingControls => Slot::MessagingControl(index),
        }
    }
}

pub trait TargetSurface {
    fn exists(&self, slot: Slot) -> bool;
    fn count(&self, group: Group) -> usize;

    fn set_text(&mut self, slot: Slot, text: &str);
    /// Replace the slot's children with trusted, already-escaped markup.
    fn set_markup(&mut self, slot: Slot, markup: &str);
    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str);
    fn remove_attribute(&mut self, slot: Slot, name: &str);
    fn set_visible(&mut self, slot: Slot, visible: bool);
    fn set_class(&mut self, slot: Slot, class: &str, on: bool);

    /// Add an empty paragraph to the about text, before its actions block.
    /// Returns false when there is no about text to insert into.
    fn insert_paragraph(&mut self) -> bool;

    fn set_document_title(&mut self, title: &str);
}

// ── Guarded writes ──

/// Set text when both the slot and the value are present.
pub fn write_text<S: TargetSurface + ?Sized>(surface: &mut S, slot: Slot, value: Option<&str>) {
    if let Some(value) = value {
        if surface.exists(slot) {
            surface.set_text(slot, value);
        }
    }
}

/// Set an attribute when both the slot and the value are present.
pub fn write_attribute<S: TargetSurface + ?Sized>(
    surface: &mut S,
    slot: Slot,
    name: &str,
    value: Option<&str>,
) {
    if let Some(value) = value {
        if surface.exists(slot) {
            surface.set_attribute(slot, name, value);
        }
    }
}

pub fn write_markup<S: TargetSurface + ?Sized>(surface: &mut S, slot: Slot, markup: &str) {
    if surface.exists(slot) {
        surface.set_markup(slot, markup);
    }
}
