//! In-memory surface and document source for tests.

use std::cell::RefCell;
use std::collections::{BTreeMap, BTreeSet, HashMap};

use async_trait::async_trait;
use serde_json::Value;

use crate::error::SiteError;
use crate::loader::DocumentSource;
use crate::surface::{Group, Slot, TargetSurface};

#[derive(Clone, Debug, Default, PartialEq)]
pub struct FakeElement {
    pub text: String,
    pub markup: String,
    pub attrs: BTreeMap<String, String>,
    pub hidden: bool,
    pub classes: BTreeSet<String>,
}

#[derive(Clone, Debug, Default)]
pub struct FakeSurface {
    pub elements: BTreeMap<Slot, FakeElement>,
    pub title: Option<String>,
    pub writes: usize,
}

impl FakeSurface {
    pub fn with(slots: &[Slot]) -> Self {
        let mut surface = FakeSurface::default();
        for slot in slots {
            surface.elements.insert(*slot, FakeElement::default());
        }
        surface
    }

    /// Page with every fixed slot, `paragraphs` about paragraphs, two CTAs and
    /// `controls` messaging controls.
    pub fn full_page(paragraphs: usize, controls: usize) -> Self {
        let mut surface = FakeSurface::with(&[
            Slot::LogoImage,
            Slot::LogoFallback,
            Slot::HeroTitle,
            Slot::HeroSubtitle,
            Slot::HeroImage,
            Slot::Filters,
            Slot::Grid,
            Slot::AboutText,
            Slot::AboutTitle,
            Slot::AboutImage,
            Slot::AboutCta(0),
            Slot::AboutCta(1),
            Slot::ContactPhone,
            Slot::ContactAddress,
            Slot::ContactEmail,
            Slot::MapFrame,
            Slot::FooterName,
            Slot::Year,
        ]);
        for i in 0..paragraphs {
            surface.elements.insert(Slot::AboutParagraph(i), FakeElement::default());
        }
        for i in 0..controls {
            surface
                .elements
                .insert(Slot::MessagingControl(i), FakeElement::default());
        }
        surface
    }

    pub fn el(&self, slot: Slot) -> &FakeElement {
        self.elements
            .get(&slot)
            .unwrap_or_else(|| panic!("no element for {slot:?}"))
    }

    pub fn attr(&self, slot: Slot, name: &str) -> Option<&str> {
        self.el(slot).attrs.get(name).map(String::as_str)
    }

    fn el_mut(&mut self, slot: Slot) -> Option<&mut FakeElement> {
        self.writes += 1;
        self.elements.get_mut(&slot)
    }
}

impl TargetSurface for FakeSurface {
    fn exists(&self, slot: Slot) -> bool {
        self.elements.contains_key(&slot)
    }

    fn count(&self, group: Group) -> usize {
        (0..).take_while(|i| self.exists(group.slot(*i))).count()
    }

    fn set_text(&mut self, slot: Slot, text: &str) {
        if let Some(el) = self.el_mut(slot) {
            el.text = text.to_owned();
        }
    }

    fn set_markup(&mut self, slot: Slot, markup: &str) {
        if let Some(el) = self.el_mut(slot) {
            el.markup = markup.to_owned();
        }
    }

    fn set_attribute(&mut self, slot: Slot, name: &str, value: &str) {
        if let Some(el) = self.el_mut(slot) {
            el.attrs.insert(name.to_owned(), value.to_owned());
        }
    }

    fn remove_attribute(&mut self, slot: Slot, name: &str) {
        if let Some(el) = self.el_mut(slot) {
            el.attrs.remove(name);
        }
    }

    fn set_visible(&mut self, slot: Slot, visible: bool) {
        if let Some(el) = self.el_mut(slot) {
            el.hidden = !visible;
        }
    }

    fn set_class(&mut self, slot: Slot, class: &str, on: bool) {
        if let Some(el) = self.el_mut(slot) {
            if on {
                el.classes.insert(class.to_owned());
            } else {
                el.classes.remove(class);
            }
        }
    }

    fn insert_paragraph(&mut self) -> bool {
        if !self.exists(Slot::AboutText) {
            return false;
        }
        let next = self.count(Group::AboutParagraphs);
        self.elements
            .insert(Slot::AboutParagraph(next), FakeElement::default());
        true
    }

    fn set_document_title(&mut self, title: &str) {
        self.title = Some(title.to_owned());
    }
}

/// Document source answering from a fixed table and recording request order.
#[derive(Default)]
pub struct StaticSource {
    responses: HashMap<String, Result<Value, SiteError>>,
    pub requests: RefCell<Vec<String>>,
}

impl StaticSource {
    pub fn new() -> Self {
        StaticSource::default()
    }

    pub fn respond(mut self, path: &str, response: Result<Value, SiteError>) -> Self {
        self.responses.insert(path.to_owned(), response);
        self
    }
}

#[async_trait(?Send)]
impl DocumentSource for StaticSource {
    async fn fetch_document(&self, path: &str) -> Result<Value, SiteError> {
        self.requests.borrow_mut().push(path.to_owned());
        self.responses.get(path).cloned().unwrap_or_else(|| {
            Err(SiteError::Status {
                path: path.to_owned(),
                status: 404,
            })
        })
    }
}
