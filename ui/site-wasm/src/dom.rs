//! DOM element bindings.
//!
//! Every element the site writes to is looked up once at startup. Any of them
//! may be missing on a given page; lookups return `None` rather than failing.
//! To add new page slots, add a field here and bind it in `Elements::bind()`.

use wasm_bindgen::JsCast;
use web_sys::{Document, Element, HtmlElement};

// ── Helpers ──

pub fn document() -> Document {
    gloo_utils::document()
}

pub fn by_id(id: &str) -> Option<Element> {
    document().get_element_by_id(id)
}

pub fn query(selector: &str) -> Option<Element> {
    document().query_selector(selector).ok()?
}

fn collect(list: Option<web_sys::NodeList>) -> Vec<Element> {
    let Some(nl) = list else {
        return Vec::new();
    };
    let mut v = Vec::new();
    for i in 0..nl.length() {
        if let Some(e) = nl.item(i) {
            if let Ok(el) = e.dyn_into::<Element>() {
                v.push(el);
            }
        }
    }
    v
}

pub fn query_all(selector: &str) -> Vec<Element> {
    collect(document().query_selector_all(selector).ok())
}

/// Query all matching elements within a parent element.
pub fn query_all_within(parent: &Element, selector: &str) -> Vec<Element> {
    collect(parent.query_selector_all(selector).ok())
}

pub fn set_display(el: &Element, visible: bool) {
    if let Some(html) = el.dyn_ref::<HtmlElement>() {
        let style = html.style();
        if visible {
            let _ = style.remove_property("display");
        } else {
            let _ = style.set_property("display", "none");
        }
    }
}

pub fn toggle_class(el: &Element, cls: &str, force: bool) {
    let _ = el.class_list().toggle_with_force(cls, force);
}

pub fn create_element(tag: &str) -> Option<Element> {
    document().create_element(tag).ok()
}

// ── Elements struct ──

/// Page elements used by the site script.
/// Clone-friendly (all inner types are reference-counted via JS GC).
#[derive(Clone)]
pub struct Elements {
    // Header
    pub logo_img: Option<Element>,
    pub logo_fallback: Option<Element>,

    // Hero
    pub hero_title: Option<Element>,
    pub hero_subtitle: Option<Element>,
    pub hero_img: Option<Element>,

    // Menu
    pub filters: Option<Element>,
    pub grid: Option<Element>,

    // About
    pub about_text: Option<Element>,
    pub about_title: Option<Element>,
    pub about_img: Option<Element>,

    // Contact
    pub contact_phone: Option<Element>,
    pub contact_address: Option<Element>,
    pub contact_email: Option<Element>,
    pub map_frame: Option<Element>,

    // Footer
    pub footer_name: Option<Element>,
    pub year: Option<Element>,

    /// Every `[data-whats-link]` control, in document order.
    pub whats_links: Vec<Element>,
}

impl Elements {
    /// Resolve all DOM references. Call once the document has parsed.
    pub fn bind() -> Elements {
        Elements {
            logo_img: by_id("logo-img").or_else(|| query(".logo img")),
            logo_fallback: query(".logo .logo-fallback"),

            hero_title: query(".hero__text h1"),
            hero_subtitle: query(".hero__text p"),
            hero_img: query(".hero__media img"),

            filters: by_id("filters"),
            grid: by_id("grid-cardapio"),

            about_text: query("#sobre .about__text"),
            about_title: query("#sobre h2"),
            about_img: query("#sobre img"),

            contact_phone: by_id("contato-telefone"),
            contact_address: by_id("contato-endereco"),
            contact_email: by_id("contato-email"),
            map_frame: query("#contato .map iframe"),

            footer_name: by_id("footer-nome"),
            year: by_id("year"),

            whats_links: query_all("[data-whats-link]"),
        }
    }

    /// Paragraphs currently inside the about text, in document order.
    pub fn about_paragraphs(&self) -> Vec<Element> {
        self.about_text
            .as_ref()
            .map(|about| query_all_within(about, "p"))
            .unwrap_or_default()
    }

    /// Links in the about actions block (primary, secondary).
    pub fn about_ctas(&self) -> Vec<Element> {
        self.about_text
            .as_ref()
            .map(|about| query_all_within(about, ".actions a"))
            .unwrap_or_default()
    }
}
