//! WhatsApp deep links.

use ks_site_types::{MenuItem, WhatsLink};

const WHATSAPP_BASE: &str = "https://wa.me/";

/// Build a deep link to `number`. Everything but ASCII digits is stripped; no
/// digits left means the link is disabled. `encoded_message` must already be
/// URL-encoded and is appended as `text` only when non-empty.
pub fn build_link(number: &str, encoded_message: Option<&str>) -> WhatsLink {
    let digits: String = number.chars().filter(char::is_ascii_digit).collect();
    if digits.is_empty() {
        return WhatsLink::Disabled;
    }
    match encoded_message {
        Some(text) if !text.is_empty() => {
            WhatsLink::Url(format!("{WHATSAPP_BASE}{digits}?text={text}"))
        }
        _ => WhatsLink::Url(format!("{WHATSAPP_BASE}{digits}")),
    }
}

/// Pre-filled order text for one menu item.
pub fn order_message(item: &MenuItem) -> String {
    if item.category.is_empty() {
        format!("Olá! Quero pedir: {}.", item.name)
    } else {
        format!(
            "Olá! Quero pedir: {} ({}).",
            item.name,
            crate::format::category_label(&item.category)
        )
    }
}

/// Order link for `item`, sent to the site-wide number.
pub fn order_link(whatsapp: Option<&str>, item: &MenuItem) -> WhatsLink {
    let message = crate::format::encode_component(&order_message(item));
    build_link(whatsapp.unwrap_or_default(), Some(&message))
}

pub fn mailto(email: &str) -> String {
    format!("mailto:{email}")
}
