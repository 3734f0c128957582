use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer, Serialize};
use serde_json::Value;

/// Category given to flat-menu entries that carry none.
pub const DEFAULT_CATEGORY: &str = "Outros";

/// Label shown on the synthetic "every category" filter.
pub const ALL_LABEL: &str = "Tudo";

// ── Site configuration (config.json) ──

/// Branding, hero, about and contact data. Every field is optional: an absent
/// field leaves the page markup as authored.
#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SiteConfig {
    #[serde(default, deserialize_with = "text")]
    pub site_name: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub logo: Option<String>,
    #[serde(default, deserialize_with = "section")]
    pub hero: Option<HeroConfig>,
    #[serde(default, deserialize_with = "text")]
    pub hero_image: Option<String>,
    #[serde(default, deserialize_with = "section")]
    pub about: Option<AboutConfig>,
    #[serde(default, deserialize_with = "text")]
    pub phone: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub address: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub email: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub map_src: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub whatsapp: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
pub struct HeroConfig {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub subtitle: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
}

#[derive(Debug, Clone, Default, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AboutConfig {
    #[serde(default, deserialize_with = "text")]
    pub title: Option<String>,
    #[serde(default, deserialize_with = "paragraphs")]
    pub paragraphs: Option<Vec<String>>,
    #[serde(default, deserialize_with = "text")]
    pub cta_primary: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub cta_secondary: Option<String>,
    #[serde(default, deserialize_with = "text")]
    pub image: Option<String>,
}

impl SiteConfig {
    /// Decode a config document. Returns `None` unless the document is a JSON
    /// object; individual fields of the wrong type are dropped, not rejected.
    pub fn from_document(value: Value) -> Option<SiteConfig> {
        if !value.is_object() {
            return None;
        }
        serde_json::from_value(value).ok()
    }

    /// Hero image URL. `hero.image` takes precedence over the legacy
    /// top-level `heroImage` key.
    pub fn hero_image_url(&self) -> Option<&str> {
        self.hero
            .as_ref()
            .and_then(|h| h.image.as_deref())
            .or(self.hero_image.as_deref())
    }

    pub fn hero_title(&self) -> Option<&str> {
        self.hero.as_ref().and_then(|h| h.title.as_deref())
    }

    pub fn hero_subtitle(&self) -> Option<&str> {
        self.hero.as_ref().and_then(|h| h.subtitle.as_deref())
    }
}

// ── Menu (menu.json) ──

/// Coerced menu price.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Price {
    Amount(f64),
    Unavailable,
}

impl Price {
    /// Numeric coercion of a raw `preco` value. A missing value counts as zero;
    /// anything that does not read as a number is `Unavailable`. Infinite
    /// amounts are kept.
    pub fn coerce(value: Option<&Value>) -> Price {
        let amount = match value {
            None | Some(Value::Null) => Some(0.0),
            Some(Value::Number(n)) => n.as_f64(),
            Some(Value::Bool(b)) => Some(if *b { 1.0 } else { 0.0 }),
            Some(Value::String(s)) => number_from_str(s),
            Some(Value::Array(_)) | Some(Value::Object(_)) => None,
        };
        match amount {
            Some(a) if !a.is_nan() => Price::Amount(a),
            _ => Price::Unavailable,
        }
    }
}

/// Browser `Number(string)` reading: blank is zero, plus signed decimals,
/// `Infinity`, and unsigned `0x`/`0o`/`0b` integers.
fn number_from_str(s: &str) -> Option<f64> {
    let s = s.trim();
    if s.is_empty() {
        return Some(0.0);
    }
    for (prefix, radix) in [("0x", 16), ("0X", 16), ("0o", 8), ("0O", 8), ("0b", 2), ("0B", 2)] {
        if let Some(digits) = s.strip_prefix(prefix) {
            return radix_integer(digits, radix);
        }
    }

    let (sign, unsigned) = if let Some(rest) = s.strip_prefix('-') {
        (-1.0, rest)
    } else if let Some(rest) = s.strip_prefix('+') {
        (1.0, rest)
    } else {
        (1.0, s)
    };
    if unsigned == "Infinity" {
        return Some(sign * f64::INFINITY);
    }
    // `f64::from_str` also takes `inf`/`nan` spellings
    if !unsigned.starts_with(|c: char| c.is_ascii_digit() || c == '.') {
        return None;
    }
    s.parse().ok()
}

fn radix_integer(digits: &str, radix: u32) -> Option<f64> {
    if digits.is_empty() {
        return None;
    }
    digits.chars().try_fold(0.0, |acc: f64, c| {
        c.to_digit(radix).map(|d| acc * f64::from(radix) + f64::from(d))
    })
}

/// A normalized menu entry. `category` is never empty.
#[derive(Debug, Clone, PartialEq)]
pub struct MenuItem {
    pub name: String,
    pub description: Option<String>,
    pub price: Price,
    pub image: Option<String>,
    pub category: String,
}

/// Raw menu record as found in the document, before a category is settled.
#[derive(Debug, Clone, Default, Deserialize)]
pub struct MenuRecord {
    #[serde(default, rename = "nome", deserialize_with = "text")]
    pub name: Option<String>,
    #[serde(default, rename = "descricao", deserialize_with = "text")]
    pub description: Option<String>,
    #[serde(default, rename = "preco")]
    pub price: Option<Value>,
    #[serde(default, rename = "imagem", deserialize_with = "text")]
    pub image: Option<String>,
    #[serde(default, rename = "categoria", deserialize_with = "text")]
    pub category: Option<String>,
}

impl MenuRecord {
    /// Read a record from any JSON value; non-objects read as an empty record.
    pub fn from_value(value: &Value) -> MenuRecord {
        if !value.is_object() {
            return MenuRecord::default();
        }
        MenuRecord::deserialize(value).unwrap_or_default()
    }

    /// Settle the record into an item, using `fallback_category` when the
    /// record's own category is blank or missing.
    pub fn into_item(self, fallback_category: &str) -> MenuItem {
        let category = match self.category {
            Some(c) if !c.trim().is_empty() => c,
            _ => fallback_category.to_owned(),
        };
        MenuItem {
            name: self.name.unwrap_or_default(),
            description: self.description,
            price: Price::coerce(self.price.as_ref()),
            image: self.image,
            category,
        }
    }
}

/// One filter control: the synthetic "all" entry or a concrete category.
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub enum CategoryFilter {
    All,
    Named(String),
}

impl CategoryFilter {
    pub fn matches(&self, item: &MenuItem) -> bool {
        match self {
            CategoryFilter::All => true,
            CategoryFilter::Named(name) => item.category == *name,
        }
    }

    /// Raw category name; the "all" entry has none.
    pub fn name(&self) -> Option<&str> {
        match self {
            CategoryFilter::All => None,
            CategoryFilter::Named(name) => Some(name),
        }
    }
}

// ── Messaging links ──

#[derive(Debug, Clone, PartialEq, Eq)]
pub enum WhatsLink {
    Url(String),
    Disabled,
}

impl WhatsLink {
    pub fn href(&self) -> Option<&str> {
        match self {
            WhatsLink::Url(url) => Some(url),
            WhatsLink::Disabled => None,
        }
    }

    pub fn is_disabled(&self) -> bool {
        matches!(self, WhatsLink::Disabled)
    }
}

// ── Lenient field decoding ──

/// Text value of a JSON scalar. Empty strings and non-scalars read as absent.
pub fn value_text(value: &Value) -> Option<String> {
    match value {
        Value::String(s) if !s.is_empty() => Some(s.clone()),
        Value::Number(n) => Some(n.to_string()),
        _ => None,
    }
}

fn text<'de, D>(deserializer: D) -> Result<Option<String>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(raw.as_ref().and_then(value_text))
}

fn paragraphs<'de, D>(deserializer: D) -> Result<Option<Vec<String>>, D::Error>
where
    D: Deserializer<'de>,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(Value::Array(entries)) => Some(
            entries
                .iter()
                .map(|e| value_text(e).unwrap_or_default())
                .collect(),
        ),
        _ => None,
    })
}

fn section<'de, D, T>(deserializer: D) -> Result<Option<T>, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    let raw = Option::<Value>::deserialize(deserializer)?;
    Ok(match raw {
        Some(v @ Value::Object(_)) => serde_json::from_value(v).ok(),
        _ => None,
    })
}
