//! Menu document normalization.
//!
//! The menu document is either a flat array of records or an object mapping
//! category names to arrays of records. Both become one ordered item list.

use ks_site_types::{CategoryFilter, MenuItem, MenuRecord};
use serde_json::Value;

/// Flatten a menu document into items with a settled category.
///
/// Flat arrays keep their order and fall back to `default_category`. Grouped
/// objects are walked in document key order, then array order; an entry's own
/// category beats its group key. Any other shape yields no items.
pub fn normalize(raw: &Value, default_category: &str) -> Vec<MenuItem> {
    match raw {
        Value::Array(entries) => entries
            .iter()
            .map(|entry| MenuRecord::from_value(entry).into_item(default_category))
            .collect(),
        Value::Object(groups) => groups
            .iter()
            .flat_map(|(category, entries)| {
                let entries = match entries {
                    Value::Array(entries) => entries.as_slice(),
                    _ => &[][..],
                };
                entries
                    .iter()
                    .map(move |entry| MenuRecord::from_value(entry).into_item(category))
            })
            .collect(),
        _ => Vec::new(),
    }
}

/// Distinct categories in first-seen order, led by [`CategoryFilter::All`].
pub fn extract_categories(items: &[MenuItem]) -> Vec<CategoryFilter> {
    let mut categories = vec![CategoryFilter::All];
    for item in items {
        if item.category.is_empty() {
            continue;
        }
        let seen = categories
            .iter()
            .any(|c| c.name() == Some(item.category.as_str()));
        if !seen {
            categories.push(CategoryFilter::Named(item.category.clone()));
        }
    }
    categories
}
