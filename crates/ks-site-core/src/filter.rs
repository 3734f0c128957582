//! Menu session and category filtering.
//!
//! The item list and category list are fixed once a menu loads. The only
//! thing that changes afterwards is which filter is selected.

use ks_site_types::{CategoryFilter, MenuItem};

use crate::normalize::extract_categories;
use crate::render::{render_filters, render_grid};
use crate::settings::LoaderSettings;
use crate::surface::{Slot, TargetSurface, write_markup};

#[derive(Clone, Debug, PartialEq)]
pub struct MenuSession {
    items: Vec<MenuItem>,
    categories: Vec<CategoryFilter>,
    selected: CategoryFilter,
    whatsapp: Option<String>,
}

impl MenuSession {
    pub fn new(items: Vec<MenuItem>, whatsapp: Option<String>) -> Self {
        let categories = extract_categories(&items);
        Self {
            items,
            categories,
            selected: CategoryFilter::All,
            whatsapp,
        }
    }

    pub fn items(&self) -> &[MenuItem] {
        &self.items
    }

    pub fn categories(&self) -> &[CategoryFilter] {
        &self.categories
    }

    pub fn selected(&self) -> &CategoryFilter {
        &self.selected
    }

    /// Items passing the current filter, in menu order.
    pub fn visible(&self) -> impl Iterator<Item = &MenuItem> + '_ {
        self.items.iter().filter(|item| self.selected.matches(item))
    }

    /// Select the filter at `index` in [`categories`](Self::categories).
    /// Unknown indices leave the selection unchanged and return false.
    pub fn select_index(&mut self, index: usize) -> bool {
        match self.categories.get(index) {
            Some(filter) => {
                self.selected = filter.clone();
                true
            }
            None => false,
        }
    }

    pub fn select(&mut self, filter: &CategoryFilter) -> bool {
        match self.categories.iter().position(|c| c == filter) {
            Some(index) => self.select_index(index),
            None => false,
        }
    }

    /// Render chips and grid for the current selection.
    pub fn render<S: TargetSurface + ?Sized>(&self, surface: &mut S, settings: &LoaderSettings) {
        write_markup(
            surface,
            Slot::Filters,
            &render_filters(&self.categories, &self.selected),
        );
        self.render_grid(surface, settings);
    }

    pub fn render_grid<S: TargetSurface + ?Sized>(&self, surface: &mut S, settings: &LoaderSettings) {
        write_markup(
            surface,
            Slot::Grid,
            &render_grid(
                self.visible(),
                self.whatsapp.as_deref(),
                &settings.placeholder_image,
            ),
        );
    }

    /// Handle a click on the chip at `index`: select it and re-render.
    pub fn on_filter_click<S: TargetSurface + ?Sized>(
        &mut self,
        index: usize,
        surface: &mut S,
        settings: &LoaderSettings,
    ) {
        if self.select_index(index) {
            self.render(surface, settings);
        }
    }
}
