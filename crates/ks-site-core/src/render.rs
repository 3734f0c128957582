//! Markup for the menu grid and its filter chips.

use ks_site_types::{ALL_LABEL, CategoryFilter, MenuItem, WhatsLink};

use crate::format::{escape_html, filter_label, price_text};
use crate::link::order_link;

/// Grid content shown when the menu document cannot be loaded.
pub const MENU_LOAD_ERROR: &str = "<p>Não foi possível carregar o cardápio.</p>";

/// One chip per category; the selected one carries `is-active`.
pub fn render_filters(categories: &[CategoryFilter], selected: &CategoryFilter) -> String {
    categories
        .iter()
        .enumerate()
        .map(|(index, filter)| {
            let active = if filter == selected { " is-active" } else { "" };
            let key = filter.name().unwrap_or(ALL_LABEL);
            format!(
                r#"<button class="chip{active}" data-filter-index="{index}" data-filter="{key}">{label}</button>"#,
                key = escape_html(key),
                label = escape_html(&filter_label(filter)),
            )
        })
        .collect()
}

/// Cards for `items`, in the order given.
pub fn render_grid<'a, I>(items: I, whatsapp: Option<&str>, placeholder: &str) -> String
where
    I: IntoIterator<Item = &'a MenuItem>,
{
    items
        .into_iter()
        .map(|item| render_card(item, whatsapp, placeholder))
        .collect()
}

pub fn render_card(item: &MenuItem, whatsapp: Option<&str>, placeholder: &str) -> String {
    let image = item
        .image
        .as_deref()
        .filter(|src| !src.is_empty())
        .unwrap_or(placeholder);

    let order = match order_link(whatsapp, item) {
        WhatsLink::Url(href) => format!(
            r#"href="{}" target="_blank" rel="noopener""#,
            escape_html(&href)
        ),
        WhatsLink::Disabled => r#"aria-disabled="true""#.to_owned(),
    };

    format!(
        r#"
      <article class="card" data-cat="{category}">
        <div class="card__media">
          <img
            src="{image}"
            alt="{name}"
            loading="lazy"
            referrerpolicy="no-referrer"
            onerror="this.onerror=null;this.src='{placeholder}'"
          >
        </div>
        <div class="card__body">
          <h3 class="card__title">{name}</h3>
          <p class="card__desc">{description}</p>
          <div class="card__row">
            <span class="price">R$ {price}</span>
            <a class="btn btn--small" {order}>Pedir</a>
          </div>
        </div>
      </article>
    "#,
        category = escape_html(&item.category),
        image = escape_html(image),
        name = escape_html(&item.name),
        placeholder = escape_html(placeholder),
        description = escape_html(item.description.as_deref().unwrap_or_default()),
        price = price_text(item.price),
        order = order,
    )
}

#[cfg(test)]
mod tests {
    use super::*;
    use ks_site_types::Price;

    const PLACEHOLDER: &str = "https://img.example/ph.jpg?w=800&q=60";

    fn item(name: &str, price: Price, category: &str) -> MenuItem {
        MenuItem {
            name: name.to_owned(),
            description: Some("Com <b>queijo</b>".to_owned()),
            price,
            image: None,
            category: category.to_owned(),
        }
    }

    #[test]
    fn chips_mark_only_the_selection() {
        let categories = vec![
            CategoryFilter::All,
            CategoryFilter::Named("pratosPrincipais".to_owned()),
            CategoryFilter::Named("Bebidas".to_owned()),
        ];
        let html = render_filters(&categories, &categories[2]);

        assert_eq!(html.matches("is-active").count(), 1);
        assert!(html.contains(r#"<button class="chip" data-filter-index="0" data-filter="Tudo">Tudo</button>"#));
        assert!(html.contains(r#"data-filter="pratosPrincipais">Pratos principais</button>"#));
        assert!(html.contains(r#"<button class="chip is-active" data-filter-index="2" data-filter="Bebidas">Bebidas</button>"#));
    }

    #[test]
    fn chip_labels_are_escaped() {
        let categories = vec![CategoryFilter::All, CategoryFilter::Named("<x>".to_owned())];
        let html = render_filters(&categories, &CategoryFilter::All);
        assert!(html.contains(r#"data-filter="&lt;x&gt;">&lt;x&gt;</button>"#));
    }

    #[test]
    fn card_escapes_user_text_and_formats_price() {
        let html = render_card(&item("Pão & <Cia>", Price::Amount(12.0), "Padaria"), Some("5511"), PLACEHOLDER);

        assert!(html.contains("Pão &amp; &lt;Cia&gt;"));
        assert!(html.contains("Com &lt;b&gt;queijo&lt;/b&gt;"));
        assert!(!html.contains("<b>"));
        assert!(html.contains("R$ 12,00"));
        assert!(html.contains(r#"src="https://img.example/ph.jpg?w=800&amp;q=60""#));
    }

    #[test]
    fn unavailable_price_renders_dash() {
        let html = render_card(&item("Sopa", Price::Unavailable, "Entradas"), Some("5511"), PLACEHOLDER);
        assert!(html.contains("R$ \u{2014}"));
    }

    #[test]
    fn order_button_is_kept_but_disabled_without_number() {
        let html = render_card(&item("Sopa", Price::Amount(1.0), "Entradas"), Some("sem número"), PLACEHOLDER);
        assert!(html.contains(r#"<a class="btn btn--small" aria-disabled="true">Pedir</a>"#));
        assert!(!html.contains("wa.me"));
    }

    #[test]
    fn order_button_links_to_whatsapp() {
        let html = render_card(&item("Sopa", Price::Amount(1.0), "Entradas"), Some("(11) 2222-3333"), PLACEHOLDER);
        assert!(html.contains(
            r#"href="https://wa.me/1122223333?text=Ol%C3%A1!%20Quero%20pedir%3A%20Sopa%20(Entradas)." target="_blank" rel="noopener""#
        ));
    }

    #[test]
    fn grid_keeps_item_order() {
        let items = [
            item("Primeiro", Price::Amount(1.0), "A"),
            item("Segundo", Price::Amount(2.0), "B"),
        ];
        let html = render_grid(&items, None, PLACEHOLDER);
        let first = html.find("Primeiro").unwrap();
        let second = html.find("Segundo").unwrap();
        assert!(first < second);
        assert_eq!(html.matches("<article").count(), 2);

        assert_eq!(render_grid(Vec::<MenuItem>::new().iter(), None, PLACEHOLDER), "");
    }
}
