use ks_site_types::DEFAULT_CATEGORY;

/// Fixed locations and strings the loader works with.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct LoaderSettings {
    pub config_path: String,
    pub menu_path: String,
    /// Bundled logo tried after the configured one fails.
    pub local_logo: String,
    /// Bundled hero image tried after the configured one fails.
    pub local_hero: String,
    /// Shown for menu items without an image, or whose image fails.
    pub placeholder_image: String,
    /// Appended to the site name in the document title.
    pub title_suffix: String,
    pub default_category: String,
}

impl Default for LoaderSettings {
    fn default() -> Self {
        Self {
            config_path: "assets/data/config.json".to_owned(),
            menu_path: "assets/data/menu.json".to_owned(),
            local_logo: "assets/img/logo.jpg".to_owned(),
            local_hero: "assets/img/hero.jpg".to_owned(),
            placeholder_image: "https://images.unsplash.com/photo-1548365328-9f547fb0953b?auto=format&fit=crop&w=800&q=60".to_owned(),
            title_suffix: "Cardápio e Pedidos".to_owned(),
            default_category: DEFAULT_CATEGORY.to_owned(),
        }
    }
}
