//! Two-phase page load.
//!
//! Config first, menu second: menu order links need the config's WhatsApp
//! number. Each phase catches its own failure and leaves the page usable.

use async_trait::async_trait;
use ks_site_types::SiteConfig;
use serde_json::Value;
use tracing::{debug, error};

use crate::apply::{ImageChains, apply_config, disable_messaging_links};
use crate::error::SiteError;
use crate::filter::MenuSession;
use crate::normalize::normalize;
use crate::render::MENU_LOAD_ERROR;
use crate::settings::LoaderSettings;
use crate::surface::{Slot, TargetSurface, write_markup};

/// Where the two JSON documents come from. Implementations must bypass
/// caches so every page load sees the current documents.
#[async_trait(?Send)]
pub trait DocumentSource {
    async fn fetch_document(&self, path: &str) -> Result<Value, SiteError>;
}

/// Outcome of the config phase. After a failure `config` is empty and both
/// image chains are idle.
#[derive(Clone, Debug, PartialEq)]
pub struct ConfigPhase {
    pub config: SiteConfig,
    pub images: ImageChains,
}

pub struct PageLoader<'a, D: DocumentSource + ?Sized> {
    source: &'a D,
    settings: &'a LoaderSettings,
}

impl<'a, D: DocumentSource + ?Sized> PageLoader<'a, D> {
    pub fn new(source: &'a D, settings: &'a LoaderSettings) -> Self {
        Self { source, settings }
    }

    pub async fn fetch_config(&self) -> Result<SiteConfig, SiteError> {
        let path = &self.settings.config_path;
        let document = self.source.fetch_document(path).await?;
        SiteConfig::from_document(document).ok_or_else(|| SiteError::Shape { path: path.clone() })
    }

    /// Fetch and apply the config. On failure every messaging control is
    /// disabled and an empty config is returned.
    pub async fn config_phase<S: TargetSurface + ?Sized>(&self, surface: &mut S) -> ConfigPhase {
        match self.fetch_config().await {
            Ok(config) => {
                let images = apply_config(&config, surface, self.settings);
                debug!("site config applied");
                ConfigPhase { config, images }
            }
            Err(err) => {
                error!(error = %err, "failed to load site config");
                disable_messaging_links(surface);
                ConfigPhase {
                    config: SiteConfig::default(),
                    images: ImageChains::idle(),
                }
            }
        }
    }

    /// Fetch, normalize and render the menu. On failure the grid shows an
    /// inline message and the session holds no items.
    pub async fn menu_phase<S: TargetSurface + ?Sized>(
        &self,
        config: &SiteConfig,
        surface: &mut S,
    ) -> MenuSession {
        let whatsapp = config.whatsapp.clone();
        match self.source.fetch_document(&self.settings.menu_path).await {
            Ok(raw) => {
                let session = MenuSession::new(
                    normalize(&raw, &self.settings.default_category),
                    whatsapp,
                );
                session.render(surface, self.settings);
                debug!(
                    items = session.items().len(),
                    categories = session.categories().len(),
                    "menu rendered"
                );
                session
            }
            Err(err) => {
                error!(error = %err, "failed to load menu");
                write_markup(surface, Slot::Grid, MENU_LOAD_ERROR);
                MenuSession::new(Vec::new(), whatsapp)
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::apply::apply_year;
    use crate::fallback::FallbackState;
    use crate::testing::{FakeSurface, StaticSource};
    use ks_site_types::CategoryFilter;
    use serde_json::json;

    const CONFIG: &str = "assets/data/config.json";
    const MENU: &str = "assets/data/menu.json";

    /// Same sequence the page entry point runs.
    async fn boot(
        source: &StaticSource,
        settings: &LoaderSettings,
        page: &mut FakeSurface,
    ) -> (ConfigPhase, MenuSession) {
        apply_year(page, 2026);
        let loader = PageLoader::new(source, settings);
        let phase = loader.config_phase(page).await;
        let menu = loader.menu_phase(&phase.config, page).await;
        (phase, menu)
    }

    #[tokio::test]
    async fn loads_config_before_menu() -> anyhow::Result<()> {
        let settings = LoaderSettings::default();
        let source = StaticSource::new()
            .respond(CONFIG, Ok(json!({ "siteName": "Nona", "whatsapp": "11 4444-5555" })))
            .respond(MENU, Ok(json!([{ "nome": "Lasanha", "preco": 42, "categoria": "Massas" }])));
        let mut page = FakeSurface::full_page(0, 2);

        let (phase, menu) = boot(&source, &settings, &mut page).await;

        assert_eq!(*source.requests.borrow(), [CONFIG, MENU]);
        assert_eq!(page.el(Slot::Year).text, "2026");
        assert_eq!(phase.config.site_name.as_deref(), Some("Nona"));
        assert_eq!(menu.items().len(), 1);

        let grid = &page.el(Slot::Grid).markup;
        assert!(grid.contains("Lasanha"));
        assert!(grid.contains("R$ 42,00"));
        assert!(grid.contains("https://wa.me/1144445555?text="));
        assert_eq!(
            page.attr(Slot::MessagingControl(1), "href"),
            Some("https://wa.me/1144445555")
        );
        Ok(())
    }

    #[tokio::test]
    async fn config_http_error_disables_messaging_controls() -> anyhow::Result<()> {
        let settings = LoaderSettings::default();
        let source = StaticSource::new()
            .respond(
                CONFIG,
                Err(SiteError::Status {
                    path: CONFIG.to_owned(),
                    status: 500,
                }),
            )
            .respond(MENU, Ok(json!([{ "nome": "Lasanha" }])));
        let mut page = FakeSurface::full_page(0, 3);
        for i in 0..3 {
            page.set_attribute(Slot::MessagingControl(i), "href", "https://wa.me/000");
        }

        let (phase, _menu) = boot(&source, &settings, &mut page).await;

        for i in 0..3 {
            assert_eq!(page.attr(Slot::MessagingControl(i), "href"), None);
            assert_eq!(page.attr(Slot::MessagingControl(i), "aria-disabled"), Some("true"));
        }
        assert_eq!(phase.config, SiteConfig::default());
        assert_eq!(phase.images, ImageChains::idle());

        // menu still renders, with non-interactive order buttons
        let grid = &page.el(Slot::Grid).markup;
        assert!(grid.contains("Lasanha"));
        assert!(grid.contains(r#"aria-disabled="true""#));
        Ok(())
    }

    #[tokio::test]
    async fn non_object_config_counts_as_failure() -> anyhow::Result<()> {
        let settings = LoaderSettings::default();
        let source = StaticSource::new().respond(CONFIG, Ok(json!(["not", "a", "config"])));
        let mut page = FakeSurface::full_page(0, 1);

        let phase = PageLoader::new(&source, &settings).config_phase(&mut page).await;

        assert_eq!(phase.config, SiteConfig::default());
        assert_eq!(phase.images, ImageChains::idle());
        assert_eq!(page.attr(Slot::MessagingControl(0), "aria-disabled"), Some("true"));
        Ok(())
    }

    #[tokio::test]
    async fn menu_failure_shows_inline_message() -> anyhow::Result<()> {
        let settings = LoaderSettings::default();
        let source = StaticSource::new()
            .respond(CONFIG, Ok(json!({})))
            .respond(
                MENU,
                Err(SiteError::Parse {
                    path: MENU.to_owned(),
                    message: "expected value at line 1 column 1".to_owned(),
                }),
            );
        let mut page = FakeSurface::full_page(0, 0);

        let (_phase, menu) = boot(&source, &settings, &mut page).await;

        assert_eq!(page.el(Slot::Grid).markup, MENU_LOAD_ERROR);
        assert!(menu.items().is_empty());
        assert_eq!(menu.categories(), [CategoryFilter::All]);
        Ok(())
    }

    #[tokio::test]
    async fn grouped_menu_builds_filters_in_order() -> anyhow::Result<()> {
        let settings = LoaderSettings::default();
        let menu: Value = serde_json::from_str(
            r#"{"Entradas":[{"nome":"Bruschetta"}], "Bebidas":[{"nome":"Suco","categoria":"Sucos"}]}"#,
        )?;
        let source = StaticSource::new()
            .respond(CONFIG, Ok(json!({ "whatsapp": "5511" })))
            .respond(MENU, Ok(menu));
        let mut page = FakeSurface::full_page(0, 0);

        let (_phase, mut menu) = boot(&source, &settings, &mut page).await;

        assert_eq!(
            menu.categories(),
            [
                CategoryFilter::All,
                CategoryFilter::Named("Entradas".to_owned()),
                CategoryFilter::Named("Sucos".to_owned()),
            ]
        );
        let filters = &page.el(Slot::Filters).markup;
        let entradas = filters.find("Entradas").unwrap_or(usize::MAX);
        let sucos = filters.find("Sucos").unwrap_or(0);
        assert!(entradas < sucos);

        menu.on_filter_click(2, &mut page, &settings);
        let grid = &page.el(Slot::Grid).markup;
        assert!(grid.contains("Suco"));
        assert!(!grid.contains("Bruschetta"));
        Ok(())
    }

    #[tokio::test]
    async fn failing_hero_image_falls_back_once() -> anyhow::Result<()> {
        let settings = LoaderSettings::default();
        let source = StaticSource::new()
            .respond(CONFIG, Ok(json!({ "hero": { "image": "https://cdn.example/hero.jpg" } })))
            .respond(MENU, Ok(json!([])));
        let mut page = FakeSurface::full_page(0, 0);

        let (mut phase, _menu) = boot(&source, &settings, &mut page).await;

        assert_eq!(phase.images.hero.state(), FallbackState::Primary);
        phase.images.hero.on_load_error(&mut page);
        assert_eq!(page.attr(Slot::HeroImage, "src"), Some(settings.local_hero.as_str()));
        phase.images.hero.on_load_error(&mut page);
        phase.images.hero.on_load_error(&mut page);
        assert_eq!(page.attr(Slot::HeroImage, "src"), Some(settings.local_hero.as_str()));
        assert_eq!(phase.images.hero.state(), FallbackState::Exhausted);
        Ok(())
    }
}
