use crate::domain::a002_gallery::builder::{spawn_gallery_builder, GalleryEntry};
use crate::domain::a003_lightbox::service::LightboxService;
use crate::layout::global_context::AppGlobalContext;
use crate::layout::Shell;
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

const SITE_CONFIG: &str = include_str!("../site.json");

fn load_config() -> SiteConfig {
    match SiteConfig::from_json(SITE_CONFIG) {
        Ok(config) => config,
        Err(e) => {
            log::error!("{:#}", e);
            SiteConfig::default()
        }
    }
}

#[component]
pub fn App() -> impl IntoView {
    let config = load_config();

    // Tab/panel state for the whole page
    provide_context(AppGlobalContext::new(&config));

    provide_context(LightboxService::new());

    let galleries: Vec<Vec<GalleryEntry>> = config
        .panels
        .iter()
        .map(|panel| panel.galleries.iter().cloned().map(GalleryEntry::new).collect())
        .collect();
    spawn_gallery_builder(galleries.iter().flatten().cloned().collect());

    view! {
        <Shell config=config galleries=galleries />
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_bundled_config_is_valid() {
        let config = SiteConfig::from_json(SITE_CONFIG).unwrap();
        assert!(!config.tabs.is_empty());
        assert!(config.galleries().count() > 0);
        for tab in &config.tabs {
            assert!(config.panels.iter().any(|p| p.id == tab.target));
        }
    }
}
