pub mod footer;
pub mod global_context;
pub mod header;

use crate::domain::a001_tab_controller::ui::TabPanel;
use crate::domain::a002_gallery::builder::GalleryEntry;
use crate::domain::a003_lightbox::ui::Lightbox;
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

/// Page shell.
///
/// ```text
/// +------------------------------------------+
/// |  Header (title, tab bar)                  |
/// +------------------------------------------+
/// |  Panels (one visible at a time)           |
/// +------------------------------------------+
/// |  Footer (year)                            |
/// +------------------------------------------+
///   Lightbox overlay (hidden until opened)
/// ```
///
/// `galleries` is aligned with `config.panels`.
#[component]
pub fn Shell(config: SiteConfig, galleries: Vec<Vec<GalleryEntry>>) -> impl IntoView {
    let SiteConfig {
        title,
        tagline,
        panels,
        ..
    } = config;

    view! {
        <header::Header title=title.clone() tagline=tagline />
        <main class="site-main">
            {panels
                .into_iter()
                .zip(galleries)
                .map(|(panel, galleries)| view! { <TabPanel panel=panel galleries=galleries /> })
                .collect_view()}
        </main>
        <footer::Footer owner=title />
        <Lightbox />
    }
}
