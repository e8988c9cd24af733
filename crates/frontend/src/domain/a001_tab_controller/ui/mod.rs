//! Tab bar and the panels it switches
//!
//! Tabs carry `data-tab` with the target panel id and `aria-selected`;
//! panels toggle the `is-active` class.

use crate::domain::a002_gallery::builder::GalleryEntry;
use crate::domain::a002_gallery::ui::Gallery;
use crate::layout::global_context::use_global_context;
use contracts::shared::site_config::PanelConfig;
use leptos::prelude::*;

#[component]
pub fn TabBar() -> impl IntoView {
    let ctx = use_global_context();
    let tabs = ctx.tabs.with_untracked(|set| set.tabs().to_vec());

    view! {
        <nav class="tabs" role="tablist">
            {tabs
                .into_iter()
                .map(|tab| {
                    let target = tab.target.clone();
                    let target_for_aria = tab.target.clone();
                    view! {
                        <button
                            class="tab"
                            role="tab"
                            data-tab=tab.target
                            aria-selected=move || ctx.aria_selected(&target_for_aria)
                            on:click=move |_| ctx.activate_tab(&target)
                        >
                            {tab.label}
                        </button>
                    }
                })
                .collect_view()}
        </nav>
    }
}

/// One content panel; visible only while its tab is selected.
#[component]
pub fn TabPanel(panel: PanelConfig, galleries: Vec<GalleryEntry>) -> impl IntoView {
    let ctx = use_global_context();
    let panel_id = panel.id.clone();

    view! {
        <section
            class="panel"
            role="tabpanel"
            id=panel.id
            class:is-active=move || ctx.is_panel_visible(&panel_id)
        >
            {panel.heading.map(|heading| view! { <h2>{heading}</h2> })}
            {panel
                .paragraphs
                .into_iter()
                .map(|text| view! { <p>{text}</p> })
                .collect_view()}
            {galleries
                .into_iter()
                .map(|entry| view! { <Gallery entry=entry /> })
                .collect_view()}
        </section>
    }
}
