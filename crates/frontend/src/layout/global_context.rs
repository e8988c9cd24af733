use contracts::domain::a001_tab_controller::aggregate::TabSet;
use contracts::shared::site_config::SiteConfig;
use leptos::prelude::*;

/// Page-wide state shared through context: which tab is selected and which
/// panel is visible.
#[derive(Clone, Copy)]
pub struct AppGlobalContext {
    pub tabs: RwSignal<TabSet>,
}

impl AppGlobalContext {
    pub fn new(config: &SiteConfig) -> Self {
        Self {
            tabs: RwSignal::new(TabSet::from_config(config)),
        }
    }

    pub fn activate_tab(&self, key: &str) {
        leptos::logging::log!("🔶 activate_tab: key='{}'", key);
        self.tabs.update(|set| set.activate(key));
    }

    pub fn aria_selected(&self, target: &str) -> &'static str {
        if self.tabs.with(|set| set.is_selected(target)) {
            "true"
        } else {
            "false"
        }
    }

    pub fn is_panel_visible(&self, panel_id: &str) -> bool {
        self.tabs.with(|set| set.is_visible(panel_id))
    }
}

pub fn use_global_context() -> AppGlobalContext {
    leptos::context::use_context::<AppGlobalContext>().expect("AppGlobalContext not found")
}
