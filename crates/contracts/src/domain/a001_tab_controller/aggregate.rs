use crate::shared::site_config::SiteConfig;

// ============================================================================
// Tab / Panel
// ============================================================================

/// Tab control; `target` is the id of the panel it reveals
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Tab {
    pub target: String,
    pub label: String,
    pub selected: bool,
}

impl Tab {
    /// Value for the `aria-selected` attribute
    pub fn aria_selected(&self) -> &'static str {
        if self.selected {
            "true"
        } else {
            "false"
        }
    }
}

/// Content panel switched by the tabs
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Panel {
    pub id: String,
    pub visible: bool,
}

// ============================================================================
// Tab set
// ============================================================================

/// Mutually exclusive tabs and the panels they control.
///
/// The initial state is taken as-is from the page description: nothing is
/// selected by default, and until the first `activate` call the tab and panel
/// flags may even disagree.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TabSet {
    tabs: Vec<Tab>,
    panels: Vec<Panel>,
}

impl TabSet {
    pub fn new(tabs: Vec<Tab>, panels: Vec<Panel>) -> Self {
        Self { tabs, panels }
    }

    pub fn from_config(config: &SiteConfig) -> Self {
        let tabs = config
            .tabs
            .iter()
            .map(|t| Tab {
                target: t.target.clone(),
                label: t.label.clone(),
                selected: t.selected,
            })
            .collect();
        let panels = config
            .panels
            .iter()
            .map(|p| Panel {
                id: p.id.clone(),
                visible: p.active,
            })
            .collect();
        Self::new(tabs, panels)
    }

    /// Select the tab targeting `tab_id` and show exactly the panel with that id.
    ///
    /// An unknown id deselects every tab and hides every panel.
    pub fn activate(&mut self, tab_id: &str) {
        for tab in &mut self.tabs {
            tab.selected = tab.target == tab_id;
        }
        for panel in &mut self.panels {
            panel.visible = panel.id == tab_id;
        }
    }

    pub fn tabs(&self) -> &[Tab] {
        &self.tabs
    }

    pub fn is_selected(&self, target: &str) -> bool {
        self.tabs.iter().any(|t| t.target == target && t.selected)
    }

    pub fn is_visible(&self, panel_id: &str) -> bool {
        self.panels.iter().any(|p| p.id == panel_id && p.visible)
    }

    pub fn visible_panels(&self) -> impl Iterator<Item = &Panel> {
        self.panels.iter().filter(|p| p.visible)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> TabSet {
        let tab = |target: &str, selected: bool| Tab {
            target: target.to_string(),
            label: target.to_uppercase(),
            selected,
        };
        let panel = |id: &str, visible: bool| Panel {
            id: id.to_string(),
            visible,
        };
        TabSet::new(
            vec![tab("about", true), tab("projects", false), tab("contact", false)],
            vec![panel("about", true), panel("projects", false), panel("contact", false)],
        )
    }

    #[test]
    fn test_activate_shows_exactly_one_panel() {
        let mut set = sample();
        for target in ["about", "projects", "contact"] {
            set.activate(target);
            let visible: Vec<&str> = set.visible_panels().map(|p| p.id.as_str()).collect();
            assert_eq!(visible, vec![target]);
            for tab in set.tabs() {
                assert_eq!(tab.selected, tab.target == target);
            }
        }
    }

    #[test]
    fn test_activate_unknown_hides_everything() {
        let mut set = sample();
        set.activate("missing");
        assert_eq!(set.visible_panels().count(), 0);
        assert!(set.tabs().iter().all(|t| !t.selected));
        assert!(set.tabs().iter().all(|t| t.aria_selected() == "false"));
    }

    #[test]
    fn test_from_config_keeps_markup_flags() {
        let config = SiteConfig::from_json(
            r#"{ "title": "t",
                 "tabs": [ { "target": "a", "label": "A" }, { "target": "b", "label": "B" } ],
                 "panels": [ { "id": "a" }, { "id": "b", "active": true } ] }"#,
        )
        .unwrap();
        let mut set = TabSet::from_config(&config);
        assert!(set.tabs().iter().all(|t| !t.selected));
        assert!(set.is_visible("b"));

        set.activate("a");
        assert!(set.is_selected("a"));
        assert!(set.is_visible("a"));
        assert!(!set.is_visible("b"));
    }

    #[test]
    fn test_initial_state_is_not_forced() {
        let set = TabSet::new(
            vec![Tab {
                target: "a".to_string(),
                label: "A".to_string(),
                selected: false,
            }],
            vec![
                Panel {
                    id: "a".to_string(),
                    visible: false,
                },
                Panel {
                    id: "b".to_string(),
                    visible: true,
                },
            ],
        );
        assert!(!set.is_selected("a"));
        assert!(set.is_visible("b"));
        assert!(!set.is_visible("a"));
    }
}
