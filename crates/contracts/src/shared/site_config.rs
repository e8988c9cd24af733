//! Page description: tabs, panels and the galleries inside them
//!
//! Loaded once at startup from JSON. The `selected` / `active` flags play the
//! role of the markup's initial state; nothing else picks a default tab.

use crate::domain::a002_gallery::aggregate::GalleryConfig;
use anyhow::{bail, Context, Result};
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SiteConfig {
    pub title: String,
    #[serde(default)]
    pub tagline: Option<String>,
    #[serde(default)]
    pub tabs: Vec<TabConfig>,
    #[serde(default)]
    pub panels: Vec<PanelConfig>,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct TabConfig {
    /// Id of the panel this tab reveals
    pub target: String,
    pub label: String,
    #[serde(default)]
    pub selected: bool,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PanelConfig {
    pub id: String,
    #[serde(default)]
    pub heading: Option<String>,
    #[serde(default)]
    pub active: bool,
    #[serde(default)]
    pub paragraphs: Vec<String>,
    #[serde(default)]
    pub galleries: Vec<GalleryConfig>,
}

impl SiteConfig {
    pub fn from_json(json: &str) -> Result<Self> {
        let config: SiteConfig =
            serde_json::from_str(json).context("Failed to parse site configuration")?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<()> {
        let mut ids = HashSet::new();
        for panel in &self.panels {
            if !ids.insert(panel.id.as_str()) {
                bail!("Duplicate panel id '{}'", panel.id);
            }
            for gallery in &panel.galleries {
                validate_project_id(&gallery.project)
                    .with_context(|| format!("Invalid gallery in panel '{}'", panel.id))?;
            }
        }
        Ok(())
    }

    /// All galleries in page order
    pub fn galleries(&self) -> impl Iterator<Item = &GalleryConfig> {
        self.panels.iter().flat_map(|p| p.galleries.iter())
    }
}

/// Project ids end up in asset paths, so only a safe subset is accepted
fn validate_project_id(project: &str) -> Result<()> {
    if project.is_empty() {
        bail!("Project id is empty");
    }
    if !project
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '-' || c == '_')
    {
        bail!("Project id '{}' contains unsupported characters", project);
    }
    Ok(())
}
