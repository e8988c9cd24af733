use crate::shared::assets;
use serde::{Deserialize, Serialize};

// ============================================================================
// Configuration
// ============================================================================

/// One project gallery on the page
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct GalleryConfig {
    /// Project identifier spliced into `project<ID>_<N>.jpg`
    pub project: String,

    /// Highest image number to probe; 0 disables probing
    #[serde(default)]
    pub max: u32,

    #[serde(default)]
    pub title: Option<String>,
}

impl GalleryConfig {
    pub fn new(project: impl Into<String>, max: u32) -> Self {
        Self {
            project: project.into(),
            max,
            title: None,
        }
    }

    /// Alt text of the `position`-th (1-based) image
    pub fn image_alt(&self, position: usize) -> String {
        format!("Project {} image {}", self.project, position)
    }

    /// Accessible label of the thumbnail button at `position` (1-based)
    pub fn thumb_label(position: usize) -> String {
        format!("Open image {}", position)
    }

    /// File the empty-gallery placeholder suggests adding
    pub fn placeholder_file(&self) -> String {
        assets::image_file_name(&self.project, 1)
    }

    /// Directory the empty-gallery placeholder points to
    pub fn placeholder_dir() -> String {
        format!("{}/", assets::IMAGES_DIR)
    }

    /// One thumbnail per discovered image, in order
    pub fn thumbnails(&self, images: &[String]) -> Vec<Thumbnail> {
        images
            .iter()
            .enumerate()
            .map(|(idx, url)| Thumbnail {
                idx,
                url: url.clone(),
                label: Self::thumb_label(idx + 1),
                alt: self.image_alt(idx + 1),
            })
            .collect()
    }
}

/// Rendered preview of one discovered image
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Thumbnail {
    /// Zero-based position in the gallery's image list
    pub idx: usize,
    pub url: String,
    pub label: String,
    pub alt: String,
}

// ============================================================================
// Probe outcome / build result
// ============================================================================

/// Outcome of loading one candidate URL
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ProbeResult {
    pub ok: bool,
    pub url: String,
}

impl ProbeResult {
    pub fn found(url: impl Into<String>) -> Self {
        Self {
            ok: true,
            url: url.into(),
        }
    }

    pub fn missing(url: impl Into<String>) -> Self {
        Self {
            ok: false,
            url: url.into(),
        }
    }
}

/// Rendering state of a gallery
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub enum GalleryStatus {
    /// Scan not finished yet; the gallery shows nothing
    #[default]
    Pending,
    /// Scan finished without a single image; a placeholder is shown
    Empty,
    /// Discovered images in ascending probe order
    Ready(Vec<String>),
}

impl GalleryStatus {
    pub fn from_images(images: Vec<String>) -> Self {
        if images.is_empty() {
            GalleryStatus::Empty
        } else {
            GalleryStatus::Ready(images)
        }
    }

    pub fn images(&self) -> &[String] {
        match self {
            GalleryStatus::Ready(images) => images,
            _ => &[],
        }
    }

    pub fn is_pending(&self) -> bool {
        matches!(self, GalleryStatus::Pending)
    }

    /// Serialized list kept on the gallery element (`data-images`).
    /// `None` while the scan is still running.
    pub fn images_json(&self) -> Option<String> {
        if self.is_pending() {
            return None;
        }
        Some(serde_json::to_string(self.images()).unwrap_or_else(|_| "[]".to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_config_defaults() {
        let config: GalleryConfig = serde_json::from_str(r#"{"project":"5"}"#).unwrap();
        assert_eq!(config.max, 0);
        assert_eq!(config.title, None);
        assert_eq!(config.image_alt(1), "Project 5 image 1");
    }

    #[test]
    fn test_placeholder_names_first_file() {
        let config = GalleryConfig::new("4", 0);
        assert_eq!(config.placeholder_file(), "project4_1.jpg");
        assert_eq!(GalleryConfig::placeholder_dir(), "assets/images/");
        assert!(config.thumbnails(&[]).is_empty());
    }

    #[test]
    fn test_status_images_json() {
        assert_eq!(GalleryStatus::Pending.images_json(), None);
        assert_eq!(GalleryStatus::Empty.images_json().as_deref(), Some("[]"));
        let status = GalleryStatus::from_images(vec!["a.jpg".to_string(), "b.jpg".to_string()]);
        assert_eq!(status.images_json().as_deref(), Some(r#"["a.jpg","b.jpg"]"#));
        assert_eq!(GalleryStatus::from_images(vec![]), GalleryStatus::Empty);
    }
}
