//! Startup driver that fills every gallery on the page
//!
//! Galleries are built one after another, and inside a gallery the candidate
//! images are probed one at a time. Nothing is cancelled once started.

use super::model::probe_image;
use contracts::domain::a002_gallery::aggregate::{GalleryConfig, GalleryStatus};
use contracts::domain::a002_gallery::scan::GalleryScan;
use gloo_timers::future::TimeoutFuture;
use leptos::prelude::*;
use wasm_bindgen_futures::spawn_local;

/// A configured gallery together with its rendering state
#[derive(Clone)]
pub struct GalleryEntry {
    pub config: GalleryConfig,
    pub status: RwSignal<GalleryStatus>,
}

impl GalleryEntry {
    pub fn new(config: GalleryConfig) -> Self {
        Self {
            config,
            status: RwSignal::new(GalleryStatus::Pending),
        }
    }
}

/// Probe all candidates of one gallery and publish the result.
pub async fn build_gallery(entry: &GalleryEntry) {
    let mut scan = GalleryScan::new(&entry.config);
    while let Some(url) = scan.next_candidate() {
        let result = probe_image(&url).await;
        scan.record(result);
    }

    log::debug!(
        "gallery project{}: {} of {} images found",
        entry.config.project,
        scan.found().len(),
        scan.attempted()
    );
    entry.status.set(scan.finish());
}

/// Build every gallery in page order, in the background.
pub fn spawn_gallery_builder(entries: Vec<GalleryEntry>) {
    spawn_local(async move {
        // Let the page render before the first request goes out.
        TimeoutFuture::new(0).await;

        for entry in &entries {
            build_gallery(entry).await;
        }
        log::info!("{} galleries built", entries.len());
    });
}
