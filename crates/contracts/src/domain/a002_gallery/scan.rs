//! Sequential probe queue for one gallery
//!
//! The queue hands out one candidate URL at a time and only moves on once the
//! outcome of that candidate has been recorded, so a driver cannot issue the
//! probes in parallel by accident.

use super::aggregate::{GalleryConfig, GalleryStatus, ProbeResult};
use crate::shared::assets;

#[derive(Debug, Clone)]
pub struct GalleryScan {
    project: String,
    max: u32,
    next_index: u32,
    in_flight: Option<String>,
    found: Vec<String>,
}

impl GalleryScan {
    pub fn new(config: &GalleryConfig) -> Self {
        Self {
            project: config.project.clone(),
            max: config.max,
            next_index: 1,
            in_flight: None,
            found: Vec::new(),
        }
    }

    /// Candidate to probe next, or `None` once all `max` indices were tried.
    ///
    /// While a candidate is awaiting `record`, the same candidate is returned
    /// again.
    pub fn next_candidate(&mut self) -> Option<String> {
        if let Some(url) = &self.in_flight {
            return Some(url.clone());
        }
        if self.next_index > self.max {
            return None;
        }
        let url = assets::image_url(&self.project, self.next_index);
        self.next_index += 1;
        self.in_flight = Some(url.clone());
        Some(url)
    }

    /// Record the outcome of the in-flight candidate.
    ///
    /// Results for any other URL are ignored.
    pub fn record(&mut self, result: ProbeResult) {
        if self.in_flight.as_deref() != Some(result.url.as_str()) {
            return;
        }
        self.in_flight = None;
        if result.ok {
            self.found.push(result.url);
        }
    }

    /// Number of indices handed out so far
    pub fn attempted(&self) -> u32 {
        self.next_index - 1
    }

    pub fn found(&self) -> &[String] {
        &self.found
    }

    pub fn finish(self) -> GalleryStatus {
        GalleryStatus::from_images(self.found)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn run(config: &GalleryConfig, exists: impl Fn(u32) -> bool) -> (GalleryStatus, u32) {
        let mut scan = GalleryScan::new(config);
        let mut probes = 0;
        while let Some(url) = scan.next_candidate() {
            probes += 1;
            let index = probes;
            let result = if exists(index) {
                ProbeResult::found(url)
            } else {
                ProbeResult::missing(url)
            };
            scan.record(result);
        }
        (scan.finish(), probes)
    }

    #[test]
    fn test_scan_keeps_order_and_skips_gaps() {
        let config = GalleryConfig::new("1", 5);
        let (status, probes) = run(&config, |i| matches!(i, 1 | 3 | 4));
        assert_eq!(probes, 5);
        assert_eq!(
            status.images(),
            &[
                "assets/images/project1_1.jpg".to_string(),
                "assets/images/project1_3.jpg".to_string(),
                "assets/images/project1_4.jpg".to_string(),
            ]
        );
    }

    #[test]
    fn test_scan_result_thumbnails() {
        let config = GalleryConfig::new("1", 5);
        let (status, _) = run(&config, |i| matches!(i, 1 | 3 | 4));
        let thumbs = config.thumbnails(status.images());
        assert_eq!(thumbs.len(), 3);

        let labels: Vec<&str> = thumbs.iter().map(|t| t.label.as_str()).collect();
        assert_eq!(labels, vec!["Open image 1", "Open image 2", "Open image 3"]);
        let idx: Vec<usize> = thumbs.iter().map(|t| t.idx).collect();
        assert_eq!(idx, vec![0, 1, 2]);
        assert_eq!(thumbs[1].url, "assets/images/project1_3.jpg");
        assert_eq!(thumbs[2].alt, "Project 1 image 3");
    }

    #[test]
    fn test_scan_empty_results() {
        let (status, probes) = run(&GalleryConfig::new("1", 0), |_| true);
        assert_eq!(probes, 0);
        assert_eq!(status, GalleryStatus::Empty);

        let (status, probes) = run(&GalleryConfig::new("1", 4), |_| false);
        assert_eq!(probes, 4);
        assert_eq!(status, GalleryStatus::Empty);
    }

    #[test]
    fn test_scan_waits_for_record() {
        let mut scan = GalleryScan::new(&GalleryConfig::new("9", 2));
        let first = scan.next_candidate().unwrap();
        assert_eq!(scan.next_candidate().as_deref(), Some(first.as_str()));
        assert_eq!(scan.attempted(), 1);

        // stale result for an URL that is not in flight
        scan.record(ProbeResult::found("assets/images/project9_2.jpg"));
        assert!(scan.found().is_empty());

        scan.record(ProbeResult::found(first.clone()));
        assert_eq!(scan.found(), &[first]);
        assert_eq!(
            scan.next_candidate().as_deref(),
            Some("assets/images/project9_2.jpg")
        );
    }
}
