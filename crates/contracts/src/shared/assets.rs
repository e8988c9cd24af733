//! Naming contract for project gallery images
//!
//! Images live in `assets/images/` and are named `project<ID>_<N>.jpg`,
//! where `<N>` is 1-based and never zero-padded.

/// Directory (relative to the page) holding project images
pub const IMAGES_DIR: &str = "assets/images";

/// Query parameter appended to probe requests to defeat the browser cache
pub const PROBE_PARAM: &str = "probe";

/// File name of the `index`-th image of a project
/// Example: ("7", 2) -> "project7_2.jpg"
pub fn image_file_name(project: &str, index: u32) -> String {
    format!("project{}_{}.jpg", project, index)
}

/// Page-relative URL of the `index`-th image of a project
/// Example: ("7", 2) -> "assets/images/project7_2.jpg"
pub fn image_url(project: &str, index: u32) -> String {
    format!("{}/{}", IMAGES_DIR, image_file_name(project, index))
}

/// URL actually requested when probing `url`.
///
/// `stamp` must differ between calls (the caller passes the current time in
/// milliseconds), otherwise a cached failure could mask a newly added file.
pub fn probe_url(url: &str, stamp: u64) -> String {
    let separator = if url.contains('?') { '&' } else { '?' };
    format!("{}{}{}={}", url, separator, PROBE_PARAM, stamp)
}
