use crate::enums::lightbox_command::LightboxCommand;

/// Wrap `idx` into `[0, len)`, for negative and out-of-range values alike.
/// Returns `None` for an empty sequence.
pub fn normalize_index(idx: i64, len: usize) -> Option<usize> {
    if len == 0 {
        return None;
    }
    let n = len as i64;
    Some((((idx % n) + n) % n) as usize)
}

/// Modal image viewer state.
///
/// `Closed` is the initial state. The image list is a snapshot handed over by
/// the gallery on `open`; navigation only ever moves the index.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct LightboxState {
    images: Vec<String>,
    index: usize,
    open: bool,
}

impl LightboxState {
    pub fn new() -> Self {
        Self::default()
    }

    /// Open (or re-open) with a fresh list, starting at `start` (wrapped).
    pub fn open(&mut self, images: Vec<String>, start: i64) {
        self.images = images;
        self.index = 0;
        self.open = true;
        self.show_index(start);
    }

    /// Hide the viewer and drop the list. No-op when already closed.
    pub fn close(&mut self) {
        self.open = false;
        self.images.clear();
        self.index = 0;
    }

    /// Move to `idx` (wrapped). Returns `false` when there is nothing to show.
    pub fn show_index(&mut self, idx: i64) -> bool {
        match normalize_index(idx, self.images.len()) {
            Some(normalized) => {
                self.index = normalized;
                true
            }
            None => false,
        }
    }

    pub fn prev(&mut self) -> bool {
        self.show_index(self.index as i64 - 1)
    }

    pub fn next(&mut self) -> bool {
        self.show_index(self.index as i64 + 1)
    }

    /// Run a keyboard/touch command. Ignored while closed.
    pub fn apply(&mut self, command: LightboxCommand) {
        if !self.open {
            return;
        }
        match command {
            LightboxCommand::Close => self.close(),
            LightboxCommand::Prev => {
                self.prev();
            }
            LightboxCommand::Next => {
                self.next();
            }
        }
    }

    pub fn is_open(&self) -> bool {
        self.open
    }

    pub fn index(&self) -> usize {
        self.index
    }

    /// Source of the displayed image; empty when closed or nothing to show
    pub fn image_src(&self) -> &str {
        self.images.get(self.index).map(String::as_str).unwrap_or("")
    }

    /// Prev/next controls are only useful with more than one image
    pub fn nav_visible(&self) -> bool {
        self.images.len() > 1
    }

    /// Value for the `aria-hidden` attribute
    pub fn aria_hidden(&self) -> &'static str {
        if self.open {
            "false"
        } else {
            "true"
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn images(n: usize) -> Vec<String> {
        (1..=n).map(|i| format!("img{}.jpg", i)).collect()
    }

    #[test]
    fn test_normalize_index() {
        assert_eq!(normalize_index(-1, 3), Some(2));
        assert_eq!(normalize_index(3, 3), Some(0));
        assert_eq!(normalize_index(7, 3), Some(1));
        assert_eq!(normalize_index(-7, 3), Some(2));
        assert_eq!(normalize_index(0, 1), Some(0));
        assert_eq!(normalize_index(5, 0), None);
        for idx in -20..20 {
            let n = normalize_index(idx, 4).unwrap();
            assert!(n < 4);
        }
    }

    #[test]
    fn test_open_wraps_start_and_navigates() {
        let mut lb = LightboxState::new();
        assert!(!lb.is_open());
        assert_eq!(lb.aria_hidden(), "true");

        lb.open(images(3), 4);
        assert!(lb.is_open());
        assert_eq!(lb.aria_hidden(), "false");
        assert_eq!(lb.index(), 1);
        assert_eq!(lb.image_src(), "img2.jpg");

        lb.next();
        lb.next();
        assert_eq!(lb.image_src(), "img1.jpg");
        lb.prev();
        assert_eq!(lb.image_src(), "img3.jpg");
    }

    #[test]
    fn test_nav_visibility() {
        let mut lb = LightboxState::new();
        lb.open(images(1), 0);
        assert!(!lb.nav_visible());
        lb.next();
        assert_eq!(lb.index(), 0);

        lb.open(images(2), 0);
        assert!(lb.nav_visible());
    }

    #[test]
    fn test_close_resets_state() {
        let mut lb = LightboxState::new();
        lb.open(images(5), 3);
        lb.close();
        assert!(!lb.is_open());
        assert!(!lb.nav_visible());
        assert!(!lb.next());
        assert_eq!(lb.index(), 0);
        assert_eq!(lb.image_src(), "");

        // idempotent
        lb.close();
        assert_eq!(lb, LightboxState::new());

        lb.open(images(4), 2);
        assert_eq!(lb.index(), 2);
        assert_eq!(lb.image_src(), "img3.jpg");
    }

    #[test]
    fn test_empty_open_is_inert() {
        let mut lb = LightboxState::new();
        lb.open(Vec::new(), 3);
        assert!(lb.is_open());
        assert!(!lb.next());
        assert!(!lb.prev());
        assert_eq!(lb.index(), 0);
        assert_eq!(lb.image_src(), "");
        assert!(!lb.nav_visible());
    }

    #[test]
    fn test_commands_ignored_while_closed() {
        let mut lb = LightboxState::new();
        lb.apply(LightboxCommand::Next);
        assert_eq!(lb, LightboxState::new());

        lb.open(images(3), 0);
        lb.apply(LightboxCommand::Prev);
        assert_eq!(lb.index(), 2);
        lb.apply(LightboxCommand::Close);
        assert!(!lb.is_open());
    }
}
