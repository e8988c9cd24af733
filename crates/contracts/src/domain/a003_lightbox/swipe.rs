use crate::enums::lightbox_command::LightboxCommand;

/// Minimal horizontal travel (CSS px) for a touch to count as a swipe
pub const SWIPE_THRESHOLD: f64 = 40.0;

/// Classify a finished gesture by its displacement.
///
/// Horizontal travel must dominate vertical travel and exceed the threshold;
/// swiping right goes back, swiping left goes forward.
pub fn classify_swipe(dx: f64, dy: f64) -> Option<LightboxCommand> {
    if dx.abs() > dy.abs() && dx.abs() > SWIPE_THRESHOLD {
        if dx > 0.0 {
            Some(LightboxCommand::Prev)
        } else {
            Some(LightboxCommand::Next)
        }
    } else {
        None
    }
}

/// Tracks one single-finger gesture between `touchstart` and `touchend`
#[derive(Debug, Clone, Copy, Default, PartialEq)]
pub struct TouchTracker {
    start_x: f64,
    start_y: f64,
    active: bool,
}

impl TouchTracker {
    pub fn new() -> Self {
        Self::default()
    }

    /// `touchstart`: only a single finger on an open lightbox starts a gesture
    pub fn begin(&mut self, touches: u32, x: f64, y: f64, lightbox_open: bool) {
        if !lightbox_open || touches != 1 {
            return;
        }
        self.active = true;
        self.start_x = x;
        self.start_y = y;
    }

    /// `touchend`: finish the gesture and classify it
    pub fn end(&mut self, changed_touches: u32, x: f64, y: f64) -> Option<LightboxCommand> {
        if !self.active {
            return None;
        }
        self.active = false;
        if changed_touches != 1 {
            return None;
        }
        classify_swipe(x - self.start_x, y - self.start_y)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_swipe() {
        assert_eq!(classify_swipe(-50.0, 5.0), Some(LightboxCommand::Next));
        assert_eq!(classify_swipe(50.0, -5.0), Some(LightboxCommand::Prev));
        assert_eq!(classify_swipe(10.0, 0.0), None);
        assert_eq!(classify_swipe(40.0, 0.0), None);
        assert_eq!(classify_swipe(60.0, 80.0), None);
    }

    #[test]
    fn test_tracker_gesture() {
        let mut t = TouchTracker::new();
        t.begin(1, 200.0, 100.0, true);
        assert_eq!(t.end(1, 150.0, 105.0), Some(LightboxCommand::Next));

        // second end without a start does nothing
        assert_eq!(t.end(1, 0.0, 0.0), None);
    }

    #[test]
    fn test_tracker_ignores_multitouch_and_closed() {
        let mut t = TouchTracker::new();
        t.begin(2, 0.0, 0.0, true);
        assert_eq!(t.end(1, 100.0, 0.0), None);
        t.begin(1, 0.0, 0.0, false);
        assert_eq!(t.end(1, 100.0, 0.0), None);

        // two fingers lifted at once still end the gesture
        t.begin(1, 0.0, 0.0, true);
        assert_eq!(t.end(2, 100.0, 0.0), None);
        assert_eq!(t.end(1, 100.0, 0.0), None);
    }
}
