use contracts::domain::a003_lightbox::aggregate::LightboxState;
use contracts::domain::a003_lightbox::swipe::TouchTracker;
use contracts::enums::lightbox_command::LightboxCommand;
use leptos::prelude::*;

/// Reactive wrapper around the lightbox state machine.
///
/// Every input (thumbnails, controls, keyboard, swipes) goes through
/// `open` / `close` / `prev` / `next`.
#[derive(Clone, Copy)]
pub struct LightboxService {
    state: RwSignal<LightboxState>,
    touch: StoredValue<TouchTracker>,
}

impl LightboxService {
    pub fn new() -> Self {
        Self {
            state: RwSignal::new(LightboxState::new()),
            touch: StoredValue::new(TouchTracker::new()),
        }
    }

    pub fn open(&self, images: Vec<String>, start: i64) {
        log::debug!("lightbox open: {} images, start {}", images.len(), start);
        self.state.update(|s| s.open(images, start));
    }

    pub fn close(&self) {
        if !self.state.with_untracked(|s| s.is_open()) {
            return;
        }
        log::debug!("lightbox close");
        self.state.update(|s| s.close());
    }

    pub fn prev(&self) {
        self.state.update(|s| {
            s.prev();
        });
    }

    pub fn next(&self) {
        self.state.update(|s| {
            s.next();
        });
    }

    /// Keyboard/swipe entry point; ignored while closed.
    pub fn apply(&self, command: LightboxCommand) {
        if !self.state.with_untracked(|s| s.is_open()) {
            return;
        }
        if command == LightboxCommand::Close {
            log::debug!("lightbox close");
        }
        self.state.update(|s| s.apply(command));
    }

    pub fn touch_start(&self, touches: u32, x: f64, y: f64) {
        let open = self.state.with_untracked(|s| s.is_open());
        self.touch.update_value(|t| t.begin(touches, x, y, open));
    }

    pub fn touch_end(&self, changed_touches: u32, x: f64, y: f64) {
        let mut command = None;
        self.touch
            .update_value(|t| command = t.end(changed_touches, x, y));
        if let Some(command) = command {
            self.apply(command);
        }
    }

    pub fn is_open(&self) -> bool {
        self.state.with(|s| s.is_open())
    }

    pub fn image_src(&self) -> String {
        self.state.with(|s| s.image_src().to_string())
    }

    pub fn nav_visible(&self) -> bool {
        self.state.with(|s| s.nav_visible())
    }

    pub fn aria_hidden(&self) -> &'static str {
        self.state.with(|s| s.aria_hidden())
    }
}

impl Default for LightboxService {
    fn default() -> Self {
        Self::new()
    }
}

pub fn use_lightbox() -> LightboxService {
    leptos::context::use_context::<LightboxService>().expect("LightboxService not found")
}
