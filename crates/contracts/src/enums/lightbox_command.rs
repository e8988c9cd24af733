/// Navigation commands understood by the lightbox
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LightboxCommand {
    Close,
    Prev,
    Next,
}

impl LightboxCommand {
    /// Map a `KeyboardEvent.key` value to a command
    pub fn from_key(key: &str) -> Option<Self> {
        match key {
            "Escape" => Some(LightboxCommand::Close),
            "ArrowLeft" => Some(LightboxCommand::Prev),
            "ArrowRight" => Some(LightboxCommand::Next),
            _ => None,
        }
    }

    /// Accessible label of the matching control
    pub fn aria_label(&self) -> &'static str {
        match self {
            LightboxCommand::Close => "Close",
            LightboxCommand::Prev => "Previous image",
            LightboxCommand::Next => "Next image",
        }
    }
}
