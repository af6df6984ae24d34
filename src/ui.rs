/// Application screens
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum Screen {
    /// The single-page site
    #[default]
    Page,
    /// Shown after a render failure until the user reloads
    Fallback,
}

/// Where keyboard input goes on the page
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum PageFocus {
    /// Section navigation and scrolling
    #[default]
    Body,
    /// Typing into the contact form
    Form,
}
