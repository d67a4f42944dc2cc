//! Light/dark theme state.
//!
//! DESIGN
//! ======
//! The theme is a two-state machine with a single unconditional `toggle`
//! transition. It is persisted as the boolean `dark` flag, so conversion to and
//! from `bool` is lossless in both directions.

#[cfg(test)]
#[path = "theme_test.rs"]
mod theme_test;

/// Current visual theme of the page.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq, Hash)]
pub enum Theme {
    /// Server-rendered default until the stored preference is resolved.
    #[default]
    Light,
    Dark,
}

impl Theme {
    /// Build a theme from the persisted `dark` flag.
    pub fn from_dark(dark: bool) -> Self {
        if dark { Self::Dark } else { Self::Light }
    }

    pub fn is_dark(self) -> bool {
        matches!(self, Self::Dark)
    }

    /// The other theme.
    #[must_use]
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Lowercase name for log lines.
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

impl From<bool> for Theme {
    fn from(dark: bool) -> Self {
        Self::from_dark(dark)
    }
}

impl From<Theme> for bool {
    fn from(theme: Theme) -> Self {
        theme.is_dark()
    }
}

/// Pick the initial `dark` flag: a stored value wins, otherwise the OS answer.
pub fn resolve_initial_theme(stored: Option<bool>, os_preference: bool) -> bool {
    stored.unwrap_or(os_preference)
}
