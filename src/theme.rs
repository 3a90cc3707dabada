//! Colour theme preference. The browser binding lives in `frontend::theme`.

pub const THEME_KEY: &str = "riverfolio-theme";

/// Theme actually painted on the document.
#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum Theme {
    Light,
    Dark,
}

impl Theme {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
        }
    }
}

/// What the visitor asked for. `System` defers to `prefers-color-scheme`.
#[derive(Clone, Copy, Debug, Default, PartialEq, Eq)]
pub enum ThemePreference {
    Light,
    Dark,
    #[default]
    System,
}

impl ThemePreference {
    pub fn as_str(self) -> &'static str {
        match self {
            Self::Light => "light",
            Self::Dark => "dark",
            Self::System => "system",
        }
    }

    pub fn from_str(value: &str) -> Option<Self> {
        match value.trim() {
            "light" => Some(Self::Light),
            "dark" => Some(Self::Dark),
            "system" => Some(Self::System),
            _ => None,
        }
    }

    /// Order used by the header toggle.
    pub fn next(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::System,
            Self::System => Self::Light,
        }
    }

    pub fn resolve(self, system_prefers_dark: bool) -> Theme {
        match self {
            Self::Light => Theme::Light,
            Self::Dark => Theme::Dark,
            Self::System if system_prefers_dark => Theme::Dark,
            Self::System => Theme::Light,
        }
    }

    pub fn toggle_label(self) -> String {
        let next = self.next().as_str();
        format!("Switch to {next} theme")
    }

    pub fn icon(self) -> &'static str {
        match self {
            Self::Light => "☀",
            Self::Dark => "☾",
            Self::System => "◐",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn storage_strings_round_trip() {
        for preference in [
            ThemePreference::Light,
            ThemePreference::Dark,
            ThemePreference::System,
        ] {
            assert_eq!(ThemePreference::from_str(preference.as_str()), Some(preference));
        }
        assert_eq!(ThemePreference::from_str("sepia"), None);
        assert_eq!(ThemePreference::from_str(""), None);
    }

    #[test]
    fn system_follows_the_media_query() {
        assert_eq!(ThemePreference::System.resolve(true), Theme::Dark);
        assert_eq!(ThemePreference::System.resolve(false), Theme::Light);
        assert_eq!(ThemePreference::Light.resolve(true), Theme::Light);
        assert_eq!(ThemePreference::Dark.resolve(false), Theme::Dark);
    }

    #[test]
    fn toggle_cycles_through_all_three() {
        let start = ThemePreference::default();
        assert_eq!(start, ThemePreference::System);
        assert_eq!(start.next().next().next(), start);
        assert_eq!(start.toggle_label(), "Switch to light theme");
    }
}
