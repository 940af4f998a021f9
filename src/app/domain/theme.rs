use serde::{Deserialize, Serialize};

/// Color scheme of the editor and window chrome.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Default)]
pub enum ThemePreference {
    #[default]
    Dark,
    Light,
}

impl ThemePreference {
    pub fn toggled(self) -> Self {
        match self {
            Self::Dark => Self::Light,
            Self::Light => Self::Dark,
        }
    }

    pub fn is_dark(&self) -> bool {
        matches!(self, Self::Dark)
    }

    /// Get the syntect theme key used to color highlighted text
    pub fn syntax_theme_key(&self) -> &'static str {
        match self {
            Self::Dark => "base16-ocean.dark",
            Self::Light => "InspiredGitHub",
        }
    }

    pub fn display_name(&self) -> &'static str {
        match self {
            Self::Dark => "Dark",
            Self::Light => "Light",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_twice_is_identity() {
        assert_eq!(ThemePreference::Dark.toggled().toggled(), ThemePreference::Dark);
        assert_eq!(ThemePreference::Light.toggled(), ThemePreference::Dark);
    }

    #[test]
    fn test_theme_keys_exist_in_syntect_defaults() {
        let themes = syntect::highlighting::ThemeSet::load_defaults();
        for pref in [ThemePreference::Dark, ThemePreference::Light] {
            assert!(themes.themes.contains_key(pref.syntax_theme_key()));
        }
    }
}
