//! ThemePreference domain model.

use serde::{Deserialize, Serialize};
use strum::{Display, EnumString};

/// The active color theme.
///
/// Exactly one value is active at any time. Stored as `"light"` / `"dark"`.
#[derive(
    Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize, Display, EnumString,
)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase", ascii_case_insensitive)]
pub enum ThemePreference {
    Light,
    Dark,
}

impl ThemePreference {
    /// Resolves the startup theme.
    ///
    /// Precedence: explicit stored value, then the OS color-scheme hint, then `Dark`.
    pub fn resolve(stored: Option<Self>, system_hint: Option<Self>) -> Self {
        stored.or(system_hint).unwrap_or(Self::Dark)
    }

    /// Returns the other theme.
    pub fn toggled(self) -> Self {
        match self {
            Self::Light => Self::Dark,
            Self::Dark => Self::Light,
        }
    }

    /// Browser chrome color matching this theme.
    pub fn meta_color(self) -> &'static str {
        match self {
            Self::Light => "#ffffff",
            Self::Dark => "#121212",
        }
    }
}

/// Who decided the stored theme.
///
/// A `System` value was written back from the startup resolution and may
/// still follow OS color-scheme changes; a `User` value never does.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize, Display, EnumString)]
#[serde(rename_all = "lowercase")]
#[strum(serialize_all = "lowercase")]
pub enum ThemeSource {
    System,
    User,
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::str::FromStr;

    #[test]
    fn test_resolve_precedence() {
        use ThemePreference::*;
        assert_eq!(ThemePreference::resolve(None, Some(Dark)), Dark);
        assert_eq!(ThemePreference::resolve(None, Some(Light)), Light);
        assert_eq!(ThemePreference::resolve(None, None), Dark);
        assert_eq!(ThemePreference::resolve(Some(Light), Some(Dark)), Light);
        assert_eq!(ThemePreference::resolve(Some(Dark), Some(Light)), Dark);
    }

    #[test]
    fn test_toggle_is_involution() {
        for theme in [ThemePreference::Light, ThemePreference::Dark] {
            assert_ne!(theme.toggled(), theme);
            assert_eq!(theme.toggled().toggled(), theme);
        }
    }

    #[test]
    fn test_parse_and_display() {
        assert_eq!(ThemePreference::from_str("dark").unwrap(), ThemePreference::Dark);
        assert_eq!(ThemePreference::from_str("Light").unwrap(), ThemePreference::Light);
        assert!(ThemePreference::from_str("sepia").is_err());
        assert_eq!(ThemePreference::Light.to_string(), "light");
        assert_eq!(
            serde_json::to_string(&ThemePreference::Dark).unwrap(),
            "\"dark\""
        );
    }

    #[test]
    fn test_meta_color() {
        assert_eq!(ThemePreference::Light.meta_color(), "#ffffff");
        assert_eq!(ThemePreference::Dark.meta_color(), "#121212");
    }
}
