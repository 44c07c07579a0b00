use serde::{Deserialize, Serialize};

/// Site language. Russian pages live at the root, Kyrgyz pages under `/ky`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Language {
    #[default]
    Ru,
    Ky,
}

impl Language {
    pub const PATH_PREFIX_KY: &'static str = "/ky";

    pub fn code(&self) -> &'static str {
        match self {
            Self::Ru => "ru",
            Self::Ky => "ky",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "ru" => Some(Self::Ru),
            "ky" => Some(Self::Ky),
            _ => None,
        }
    }

    /// Locale used in `og:locale`.
    pub fn og_locale(&self) -> &'static str {
        match self {
            Self::Ru => "ru_RU",
            Self::Ky => "ky_KG",
        }
    }

    /// Detects the language from a request path. Only a whole `/ky` segment
    /// counts, so `/kyrgyz` stays Russian.
    pub fn from_path(path: &str) -> Self {
        match path.strip_prefix(Self::PATH_PREFIX_KY) {
            Some(rest) if rest.is_empty() || rest.starts_with(['/', '?']) => Self::Ky,
            _ => Self::Ru,
        }
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    #[test]
    fn from_path_detects_kyrgyz_prefix() {
        assert_eq!(Language::from_path("/ky"), Language::Ky);
        assert_eq!(Language::from_path("/ky/calculator/water"), Language::Ky);
        assert_eq!(Language::from_path("/ky?category=finance"), Language::Ky);
    }

    #[test]
    fn from_path_defaults_to_russian() {
        assert_eq!(Language::from_path("/"), Language::Ru);
        assert_eq!(Language::from_path("/calculator/salary"), Language::Ru);
        assert_eq!(Language::from_path("/kyrgyz-news"), Language::Ru);
    }

    #[test]
    fn parse_accepts_codes_only() {
        assert_eq!(Language::parse("ky"), Some(Language::Ky));
        assert_eq!(Language::parse(Language::Ru.code()), Some(Language::Ru));
        assert_eq!(Language::parse("en"), None);
    }
}
