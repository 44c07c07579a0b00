//! Localized paths, canonical URLs and hreflang alternates.

use serde::Serialize;

use crate::models::Language;

/// Public origin of the site, without a trailing slash.
pub const BASE_URL: &str = "https://calk.kg";

/// Removes the Kyrgyz prefix from a path. The bare prefix maps to `/`.
pub fn strip_language_prefix(path: &str) -> &str {
    if Language::from_path(path) != Language::Ky {
        return path;
    }
    match &path[Language::PATH_PREFIX_KY.len()..] {
        "" => "/",
        rest => rest,
    }
}

/// Path of the same page in `language`.
///
/// ```
/// use calk_core::Language;
/// use calk_core::seo::localized_path;
///
/// assert_eq!(localized_path("/calculator/water", Language::Ky), "/ky/calculator/water");
/// assert_eq!(localized_path("/ky", Language::Ru), "/");
/// ```
pub fn localized_path(
    path: &str,
    language: Language,
) -> String {
    let clean = normalize(strip_language_prefix(path));
    match language {
        Language::Ru => clean,
        Language::Ky if clean == "/" => Language::PATH_PREFIX_KY.to_string(),
        Language::Ky => format!("{}{clean}", Language::PATH_PREFIX_KY),
    }
}

/// Absolute URL of the page in `language`. The home page has no trailing slash.
pub fn canonical_url(
    path: &str,
    language: Language,
) -> String {
    let localized = localized_path(path, language);
    if localized == "/" {
        BASE_URL.to_string()
    } else {
        format!("{BASE_URL}{localized}")
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct HreflangLink {
    /// `ru`, `ky` or `x-default`.
    pub hreflang: &'static str,
    pub href: String,
}

/// Alternate links for every language, plus `x-default` pointing at Russian.
pub fn hreflang_links(path: &str) -> [HreflangLink; 3] {
    let ru = canonical_url(path, Language::Ru);
    [
        HreflangLink {
            hreflang: Language::Ru.code(),
            href: ru.clone(),
        },
        HreflangLink {
            hreflang: Language::Ky.code(),
            href: canonical_url(path, Language::Ky),
        },
        HreflangLink {
            hreflang: "x-default",
            href: ru,
        },
    ]
}

fn normalize(path: &str) -> String {
    if path.starts_with('/') {
        path.to_string()
    } else {
        format!("/{path}")
    }
}
