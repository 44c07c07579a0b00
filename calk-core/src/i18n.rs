//! Translation lookup seam.
//!
//! The site text lives outside the core. Code that needs a display string
//! (page titles, breadcrumb names, step titles) takes a [`Translator`] and
//! asks it for a key; the formula engines never do.

use std::borrow::Cow;
use std::collections::HashMap;

use chrono::{Datelike, NaiveDate};

use crate::models::Language;

/// Resolves a translation key to display text.
pub trait Translator {
    fn t<'a>(
        &'a self,
        key: &'a str,
    ) -> Cow<'a, str>;
}

/// Map-backed catalog for one language. Missing keys fall back to the key.
impl Translator for HashMap<String, String> {
    fn t<'a>(
        &'a self,
        key: &'a str,
    ) -> Cow<'a, str> {
        match self.get(key) {
            Some(text) => Cow::Borrowed(text.as_str()),
            None => Cow::Borrowed(key),
        }
    }
}

/// Translator that returns every key unchanged.
#[derive(Debug, Clone, Copy, Default)]
pub struct KeyEcho;

impl Translator for KeyEcho {
    fn t<'a>(
        &'a self,
        key: &'a str,
    ) -> Cow<'a, str> {
        Cow::Borrowed(key)
    }
}

// Kyrgyz pages use the Russian month names as well.
const MONTHS: [&str; 12] = [
    "январь", "февраль", "март", "апрель", "май", "июнь", "июль", "август", "сентябрь",
    "октябрь", "ноябрь", "декабрь",
];

/// Formats the tariff validity month shown on utility pages, e.g. `"октябрь 2026"`.
pub fn format_current_month(
    language: Language,
    today: NaiveDate,
) -> String {
    let month = MONTHS[today.month0() as usize];
    match language {
        Language::Ru | Language::Ky => format!("{month} {}", today.year()),
    }
}
