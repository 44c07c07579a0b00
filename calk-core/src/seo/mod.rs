//! Search-engine metadata for calculator pages: schema.org JSON-LD,
//! canonical URLs and hreflang alternates.

pub mod links;
pub mod pages;
pub mod schema;

pub use links::{BASE_URL, HreflangLink, canonical_url, hreflang_links, localized_path, strip_language_prefix};
pub use pages::{CalculatorPage, PageCategory, PageMeta, breadcrumbs, page_schemas};
pub use schema::to_json_ld;
