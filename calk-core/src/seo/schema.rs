//! schema.org JSON-LD documents.
//!
//! Each generator returns a [`serde_json::Value`] ready to be embedded in a
//! `<script type="application/ld+json">` tag via [`to_json_ld`]. Dates are
//! passed in so output is reproducible.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::{Value, json};

use super::links::BASE_URL;
use crate::models::Language;

pub const SCHEMA_CONTEXT: &str = "https://schema.org";
pub const SITE_NAME: &str = "Calk.KG";
pub const SOFTWARE_VERSION: &str = "2026.1";
const SITE_ALTERNATE_NAME: &str = "Калькуляторы Кыргызстана";
const COUNTRY_NAME: &str = "Кыргызстан";
const SITE_DESCRIPTION: &str = "Самая полная коллекция онлайн-калькуляторов для жителей Кыргызстана";
const DATE_PUBLISHED: &str = "2026-01-15";

/// Common fields of a page-level schema.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct PageData<'a> {
    pub url: &'a str,
    pub title: &'a str,
    pub description: &'a str,
    pub language: Language,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PostalAddress {
    pub country: String,
    pub region: String,
    pub locality: String,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct OrganizationData {
    pub name: String,
    pub url: String,
    pub logo: String,
    pub description: String,
    pub contact_email: String,
    pub address: PostalAddress,
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct BreadcrumbItem {
    pub name: String,
    pub url: String,
}

impl BreadcrumbItem {
    pub fn new(
        name: impl Into<String>,
        url: impl Into<String>,
    ) -> Self {
        Self {
            name: name.into(),
            url: url.into(),
        }
    }
}

#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FaqEntry {
    pub question: String,
    pub answer: String,
}

fn site_organization() -> Value {
    json!({
        "@type": "Organization",
        "name": SITE_NAME,
        "url": BASE_URL,
    })
}

fn country() -> Value {
    json!({
        "@type": "Country",
        "name": COUNTRY_NAME,
    })
}

fn iso_date(date: NaiveDate) -> String {
    date.format("%Y-%m-%d").to_string()
}

/// Site-wide `WebSite` with a search action, for the home page.
pub fn website(description: &str) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebSite",
        "name": SITE_NAME,
        "alternateName": SITE_ALTERNATE_NAME,
        "url": BASE_URL,
        "description": description,
        "inLanguage": [Language::Ru.code(), Language::Ky.code()],
        "potentialAction": {
            "@type": "SearchAction",
            "target": {
                "@type": "EntryPoint",
                "urlTemplate": format!("{BASE_URL}/?search={{search_term_string}}"),
            },
            "query-input": "required name=search_term_string",
        },
        "publisher": site_organization(),
    })
}

pub fn organization(data: &OrganizationData) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "Organization",
        "name": data.name,
        "url": data.url,
        "logo": data.logo,
        "description": data.description,
        "contactPoint": {
            "@type": "ContactPoint",
            "email": data.contact_email,
            "contactType": "customer service",
            "availableLanguage": ["Russian", "Kyrgyz"],
        },
        "address": {
            "@type": "PostalAddress",
            "addressCountry": data.address.country,
            "addressRegion": data.address.region,
            "addressLocality": data.address.locality,
        },
        "areaServed": country(),
        "knowsLanguage": [Language::Ru.code(), Language::Ky.code()],
    })
}

/// Calculator page, typed as both `WebApplication` and `Calculator`.
pub fn calculator(
    page: &PageData<'_>,
    category: &str,
    date_modified: NaiveDate,
) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": ["WebApplication", "Calculator"],
        "name": page.title,
        "description": page.description,
        "url": page.url,
        "applicationCategory": "BusinessApplication",
        "operatingSystem": "Any",
        "browserRequirements": "Requires JavaScript",
        "inLanguage": page.language.code(),
        "isAccessibleForFree": true,
        "creator": site_organization(),
        "audience": {
            "@type": "Audience",
            "geographicArea": country(),
        },
        "about": {
            "@type": "Thing",
            "name": category,
        },
        "usageInfo": page.url,
        "softwareVersion": SOFTWARE_VERSION,
        "dateModified": iso_date(date_modified),
    })
}

/// Breadcrumb trail. Positions are 1-based.
pub fn breadcrumb_list(items: &[BreadcrumbItem]) -> Value {
    let elements: Vec<Value> = items
        .iter()
        .enumerate()
        .map(|(index, item)| {
            json!({
                "@type": "ListItem",
                "position": index + 1,
                "name": item.name,
                "item": item.url,
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "BreadcrumbList",
        "itemListElement": elements,
    })
}

/// Informational page.
pub fn web_page(
    page: &PageData<'_>,
    date_modified: NaiveDate,
) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "WebPage",
        "name": page.title,
        "description": page.description,
        "url": page.url,
        "inLanguage": page.language.code(),
        "isPartOf": {
            "@type": "WebSite",
            "name": SITE_NAME,
            "url": BASE_URL,
        },
        "author": site_organization(),
        "dateModified": iso_date(date_modified),
        "mainEntity": {
            "@type": "Thing",
            "name": page.title,
            "description": page.description,
        },
    })
}

pub fn about_page(page: &PageData<'_>) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "AboutPage",
        "name": page.title,
        "description": page.description,
        "url": page.url,
        "inLanguage": page.language.code(),
        "mainEntity": {
            "@type": "Organization",
            "name": SITE_NAME,
            "url": BASE_URL,
            "description": SITE_DESCRIPTION,
        },
        "author": site_organization(),
    })
}

pub fn faq_page(entries: &[FaqEntry]) -> Value {
    let questions: Vec<Value> = entries
        .iter()
        .map(|entry| {
            json!({
                "@type": "Question",
                "name": entry.question,
                "acceptedAnswer": {
                    "@type": "Answer",
                    "text": entry.answer,
                },
            })
        })
        .collect();

    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "FAQPage",
        "mainEntity": questions,
    })
}

/// Free finance tool listing. `features` are display names of the inputs.
pub fn software_application(
    page: &PageData<'_>,
    features: &[String],
) -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "SoftwareApplication",
        "name": page.title,
        "description": page.description,
        "url": page.url,
        "applicationCategory": "FinanceApplication",
        "operatingSystem": "Any",
        "browserRequirements": "Requires JavaScript",
        "softwareVersion": SOFTWARE_VERSION,
        "datePublished": DATE_PUBLISHED,
        "creator": site_organization(),
        "offers": {
            "@type": "Offer",
            "price": "0",
            "priceCurrency": "KGS",
            "availability": "https://schema.org/InStock",
        },
        "aggregateRating": {
            "@type": "AggregateRating",
            "ratingValue": "4.8",
            "reviewCount": "1250",
            "bestRating": "5",
            "worstRating": "1",
        },
        "featureList": features,
        "screenshot": format!("{}/preview.png", page.url),
    })
}

pub fn local_business() -> Value {
    json!({
        "@context": SCHEMA_CONTEXT,
        "@type": "LocalBusiness",
        "name": SITE_NAME,
        "description": "Онлайн калькуляторы для жителей Кыргызстана",
        "url": BASE_URL,
        "address": {
            "@type": "PostalAddress",
            "addressCountry": "KG",
            "addressRegion": "Чуйская область",
            "addressLocality": "Бишкек",
        },
        "geo": {
            "@type": "GeoCoordinates",
            "latitude": "42.8746",
            "longitude": "74.5698",
        },
        "areaServed": country(),
        "serviceType": "Финансовые калькуляторы и консультации",
    })
}

/// Pretty-printed JSON-LD text.
pub fn to_json_ld(schema: &Value) -> serde_json::Result<String> {
    serde_json::to_string_pretty(schema)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;

    use super::*;

    fn page() -> PageData<'static> {
        PageData {
            url: "https://calk.kg/calculator/salary",
            title: "Калькулятор зарплаты",
            description: "Расчет чистой зарплаты",
            language: Language::Ru,
        }
    }

    fn date() -> NaiveDate {
        NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()
    }

    // =========================================================================
    // calculator tests
    // =========================================================================

    #[test]
    fn calculator_has_both_types() {
        let schema = calculator(&page(), "Финансы", date());

        assert_eq!(schema["@type"], json!(["WebApplication", "Calculator"]));
        assert_eq!(schema["@context"], "https://schema.org");
    }

    #[test]
    fn calculator_uses_injected_date() {
        let schema = calculator(&page(), "Финансы", date());

        assert_eq!(schema["dateModified"], "2026-10-18");
    }

    #[test]
    fn calculator_carries_page_fields() {
        let ky_page = PageData {
            language: Language::Ky,
            ..page()
        };

        let schema = calculator(&ky_page, "Каржы", date());

        assert_eq!(schema["name"], "Калькулятор зарплаты");
        assert_eq!(schema["url"], "https://calk.kg/calculator/salary");
        assert_eq!(schema["usageInfo"], schema["url"]);
        assert_eq!(schema["inLanguage"], "ky");
        assert_eq!(schema["about"]["name"], "Каржы");
        assert_eq!(schema["isAccessibleForFree"], true);
    }

    // =========================================================================
    // breadcrumb tests
    // =========================================================================

    #[test]
    fn breadcrumb_positions_start_at_one() {
        let items = [
            BreadcrumbItem::new("Главная", "https://calk.kg"),
            BreadcrumbItem::new("Финансы", "https://calk.kg?category=finance"),
            BreadcrumbItem::new("Зарплата", "https://calk.kg/calculator/salary"),
        ];

        let schema = breadcrumb_list(&items);

        let positions: Vec<_> = schema["itemListElement"]
            .as_array()
            .unwrap()
            .iter()
            .map(|e| e["position"].as_u64().unwrap())
            .collect();
        assert_eq!(positions, vec![1, 2, 3]);
        assert_eq!(schema["itemListElement"][2]["item"], "https://calk.kg/calculator/salary");
    }

    #[test]
    fn empty_breadcrumb_list_has_no_elements() {
        let schema = breadcrumb_list(&[]);

        assert_eq!(schema["itemListElement"], json!([]));
    }

    // =========================================================================
    // other generator tests
    // =========================================================================

    #[test]
    fn website_has_search_action() {
        let schema = website("Онлайн калькуляторы");

        assert_eq!(
            schema["potentialAction"]["target"]["urlTemplate"],
            "https://calk.kg/?search={search_term_string}"
        );
        assert_eq!(schema["inLanguage"], json!(["ru", "ky"]));
    }

    #[test]
    fn organization_maps_address_and_contact() {
        let data = OrganizationData {
            name: "Calk.KG".to_string(),
            url: "https://calk.kg".to_string(),
            logo: "https://calk.kg/logo.png".to_string(),
            description: "Калькуляторы".to_string(),
            contact_email: "info@calk.kg".to_string(),
            address: PostalAddress {
                country: "KG".to_string(),
                region: "Чуйская область".to_string(),
                locality: "Бишкек".to_string(),
            },
        };

        let schema = organization(&data);

        assert_eq!(schema["contactPoint"]["email"], "info@calk.kg");
        assert_eq!(schema["address"]["addressLocality"], "Бишкек");
        assert_eq!(schema["areaServed"]["name"], "Кыргызстан");
    }

    #[test]
    fn web_page_is_part_of_site() {
        let schema = web_page(&page(), date());

        assert_eq!(schema["isPartOf"]["url"], "https://calk.kg");
        assert_eq!(schema["mainEntity"]["name"], "Калькулятор зарплаты");
        assert_eq!(schema["dateModified"], "2026-10-18");
    }

    #[test]
    fn about_page_describes_site() {
        let schema = about_page(&page());

        assert_eq!(schema["@type"], "AboutPage");
        assert_eq!(schema["mainEntity"]["@type"], "Organization");
    }

    #[test]
    fn faq_page_lists_questions() {
        let entries = [FaqEntry {
            question: "Сколько удерживают в Соцфонд?".to_string(),
            answer: "10% от начисленной зарплаты.".to_string(),
        }];

        let schema = faq_page(&entries);

        assert_eq!(schema["mainEntity"][0]["@type"], "Question");
        assert_eq!(
            schema["mainEntity"][0]["acceptedAnswer"]["text"],
            "10% от начисленной зарплаты."
        );
    }

    #[test]
    fn software_application_lists_features() {
        let features = vec!["Начисленная зарплата".to_string(), "Ставка налога".to_string()];

        let schema = software_application(&page(), &features);

        assert_eq!(schema["featureList"], json!(["Начисленная зарплата", "Ставка налога"]));
        assert_eq!(schema["offers"]["priceCurrency"], "KGS");
        assert_eq!(
            schema["screenshot"],
            "https://calk.kg/calculator/salary/preview.png"
        );
    }

    #[test]
    fn local_business_is_in_bishkek() {
        let schema = local_business();

        assert_eq!(schema["address"]["addressLocality"], "Бишкек");
        assert_eq!(schema["geo"]["latitude"], "42.8746");
    }

    #[test]
    fn to_json_ld_pretty_prints() {
        let text = to_json_ld(&json!({"@type": "Thing"})).unwrap();

        assert_eq!(text, "{\n  \"@type\": \"Thing\"\n}");
    }
}
