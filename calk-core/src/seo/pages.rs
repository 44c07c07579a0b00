//! Calculator page descriptors.
//!
//! A [`CalculatorPage`] knows its URL slug, translation keys and schema
//! properties. [`page_schemas`] and [`PageMeta::for_calculator`] turn it into
//! the JSON-LD and head metadata the page template embeds.

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};
use serde_json::Value;

use super::links::{BASE_URL, HreflangLink, canonical_url, hreflang_links};
use super::schema::{self, BreadcrumbItem, PageData, SITE_NAME};
use crate::i18n::Translator;
use crate::models::Language;

/// Home page group a calculator is listed under.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum PageCategory {
    Finance,
    Utilities,
}

impl PageCategory {
    /// Value of the `category` query parameter on the home page.
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Finance => "finance",
            Self::Utilities => "utilities",
        }
    }

    pub fn name_key(&self) -> &'static str {
        match self {
            Self::Finance => "nav_finance",
            Self::Utilities => "nav_utilities",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum CalculatorPage {
    Salary,
    Pension,
    Water,
    TaxiTax,
}

impl CalculatorPage {
    pub const ALL: [CalculatorPage; 4] = [
        CalculatorPage::Salary,
        CalculatorPage::Pension,
        CalculatorPage::Water,
        CalculatorPage::TaxiTax,
    ];

    pub fn slug(&self) -> &'static str {
        match self {
            Self::Salary => "salary",
            Self::Pension => "pension",
            Self::Water => "water",
            Self::TaxiTax => "taxi-tax",
        }
    }

    /// Unprefixed path, e.g. `/calculator/water`.
    pub fn path(&self) -> String {
        format!("/calculator/{}", self.slug())
    }

    pub fn title_key(&self) -> &'static str {
        match self {
            Self::Salary => "salary_calc_title",
            Self::Pension => "pension_calc_title",
            Self::Water => "water_calc_title",
            Self::TaxiTax => "taxi_calc_title",
        }
    }

    pub fn subtitle_key(&self) -> &'static str {
        match self {
            Self::Salary => "salary_calc_subtitle",
            Self::Pension => "pension_calc_subtitle",
            Self::Water => "water_calc_subtitle",
            Self::TaxiTax => "taxi_calc_subtitle",
        }
    }

    pub fn category(&self) -> PageCategory {
        match self {
            Self::Water => PageCategory::Utilities,
            Self::Salary | Self::Pension | Self::TaxiTax => PageCategory::Finance,
        }
    }

    /// Names of the form inputs.
    pub fn input_properties(&self) -> &'static [&'static str] {
        match self {
            Self::Salary => &["grossSalary", "taxRate"],
            Self::Pension => &["birthDate", "workExperience", "currentSalary", "retirementAge"],
            Self::Water => &["consumption", "city", "category"],
            Self::TaxiTax => &["income"],
        }
    }

    /// Names of the computed outputs.
    pub fn output_properties(&self) -> &'static [&'static str] {
        match self {
            Self::Salary => &["netSalary", "socialFund", "incomeTax"],
            Self::Pension => &["basePart", "insurancePart1", "insurancePart2", "totalPension"],
            Self::Water => &["waterCost", "sewerageCost", "totalCost"],
            Self::TaxiTax => &["taxAmount"],
        }
    }

    /// Translation keys of the features listed in the `SoftwareApplication`
    /// schema. Empty for pages that don't publish one.
    pub fn feature_keys(&self) -> &'static [&'static str] {
        match self {
            Self::Salary => &["salary_input_gross", "salary_tax_rate"],
            Self::Pension | Self::Water | Self::TaxiTax => &[],
        }
    }

    pub fn og_image(&self) -> String {
        format!("{BASE_URL}/og-images/{}.png", self.slug())
    }
}

/// Head metadata of a page in one language.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct PageMeta {
    /// Document title, suffixed with the site name.
    pub title: String,
    pub description: String,
    pub canonical: String,
    pub hreflang: [HreflangLink; 3],
    pub og_locale: &'static str,
    pub og_image: String,
    pub og_type: &'static str,
}

impl PageMeta {
    pub fn for_calculator(
        page: CalculatorPage,
        language: Language,
        translator: &dyn Translator,
    ) -> Self {
        let path = page.path();
        Self {
            title: format!("{} - {SITE_NAME}", translator.t(page.title_key())),
            description: translator.t(page.subtitle_key()).into_owned(),
            canonical: canonical_url(&path, language),
            hreflang: hreflang_links(&path),
            og_locale: language.og_locale(),
            og_image: page.og_image(),
            og_type: "website",
        }
    }
}

/// Breadcrumb trail Home → Category → Page.
pub fn breadcrumbs(
    page: CalculatorPage,
    language: Language,
    translator: &dyn Translator,
) -> Vec<BreadcrumbItem> {
    let home = canonical_url("/", language);
    let category = page.category();
    vec![
        BreadcrumbItem::new(translator.t("nav_home"), home.as_str()),
        BreadcrumbItem::new(
            translator.t(category.name_key()),
            format!("{home}?category={}", category.as_str()),
        ),
        BreadcrumbItem::new(
            translator.t(page.title_key()),
            canonical_url(&page.path(), language),
        ),
    ]
}

/// JSON-LD documents embedded in a calculator page: the calculator schema,
/// a `SoftwareApplication` where the page lists features, and breadcrumbs.
pub fn page_schemas(
    page: CalculatorPage,
    language: Language,
    translator: &dyn Translator,
    today: NaiveDate,
) -> Vec<Value> {
    let url = canonical_url(&page.path(), language);
    let title = translator.t(page.title_key());
    let description = translator.t(page.subtitle_key());
    let category = translator.t(page.category().name_key());
    let data = PageData {
        url: &url,
        title: &title,
        description: &description,
        language,
    };

    let mut schemas = vec![schema::calculator(&data, &category, today)];
    if !page.feature_keys().is_empty() {
        let features: Vec<String> = page
            .feature_keys()
            .iter()
            .map(|key| translator.t(key).into_owned())
            .collect();
        schemas.push(schema::software_application(&data, &features));
    }
    schemas.push(schema::breadcrumb_list(&breadcrumbs(page, language, translator)));
    schemas
}
