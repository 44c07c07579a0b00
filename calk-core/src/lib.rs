pub mod calculations;
pub mod config;
pub mod i18n;
pub mod input;
pub mod models;
pub mod seo;
pub mod tariffs;
pub mod wizard;

pub use calculations::{
    PensionResults, SalaryResults, TaxiTaxResult, WaterResults, calculate_pension,
    calculate_salary, calculate_taxi_tax, calculate_water_bill,
};
pub use config::{RateConfig, RateConfigError};
pub use i18n::{KeyEcho, Translator};
pub use models::*;
pub use tariffs::WaterTariffTable;
pub use wizard::{PensionWizard, WizardStep};
