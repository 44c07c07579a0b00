//! Formula constants for every calculator.
//!
//! The defaults are the rates in force for the 2026 tariff year. A deployment
//! can override any subset of them from TOML; keys that are left out keep
//! their default value. Decimal values are written as strings so they are
//! read exactly:
//!
//! ```
//! use calk_core::RateConfig;
//! use rust_decimal_macros::dec;
//!
//! let config = RateConfig::from_toml_str(
//!     r#"
//!     [salary]
//!     social_fund_rate = "0.12"
//!
//!     [pension]
//!     male_retirement_age = 65
//!     "#,
//! )
//! .unwrap();
//!
//! assert_eq!(config.salary.social_fund_rate, dec!(0.12));
//! assert_eq!(config.salary.standard_income_tax_percent, dec!(10));
//! assert_eq!(config.pension.male_retirement_age, 65);
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::models::{Gender, month_index};

/// Errors raised while loading or validating a [`RateConfig`].
#[derive(Debug, Error, PartialEq, Eq)]
pub enum RateConfigError {
    /// A fractional rate is outside `[0, 1]`.
    #[error("{field} must be between 0 and 1, got {value}")]
    RateOutOfRange { field: &'static str, value: Decimal },

    /// A percentage is outside `[0, 100]`.
    #[error("{field} must be between 0 and 100, got {value}")]
    PercentOutOfRange { field: &'static str, value: Decimal },

    /// An amount, count or cap that has to be strictly positive is not.
    #[error("{field} must be positive, got {value}")]
    NotPositive { field: &'static str, value: Decimal },

    /// An amount that cannot be negative is.
    #[error("{field} must not be negative, got {value}")]
    Negative { field: &'static str, value: Decimal },

    /// A retirement age outside any plausible range.
    #[error("retirement age must be between 1 and 120, got {0}")]
    InvalidRetirementAge(u32),

    /// The TOML source could not be deserialized.
    #[error("invalid rate configuration: {0}")]
    Parse(String),
}

/// Salary calculator constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct SalaryConfig {
    /// Employee Social Fund withholding as a fraction of gross pay.
    pub social_fund_rate: Decimal,
    /// General income tax rate, in percent.
    pub standard_income_tax_percent: Decimal,
    /// Reduced income tax rate for High Technology Park residents, in percent.
    pub pvt_income_tax_percent: Decimal,
}

impl Default for SalaryConfig {
    fn default() -> Self {
        Self {
            social_fund_rate: Decimal::new(10, 2),
            standard_income_tax_percent: Decimal::from(10),
            pvt_income_tax_percent: Decimal::from(5),
        }
    }
}

impl SalaryConfig {
    pub fn validate(&self) -> Result<(), RateConfigError> {
        check_rate("salary.social_fund_rate", self.social_fund_rate)?;
        check_percent(
            "salary.standard_income_tax_percent",
            self.standard_income_tax_percent,
        )?;
        check_percent("salary.pvt_income_tax_percent", self.pvt_income_tax_percent)
    }
}

/// Pension formula constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct PensionConfig {
    /// Flat base part paid once the minimum service is reached.
    pub base_part: Decimal,
    /// Minimum credited service for the base part, in months.
    pub min_service_months: u32,
    /// Year of the pension reform. Service before January of this year is
    /// credited through insurance part 1.
    pub reform_cutoff_year: i32,
    /// Share of the average pre-reform salary credited per year of service.
    pub pre_reform_accrual_rate: Decimal,
    /// Maximum number of pre-reform years credited.
    pub pre_reform_year_cap: Decimal,
    /// Expected payout horizon the accumulated contributions are spread over.
    pub payout_months: u32,
    /// Pension contribution withheld from salary.
    pub contribution_rate: Decimal,
    pub male_retirement_age: u32,
    pub female_retirement_age: u32,
}

impl Default for PensionConfig {
    fn default() -> Self {
        Self {
            base_part: Decimal::from(3000),
            min_service_months: 180,
            reform_cutoff_year: 1996,
            pre_reform_accrual_rate: Decimal::new(1, 2),
            pre_reform_year_cap: Decimal::from(25),
            payout_months: 180,
            contribution_rate: Decimal::new(10, 2),
            male_retirement_age: 63,
            female_retirement_age: 58,
        }
    }
}

impl PensionConfig {
    /// Statutory retirement age, used as the wizard default.
    pub fn retirement_age(
        &self,
        gender: Gender,
    ) -> u32 {
        match gender {
            Gender::Male => self.male_retirement_age,
            Gender::Female => self.female_retirement_age,
        }
    }

    /// Month index of January of the reform year.
    pub fn cutoff_index(&self) -> i64 {
        month_index(self.reform_cutoff_year, 1)
    }

    pub fn validate(&self) -> Result<(), RateConfigError> {
        check_non_negative("pension.base_part", self.base_part)?;
        check_rate(
            "pension.pre_reform_accrual_rate",
            self.pre_reform_accrual_rate,
        )?;
        check_positive("pension.pre_reform_year_cap", self.pre_reform_year_cap)?;
        check_positive("pension.payout_months", Decimal::from(self.payout_months))?;
        check_rate("pension.contribution_rate", self.contribution_rate)?;
        for age in [self.male_retirement_age, self.female_retirement_age] {
            if age == 0 || age > 120 {
                return Err(RateConfigError::InvalidRetirementAge(age));
            }
        }
        Ok(())
    }
}

/// Taxi driver tax constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct TaxiTaxConfig {
    /// Tax as a fraction of declared income.
    pub tax_rate: Decimal,
}

impl Default for TaxiTaxConfig {
    fn default() -> Self {
        Self {
            tax_rate: Decimal::new(1, 2),
        }
    }
}

impl TaxiTaxConfig {
    pub fn validate(&self) -> Result<(), RateConfigError> {
        check_rate("taxi.tax_rate", self.tax_rate)
    }
}

/// Water bill constants.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct WaterConfig {
    /// Upper bound of the monthly consumption input, in cubic meters.
    pub max_volume: Decimal,
}

impl Default for WaterConfig {
    fn default() -> Self {
        Self {
            max_volume: Decimal::from(500),
        }
    }
}

impl WaterConfig {
    pub fn validate(&self) -> Result<(), RateConfigError> {
        check_positive("water.max_volume", self.max_volume)
    }
}

/// All calculator constants, grouped by calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default, deny_unknown_fields)]
pub struct RateConfig {
    pub salary: SalaryConfig,
    pub pension: PensionConfig,
    pub taxi: TaxiTaxConfig,
    pub water: WaterConfig,
}

impl RateConfig {
    /// Parses a TOML document and validates the result.
    ///
    /// # Errors
    ///
    /// Returns [`RateConfigError::Parse`] for malformed TOML or unknown keys,
    /// and the matching validation error for out-of-range values.
    pub fn from_toml_str(source: &str) -> Result<Self, RateConfigError> {
        let config: Self =
            toml::from_str(source).map_err(|e| RateConfigError::Parse(e.to_string()))?;
        config.validate()?;
        Ok(config)
    }

    pub fn validate(&self) -> Result<(), RateConfigError> {
        self.salary.validate()?;
        self.pension.validate()?;
        self.taxi.validate()?;
        self.water.validate()
    }
}

fn check_rate(
    field: &'static str,
    value: Decimal,
) -> Result<(), RateConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE {
        return Err(RateConfigError::RateOutOfRange { field, value });
    }
    Ok(())
}

fn check_percent(
    field: &'static str,
    value: Decimal,
) -> Result<(), RateConfigError> {
    if value < Decimal::ZERO || value > Decimal::ONE_HUNDRED {
        return Err(RateConfigError::PercentOutOfRange { field, value });
    }
    Ok(())
}

fn check_positive(
    field: &'static str,
    value: Decimal,
) -> Result<(), RateConfigError> {
    if value <= Decimal::ZERO {
        return Err(RateConfigError::NotPositive { field, value });
    }
    Ok(())
}

fn check_non_negative(
    field: &'static str,
    value: Decimal,
) -> Result<(), RateConfigError> {
    if value < Decimal::ZERO {
        return Err(RateConfigError::Negative { field, value });
    }
    Ok(())
}
