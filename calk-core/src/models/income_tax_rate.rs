use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::config::SalaryConfig;

/// Income tax regime selectable on the salary calculator.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum IncomeTaxRate {
    /// General regime, 10%.
    #[default]
    Standard,
    /// High Technology Park residents, 5%.
    Pvt,
}

impl IncomeTaxRate {
    /// Maps the percentage offered by the rate selector (10 or 5) to a regime.
    pub fn from_percent(percent: u32) -> Option<Self> {
        match percent {
            10 => Some(Self::Standard),
            5 => Some(Self::Pvt),
            _ => None,
        }
    }

    /// Rate in percent under the given configuration.
    pub fn percent(
        &self,
        config: &SalaryConfig,
    ) -> Decimal {
        match self {
            Self::Standard => config.standard_income_tax_percent,
            Self::Pvt => config.pvt_income_tax_percent,
        }
    }
}
