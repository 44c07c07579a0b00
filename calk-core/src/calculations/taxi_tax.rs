//! Tax for taxi drivers working through aggregator apps: a flat 1% of
//! declared income.

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::non_negative;
use crate::config::TaxiTaxConfig;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct TaxiTaxResult {
    pub income: Decimal,
    pub tax_amount: Decimal,
}

#[derive(Debug, Clone)]
pub struct TaxiTaxCalculator {
    config: TaxiTaxConfig,
}

impl TaxiTaxCalculator {
    pub fn new(config: TaxiTaxConfig) -> Self {
        Self { config }
    }

    pub fn calculate(
        &self,
        income: Decimal,
    ) -> TaxiTaxResult {
        let income = non_negative("income", income);
        TaxiTaxResult {
            income,
            tax_amount: income.saturating_mul(self.config.tax_rate),
        }
    }
}

/// Calculates the taxi driver tax at the default rate.
///
/// ```
/// use rust_decimal_macros::dec;
/// use calk_core::calculate_taxi_tax;
///
/// assert_eq!(calculate_taxi_tax(dec!(10000)).tax_amount, dec!(100));
/// ```
pub fn calculate_taxi_tax(income: Decimal) -> TaxiTaxResult {
    TaxiTaxCalculator::new(TaxiTaxConfig::default()).calculate(income)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    #[test]
    fn tax_is_one_percent_of_income() {
        for income in [dec!(0), dec!(1), dec!(10000), dec!(123456.78)] {
            let result = calculate_taxi_tax(income);

            assert_eq!(result.tax_amount, income * dec!(0.01));
        }
    }

    #[test]
    fn ten_thousand_income_pays_hundred() {
        let result = calculate_taxi_tax(dec!(10000));

        assert_eq!(
            result,
            TaxiTaxResult {
                income: dec!(10000),
                tax_amount: dec!(100),
            }
        );
    }

    #[test]
    fn negative_income_is_clamped_to_zero() {
        let result = calculate_taxi_tax(dec!(-500));

        assert_eq!(result, TaxiTaxResult::default());
    }

    #[test]
    fn custom_rate_is_applied() {
        let calculator = TaxiTaxCalculator::new(TaxiTaxConfig {
            tax_rate: dec!(0.02),
        });

        assert_eq!(calculator.calculate(dec!(5000)).tax_amount, dec!(100));
    }

    #[test]
    fn unvalidated_rate_saturates_instead_of_overflowing() {
        let calculator = TaxiTaxCalculator::new(TaxiTaxConfig { tax_rate: dec!(3) });

        assert_eq!(calculator.calculate(Decimal::MAX).tax_amount, Decimal::MAX);
    }

    #[test]
    fn calculation_is_idempotent() {
        assert_eq!(
            calculate_taxi_tax(dec!(31415.92)),
            calculate_taxi_tax(dec!(31415.92))
        );
    }
}
