//! Gross-to-net salary calculation.
//!
//! | Step | Description |
//! |------|-------------|
//! | 1    | Social Fund contribution: gross × 10% |
//! | 2    | Taxable base: gross − Social Fund |
//! | 3    | Income tax: taxable base × rate (10%, or 5% under PVT) |
//! | 4    | Net salary: gross − Social Fund − income tax |
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calk_core::{IncomeTaxRate, calculate_salary};
//!
//! let result = calculate_salary(dec!(50000), IncomeTaxRate::Standard);
//!
//! assert_eq!(result.social_fund, dec!(5000));
//! assert_eq!(result.taxable_base, dec!(45000));
//! assert_eq!(result.income_tax, dec!(4500));
//! assert_eq!(result.net_salary, dec!(40500));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

use crate::calculations::common::{non_negative, round_som, share_percent};
use crate::config::SalaryConfig;
use crate::models::IncomeTaxRate;

/// Breakdown of a monthly salary.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct SalaryResults {
    pub gross_amount: Decimal,
    /// Employee Social Fund withholding (step 1).
    pub social_fund: Decimal,
    /// Gross minus Social Fund (step 2).
    pub taxable_base: Decimal,
    /// Income tax on the taxable base (step 3).
    pub income_tax: Decimal,
    /// Take-home pay (step 4).
    pub net_salary: Decimal,
}

impl SalaryResults {
    /// Social Fund plus income tax.
    pub fn total_deductions(&self) -> Decimal {
        self.social_fund + self.income_tax
    }

    pub fn net_percent(&self) -> Decimal {
        share_percent(self.net_salary, self.gross_amount)
    }

    pub fn social_fund_percent(&self) -> Decimal {
        share_percent(self.social_fund, self.gross_amount)
    }

    pub fn income_tax_percent(&self) -> Decimal {
        share_percent(self.income_tax, self.gross_amount)
    }

    /// Every amount rounded to whole som for display.
    pub fn rounded(&self) -> Self {
        Self {
            gross_amount: round_som(self.gross_amount),
            social_fund: round_som(self.social_fund),
            taxable_base: round_som(self.taxable_base),
            income_tax: round_som(self.income_tax),
            net_salary: round_som(self.net_salary),
        }
    }
}

/// Salary calculator bound to a set of withholding rates.
#[derive(Debug, Clone)]
pub struct SalaryCalculator {
    config: SalaryConfig,
}

impl SalaryCalculator {
    pub fn new(config: SalaryConfig) -> Self {
        Self { config }
    }

    /// Calculates the salary breakdown for a gross monthly amount.
    ///
    /// Zero or negative gross yields the all-zero result.
    pub fn calculate(
        &self,
        gross: Decimal,
        rate: IncomeTaxRate,
    ) -> SalaryResults {
        let gross = non_negative("gross", gross);
        if gross.is_zero() {
            return SalaryResults::default();
        }

        let social_fund = self.social_fund(gross);
        let taxable_base = gross.saturating_sub(social_fund);
        let income_tax = self.income_tax(taxable_base, rate);
        let net_salary = taxable_base.saturating_sub(income_tax);

        SalaryResults {
            gross_amount: gross,
            social_fund,
            taxable_base,
            income_tax,
            net_salary,
        }
    }

    fn social_fund(
        &self,
        gross: Decimal,
    ) -> Decimal {
        gross.saturating_mul(self.config.social_fund_rate)
    }

    fn income_tax(
        &self,
        taxable_base: Decimal,
        rate: IncomeTaxRate,
    ) -> Decimal {
        taxable_base.saturating_mul(rate.percent(&self.config) / Decimal::ONE_HUNDRED)
    }
}

/// Calculates a salary breakdown with the default rates.
pub fn calculate_salary(
    gross: Decimal,
    rate: IncomeTaxRate,
) -> SalaryResults {
    SalaryCalculator::new(SalaryConfig::default()).calculate(gross, rate)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;

    fn assert_balances(result: &SalaryResults) {
        assert_eq!(
            result.net_salary + result.social_fund + result.income_tax,
            result.gross_amount
        );
        assert_eq!(result.taxable_base, result.gross_amount - result.social_fund);
    }

    #[test]
    fn standard_rate_breakdown() {
        let result = calculate_salary(dec!(50000), IncomeTaxRate::Standard);

        assert_eq!(
            result,
            SalaryResults {
                gross_amount: dec!(50000),
                social_fund: dec!(5000),
                taxable_base: dec!(45000),
                income_tax: dec!(4500),
                net_salary: dec!(40500),
            }
        );
    }

    #[test]
    fn pvt_rate_halves_income_tax() {
        let result = calculate_salary(dec!(50000), IncomeTaxRate::Pvt);

        assert_eq!(result.social_fund, dec!(5000));
        assert_eq!(result.income_tax, dec!(2250));
        assert_eq!(result.net_salary, dec!(42750));
    }

    #[test]
    fn zero_gross_yields_all_zero_result() {
        for rate in [IncomeTaxRate::Standard, IncomeTaxRate::Pvt] {
            let result = calculate_salary(Decimal::ZERO, rate);

            assert_eq!(result, SalaryResults::default());
        }
    }

    #[test]
    fn negative_gross_is_treated_as_zero() {
        let result = calculate_salary(dec!(-100), IncomeTaxRate::Standard);

        assert_eq!(result, SalaryResults::default());
    }

    #[test]
    fn parts_sum_to_gross_for_fractional_amounts() {
        for gross in [dec!(0.01), dec!(1234.56), dec!(99999.99), dec!(1000000)] {
            for rate in [IncomeTaxRate::Standard, IncomeTaxRate::Pvt] {
                let result = calculate_salary(gross, rate);

                assert_balances(&result);
                assert_eq!(result.social_fund, gross * dec!(0.10));
            }
        }
    }

    #[test]
    fn calculation_is_idempotent() {
        let first = calculate_salary(dec!(73456.78), IncomeTaxRate::Standard);
        let second = calculate_salary(dec!(73456.78), IncomeTaxRate::Standard);

        assert_eq!(first, second);
    }

    #[test]
    fn custom_social_fund_rate_is_applied() {
        let calculator = SalaryCalculator::new(SalaryConfig {
            social_fund_rate: dec!(0.12),
            ..SalaryConfig::default()
        });

        let result = calculator.calculate(dec!(10000), IncomeTaxRate::Standard);

        assert_eq!(result.social_fund, dec!(1200));
        assert_eq!(result.income_tax, dec!(880));
        assert_balances(&result);
    }

    #[test]
    fn unvalidated_rate_saturates_instead_of_overflowing() {
        let calculator = SalaryCalculator::new(SalaryConfig {
            social_fund_rate: dec!(2),
            ..SalaryConfig::default()
        });

        let result = calculator.calculate(Decimal::MAX, IncomeTaxRate::Standard);

        assert_eq!(result.social_fund, Decimal::MAX);
        assert_eq!(result.taxable_base, Decimal::ZERO);
        assert_eq!(result.net_salary, Decimal::ZERO);
    }

    #[test]
    fn largest_gross_is_accepted() {
        let result = calculate_salary(Decimal::MAX, IncomeTaxRate::Pvt);

        assert_eq!(result.gross_amount, Decimal::MAX);
        assert_eq!(result.social_fund, Decimal::MAX * dec!(0.10));
        assert!(result.net_salary > Decimal::ZERO);
    }

    #[test]
    fn shares_of_gross() {
        let result = calculate_salary(dec!(50000), IncomeTaxRate::Standard);

        assert_eq!(result.net_percent(), dec!(81));
        assert_eq!(result.social_fund_percent(), dec!(10));
        assert_eq!(result.income_tax_percent(), dec!(9));
        assert_eq!(result.total_deductions(), dec!(9500));
    }

    #[test]
    fn shares_of_zero_result_are_zero() {
        let result = SalaryResults::default();

        assert_eq!(result.net_percent(), Decimal::ZERO);
        assert_eq!(result.income_tax_percent(), Decimal::ZERO);
    }

    #[test]
    fn rounded_uses_whole_som() {
        let result = calculate_salary(dec!(12345.67), IncomeTaxRate::Standard).rounded();

        assert_eq!(result.gross_amount, dec!(12346));
        assert_eq!(result.social_fund, dec!(1235));
        assert_eq!(result.net_salary, dec!(10000));
    }
}
