//! Pension forecast under the three-part Social Fund formula.
//!
//! # Formula
//!
//! | Part | Description |
//! |------|-------------|
//! | Base | Flat 3 000 som once 180 months of service are credited |
//! | Insurance part 1 | Average pre-1996 salary × 1% × pre-1996 years (at most 25) |
//! | Insurance part 2 | Post-1996 and forecast contributions ÷ 180 months |
//!
//! Past contributions are 10% of each period's salary for every month from
//! January 1996 (or the period start, if later) to the period end. Future
//! contributions assume the current salary is paid until retirement.
//!
//! # Known simplifications
//!
//! These follow the published calculator and are kept on purpose:
//!
//! - Overlapping work periods are not merged; each counts its own months.
//! - The pre-1996 average salary is the plain mean over qualifying periods,
//!   not weighted by their length.
//! - A period spanning the cutoff counts January 1996 both as pre-1996
//!   service and as a contribution month.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use rust_decimal_macros::dec;
//! use calk_core::calculations::PensionInput;
//! use calk_core::{EmploymentType, Gender, WorkPeriod, WorkPeriodId, calculate_pension};
//!
//! let input = PensionInput {
//!     birth_date: NaiveDate::from_ymd_opt(1965, 6, 1).unwrap(),
//!     gender: Gender::Male,
//!     retirement_age: 63,
//!     work_periods: vec![WorkPeriod {
//!         id: WorkPeriodId(1),
//!         start_month: 1,
//!         start_year: 1990,
//!         end_month: 12,
//!         end_year: 1995,
//!         salary: dec!(1000),
//!         employment_type: EmploymentType::Employee,
//!     }],
//!     current_salary: dec!(0),
//! };
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//!
//! let result = calculate_pension(&input, today);
//!
//! assert_eq!(result.insurance_part1, dec!(60));
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::{debug, warn};

use crate::calculations::common::{non_negative, round_som};
use crate::config::PensionConfig;
use crate::models::{Gender, WorkPeriod};

/// Everything the pension formula depends on.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionInput {
    pub birth_date: NaiveDate,
    pub gender: Gender,
    pub retirement_age: u32,
    pub work_periods: Vec<WorkPeriod>,
    /// Monthly salary assumed from today until retirement.
    pub current_salary: Decimal,
}

/// Forecast monthly pension and its parts.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct PensionResults {
    pub base_part: Decimal,
    /// Credit for service before the reform cutoff.
    pub insurance_part1: Decimal,
    /// Accumulated contributions spread over the payout horizon.
    pub insurance_part2: Decimal,
    pub total_pension: Decimal,
    pub years_to_retirement: u32,
    /// Past plus forecast contributions.
    pub total_contributions: Decimal,
}

impl PensionResults {
    /// Amounts rounded to whole som for display.
    pub fn rounded(&self) -> Self {
        Self {
            base_part: round_som(self.base_part),
            insurance_part1: round_som(self.insurance_part1),
            insurance_part2: round_som(self.insurance_part2),
            total_pension: round_som(self.total_pension),
            total_contributions: round_som(self.total_contributions),
            ..*self
        }
    }
}

/// Service credited before the reform cutoff.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PreReformService {
    pub months: i64,
    /// Unweighted mean salary of the qualifying periods.
    pub average_salary: Decimal,
}

/// Complete years between `birth_date` and `today`, never negative.
///
/// ```
/// use chrono::NaiveDate;
/// use calk_core::calculations::pension::current_age;
///
/// let birth = NaiveDate::from_ymd_opt(1990, 10, 19).unwrap();
///
/// assert_eq!(current_age(birth, NaiveDate::from_ymd_opt(2026, 10, 18).unwrap()), 35);
/// assert_eq!(current_age(birth, NaiveDate::from_ymd_opt(2026, 10, 19).unwrap()), 36);
/// ```
pub fn current_age(
    birth_date: NaiveDate,
    today: NaiveDate,
) -> u32 {
    let mut age = today.year() - birth_date.year();
    if (today.month(), today.day()) < (birth_date.month(), birth_date.day()) {
        age -= 1;
    }
    if age < 0 {
        warn!(%birth_date, %today, "birth date lies in the future; age taken as zero");
        return 0;
    }
    age as u32
}

/// Pension calculator bound to a set of formula constants.
#[derive(Debug, Clone)]
pub struct PensionCalculator {
    config: PensionConfig,
}

impl PensionCalculator {
    pub fn new(config: PensionConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &PensionConfig {
        &self.config
    }

    /// Calculates the pension forecast as of `today`.
    pub fn calculate(
        &self,
        input: &PensionInput,
        today: NaiveDate,
    ) -> PensionResults {
        let age = current_age(input.birth_date, today);
        let years_to_retirement = input.retirement_age.saturating_sub(age);
        let current_salary = non_negative("current_salary", input.current_salary);

        let service_months = self.total_service_months(&input.work_periods);
        let pre_reform = self.pre_reform_service(&input.work_periods);
        let past = self.past_contributions(&input.work_periods);
        let future = self.future_contributions(current_salary, years_to_retirement);
        let total_contributions = past.saturating_add(future);

        let base_part = self.base_part(service_months);
        let insurance_part1 = self.insurance_part1(pre_reform);
        let insurance_part2 = self.insurance_part2(total_contributions);

        debug!(
            age,
            service_months,
            pre_reform_months = pre_reform.months,
            past_contributions = %past,
            future_contributions = %future,
            "pension forecast computed"
        );

        PensionResults {
            base_part,
            insurance_part1,
            insurance_part2,
            total_pension: base_part
                .saturating_add(insurance_part1)
                .saturating_add(insurance_part2),
            years_to_retirement,
            total_contributions,
        }
    }

    /// Sum of inclusive month counts over all periods. Overlaps count twice.
    pub fn total_service_months(
        &self,
        periods: &[WorkPeriod],
    ) -> i64 {
        periods
            .iter()
            .map(|period| {
                let months = period.months();
                if months <= 0 {
                    warn!(
                        id = period.id.0,
                        months, "work period ends before it starts"
                    );
                }
                months
            })
            .sum()
    }

    /// Months and average salary of the periods starting before the cutoff.
    ///
    /// Each qualifying period is counted up to the cutoff month inclusive.
    pub fn pre_reform_service(
        &self,
        periods: &[WorkPeriod],
    ) -> PreReformService {
        let cutoff = self.config.cutoff_index();
        let mut months = 0;
        let mut salary_sum = Decimal::ZERO;
        let mut count = 0u32;

        for period in periods.iter().filter(|p| p.start_index() < cutoff) {
            let end = period.end_index().min(cutoff);
            months += end - period.start_index() + 1;
            salary_sum = salary_sum.saturating_add(period.salary);
            count += 1;
        }

        let average_salary = if count > 0 {
            salary_sum / Decimal::from(count)
        } else {
            Decimal::ZERO
        };

        PreReformService {
            months,
            average_salary,
        }
    }

    /// Contributions paid for months from the cutoff onwards. Saturates at
    /// [`Decimal::MAX`].
    pub fn past_contributions(
        &self,
        periods: &[WorkPeriod],
    ) -> Decimal {
        let cutoff = self.config.cutoff_index();

        periods
            .iter()
            .filter(|p| p.end_index() >= cutoff)
            .map(|period| {
                let start = period.start_index().max(cutoff);
                let months = period.end_index() - start + 1;
                period
                    .salary
                    .saturating_mul(self.config.contribution_rate)
                    .saturating_mul(Decimal::from(months))
            })
            .fold(Decimal::ZERO, Decimal::saturating_add)
    }

    /// Contributions forecast from the current salary until retirement.
    /// Saturates at [`Decimal::MAX`].
    pub fn future_contributions(
        &self,
        current_salary: Decimal,
        years_to_retirement: u32,
    ) -> Decimal {
        current_salary
            .saturating_mul(self.config.contribution_rate)
            .saturating_mul(Decimal::from(12))
            .saturating_mul(Decimal::from(years_to_retirement))
    }

    fn base_part(
        &self,
        service_months: i64,
    ) -> Decimal {
        if service_months >= i64::from(self.config.min_service_months) {
            self.config.base_part
        } else {
            Decimal::ZERO
        }
    }

    fn insurance_part1(
        &self,
        service: PreReformService,
    ) -> Decimal {
        if service.months <= 0 {
            return Decimal::ZERO;
        }
        let years = (Decimal::from(service.months) / Decimal::from(12))
            .min(self.config.pre_reform_year_cap);
        service
            .average_salary
            .saturating_mul(self.config.pre_reform_accrual_rate)
            .saturating_mul(years)
    }

    fn insurance_part2(
        &self,
        total_contributions: Decimal,
    ) -> Decimal {
        total_contributions
            .checked_div(Decimal::from(self.config.payout_months))
            .unwrap_or_else(|| {
                warn!(
                    payout_months = self.config.payout_months,
                    "payout horizon is zero; insurance part 2 taken as zero"
                );
                Decimal::ZERO
            })
    }
}

/// Calculates a pension forecast with the default formula constants.
pub fn calculate_pension(
    input: &PensionInput,
    today: NaiveDate,
) -> PensionResults {
    PensionCalculator::new(PensionConfig::default()).calculate(input, today)
}
