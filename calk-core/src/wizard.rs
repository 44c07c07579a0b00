//! Step-by-step input collection for the pension calculator.
//!
//! The wizard walks through four steps in a fixed order:
//!
//! ```text
//! Basic ──▶ Experience ──▶ Forecast ──▶ Results
//! ```
//!
//! Moving forward is guarded by [`PensionWizard::can_advance`]; moving back
//! is always allowed. While on `Results`, every input change recomputes the
//! forecast, so [`PensionWizard::results`] always reflects the latest input.
//!
//! # Example
//!
//! ```
//! use chrono::NaiveDate;
//! use calk_core::{Gender, PensionWizard, WizardStep};
//!
//! let today = NaiveDate::from_ymd_opt(2026, 10, 18).unwrap();
//! let mut wizard = PensionWizard::new(today);
//!
//! assert!(!wizard.can_advance());
//! wizard.set_birth_date(NaiveDate::from_ymd_opt(1975, 4, 2));
//! wizard.set_gender(Gender::Female);
//! assert!(wizard.next());
//! assert_eq!(wizard.step(), WizardStep::Experience);
//! ```

use chrono::{Datelike, NaiveDate};
use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::debug;

use crate::calculations::pension::{PensionCalculator, PensionInput, PensionResults, current_age};
use crate::config::PensionConfig;
use crate::input::parse_amount;
use crate::models::{EmploymentType, Gender, WorkPeriod, WorkPeriodId};

/// Salary pre-filled into a newly added work period.
const DEFAULT_PERIOD_SALARY: i64 = 50_000;

/// Years back from today a newly added work period starts.
const DEFAULT_PERIOD_YEARS: i32 = 5;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum WizardStep {
    #[default]
    Basic,
    Experience,
    Forecast,
    Results,
}

impl WizardStep {
    pub const ALL: [WizardStep; 4] = [
        WizardStep::Basic,
        WizardStep::Experience,
        WizardStep::Forecast,
        WizardStep::Results,
    ];

    pub fn next(self) -> Option<Self> {
        match self {
            Self::Basic => Some(Self::Experience),
            Self::Experience => Some(Self::Forecast),
            Self::Forecast => Some(Self::Results),
            Self::Results => None,
        }
    }

    pub fn prev(self) -> Option<Self> {
        match self {
            Self::Basic => None,
            Self::Experience => Some(Self::Basic),
            Self::Forecast => Some(Self::Experience),
            Self::Results => Some(Self::Forecast),
        }
    }

    /// Zero-based position, for progress indicators.
    pub fn index(self) -> usize {
        self as usize
    }

    /// Translation key of the step title.
    pub fn title_key(self) -> &'static str {
        match self {
            Self::Basic => "pension_step_basic",
            Self::Experience => "pension_step_experience",
            Self::Forecast => "pension_step_forecast",
            Self::Results => "pension_step_results",
        }
    }
}

/// Pension calculator session state.
#[derive(Debug, Clone)]
pub struct PensionWizard {
    calculator: PensionCalculator,
    today: NaiveDate,
    step: WizardStep,
    gender: Option<Gender>,
    birth_date: Option<NaiveDate>,
    work_periods: Vec<WorkPeriod>,
    next_period_id: u64,
    current_salary: String,
    retirement_age: u32,
    results: PensionResults,
}

impl PensionWizard {
    /// Starts a session with the default formula constants.
    pub fn new(today: NaiveDate) -> Self {
        Self::with_config(PensionConfig::default(), today)
    }

    pub fn with_config(
        config: PensionConfig,
        today: NaiveDate,
    ) -> Self {
        Self {
            retirement_age: config.male_retirement_age,
            calculator: PensionCalculator::new(config),
            today,
            step: WizardStep::Basic,
            gender: None,
            birth_date: None,
            work_periods: Vec::new(),
            next_period_id: 1,
            current_salary: String::new(),
            results: PensionResults::default(),
        }
    }

    // --- navigation ---

    pub fn step(&self) -> WizardStep {
        self.step
    }

    /// Whether the current step's input allows moving forward.
    pub fn can_advance(&self) -> bool {
        match self.step {
            WizardStep::Basic => self.birth_date.is_some() && self.gender.is_some(),
            WizardStep::Experience => true,
            WizardStep::Forecast => {
                !self.current_salary.trim().is_empty() && self.retirement_age > self.current_age()
            }
            WizardStep::Results => false,
        }
    }

    /// Moves to the next step if the guard allows. Returns whether it moved.
    pub fn next(&mut self) -> bool {
        if !self.can_advance() {
            return false;
        }
        let Some(next) = self.step.next() else {
            return false;
        };
        debug!(from = ?self.step, to = ?next, "pension wizard advanced");
        self.step = next;
        self.refresh();
        true
    }

    /// Moves one step back. Returns whether it moved.
    pub fn back(&mut self) -> bool {
        match self.step.prev() {
            Some(prev) => {
                self.step = prev;
                true
            }
            None => false,
        }
    }

    /// Clears all input and returns to the first step.
    pub fn reset(&mut self) {
        *self = Self::with_config(*self.calculator.config(), self.today);
    }

    // --- basic data ---

    pub fn gender(&self) -> Option<Gender> {
        self.gender
    }

    /// Selects the gender and resets the retirement age to its default.
    pub fn set_gender(
        &mut self,
        gender: Gender,
    ) {
        self.gender = Some(gender);
        self.retirement_age = self.calculator.config().retirement_age(gender);
        self.refresh();
    }

    pub fn birth_date(&self) -> Option<NaiveDate> {
        self.birth_date
    }

    pub fn set_birth_date(
        &mut self,
        birth_date: Option<NaiveDate>,
    ) {
        self.birth_date = birth_date;
        self.refresh();
    }

    /// Age in complete years, zero while no birth date is set.
    pub fn current_age(&self) -> u32 {
        self.birth_date
            .map(|birth| current_age(birth, self.today))
            .unwrap_or(0)
    }

    // --- work experience ---

    pub fn work_periods(&self) -> &[WorkPeriod] {
        &self.work_periods
    }

    /// Appends a period pre-filled with the last five years and a typical salary.
    pub fn add_work_period(&mut self) -> WorkPeriodId {
        let id = WorkPeriodId(self.next_period_id);
        self.next_period_id += 1;
        self.work_periods.push(WorkPeriod {
            id,
            start_month: 1,
            start_year: self.today.year() - DEFAULT_PERIOD_YEARS,
            end_month: self.today.month(),
            end_year: self.today.year(),
            salary: Decimal::from(DEFAULT_PERIOD_SALARY),
            employment_type: EmploymentType::Employee,
        });
        self.refresh();
        id
    }

    /// Edits a period in place. Returns `false` if no period has this id.
    pub fn update_work_period<F>(
        &mut self,
        id: WorkPeriodId,
        edit: F,
    ) -> bool
    where
        F: FnOnce(&mut WorkPeriod),
    {
        let Some(period) = self.work_periods.iter_mut().find(|p| p.id == id) else {
            return false;
        };
        edit(period);
        // The id is owned by the wizard.
        period.id = id;
        self.refresh();
        true
    }

    /// Removes a period. Returns `false` if no period has this id.
    pub fn remove_work_period(
        &mut self,
        id: WorkPeriodId,
    ) -> bool {
        let before = self.work_periods.len();
        self.work_periods.retain(|p| p.id != id);
        let removed = self.work_periods.len() != before;
        if removed {
            self.refresh();
        }
        removed
    }

    /// Total credited service across all periods, in months.
    pub fn total_service_months(&self) -> i64 {
        self.calculator.total_service_months(&self.work_periods)
    }

    // --- forecast ---

    /// Raw text of the current salary field.
    pub fn current_salary(&self) -> &str {
        &self.current_salary
    }

    pub fn set_current_salary(
        &mut self,
        value: impl Into<String>,
    ) {
        self.current_salary = value.into();
        self.refresh();
    }

    pub fn retirement_age(&self) -> u32 {
        self.retirement_age
    }

    pub fn set_retirement_age(
        &mut self,
        age: u32,
    ) {
        self.retirement_age = age;
        self.refresh();
    }

    // --- results ---

    /// Latest forecast. All zero until the `Results` step is reached.
    pub fn results(&self) -> &PensionResults {
        &self.results
    }

    /// Snapshot of the current input in engine form.
    pub fn to_input(&self) -> PensionInput {
        PensionInput {
            // An unset birth date counts as age zero.
            birth_date: self.birth_date.unwrap_or(self.today),
            gender: self.gender.unwrap_or(Gender::Male),
            retirement_age: self.retirement_age,
            work_periods: self.work_periods.clone(),
            current_salary: parse_amount(&self.current_salary),
        }
    }

    fn refresh(&mut self) {
        if self.step == WizardStep::Results {
            self.results = self.calculator.calculate(&self.to_input(), self.today);
        }
    }
}
