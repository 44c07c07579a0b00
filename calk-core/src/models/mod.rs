mod gender;
mod income_tax_rate;
mod language;
mod water;
mod work_period;

pub use gender::Gender;
pub use income_tax_rate::IncomeTaxRate;
pub use language::Language;
pub use water::{City, ConsumerCategory, WaterRate};
pub use work_period::{EmploymentType, WorkPeriod, WorkPeriodId, month_index};
