use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum EmploymentType {
    #[default]
    Employee,
    Entrepreneur,
    Farmer,
}

impl EmploymentType {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Employee => "employee",
            Self::Entrepreneur => "entrepreneur",
            Self::Farmer => "farmer",
        }
    }

    pub fn parse(s: &str) -> Option<Self> {
        match s {
            "employee" => Some(Self::Employee),
            "entrepreneur" => Some(Self::Entrepreneur),
            "farmer" => Some(Self::Farmer),
            _ => None,
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
pub struct WorkPeriodId(pub u64);

/// One historical employment interval. Months are 1-based and both ends are
/// inclusive.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct WorkPeriod {
    pub id: WorkPeriodId,
    pub start_month: u32,
    pub start_year: i32,
    pub end_month: u32,
    pub end_year: i32,
    /// Flat monthly salary for the whole interval.
    pub salary: Decimal,
    pub employment_type: EmploymentType,
}

impl WorkPeriod {
    /// Absolute month number of the first month.
    pub fn start_index(&self) -> i64 {
        month_index(self.start_year, self.start_month)
    }

    /// Absolute month number of the last month.
    pub fn end_index(&self) -> i64 {
        month_index(self.end_year, self.end_month)
    }

    /// Inclusive month count. Non-positive when the end precedes the start.
    pub fn months(&self) -> i64 {
        self.end_index() - self.start_index() + 1
    }
}

/// Maps a (year, month) pair onto a linear month scale.
pub fn month_index(
    year: i32,
    month: u32,
) -> i64 {
    i64::from(year) * 12 + i64::from(month)
}
