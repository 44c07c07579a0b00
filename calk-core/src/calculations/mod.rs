//! Formula engines, one per calculator.
//!
//! Every engine is a total function: inputs are sanitized at the boundary
//! (see [`crate::input`]) and anything still out of range is clamped here
//! with a warning instead of failing.

pub mod common;
pub mod pension;
pub mod salary;
pub mod taxi_tax;
pub mod water;

pub use pension::{PensionCalculator, PensionInput, PensionResults, calculate_pension};
pub use salary::{SalaryCalculator, SalaryResults, calculate_salary};
pub use taxi_tax::{TaxiTaxCalculator, TaxiTaxResult, calculate_taxi_tax};
pub use water::{WaterCalculator, WaterResults, calculate_water_bill};
