use std::io::Read;

use calk_core::{City, ConsumerCategory, WaterRate, WaterTariffTable};
use rust_decimal::Decimal;
use serde::Deserialize;
use thiserror::Error;
use tracing::{debug, info};

/// Errors that can occur when loading water tariff data.
///
/// Row numbers count data rows from 1, not including the header.
#[derive(Debug, Error)]
pub enum TariffLoaderError {
    #[error("CSV parse error: {0}")]
    CsvParse(String),

    #[error("row {row}: unknown city '{value}'")]
    UnknownCity { row: usize, value: String },

    #[error("row {row}: unknown consumer category '{value}'")]
    UnknownCategory { row: usize, value: String },

    #[error("row {row}: {field} rate must not be negative, got {value}")]
    NegativeRate {
        row: usize,
        field: &'static str,
        value: Decimal,
    },
}

impl From<csv::Error> for TariffLoaderError {
    fn from(err: csv::Error) -> Self {
        TariffLoaderError::CsvParse(err.to_string())
    }
}

/// A single record from a water tariff CSV file.
///
/// - `city`: city key (`bishkek`, `osh`, `karakol`, `jalal-abad`, `tokmok`,
///   `naryn`, `talas`, `batken`)
/// - `category`: consumer category key (`population`, `budget`, `commercial`)
/// - `water`: water supply rate in som per cubic meter
/// - `sewerage`: sewerage rate in som per cubic meter
#[derive(Debug, Clone, Deserialize, PartialEq)]
pub struct TariffRecord {
    pub city: String,
    pub category: String,
    pub water: Decimal,
    pub sewerage: Decimal,
}

/// Loader for water tariff overrides from CSV files.
///
/// Utilities revise their tariffs yearly. A CSV file lists the revised cells
/// only; every other cell keeps its published rate.
pub struct TariffLoader;

impl TariffLoader {
    /// Parse tariff records from a CSV reader.
    ///
    /// The reader can be any type that implements `Read`, such as a file or
    /// a byte slice. Fields are trimmed.
    pub fn parse<R: Read>(reader: R) -> Result<Vec<TariffRecord>, TariffLoaderError> {
        let mut csv_reader = csv::ReaderBuilder::new()
            .trim(csv::Trim::All)
            .from_reader(reader);
        let mut records = Vec::new();

        for result in csv_reader.deserialize() {
            let record: TariffRecord = result?;
            records.push(record);
        }

        Ok(records)
    }

    /// Applies records on top of the published table.
    ///
    /// A later record for the same cell wins. The whole load fails on the
    /// first invalid record, so a bad file never yields a half-updated table.
    pub fn load(records: &[TariffRecord]) -> Result<WaterTariffTable, TariffLoaderError> {
        let mut table = WaterTariffTable::published();

        for (index, record) in records.iter().enumerate() {
            let row = index + 1;
            let city = City::parse(&record.city).ok_or_else(|| TariffLoaderError::UnknownCity {
                row,
                value: record.city.clone(),
            })?;
            let category = ConsumerCategory::parse(&record.category).ok_or_else(|| {
                TariffLoaderError::UnknownCategory {
                    row,
                    value: record.category.clone(),
                }
            })?;
            check_rate(row, "water", record.water)?;
            check_rate(row, "sewerage", record.sewerage)?;

            let previous = table.set_rate(city, category, WaterRate::new(record.water, record.sewerage));
            debug!(
                row,
                city = city.as_str(),
                category = category.as_str(),
                old_water = %previous.water,
                new_water = %record.water,
                "tariff overridden"
            );
        }

        info!(overrides = records.len(), "water tariff table loaded");
        Ok(table)
    }

    /// Parses and applies a CSV file in one step.
    pub fn load_from_reader<R: Read>(reader: R) -> Result<WaterTariffTable, TariffLoaderError> {
        let records = Self::parse(reader)?;
        Self::load(&records)
    }
}

fn check_rate(
    row: usize,
    field: &'static str,
    value: Decimal,
) -> Result<(), TariffLoaderError> {
    if value < Decimal::ZERO {
        return Err(TariffLoaderError::NegativeRate { row, field, value });
    }
    Ok(())
}
