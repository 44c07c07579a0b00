//! Monthly water supply and sewerage bill.
//!
//! # Example
//!
//! ```
//! use rust_decimal_macros::dec;
//! use calk_core::{City, ConsumerCategory, calculate_water_bill};
//!
//! let bill = calculate_water_bill(dec!(15), City::Bishkek, ConsumerCategory::Population);
//!
//! assert_eq!(bill.water_cost, dec!(121.5));
//! assert_eq!(bill.sewerage_cost, dec!(48.75));
//! assert_eq!(bill.total_cost, dec!(170.25));
//! ```

use rust_decimal::Decimal;
use serde::{Deserialize, Serialize};
use tracing::warn;

use crate::calculations::common::{round_half_up, share_percent};
use crate::config::WaterConfig;
use crate::models::{City, ConsumerCategory};
use crate::tariffs::WaterTariffTable;

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct WaterResults {
    /// Billed volume in cubic meters, after clamping.
    pub consumption: Decimal,
    pub water_cost: Decimal,
    pub sewerage_cost: Decimal,
    pub total_cost: Decimal,
    /// Rates applied, per cubic meter. Zero when nothing was consumed.
    pub water_rate: Decimal,
    pub sewerage_rate: Decimal,
}

impl WaterResults {
    /// Share of the bill that is water supply, in percent.
    pub fn water_percent(&self) -> Decimal {
        share_percent(self.water_cost, self.total_cost)
    }

    /// Share of the bill that is sewerage, in percent.
    pub fn sewerage_percent(&self) -> Decimal {
        share_percent(self.sewerage_cost, self.total_cost)
    }

    /// Costs rounded to tyiyn for display.
    pub fn rounded(&self) -> Self {
        Self {
            water_cost: round_half_up(self.water_cost),
            sewerage_cost: round_half_up(self.sewerage_cost),
            total_cost: round_half_up(self.total_cost),
            ..*self
        }
    }
}

/// Water bill calculator over a tariff table.
#[derive(Debug, Clone)]
pub struct WaterCalculator<'a> {
    config: WaterConfig,
    tariffs: &'a WaterTariffTable,
}

impl<'a> WaterCalculator<'a> {
    pub fn new(
        config: WaterConfig,
        tariffs: &'a WaterTariffTable,
    ) -> Self {
        Self { config, tariffs }
    }

    /// Calculates the bill for a monthly volume.
    ///
    /// The volume is clamped to `[0, max_volume]`. A zero volume yields the
    /// all-zero result, rates included. Costs saturate at [`Decimal::MAX`].
    pub fn calculate(
        &self,
        volume: Decimal,
        city: City,
        category: ConsumerCategory,
    ) -> WaterResults {
        let volume = self.clamp_volume(volume);
        if volume <= Decimal::ZERO {
            return WaterResults::default();
        }

        let rate = self.tariffs.rate(city, category);
        let water_cost = volume.saturating_mul(rate.water);
        let sewerage_cost = volume.saturating_mul(rate.sewerage);

        WaterResults {
            consumption: volume,
            water_cost,
            sewerage_cost,
            total_cost: water_cost.saturating_add(sewerage_cost),
            water_rate: rate.water,
            sewerage_rate: rate.sewerage,
        }
    }

    fn clamp_volume(
        &self,
        volume: Decimal,
    ) -> Decimal {
        let clamped = volume.clamp(Decimal::ZERO, self.config.max_volume);
        if clamped != volume {
            warn!(
                volume = %volume,
                max_volume = %self.config.max_volume,
                "water volume outside accepted range; clamped"
            );
        }
        clamped
    }
}

/// Calculates a water bill with the published tariffs.
pub fn calculate_water_bill(
    volume: Decimal,
    city: City,
    category: ConsumerCategory,
) -> WaterResults {
    WaterCalculator::new(WaterConfig::default(), WaterTariffTable::builtin())
        .calculate(volume, city, category)
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use rust_decimal_macros::dec;

    use super::*;
    use crate::models::WaterRate;

    #[test]
    fn bishkek_population_fifteen_cubic_meters() {
        let result = calculate_water_bill(dec!(15), City::Bishkek, ConsumerCategory::Population);

        assert_eq!(
            result,
            WaterResults {
                consumption: dec!(15),
                water_cost: dec!(121.5),
                sewerage_cost: dec!(48.75),
                total_cost: dec!(170.25),
                water_rate: dec!(8.10),
                sewerage_rate: dec!(3.25),
            }
        );
    }

    #[test]
    fn total_is_sum_of_parts_for_every_tariff() {
        for (city, category, rate) in WaterTariffTable::builtin().iter() {
            for volume in [dec!(0.5), dec!(1), dec!(37.25), dec!(500)] {
                let result = calculate_water_bill(volume, city, category);

                assert_eq!(result.total_cost, result.water_cost + result.sewerage_cost);
                assert_eq!(result.water_cost, volume * rate.water);
                assert_eq!(result.sewerage_cost, volume * rate.sewerage);
            }
        }
    }

    #[test]
    fn zero_volume_yields_all_zero_result() {
        let result = calculate_water_bill(Decimal::ZERO, City::Osh, ConsumerCategory::Commercial);

        assert_eq!(result, WaterResults::default());
    }

    #[test]
    fn negative_volume_is_clamped_to_zero() {
        let result = calculate_water_bill(dec!(-3), City::Bishkek, ConsumerCategory::Budget);

        assert_eq!(result, WaterResults::default());
    }

    #[test]
    fn volume_above_limit_is_clamped() {
        let result = calculate_water_bill(dec!(750), City::Bishkek, ConsumerCategory::Population);

        assert_eq!(result.consumption, dec!(500));
        assert_eq!(result.water_cost, dec!(4050));
        assert_eq!(result.sewerage_cost, dec!(1625));
    }

    #[test]
    fn osh_bill_has_no_sewerage_part() {
        let result = calculate_water_bill(dec!(10), City::Osh, ConsumerCategory::Population);

        assert_eq!(result.water_cost, dec!(129.6));
        assert_eq!(result.sewerage_cost, Decimal::ZERO);
        assert_eq!(result.water_percent(), dec!(100));
        assert_eq!(result.sewerage_percent(), Decimal::ZERO);
    }

    #[test]
    fn custom_table_is_used() {
        let mut table = WaterTariffTable::published();
        table.set_rate(
            City::Karakol,
            ConsumerCategory::Population,
            WaterRate::new(dec!(10), dec!(5)),
        );
        let calculator = WaterCalculator::new(WaterConfig::default(), &table);

        let result = calculator.calculate(dec!(2), City::Karakol, ConsumerCategory::Population);

        assert_eq!(result.total_cost, dec!(30));
    }

    #[test]
    fn huge_custom_rate_saturates_instead_of_overflowing() {
        let mut table = WaterTariffTable::published();
        table.set_rate(
            City::Talas,
            ConsumerCategory::Commercial,
            WaterRate::new(Decimal::MAX, Decimal::MAX),
        );
        let calculator = WaterCalculator::new(WaterConfig::default(), &table);

        let result = calculator.calculate(dec!(500), City::Talas, ConsumerCategory::Commercial);

        assert_eq!(result.water_cost, Decimal::MAX);
        assert_eq!(result.sewerage_cost, Decimal::MAX);
        assert_eq!(result.total_cost, Decimal::MAX);
    }

    #[test]
    fn rounded_keeps_two_decimals() {
        let result =
            calculate_water_bill(dec!(3.333), City::Bishkek, ConsumerCategory::Population).rounded();

        assert_eq!(result.water_cost, dec!(27.00));
        assert_eq!(result.sewerage_cost, dec!(10.83));
        assert_eq!(result.total_cost, dec!(37.83));
        assert_eq!(result.consumption, dec!(3.333));
    }

    #[test]
    fn calculation_is_idempotent() {
        let first = calculate_water_bill(dec!(42.7), City::Tokmok, ConsumerCategory::Budget);
        let second = calculate_water_bill(dec!(42.7), City::Tokmok, ConsumerCategory::Budget);

        assert_eq!(first, second);
    }
}
