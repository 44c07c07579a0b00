//! Regional water supply and sewerage tariffs.
//!
//! The built-in table holds the rates published by the municipal utilities
//! for 2026, in som per cubic meter. Osh publishes no sewerage rate, so it
//! is zero here.

use std::sync::LazyLock;

use rust_decimal::Decimal;

use crate::models::{City, ConsumerCategory, WaterRate};

/// Published rate for a city and consumer category.
fn published_rate(
    city: City,
    category: ConsumerCategory,
) -> WaterRate {
    use City::*;
    use ConsumerCategory::*;

    let (water, sewerage) = match (city, category) {
        (Bishkek, Population) => ((810, 2), (325, 2)),
        (Bishkek, Budget) => ((910, 2), (425, 2)),
        (Bishkek, Commercial) => ((1300, 2), (600, 2)),
        (Osh, Population) => ((1296, 2), (0, 0)),
        (Osh, Budget) => ((1550, 2), (0, 0)),
        (Osh, Commercial) => ((2850, 2), (0, 0)),
        (Karakol, Population) => ((750, 2), (280, 2)),
        (Karakol, Budget) => ((850, 2), (350, 2)),
        (Karakol, Commercial) => ((1150, 2), (520, 2)),
        (JalalAbad, Population) => ((920, 2), (380, 2)),
        (JalalAbad, Budget) => ((1050, 2), (450, 2)),
        (JalalAbad, Commercial) => ((1580, 2), (720, 2)),
        (Tokmok, Population) => ((680, 2), (250, 2)),
        (Tokmok, Budget) => ((780, 2), (320, 2)),
        (Tokmok, Commercial) => ((1050, 2), (480, 2)),
        (Naryn, Population) => ((590, 2), (210, 2)),
        (Naryn, Budget) => ((690, 2), (280, 2)),
        (Naryn, Commercial) => ((920, 2), (410, 2)),
        (Talas, Population) => ((650, 2), (230, 2)),
        (Talas, Budget) => ((750, 2), (300, 2)),
        (Talas, Commercial) => ((1000, 2), (450, 2)),
        (Batken, Population) => ((720, 2), (290, 2)),
        (Batken, Budget) => ((820, 2), (370, 2)),
        (Batken, Commercial) => ((1180, 2), (550, 2)),
    };

    WaterRate::new(
        Decimal::new(water.0, water.1),
        Decimal::new(sewerage.0, sewerage.1),
    )
}

static PUBLISHED: LazyLock<WaterTariffTable> = LazyLock::new(WaterTariffTable::published);

/// City × category → rate table.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct WaterTariffTable {
    rates: [[WaterRate; 3]; 8],
}

impl Default for WaterTariffTable {
    fn default() -> Self {
        Self::published()
    }
}

impl WaterTariffTable {
    /// Builds a fresh copy of the published table.
    pub fn published() -> Self {
        let rates = City::ALL
            .map(|city| ConsumerCategory::ALL.map(|category| published_rate(city, category)));
        Self { rates }
    }

    /// Shared instance of the published table.
    pub fn builtin() -> &'static WaterTariffTable {
        &PUBLISHED
    }

    pub fn rate(
        &self,
        city: City,
        category: ConsumerCategory,
    ) -> WaterRate {
        self.rates[city as usize][category as usize]
    }

    /// Replaces one cell, returning the previous rate.
    pub fn set_rate(
        &mut self,
        city: City,
        category: ConsumerCategory,
        rate: WaterRate,
    ) -> WaterRate {
        std::mem::replace(&mut self.rates[city as usize][category as usize], rate)
    }

    /// All cells in city, then category order.
    pub fn iter(&self) -> impl Iterator<Item = (City, ConsumerCategory, WaterRate)> + '_ {
        City::ALL.into_iter().flat_map(move |city| {
            ConsumerCategory::ALL
                .into_iter()
                .map(move |category| (city, category, self.rate(city, category)))
        })
    }
}
