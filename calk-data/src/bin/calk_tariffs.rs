use std::fs::File;
use std::path::PathBuf;

use anyhow::{Context, Result, anyhow};
use calk_core::calculations::WaterCalculator;
use calk_core::config::WaterConfig;
use calk_core::{City, ConsumerCategory, WaterTariffTable};
use calk_data::TariffLoader;
use calk_data::logging::init_logging;
use clap::Parser;
use rust_decimal::Decimal;
use tracing::{debug, info};

/// Print the effective water tariff table and a sample bill.
///
/// Without `--file` the published tariffs are used. A CSV file with columns
/// `city,category,water,sewerage` overrides the listed cells.
#[derive(Parser, Debug)]
#[command(name = "calk-tariffs")]
#[command(version, about, long_about = None)]
struct Args {
    /// CSV file with tariff overrides
    #[arg(short, long)]
    file: Option<PathBuf>,

    /// City key, e.g. bishkek or jalal-abad
    #[arg(short, long, default_value = "bishkek")]
    city: String,

    /// Consumer category: population, budget or commercial
    #[arg(short = 'k', long, default_value = "population")]
    category: String,

    /// Monthly consumption in cubic meters
    #[arg(short, long, default_value = "15")]
    volume: Decimal,

    /// Log filter, overrides RUST_LOG (e.g. "debug")
    #[arg(short, long)]
    log_level: Option<String>,
}

fn load_table(file: Option<&PathBuf>) -> Result<WaterTariffTable> {
    let Some(path) = file else {
        debug!("no tariff file given; using published tariffs");
        return Ok(WaterTariffTable::published());
    };

    info!(path = %path.display(), "loading tariff overrides");
    let file = File::open(path).with_context(|| format!("Failed to open: {}", path.display()))?;
    TariffLoader::load_from_reader(file)
        .with_context(|| format!("Failed to load tariffs from: {}", path.display()))
}

fn print_table(table: &WaterTariffTable) {
    println!("{:<12} {:<12} {:>8} {:>10}", "city", "category", "water", "sewerage");
    for (city, category, rate) in table.iter() {
        println!(
            "{:<12} {:<12} {:>8} {:>10}",
            city.as_str(),
            category.as_str(),
            rate.water,
            rate.sewerage
        );
    }
}

fn main() -> Result<()> {
    let args = Args::parse();
    init_logging(args.log_level.as_deref())?;

    let city = City::parse(&args.city).ok_or_else(|| anyhow!("unknown city '{}'", args.city))?;
    let category = ConsumerCategory::parse(&args.category)
        .ok_or_else(|| anyhow!("unknown consumer category '{}'", args.category))?;

    let table = load_table(args.file.as_ref())?;
    print_table(&table);

    let bill = WaterCalculator::new(WaterConfig::default(), &table)
        .calculate(args.volume, city, category)
        .rounded();

    println!();
    println!(
        "{} / {}, {} m3",
        city.as_str(),
        category.as_str(),
        bill.consumption
    );
    println!("  water:    {:>10} som", bill.water_cost);
    println!("  sewerage: {:>10} som", bill.sewerage_cost);
    println!("  total:    {:>10} som", bill.total_cost);

    Ok(())
}
