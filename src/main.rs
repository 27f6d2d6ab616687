//! Command-line front end for the estimation engine.
//!
//! Presentation glue only: collects and validates input, loads the
//! artifacts once, renders the engine's output. No decision logic.

use std::path::PathBuf;
use std::sync::Arc;

use anyhow::Context;
use clap::{Parser, Subcommand, ValueEnum};

use homeworth::settings::Settings;
use homeworth::stats::DatasetSummary;
use homeworth::{
    AdjustmentRules, Amenities, Estimate, LinearModel, Location, PriceEngine, PricingMode,
    PropertyDescription,
};

#[derive(Parser, Debug)]
#[command(name = "homeworth", about = "Property price estimation")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Subcommand, Debug)]
enum Command {
    /// Estimate a price for a property
    Estimate {
        /// Area in square feet (500-10000)
        #[arg(long)]
        area: u32,

        /// Number of bedrooms (1-10)
        #[arg(long)]
        bedrooms: u32,

        /// Number of bathrooms (1-10)
        #[arg(long)]
        bathrooms: u32,

        /// Property location
        #[arg(long, value_enum)]
        location: LocationArg,

        /// Parking available
        #[arg(long)]
        parking: bool,

        /// Garden
        #[arg(long)]
        garden: bool,

        /// Near a metro station
        #[arg(long)]
        near_metro: bool,

        /// Property age in years (0-50)
        #[arg(long, default_value_t = 5)]
        age: u32,

        /// Pricing mode
        #[arg(long, value_enum, default_value = "hybrid")]
        mode: ModeArg,

        /// Model artifact path (overrides HOMEWORTH_MODEL)
        #[arg(long)]
        model: Option<PathBuf>,
    },

    /// Show historical dataset statistics
    Stats {
        /// Dataset path (overrides HOMEWORTH_DATASET)
        #[arg(long)]
        dataset: Option<PathBuf>,
    },
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum LocationArg {
    CityCenter,
    Suburb,
    Outskirts,
}

impl From<LocationArg> for Location {
    fn from(arg: LocationArg) -> Self {
        match arg {
            LocationArg::CityCenter => Location::CityCenter,
            LocationArg::Suburb => Location::Suburb,
            LocationArg::Outskirts => Location::Outskirts,
        }
    }
}

#[derive(ValueEnum, Debug, Clone, Copy)]
enum ModeArg {
    PureModel,
    Hybrid,
}

impl From<ModeArg> for PricingMode {
    fn from(arg: ModeArg) -> Self {
        match arg {
            ModeArg::PureModel => PricingMode::PureModel,
            ModeArg::Hybrid => PricingMode::Hybrid,
        }
    }
}

fn main() -> anyhow::Result<()> {
    tracing_subscriber::fmt()
        .with_env_filter(
            tracing_subscriber::EnvFilter::try_from_default_env()
                .unwrap_or_else(|_| tracing_subscriber::EnvFilter::new("warn")),
        )
        .init();

    let cli = Cli::parse();
    let settings = Settings::load();

    match cli.command {
        Command::Estimate {
            area,
            bedrooms,
            bathrooms,
            location,
            parking,
            garden,
            near_metro,
            age,
            mode,
            model,
        } => {
            let model_path = model.unwrap_or(settings.model_path);
            let model = LinearModel::load(&model_path).with_context(|| {
                format!("cannot load model artifact at {}", model_path.display())
            })?;

            let rules = match settings.rules_path {
                Some(path) => AdjustmentRules::load(&path)
                    .with_context(|| format!("cannot load rules at {}", path.display()))?,
                None => AdjustmentRules::default(),
            };

            let property = PropertyDescription::new(
                area,
                bedrooms,
                bathrooms,
                location.into(),
                Amenities {
                    parking,
                    garden,
                    near_metro,
                },
                age,
            )?;

            let engine = PriceEngine::new(Arc::new(model), rules);
            let estimate = engine.estimate(&property, mode.into())?;
            render_estimate(&property, &estimate);
        }

        Command::Stats { dataset } => {
            let path = dataset
                .or(settings.dataset_path)
                .context("no dataset configured; pass --dataset or set HOMEWORTH_DATASET")?;
            let summary = DatasetSummary::load(&path)?;
            render_stats(&summary);
        }
    }

    Ok(())
}

fn render_estimate(property: &PropertyDescription, estimate: &Estimate) {
    let breakdown = &estimate.breakdown;

    println!("Estimated Price: ₹ {}", money(breakdown.final_price));
    println!("Location: {}", property.location().label());
    println!();
    println!("Breakdown ({} mode):", estimate.mode.as_str());
    println!("  Base price           ₹ {}", money(breakdown.base_price));
    println!(
        "  Location adjusted    ₹ {}",
        money(breakdown.location_adjusted_price)
    );
    for addition in &breakdown.amenity_additions {
        println!(
            "  + {:<18} ₹ {}",
            addition.amenity.label(),
            money(addition.value)
        );
    }
    println!(
        "  Age factor           x {}",
        breakdown.age_depreciation_factor
    );
    println!("  Final price          ₹ {}", money(breakdown.final_price));

    if let Some(candidate) = estimate.candidate {
        println!();
        println!("Model schema used: {}", candidate.as_str());
    }

    println!();
    match property.location() {
        Location::CityCenter => {
            println!("Prime location with higher value and better access to amenities.");
        }
        Location::Suburb => {
            println!("Balanced between convenience and affordability.");
        }
        Location::Outskirts => {
            println!("More affordable option with more space.");
        }
    }
}

fn render_stats(summary: &DatasetSummary) {
    println!("Historical listings: {}", summary.total_listings);
    println!("Average price: ₹ {:.2}", summary.avg_price);
    println!("Average area: {:.0} sqft", summary.avg_area);
    for location in Location::all() {
        println!(
            "  {:<12} {}",
            location.label(),
            summary.listings_for(*location)
        );
    }
}

/// Format a price with thousands separators, rounded to two decimals.
fn money(value: rust_decimal::Decimal) -> String {
    let rounded = value.round_dp(2).to_string();
    let (num, frac_part) = rounded.split_once('.').unwrap_or((rounded.as_str(), "00"));
    let (sign, int_part) = num
        .strip_prefix('-')
        .map_or(("", num), |rest| ("-", rest));

    let digits: Vec<char> = int_part.chars().collect();
    let mut grouped = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.iter().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            grouped.push(',');
        }
        grouped.push(*c);
    }

    format!("{sign}{grouped}.{frac_part:0<2}")
}
