//! Nexus Feed - Main Entry Point
//!
//! Command line front end for the synthetic commodity feed and the lead ledger

use anyhow::{Context, Result};
use chrono::TimeDelta;
use clap::{Args, Parser, Subcommand, ValueEnum};
use nexus_feed::*;
use rust_decimal::Decimal;
use tracing::{error, info};

#[derive(Debug, Parser)]
#[command(name = "nexus-feed", version, about = "Synthetic commodity feed and lead ledger")]
struct Cli {
    #[command(subcommand)]
    command: Command,
}

#[derive(Debug, Subcommand)]
enum Command {
    /// Generate a synthetic price trend for a commodity
    Series(SeriesArgs),
    /// Capture or list trade leads
    #[command(subcommand)]
    Leads(LeadsCommand),
}

#[derive(Debug, Args)]
struct SeriesArgs {
    #[arg(long, value_enum, default_value = "steel")]
    commodity: CommodityArg,
    #[arg(long, value_enum, default_value = "mumbai")]
    hub: HubArg,
    #[arg(long, default_value_t = series::DEFAULT_TREND_LENGTH)]
    length: usize,
    #[arg(long, default_value_t = 24)]
    step_hours: i64,
    #[arg(long)]
    seed: Option<u64>,
    /// Override the catalog base price
    #[arg(long)]
    base_price: Option<f64>,
    #[arg(long)]
    json: bool,
}

#[derive(Debug, Subcommand)]
enum LeadsCommand {
    /// Append a lead to the ledger
    Add {
        #[arg(long)]
        company: String,
        #[arg(long)]
        industry: String,
        #[arg(long)]
        region: String,
        #[arg(long)]
        material: String,
        /// Volume in metric tonnes
        #[arg(long)]
        volume: Decimal,
        #[arg(long)]
        json: bool,
    },
    /// Print every stored lead
    List {
        #[arg(long)]
        token: Option<String>,
        #[arg(long)]
        json: bool,
    },
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum CommodityArg {
    Steel,
    Aluminium,
    Copper,
    Lithium,
}

impl From<CommodityArg> for Commodity {
    fn from(arg: CommodityArg) -> Self {
        match arg {
            CommodityArg::Steel => Commodity::SteelHrc,
            CommodityArg::Aluminium => Commodity::AluminiumIngot,
            CommodityArg::Copper => Commodity::CopperCathode,
            CommodityArg::Lithium => Commodity::LithiumCarbonate,
        }
    }
}

#[derive(Debug, Clone, Copy, ValueEnum)]
enum HubArg {
    Mumbai,
    Delhi,
    Chennai,
    Kolkata,
}

impl From<HubArg> for MarketHub {
    fn from(arg: HubArg) -> Self {
        match arg {
            HubArg::Mumbai => MarketHub::MumbaiSpot,
            HubArg::Delhi => MarketHub::DelhiNcr,
            HubArg::Chennai => MarketHub::ChennaiPort,
            HubArg::Kolkata => MarketHub::Kolkata,
        }
    }
}

fn main() -> Result<()> {
    dotenv::dotenv().ok();
    let cli = Cli::parse();

    // Load configuration
    let config = Config::load();

    utils::setup_output_directories(&config.log_dir, &config.store_path)?;
    let _logging_guard = utils::setup_logging(&config.log_dir)?;

    let outcome = match cli.command {
        Command::Series(args) => run_series(&config, args),
        Command::Leads(command) => run_leads(&config, command),
    };

    if let Err(e) = &outcome {
        error!("❌ {:#}", e);
    }
    outcome
}

fn run_series(config: &Config, args: SeriesArgs) -> Result<()> {
    let step = TimeDelta::try_hours(args.step_hours)
        .context("step hours out of range")?;
    let commodity = Commodity::from(args.commodity);
    let hub = MarketHub::from(args.hub);

    let trend = match args.base_price {
        Some(base_price) => {
            let request = series::SeriesRequest::new(base_price, args.length, step)
                .with_seed(args.seed)
                .with_max_length(config.max_series_length);
            series::CommoditySeries {
                commodity,
                hub,
                base_price,
                points: SeriesGenerator::new(&request, &config.walk)?.collect(),
            }
        }
        None => series::commodity_series(commodity, hub, args.length, step, args.seed, config)?,
    };

    if args.json {
        println!("{}", serde_json::to_string_pretty(&trend)?);
    } else {
        utils::print_commodity_series(&trend);
    }
    Ok(())
}

fn run_leads(config: &Config, command: LeadsCommand) -> Result<()> {
    let ledger = LeadLedger::from_config(config);

    match command {
        LeadsCommand::Add { company, industry, region, material, volume, json } => {
            let candidate = LeadCandidate { company, industry, region, material, volume };
            let record = ledger.append(&candidate)?;
            if json {
                println!("{}", serde_json::to_string_pretty(&record)?);
            } else {
                utils::print_lead(&record);
            }
        }
        LeadsCommand::List { token, json } => {
            auth::AccessGate::from_config(config).verify(token.as_deref())?;
            let records = ledger.load_all()?;
            info!(count = records.len(), path = %ledger.path().display(), "Loaded lead ledger");
            if json {
                println!("{}", serde_json::to_string_pretty(&records)?);
            } else {
                utils::print_ledger(&records);
            }
        }
    }
    Ok(())
}
