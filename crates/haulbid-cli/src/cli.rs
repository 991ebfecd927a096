//! CLI definition using clap

use clap::{Args, Parser, Subcommand};
use haulbid_domain::model::{ClientInfo, HourlyJob, TonnageJob};
use haulbid_types::{ExportFormat, MaterialType, OutputFormat, PayoutMode, TruckType};
use std::path::PathBuf;

#[derive(Parser)]
#[command(name = "haul-bid")]
#[command(version)]
#[command(about = "Dump truck hauling bid calculator")]
#[command(long_about = None)]
pub struct Cli {
    #[command(subcommand)]
    pub command: Commands,

    /// Output format (json, table). Uses config value if not specified.
    #[arg(long, short = 'f', global = true)]
    pub format: Option<OutputFormat>,

    /// Tonnage pricing (fixed_payout, markup_percent). Uses config value if not specified.
    #[arg(long, global = true)]
    pub payout_mode: Option<PayoutMode>,

    /// Verbose output (debug logging)
    #[arg(long, short = 'v', global = true)]
    pub verbose: bool,
}

#[derive(Subcommand)]
pub enum Commands {
    /// Calculate an hourly job
    Hourly {
        #[command(flatten)]
        job: HourlyArgs,

        #[command(flatten)]
        client: ClientArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Calculate a tonnage (per-load) job
    Tonnage {
        #[command(flatten)]
        job: TonnageArgs,

        #[command(flatten)]
        client: ClientArgs,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Calculate a job described in a TOML file
    Quote {
        /// Path to job file
        file: PathBuf,

        #[command(flatten)]
        export: ExportArgs,
    },

    /// Manage configuration
    Config {
        /// Show current configuration
        #[arg(long)]
        show: bool,

        /// Set default tonnage pricing
        #[arg(long)]
        set_payout_mode: Option<PayoutMode>,

        /// Set default output format
        #[arg(long)]
        set_output: Option<OutputFormat>,

        /// Set default bid document format
        #[arg(long)]
        set_export_format: Option<ExportFormat>,

        /// Set directory for bid documents
        #[arg(long)]
        set_export_dir: Option<PathBuf>,

        /// Set company name printed on bids
        #[arg(long)]
        set_company: Option<String>,

        /// Reset to defaults
        #[arg(long)]
        reset: bool,
    },
}

#[derive(Args, Debug, Clone)]
pub struct HourlyArgs {
    /// Truck type
    #[arg(long, value_enum, default_value_t = TruckType::SingleAxle)]
    pub truck_type: TruckType,

    /// Material type
    #[arg(long = "material", value_enum, default_value_t = MaterialType::Dirt)]
    pub material_type: MaterialType,

    /// Number of trucks
    #[arg(long = "trucks", default_value_t = 1)]
    pub num_trucks: u32,

    /// Hours per day
    #[arg(long, default_value_t = 8.0, allow_negative_numbers = true)]
    pub hours_per_day: f64,

    /// Job length (days)
    #[arg(long = "days", default_value_t = 5)]
    pub job_length_days: u32,

    /// Hourly rate per truck ($)
    #[arg(long = "rate", default_value_t = 95.0, allow_negative_numbers = true)]
    pub hourly_rate_per_truck: f64,
}

impl From<HourlyArgs> for HourlyJob {
    fn from(args: HourlyArgs) -> Self {
        HourlyJob {
            truck_type: args.truck_type,
            material_type: args.material_type,
            num_trucks: args.num_trucks,
            hours_per_day: args.hours_per_day,
            job_length_days: args.job_length_days,
            hourly_rate_per_truck: args.hourly_rate_per_truck,
        }
    }
}

#[derive(Args, Debug, Clone)]
pub struct TonnageArgs {
    /// Haul distance, one way (miles)
    #[arg(long = "distance", default_value_t = 20.0, allow_negative_numbers = true)]
    pub haul_distance_miles: f64,

    /// Miles per gallon (must be non-zero)
    #[arg(long = "mpg", default_value_t = 5.0, allow_negative_numbers = true)]
    pub miles_per_gallon: f64,

    /// Fuel cost ($/gal)
    #[arg(long = "fuel-cost", default_value_t = 4.25, allow_negative_numbers = true)]
    pub fuel_cost_per_gallon: f64,

    /// Driver wage ($/hour)
    #[arg(long = "wage", default_value_t = 35.0, allow_negative_numbers = true)]
    pub driver_wage_per_hour: f64,

    /// Operating cost per load ($)
    #[arg(long = "operating-cost", default_value_t = 50.0, allow_negative_numbers = true)]
    pub operating_cost_per_load: f64,

    /// Number of trucks
    #[arg(long = "trucks", default_value_t = 3)]
    pub num_trucks: u32,

    /// Truck type
    #[arg(long, value_enum, default_value_t = TruckType::SingleAxle)]
    pub truck_type: TruckType,

    /// Load capacity per truck (tons, informational)
    #[arg(long = "capacity", default_value_t = 16.0, allow_negative_numbers = true)]
    pub load_capacity_tons: f64,

    /// Estimated loads per day (per truck)
    #[arg(long = "loads-per-day", default_value_t = 10)]
    pub loads_per_day_per_truck: u32,

    /// Job length (days)
    #[arg(long = "days", default_value_t = 5)]
    pub job_length_days: u32,

    /// Daily hours worked (per truck)
    #[arg(long = "daily-hours", default_value_t = 8.0, allow_negative_numbers = true)]
    pub daily_hours_per_truck: f64,

    /// Material type
    #[arg(long = "material", value_enum, default_value_t = MaterialType::Dirt)]
    pub material_type: MaterialType,

    /// Total job payout ($), used with fixed_payout pricing
    #[arg(long = "payout", default_value_t = 25000.0, allow_negative_numbers = true)]
    pub total_job_payout: f64,

    /// Markup over all-in cost (%), used with markup_percent pricing
    #[arg(long = "markup", default_value_t = 20.0, allow_negative_numbers = true)]
    pub markup_percent: f64,
}

impl From<TonnageArgs> for TonnageJob {
    fn from(args: TonnageArgs) -> Self {
        TonnageJob {
            haul_distance_miles: args.haul_distance_miles,
            miles_per_gallon: args.miles_per_gallon,
            fuel_cost_per_gallon: args.fuel_cost_per_gallon,
            driver_wage_per_hour: args.driver_wage_per_hour,
            operating_cost_per_load: args.operating_cost_per_load,
            num_trucks: args.num_trucks,
            truck_type: args.truck_type,
            load_capacity_tons: args.load_capacity_tons,
            loads_per_day_per_truck: args.loads_per_day_per_truck,
            job_length_days: args.job_length_days,
            daily_hours_per_truck: args.daily_hours_per_truck,
            material_type: args.material_type,
            total_job_payout: args.total_job_payout,
            markup_percent: args.markup_percent,
        }
    }
}

/// Bid header fields
#[derive(Args, Debug, Clone, Default)]
pub struct ClientArgs {
    /// Company name (overrides config)
    #[arg(long)]
    pub company: Option<String>,

    /// Client name
    #[arg(long)]
    pub client: Option<String>,

    /// Job location
    #[arg(long)]
    pub location: Option<String>,

    /// Notes printed on the bid
    #[arg(long)]
    pub notes: Option<String>,
}

impl From<ClientArgs> for ClientInfo {
    fn from(args: ClientArgs) -> Self {
        ClientInfo {
            company: args.company,
            client: args.client,
            location: args.location,
            notes: args.notes,
        }
    }
}

#[derive(Args, Debug, Clone, Default)]
pub struct ExportArgs {
    /// Write a bid document to the configured export directory
    #[arg(long)]
    pub export: bool,

    /// Write a bid document to this path (implies --export)
    #[arg(long, short = 'o')]
    pub output: Option<PathBuf>,

    /// Bid document format (xlsx, csv, json). Inferred from --output, then config.
    #[arg(long)]
    pub export_format: Option<ExportFormat>,
}

impl ExportArgs {
    pub fn requested(&self) -> bool {
        self.export || self.output.is_some() || self.export_format.is_some()
    }
}
