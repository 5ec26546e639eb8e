//! CLI commands and argument parsing

use crate::models::{MeterType, TimeUnit};
use crate::types::SiteId;
use chrono::NaiveDate;
use clap::{Parser, Subcommand};
use std::path::PathBuf;

/// SolarEdge monitoring API CLI
#[derive(Parser, Debug)]
#[command(name = "solaredge")]
#[command(author, version, about, long_about = None)]
pub struct Cli {
    /// Monitoring API key
    #[arg(long, global = true, env = "SOLAREDGE_API_KEY", hide_env_values = true)]
    pub api_key: Option<String>,

    /// Client configuration file (YAML)
    #[arg(short = 'C', long, global = true)]
    pub config: Option<PathBuf>,

    /// Site id for site-scoped commands
    #[arg(short, long, global = true, env = "SOLAREDGE_SITE_ID")]
    pub site: Option<SiteId>,

    /// Verbose output
    #[arg(short, long, global = true)]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Commands,
}

/// CLI subcommands
#[derive(Subcommand, Debug)]
pub enum Commands {
    /// List sites visible to the API key
    Sites {
        /// Maximum number of sites
        #[arg(long)]
        size: Option<u32>,

        /// Free-text filter on name, address and notes
        #[arg(long)]
        search: Option<String>,
    },

    /// Show the site overview
    Overview,

    /// Energy per meter, with derived totals and percentages
    EnergyDetails {
        /// First day (YYYY-MM-DD)
        #[arg(long)]
        start: NaiveDate,

        /// Last day, inclusive (YYYY-MM-DD)
        #[arg(long)]
        end: NaiveDate,

        /// Aggregation, e.g. DAY or QUARTER_OF_AN_HOUR
        #[arg(long, default_value = "DAY", value_parser = parse_time_unit)]
        time_unit: TimeUnit,

        /// Meters to include (comma-separated, empty = all)
        #[arg(long, value_delimiter = ',', value_parser = parse_meter_type)]
        meters: Vec<MeterType>,
    },

    /// Show the current power flow
    PowerFlow,

    /// Download the site image
    SiteImage {
        /// Destination file
        #[arg(short, long)]
        output: PathBuf,

        /// Image name on the server
        #[arg(long, default_value = "image.jpg")]
        name: String,
    },
}

/// Match a time unit by wire name, ignoring case
fn parse_time_unit(raw: &str) -> Result<TimeUnit, String> {
    TimeUnit::ALL
        .iter()
        .copied()
        .filter(|unit| *unit != TimeUnit::Unknown)
        .find(|unit| unit.as_str().eq_ignore_ascii_case(raw))
        .ok_or_else(|| format!("unknown time unit '{raw}'"))
}

/// Match a meter type by wire name, ignoring case
fn parse_meter_type(raw: &str) -> Result<MeterType, String> {
    MeterType::ALL
        .iter()
        .copied()
        .filter(|meter| *meter != MeterType::Unknown)
        .find(|meter| meter.as_str().eq_ignore_ascii_case(raw.trim()))
        .ok_or_else(|| format!("unknown meter type '{raw}'"))
}
