use clap::{Parser, Subcommand};
use serde_json::Value;

use crate::model::Bag;
use crate::selection::Tuning;

#[derive(Parser, Debug)]
#[command(author, version, about, long_about = None)]
pub struct Args {
    /// Address the form is served on.
    #[arg(long, value_name = "HOST", default_value = "0.0.0.0")]
    pub host: String,
    #[arg(short = 'p', long, value_name = "PORT", default_value = "5201")]
    pub port: u16,
    /// Bag to start with instead of the default one.
    /// Format: [{"key": "7i", "label": "7 Iron", "carry": 150}, ...]
    #[arg(
        short = 'b',
        long,
        value_name = "BAG_JSON",
        value_parser = crate::args::validation::check_readable_file_and_json
    )]
    pub bag_json: Option<Value>,
    /// Fraction of distance added per m/s of headwind.
    #[arg(long, value_name = "FACTOR", allow_hyphen_values = true)]
    pub headwind_factor: Option<f64>,
    /// Fraction of distance per m/s of tailwind (negative).
    #[arg(long, value_name = "FACTOR", allow_hyphen_values = true)]
    pub tailwind_factor: Option<f64>,
    /// Meters added per meter uphill.
    #[arg(long, value_name = "FACTOR", allow_hyphen_values = true)]
    pub uphill_factor: Option<f64>,
    /// Meters taken off per meter downhill.
    #[arg(long, value_name = "FACTOR", allow_hyphen_values = true)]
    pub downhill_factor: Option<f64>,
    #[command(subcommand)]
    pub command: Option<Command>,
}

#[derive(Subcommand, Debug, Clone, PartialEq, Eq)]
pub enum Command {
    /// Serve the interactive form (the default).
    Serve,
    /// Print one breakdown and recommendation as JSON, then exit.
    /// Values that don't parse as numbers count as 0.
    Recommend {
        #[arg(long, value_name = "METERS", default_value = "150", allow_hyphen_values = true)]
        distance: String,
        #[arg(long, value_name = "METERS", default_value = "0", allow_hyphen_values = true)]
        elevation: String,
        #[arg(long, value_name = "M_PER_S", default_value = "0", allow_hyphen_values = true)]
        wind_speed: String,
        /// One of N, NE, E, SE, S, SW, W, NW. Anything else is a headwind.
        #[arg(long, value_name = "CODE", default_value = "N")]
        wind_dir: String,
    },
}

#[derive(Debug, Clone)]
pub struct CleanArgs {
    pub host: String,
    pub port: u16,
    pub bag: Bag,
    pub tuning: Tuning,
    pub command: Command,
}
