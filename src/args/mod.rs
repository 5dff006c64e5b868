use clap::Parser;

pub mod types;
pub mod validation;

pub use types::{Args, CleanArgs, Command};

use crate::error::SelectorError;
use crate::model::Bag;
use crate::selection::Tuning;
use validation::{bag_from_json, check_factor};

/// # Errors
///
/// Will return `Err` if the arguments are invalid
pub fn args_checks() -> Result<CleanArgs, SelectorError> {
    CleanArgs::new(Args::parse())
}

impl CleanArgs {
    /// # Errors
    ///
    /// Will return `Err` if the bag json or a tuning factor is invalid
    pub fn new(args: Args) -> Result<Self, SelectorError> {
        let bag = match &args.bag_json {
            Some(json) => bag_from_json(json)?,
            None => Bag::default(),
        };

        let defaults = Tuning::default();
        let factor = |name: &str, value: Option<f64>, default: f64| {
            value
                .map_or(Ok(default), |v| check_factor(name, v))
                .map_err(SelectorError::Config)
        };
        let tuning = Tuning {
            headwind_factor: factor("headwind-factor", args.headwind_factor, defaults.headwind_factor)?,
            tailwind_factor: factor("tailwind-factor", args.tailwind_factor, defaults.tailwind_factor)?,
            uphill_factor: factor("uphill-factor", args.uphill_factor, defaults.uphill_factor)?,
            downhill_factor: factor("downhill-factor", args.downhill_factor, defaults.downhill_factor)?,
        };

        Ok(CleanArgs {
            host: args.host,
            port: args.port,
            bag,
            tuning,
            command: args.command.unwrap_or(Command::Serve),
        })
    }
}
