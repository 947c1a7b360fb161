mod compare;
mod forecast;
mod period;
mod tariff;
mod usage;

use chrono::{Datelike, Local, Month};
use clap::{Parser, Subcommand};

pub use self::{compare::CompareArgs, forecast::ForecastArgs, period::PeriodArgs};
use crate::{prelude::*, report::Report};

#[derive(Parser)]
#[command(author, version, about, propagate_version = true)]
#[must_use]
pub struct Args {
    /// Calendar month of the first forecast month, from 1 to 12. Defaults to the current month.
    #[clap(
        long,
        env = "START_MONTH",
        global = true,
        value_parser = clap::value_parser!(u8).range(1..=12),
    )]
    pub start_month: Option<u8>,

    /// Print JSON instead of the tables.
    #[clap(long, global = true)]
    pub json: bool,

    #[command(subcommand)]
    pub command: Command,
}

impl Args {
    pub fn report(&self) -> Result<Report> {
        let start_month = match self.start_month {
            Some(start_month) => start_month,
            None => u8::try_from(Local::now().month())?,
        };
        let first_month = Month::try_from(start_month)
            .with_context(|| format!("invalid start month: {start_month}"))?;
        Ok(Report::new(first_month, self.json))
    }
}

#[derive(Subcommand)]
pub enum Command {
    /// Forecast the annual costs of a single tariff.
    #[clap(name = "forecast")]
    Forecast(Box<ForecastArgs>),

    /// Compare the annual costs of the tariffs from a TOML file.
    #[clap(name = "compare")]
    Compare(Box<CompareArgs>),

    /// Average daily cost of a billing period.
    #[clap(name = "period")]
    Period(Box<PeriodArgs>),
}
