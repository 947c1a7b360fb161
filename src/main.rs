#![allow(clippy::doc_markdown)]
#![doc = include_str!("../README.md")]

mod chart;
mod cli;
mod config;
mod core;
mod prelude;
mod quantity;
mod report;
mod tables;

use clap::{Parser, crate_version};

use crate::{
    cli::{Args, Command},
    prelude::*,
};

fn main() -> Result {
    let _ = dotenvy::dotenv();
    tracing_subscriber::fmt().without_time().compact().with_writer(std::io::stderr).init();
    info!(version = crate_version!(), "starting…");

    let args = Args::parse();
    let report = args.report()?;

    match args.command {
        Command::Forecast(args) => args.run(&report)?,
        Command::Compare(args) => args.run(&report)?,
        Command::Period(args) => args.run(&report)?,
    }

    info!("done!");
    Ok(())
}
