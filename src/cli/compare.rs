use std::path::PathBuf;

use clap::Parser;
use itertools::Itertools;

use crate::{
    cli::usage::UsageArgs,
    config::Config,
    core::{
        forecast::{self, AnnualUsage},
        tariff::Tariff,
    },
    prelude::*,
    report::Report,
};

#[derive(Parser)]
pub struct CompareArgs {
    /// TOML file with the `[[tariffs]]` to compare.
    #[clap(long, env = "TARIFFS_PATH", default_value = "tariffs.toml")]
    tariffs: PathBuf,

    #[clap(flatten)]
    usage: UsageArgs,
}

impl CompareArgs {
    #[instrument(skip_all)]
    pub fn run(self, report: &Report) -> Result {
        let usage = AnnualUsage::try_from(self.usage)?;
        let forecasts = Config::read_from(&self.tariffs)?
            .tariffs
            .into_iter()
            .map(|config| -> Result<_> {
                let name = config.name.clone();
                let tariff =
                    Tariff::try_from(config).with_context(|| format!("invalid tariff `{name}`"))?;
                let result = forecast::run(&tariff, usage)?;
                Ok((tariff, result))
            })
            .collect::<Result<Vec<_>>>()?;

        if let Some((tariff, result)) =
            forecasts.iter().min_by_key(|(_, result)| result.total_combined)
        {
            info!(tariff = tariff.name(), total = %result.total_combined, "cheapest");
        }
        let names = forecasts.iter().map(|(tariff, _)| tariff.name()).join(", ");
        debug!(%names, "compared");

        report.print_forecasts(&forecasts)
    }
}
