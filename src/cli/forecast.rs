use clap::Parser;

use crate::{
    cli::{tariff::TariffArgs, usage::UsageArgs},
    core::forecast::{self, AnnualUsage},
    prelude::*,
    report::Report,
};

#[derive(Parser)]
pub struct ForecastArgs {
    #[clap(flatten)]
    tariff: TariffArgs,

    #[clap(flatten)]
    usage: UsageArgs,

    /// Raise both unit prices by this fraction before projecting them, for example `0.1` for 10%.
    #[clap(long, env = "UNIT_RATE_INCREASE", allow_negative_numbers = true)]
    unit_rate_increase: Option<f64>,
}

impl ForecastArgs {
    #[instrument(skip_all)]
    pub fn run(self, report: &Report) -> Result {
        let mut tariff = self.tariff.try_build()?;
        if let Some(fraction) = self.unit_rate_increase {
            ensure!(fraction > -1.0, "the unit rate increase must be above -1, got {fraction}");
            tariff.increase_unit_rate(fraction);
            tariff.refresh_monthly_unit_prices();
            info!(
                fraction,
                electricity = %tariff.electricity_unit_price(),
                gas = %tariff.gas_unit_price(),
                "increased the unit rates",
            );
        }
        let result = forecast::run(&tariff, AnnualUsage::try_from(self.usage)?)?;
        report.print_forecasts(&[(tariff, result)])
    }
}
