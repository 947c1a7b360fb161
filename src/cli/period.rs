use clap::Parser;

use crate::{cli::tariff::TariffArgs, prelude::*, quantity::energy::KilowattHours, report::Report};

#[derive(Parser)]
pub struct PeriodArgs {
    #[clap(flatten)]
    tariff: TariffArgs,

    /// Period length in days.
    #[clap(long, env = "PERIOD_DAYS")]
    days: u32,

    /// Total gas usage over the period, kilowatt-hours.
    #[clap(long)]
    gas_usage: KilowattHours,

    /// Total electricity usage over the period, kilowatt-hours.
    #[clap(long)]
    electricity_usage: KilowattHours,
}

impl PeriodArgs {
    #[instrument(skip_all, fields(days = self.days))]
    pub fn run(self, report: &Report) -> Result {
        let tariff = self.tariff.try_build()?;
        let average_day = tariff.period_cost(self.days, self.gas_usage, self.electricity_usage)?;
        info!(%average_day, "calculated");
        report.print_period(&tariff, self.days, self.gas_usage, self.electricity_usage, average_day)
    }
}

#[cfg(test)]
mod tests {
    use clap::Parser;

    use crate::{
        cli::{Args, Command},
        core::error::TariffError,
    };

    fn parse(days: &str) -> Box<super::PeriodArgs> {
        let args = Args::try_parse_from([
            "tariffcast",
            "period",
            "--electricity-standing-charge",
            "53.35",
            "--gas-standing-charge",
            "31.65",
            "--electricity-unit-price",
            "24.86",
            "--gas-unit-price",
            "6.24",
            "--days",
            days,
            "--gas-usage",
            "1200",
            "--electricity-usage",
            "240",
        ])
        .unwrap();
        let Command::Period(args) = args.command else {
            panic!("expected the period command");
        };
        args
    }

    #[test]
    fn test_period_cost() {
        let args = parse("30");
        let tariff = args.tariff.try_build().unwrap();
        let cost =
            tariff.period_cost(args.days, args.gas_usage, args.electricity_usage).unwrap();
        approx::assert_abs_diff_eq!(
            cost.0,
            (31.65 + 6.24 * 40.0 + 53.35 + 24.86 * 8.0) / 100.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_zero_days() {
        let args = parse("0");
        let tariff = args.tariff.try_build().unwrap();
        assert_eq!(
            tariff.period_cost(args.days, args.gas_usage, args.electricity_usage),
            Err(TariffError::InvalidPeriod)
        );
    }
}
