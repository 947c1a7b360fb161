use clap::Parser;

use crate::{core::forecast::AnnualUsage, prelude::*, quantity::energy::KilowattHours};

/// Typical medium household consumption by default.
#[derive(Copy, Clone, Parser)]
pub struct UsageArgs {
    /// Annual electricity usage, kilowatt-hours.
    #[clap(
        long = "annual-electricity-usage",
        env = "ANNUAL_ELECTRICITY_USAGE",
        default_value = "2700"
    )]
    pub electricity: KilowattHours,

    /// Annual gas usage, kilowatt-hours.
    #[clap(long = "annual-gas-usage", env = "ANNUAL_GAS_USAGE", default_value = "11500")]
    pub gas: KilowattHours,
}

impl TryFrom<UsageArgs> for AnnualUsage {
    type Error = Error;

    fn try_from(args: UsageArgs) -> Result<Self> {
        Ok(Self::try_new(args.electricity, args.gas)?)
    }
}
