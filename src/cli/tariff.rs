use clap::Parser;

use crate::{
    core::tariff::Tariff,
    prelude::*,
    quantity::price::{PencePerDay, PencePerKilowattHour},
};

#[derive(Parser)]
pub struct TariffArgs {
    #[clap(long = "tariff-name", env = "TARIFF_NAME", default_value = "Tariff")]
    pub name: String,

    /// Electricity standing charge, pence per day.
    #[clap(long, env = "ELECTRICITY_STANDING_CHARGE")]
    pub electricity_standing_charge: PencePerDay,

    /// Gas standing charge, pence per day.
    #[clap(long, env = "GAS_STANDING_CHARGE")]
    pub gas_standing_charge: PencePerDay,

    /// Electricity unit price, pence per kilowatt-hour.
    #[clap(long, env = "ELECTRICITY_UNIT_PRICE")]
    pub electricity_unit_price: PencePerKilowattHour,

    /// Gas unit price, pence per kilowatt-hour.
    #[clap(long, env = "GAS_UNIT_PRICE")]
    pub gas_unit_price: PencePerKilowattHour,

    /// Four quarterly price cap review factors, for example `1.0,1.05,1.0,0.98`.
    #[clap(
        long,
        env = "PRICE_CAP_SCHEDULE",
        value_delimiter = ',',
        num_args = 1..,
        default_value = "1,1,1,1",
    )]
    pub price_cap_schedule: Vec<f64>,

    /// Delay the price cap reviews by this many months.
    #[clap(long, env = "PRICE_CAP_DELAY", default_value = "0")]
    pub price_cap_delay: usize,
}

impl TariffArgs {
    pub fn try_build(&self) -> Result<Tariff> {
        let tariff = Tariff::builder()
            .name(self.name.clone())
            .electricity_standing_charge(self.electricity_standing_charge)
            .gas_standing_charge(self.gas_standing_charge)
            .electricity_unit_price(self.electricity_unit_price)
            .gas_unit_price(self.gas_unit_price)
            .price_cap_schedule(self.price_cap_schedule.clone())
            .price_cap_delay(self.price_cap_delay)
            .build()
            .with_context(|| format!("invalid tariff `{}`", self.name))?;
        Ok(tariff)
    }
}
