use std::{fs, path::Path};

use serde::Deserialize;

use crate::{
    core::{error::TariffError, schedule::PriceCapSchedule, tariff::Tariff},
    prelude::*,
    quantity::price::{PencePerDay, PencePerKilowattHour},
};

/// Tariffs to compare.
#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct Config {
    pub tariffs: Vec<TariffConfig>,
}

impl Config {
    #[instrument(skip_all, fields(path = %path.display()))]
    pub fn read_from(path: &Path) -> Result<Self> {
        let text = fs::read_to_string(path)
            .with_context(|| format!("failed to read `{}`", path.display()))?;
        Self::from_toml(&text)
    }

    pub fn from_toml(text: &str) -> Result<Self> {
        let this: Self = toml::from_str(text).context("failed to parse the tariffs")?;
        ensure!(!this.tariffs.is_empty(), "at least one tariff is required");
        debug!(n_tariffs = this.tariffs.len(), "loaded the tariffs");
        Ok(this)
    }
}

#[derive(Deserialize)]
#[serde(deny_unknown_fields)]
pub struct TariffConfig {
    pub name: String,
    pub electricity_standing_charge: PencePerDay,
    pub gas_standing_charge: PencePerDay,
    pub electricity_unit_price: PencePerKilowattHour,
    pub gas_unit_price: PencePerKilowattHour,

    #[serde(default = "flat_schedule")]
    pub price_cap_schedule: Vec<f64>,

    /// Months before the first price cap review.
    #[serde(default)]
    pub price_cap_delay: usize,
}

fn flat_schedule() -> Vec<f64> {
    PriceCapSchedule::FLAT.factors().to_vec()
}

impl TryFrom<TariffConfig> for Tariff {
    type Error = TariffError;

    fn try_from(config: TariffConfig) -> Result<Self, Self::Error> {
        Self::builder()
            .name(config.name)
            .electricity_standing_charge(config.electricity_standing_charge)
            .gas_standing_charge(config.gas_standing_charge)
            .electricity_unit_price(config.electricity_unit_price)
            .gas_unit_price(config.gas_unit_price)
            .price_cap_schedule(config.price_cap_schedule)
            .price_cap_delay(config.price_cap_delay)
            .build()
    }
}
