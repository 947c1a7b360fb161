use std::ops::RangeInclusive;

use serde::Serialize;

use crate::{
    core::{
        error::{TariffError, ensure_within},
        month::{MONTHS_PER_YEAR, Monthly},
        tariff::Tariff,
    },
    prelude::*,
    quantity::{currency::Pounds, energy::KilowattHours},
};

/// Costs of a tariff over the forecast year, in pounds.
#[derive(Clone, Debug, PartialEq, Serialize)]
#[must_use]
pub struct ForecastResult {
    pub tariff_name: String,
    pub monthly_gas: Monthly<Pounds>,
    pub monthly_electricity: Monthly<Pounds>,

    /// Rounded to pennies.
    pub total_gas: Pounds,

    /// Rounded to pennies.
    pub total_electricity: Pounds,

    /// Rounded to pennies.
    pub total_combined: Pounds,
}

impl ForecastResult {
    /// Combined electricity and gas cost of each month.
    pub fn monthly_combined(&self) -> Monthly<Pounds> {
        std::array::from_fn(|month| self.monthly_electricity[month] + self.monthly_gas[month])
    }

    /// The most expensive single-fuel month, used to scale the charts.
    pub fn max_monthly_cost(&self) -> Pounds {
        self.monthly_electricity
            .iter()
            .chain(&self.monthly_gas)
            .copied()
            .max()
            .unwrap_or(Pounds::ZERO)
    }
}

#[derive(Copy, Clone, Debug, PartialEq)]
pub struct MonthlyUsage {
    pub electricity: Monthly<KilowattHours>,
    pub gas: Monthly<KilowattHours>,
}

impl MonthlyUsage {
    #[cfg(test)]
    pub const ZERO: Self = Self {
        electricity: [KilowattHours::ZERO; MONTHS_PER_YEAR],
        gas: [KilowattHours::ZERO; MONTHS_PER_YEAR],
    };

    pub fn validate(&self) -> Result<(), TariffError> {
        for usage in self.electricity.iter().chain(&self.gas) {
            ensure_within(
                "monthly usage",
                usage.0,
                &(0.0..=f64::MAX),
                TariffError::InvalidUsage,
            )?;
        }
        Ok(())
    }
}

/// Annual usage, evenly spread across the months.
#[derive(Copy, Clone, Debug, PartialEq)]
pub struct AnnualUsage {
    electricity: KilowattHours,
    gas: KilowattHours,
}

impl AnnualUsage {
    pub const ELECTRICITY_RANGE: RangeInclusive<f64> = 1000.0..=8000.0;
    pub const GAS_RANGE: RangeInclusive<f64> = 5000.0..=20000.0;

    pub fn try_new(electricity: KilowattHours, gas: KilowattHours) -> Result<Self, TariffError> {
        ensure_within(
            "annual electricity usage",
            electricity.0,
            &Self::ELECTRICITY_RANGE,
            TariffError::InvalidUsage,
        )?;
        ensure_within("annual gas usage", gas.0, &Self::GAS_RANGE, TariffError::InvalidUsage)?;
        Ok(Self { electricity, gas })
    }

    /// Same usage every month.
    ///
    /// Seasonal variation is not modelled, so winter months come out as cheap as summer ones.
    #[must_use]
    pub fn spread_evenly(self) -> MonthlyUsage {
        #[expect(clippy::cast_precision_loss)]
        let n_months = MONTHS_PER_YEAR as f64;
        MonthlyUsage {
            electricity: [self.electricity / n_months; MONTHS_PER_YEAR],
            gas: [self.gas / n_months; MONTHS_PER_YEAR],
        }
    }
}

/// Forecast the tariff costs for the annual usage.
#[instrument(skip_all, fields(tariff = tariff.name()))]
pub fn run(tariff: &Tariff, usage: AnnualUsage) -> Result<ForecastResult, TariffError> {
    debug!(electricity = %usage.electricity, gas = %usage.gas, "spreading the usage…");
    let result = tariff.run_annual_forecast(&usage.spread_evenly())?;
    info!(
        gas = %result.total_gas,
        electricity = %result.total_electricity,
        total = %result.total_combined,
        "forecasted",
    );
    Ok(result)
}
