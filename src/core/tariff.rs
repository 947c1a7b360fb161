use std::{array, ops::RangeInclusive};

use bon::bon;
use serde::Serialize;

use crate::{
    core::{
        error::{TariffError, ensure_within},
        forecast::{ForecastResult, MonthlyUsage},
        month::{MONTHS_PER_YEAR, Monthly, total},
        schedule::{PriceCapDelay, PriceCapSchedule},
    },
    quantity::{
        currency::{Pence, Pounds},
        energy::KilowattHours,
        price::{PencePerDay, PencePerKilowattHour},
        time::Days,
    },
};

/// Accepted standing charges and unit prices, in pence.
pub const PRICE_RANGE: RangeInclusive<f64> = 1.0..=100.0;

/// Dual-fuel tariff with the unit prices projected over the next twelve months.
#[derive(Clone, Debug, Serialize)]
#[must_use]
pub struct Tariff {
    name: String,
    gas_standing_charge: PencePerDay,
    electricity_standing_charge: PencePerDay,
    electricity_unit_price: PencePerKilowattHour,
    gas_unit_price: PencePerKilowattHour,
    price_cap_schedule: PriceCapSchedule,
    price_cap_delay: PriceCapDelay,
    monthly_electricity_unit_prices: Monthly<PencePerKilowattHour>,
    monthly_gas_unit_prices: Monthly<PencePerKilowattHour>,
}

#[bon]
impl Tariff {
    #[builder]
    pub fn new(
        #[builder(into)] name: String,
        #[builder(into)] gas_standing_charge: PencePerDay,
        #[builder(into)] electricity_standing_charge: PencePerDay,
        #[builder(into)] electricity_unit_price: PencePerKilowattHour,
        #[builder(into)] gas_unit_price: PencePerKilowattHour,
        #[builder(into)] price_cap_schedule: Vec<f64>,
        #[builder(default)] price_cap_delay: usize,
    ) -> Result<Self, TariffError> {
        for (what, value) in [
            ("gas standing charge", gas_standing_charge.0),
            ("electricity standing charge", electricity_standing_charge.0),
            ("electricity unit price", electricity_unit_price.0),
            ("gas unit price", gas_unit_price.0),
        ] {
            ensure_within(what, value, &PRICE_RANGE, TariffError::InvalidConfiguration)?;
        }
        let price_cap_schedule = PriceCapSchedule::try_from(price_cap_schedule.as_slice())?;
        let price_cap_delay = PriceCapDelay::try_new(price_cap_delay)?;

        let mut this = Self {
            name,
            gas_standing_charge,
            electricity_standing_charge,
            electricity_unit_price,
            gas_unit_price,
            price_cap_schedule,
            price_cap_delay,
            monthly_electricity_unit_prices: [electricity_unit_price; MONTHS_PER_YEAR],
            monthly_gas_unit_prices: [gas_unit_price; MONTHS_PER_YEAR],
        };
        this.refresh_monthly_unit_prices();
        Ok(this)
    }
}

impl Tariff {
    #[must_use]
    pub fn name(&self) -> &str {
        &self.name
    }

    pub const fn gas_standing_charge(&self) -> PencePerDay {
        self.gas_standing_charge
    }

    pub const fn electricity_standing_charge(&self) -> PencePerDay {
        self.electricity_standing_charge
    }

    pub const fn electricity_unit_price(&self) -> PencePerKilowattHour {
        self.electricity_unit_price
    }

    pub const fn gas_unit_price(&self) -> PencePerKilowattHour {
        self.gas_unit_price
    }

    #[must_use]
    pub const fn price_cap_schedule(&self) -> PriceCapSchedule {
        self.price_cap_schedule
    }

    #[must_use]
    pub const fn price_cap_delay(&self) -> PriceCapDelay {
        self.price_cap_delay
    }

    /// Electricity unit prices as of the last projection.
    #[must_use]
    pub const fn monthly_electricity_unit_prices(&self) -> &Monthly<PencePerKilowattHour> {
        &self.monthly_electricity_unit_prices
    }

    /// Gas unit prices as of the last projection.
    #[must_use]
    pub const fn monthly_gas_unit_prices(&self) -> &Monthly<PencePerKilowattHour> {
        &self.monthly_gas_unit_prices
    }

    /// Project the current base unit prices through the price cap schedule.
    ///
    /// Returns the electricity and gas prices, in this order.
    #[must_use]
    pub fn project_unit_prices(
        &self,
    ) -> (Monthly<PencePerKilowattHour>, Monthly<PencePerKilowattHour>) {
        (
            self.price_cap_schedule.project(self.electricity_unit_price, self.price_cap_delay),
            self.price_cap_schedule.project(self.gas_unit_price, self.price_cap_delay),
        )
    }

    /// Re-derive the stored monthly unit prices from the current base prices.
    pub fn refresh_monthly_unit_prices(&mut self) {
        (self.monthly_electricity_unit_prices, self.monthly_gas_unit_prices) =
            self.project_unit_prices();
    }

    /// Increase both base unit prices by `fraction`, for example `0.1` for 10%.
    ///
    /// The stored monthly prices stay as they are until [`Self::refresh_monthly_unit_prices`].
    pub fn increase_unit_rate(&mut self, fraction: f64) {
        self.electricity_unit_price += self.electricity_unit_price * fraction;
        self.gas_unit_price += self.gas_unit_price * fraction;
    }

    pub fn gas_daily_cost(&self, usage: KilowattHours) -> Pence {
        self.gas_standing_charge * Days::ONE + self.gas_unit_price * usage
    }

    pub fn electricity_daily_cost(&self, usage: KilowattHours) -> Pence {
        self.electricity_standing_charge * Days::ONE + self.electricity_unit_price * usage
    }

    /// Cost of a single day at the base unit prices.
    pub fn daily_cost(&self, gas_usage: KilowattHours, electricity_usage: KilowattHours) -> Pence {
        self.gas_daily_cost(gas_usage) + self.electricity_daily_cost(electricity_usage)
    }

    /// Cost of a single average day of a period with the given total usage.
    pub fn period_cost(
        &self,
        days: u32,
        gas_usage: KilowattHours,
        electricity_usage: KilowattHours,
    ) -> Result<Pounds, TariffError> {
        if days == 0 {
            return Err(TariffError::InvalidPeriod);
        }
        let days = f64::from(days);
        Ok(self.daily_cost(gas_usage / days, electricity_usage / days).to_pounds())
    }

    /// Monthly and annual costs for the given usage, at the projected unit prices.
    pub fn run_annual_forecast(&self, usage: &MonthlyUsage) -> Result<ForecastResult, TariffError> {
        usage.validate()?;

        let monthly_gas: Monthly<Pounds> = array::from_fn(|month| {
            (self.gas_standing_charge * Days::AVERAGE_MONTH
                + self.monthly_gas_unit_prices[month] * usage.gas[month])
                .to_pounds()
        });
        let monthly_electricity: Monthly<Pounds> = array::from_fn(|month| {
            (self.electricity_standing_charge * Days::AVERAGE_MONTH
                + self.monthly_electricity_unit_prices[month] * usage.electricity[month])
                .to_pounds()
        });

        let total_gas = total(&monthly_gas).round_to_pennies();
        let total_electricity = total(&monthly_electricity).round_to_pennies();

        Ok(ForecastResult {
            tariff_name: self.name.clone(),
            monthly_gas,
            monthly_electricity,
            total_gas,
            total_electricity,
            total_combined: (total_gas + total_electricity).round_to_pennies(),
        })
    }
}

#[cfg(test)]
mod tests {
    use approx::{assert_abs_diff_eq, assert_relative_eq};

    use super::*;
    use crate::core::forecast::AnnualUsage;

    fn tariff(price_cap_schedule: [f64; 4], price_cap_delay: usize) -> Tariff {
        Tariff::builder()
            .name("Standard variable")
            .gas_standing_charge(31.65)
            .electricity_standing_charge(53.35)
            .electricity_unit_price(24.86)
            .gas_unit_price(6.24)
            .price_cap_schedule(price_cap_schedule)
            .price_cap_delay(price_cap_delay)
            .build()
            .unwrap()
    }

    #[test]
    fn test_flat_schedule_keeps_base_prices() {
        let tariff = tariff([1.0; 4], 0);
        assert_eq!(tariff.monthly_electricity_unit_prices(), &[PencePerKilowattHour(24.86); 12]);
        assert_eq!(tariff.monthly_gas_unit_prices(), &[PencePerKilowattHour(6.24); 12]);
    }

    #[test]
    fn test_first_review_doubles_every_month() {
        let tariff = tariff([2.0, 1.0, 1.0, 1.0], 0);
        assert_eq!(tariff.monthly_electricity_unit_prices(), &[PencePerKilowattHour(49.72); 12]);
        assert_eq!(tariff.monthly_gas_unit_prices(), &[PencePerKilowattHour(12.48); 12]);
    }

    #[test]
    fn test_third_review_past_the_year_is_no_op() {
        let tariff = tariff([1.0, 1.0, 2.0, 1.0], 6);
        assert_eq!(tariff.monthly_electricity_unit_prices(), &[PencePerKilowattHour(24.86); 12]);
    }

    #[test]
    fn test_monthly_prices_always_have_twelve_entries() {
        for delay in 0..=11 {
            let (electricity, gas) = tariff([1.1, 0.9, 1.2, 1.0], delay).project_unit_prices();
            assert_eq!(electricity.len(), MONTHS_PER_YEAR);
            assert_eq!(gas.len(), MONTHS_PER_YEAR);
        }
    }

    #[test]
    fn test_invalid_schedule_length() {
        let result = Tariff::builder()
            .name("Short")
            .gas_standing_charge(31.65)
            .electricity_standing_charge(53.35)
            .electricity_unit_price(24.86)
            .gas_unit_price(6.24)
            .price_cap_schedule([1.0, 1.0, 1.0])
            .build();
        assert!(matches!(result, Err(TariffError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_invalid_delay() {
        let result = Tariff::builder()
            .name("Late")
            .gas_standing_charge(31.65)
            .electricity_standing_charge(53.35)
            .electricity_unit_price(24.86)
            .gas_unit_price(6.24)
            .price_cap_schedule([1.0; 4])
            .price_cap_delay(12)
            .build();
        assert!(matches!(result, Err(TariffError::InvalidConfiguration(_))));
    }

    #[test]
    fn test_price_out_of_range() {
        let result = Tariff::builder()
            .name("Free")
            .gas_standing_charge(0.0)
            .electricity_standing_charge(53.35)
            .electricity_unit_price(24.86)
            .gas_unit_price(6.24)
            .price_cap_schedule([1.0; 4])
            .build();
        assert_eq!(
            result.unwrap_err(),
            TariffError::InvalidConfiguration(
                "gas standing charge must be within 1..=100, got 0".to_owned()
            )
        );
    }

    #[test]
    fn test_daily_cost() {
        let tariff = tariff([1.0; 4], 0);
        assert_abs_diff_eq!(tariff.gas_daily_cost(KilowattHours(30.0)).0, 31.65 + 6.24 * 30.0);
        assert_abs_diff_eq!(
            tariff.electricity_daily_cost(KilowattHours(8.0)).0,
            53.35 + 24.86 * 8.0
        );
        assert_abs_diff_eq!(
            tariff.daily_cost(KilowattHours(30.0), KilowattHours(8.0)).0,
            31.65 + 6.24 * 30.0 + 53.35 + 24.86 * 8.0,
            epsilon = 1e-9,
        );
    }

    #[test]
    fn test_period_cost() {
        let tariff = tariff([1.0; 4], 0);
        let cost = tariff.period_cost(10, KilowattHours(300.0), KilowattHours(80.0)).unwrap();
        let expected = (31.65 + 6.24 * 30.0 + 53.35 + 24.86 * 8.0) / 100.0;
        assert_abs_diff_eq!(cost.0, expected, epsilon = 1e-9);
    }

    #[test]
    fn test_period_cost_zero_days() {
        let tariff = tariff([1.0; 4], 0);
        assert_eq!(
            tariff.period_cost(0, KilowattHours(300.0), KilowattHours(80.0)),
            Err(TariffError::InvalidPeriod)
        );
    }

    #[test]
    fn test_increase_unit_rate_does_not_cascade() {
        let mut tariff = tariff([1.5, 1.0, 1.0, 1.0], 0);
        let electricity_before = *tariff.monthly_electricity_unit_prices();
        let gas_before = *tariff.monthly_gas_unit_prices();

        tariff.increase_unit_rate(0.1);
        assert_relative_eq!(tariff.electricity_unit_price().0, 24.86 * 1.1, epsilon = 1e-12);
        assert_relative_eq!(tariff.gas_unit_price().0, 6.24 * 1.1, epsilon = 1e-12);
        assert_eq!(tariff.monthly_electricity_unit_prices(), &electricity_before);
        assert_eq!(tariff.monthly_gas_unit_prices(), &gas_before);

        tariff.refresh_monthly_unit_prices();
        assert_relative_eq!(
            tariff.monthly_electricity_unit_prices()[0].0,
            24.86 * 1.1 * 1.5,
            epsilon = 1e-12
        );
        assert_relative_eq!(
            tariff.monthly_gas_unit_prices()[11].0,
            6.24 * 1.1 * 1.5,
            epsilon = 1e-12
        );
    }

    #[test]
    fn test_zero_usage_costs_standing_charges_only() {
        let tariff = tariff([1.3, 1.2, 1.1, 1.0], 2);
        let result = tariff.run_annual_forecast(&MonthlyUsage::ZERO).unwrap();
        assert_abs_diff_eq!(result.total_gas.0, 31.65 * 30.437 * 12.0 / 100.0, epsilon = 0.005);
        assert_abs_diff_eq!(
            result.total_electricity.0,
            53.35 * 30.437 * 12.0 / 100.0,
            epsilon = 0.005
        );
    }

    #[test]
    fn test_annual_forecast() {
        let tariff = tariff([1.0, 2.0, 1.0, 1.0], 0);
        let usage = MonthlyUsage {
            electricity: [KilowattHours(100.0); 12],
            gas: [KilowattHours(1000.0); 12],
        };
        let result = tariff.run_annual_forecast(&usage).unwrap();

        assert_eq!(result.tariff_name, "Standard variable");
        assert_abs_diff_eq!(
            result.monthly_electricity[0].0,
            (53.35 * 30.437 + 24.86 * 100.0) / 100.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            result.monthly_electricity[3].0,
            (53.35 * 30.437 + 24.86 * 2.0 * 100.0) / 100.0,
            epsilon = 1e-9
        );
        assert_abs_diff_eq!(
            result.monthly_gas[11].0,
            (31.65 * 30.437 + 6.24 * 2.0 * 1000.0) / 100.0,
            epsilon = 1e-9
        );

        let expected_gas: f64 = result.monthly_gas.iter().map(|cost| cost.0).sum();
        assert_abs_diff_eq!(result.total_gas.0, expected_gas, epsilon = 0.005);
        assert_abs_diff_eq!(
            result.total_combined.0,
            result.total_gas.0 + result.total_electricity.0,
            epsilon = 1e-9
        );
    }

    #[test]
    fn test_total_rounds_half_penny_after_pairwise_sum() {
        let tariff = Tariff::builder()
            .name("Steep")
            .gas_standing_charge(31.65)
            .electricity_standing_charge(38.85)
            .electricity_unit_price(67.89)
            .gas_unit_price(6.24)
            .price_cap_schedule([0.17, 0.78, 0.65, 1.98])
            .price_cap_delay(11)
            .build()
            .unwrap();
        let usage = AnnualUsage::try_new(KilowattHours(5944.0), KilowattHours(11500.0))
            .unwrap()
            .spread_evenly();
        let result = tariff.run_annual_forecast(&usage).unwrap();

        // Summed left to right, the same months come out at £3898.1650000000004.
        assert_eq!(result.total_electricity, Pounds(3898.16));
    }

    #[test]
    fn test_forecast_is_deterministic() {
        let tariff = tariff([1.07, 0.93, 1.11, 1.013], 4);
        let usage = MonthlyUsage {
            electricity: [KilowattHours(225.0); 12],
            gas: [KilowattHours(958.3); 12],
        };
        assert_eq!(tariff.run_annual_forecast(&usage), tariff.run_annual_forecast(&usage));
    }

    #[test]
    fn test_negative_usage() {
        let mut usage = MonthlyUsage::ZERO;
        usage.gas[5] = KilowattHours(-1.0);
        assert!(matches!(
            tariff([1.0; 4], 0).run_annual_forecast(&usage),
            Err(TariffError::InvalidUsage(_))
        ));
    }
}
