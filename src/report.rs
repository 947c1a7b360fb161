use chrono::Month;
use itertools::Itertools;
use serde::Serialize;

use crate::{
    chart::build_bar_chart,
    core::{
        forecast::ForecastResult,
        month::{Monthly, calendar},
        tariff::Tariff,
    },
    prelude::*,
    quantity::{currency::Pounds, energy::KilowattHours},
    tables::{build_monthly_table, build_period_table, build_tariff_table, build_totals_table},
};

/// Prints the outcomes either as tables and charts, or as JSON.
pub struct Report {
    months: Monthly<Month>,
    json: bool,
}

#[derive(Serialize)]
struct ForecastRecord<'a> {
    tariff: &'a Tariff,
    forecast: &'a ForecastResult,
}

#[derive(Serialize)]
struct PeriodRecord<'a> {
    tariff: &'a str,
    days: u32,
    gas_usage: KilowattHours,
    electricity_usage: KilowattHours,
    average_day: Pounds,
}

impl Report {
    pub fn new(first_month: Month, json: bool) -> Self {
        Self { months: calendar(first_month), json }
    }

    pub fn print_forecasts(&self, forecasts: &[(Tariff, ForecastResult)]) -> Result {
        if self.json {
            let records = forecasts
                .iter()
                .map(|(tariff, forecast)| ForecastRecord { tariff, forecast })
                .collect_vec();
            println!("{}", serde_json::to_string_pretty(&records)?);
            return Ok(());
        }

        let results = forecasts.iter().map(|(_, result)| result).collect_vec();
        println!("{}", build_totals_table(&results));

        // Shared scale, so that the bars of different tariffs are comparable.
        let scale =
            results.iter().map(|result| result.max_monthly_cost()).max().unwrap_or(Pounds::ZERO);
        for (tariff, result) in forecasts {
            println!();
            println!("{}", tariff.name());
            println!("{}", build_tariff_table(tariff));
            println!("{}", build_monthly_table(tariff, result, &self.months));
            println!("{}", build_bar_chart(result, &self.months, scale));
        }
        Ok(())
    }

    pub fn print_period(
        &self,
        tariff: &Tariff,
        days: u32,
        gas_usage: KilowattHours,
        electricity_usage: KilowattHours,
        average_day: Pounds,
    ) -> Result {
        if self.json {
            let record = PeriodRecord {
                tariff: tariff.name(),
                days,
                gas_usage,
                electricity_usage,
                average_day,
            };
            println!("{}", serde_json::to_string_pretty(&record)?);
        } else {
            println!("{}", build_period_table(days, gas_usage, electricity_usage, average_day));
        }
        Ok(())
    }
}
