use std::iter;

use chrono::Month;
use comfy_table::{Attribute, Cell, CellAlignment, Color, Table, modifiers, presets};
use itertools::Itertools;

use crate::{
    core::{
        forecast::ForecastResult,
        month::{Monthly, abbreviation},
        tariff::Tariff,
    },
    quantity::{currency::Pounds, energy::KilowattHours},
};

pub fn new_table() -> Table {
    let mut table = Table::new();
    table
        .load_preset(presets::UTF8_FULL_CONDENSED)
        .apply_modifier(modifiers::UTF8_ROUND_CORNERS)
        .enforce_styling();
    table
}

/// Annual totals, one column per tariff.
///
/// The cheapest tariff is highlighted when there are several.
pub fn build_totals_table(results: &[&ForecastResult]) -> Table {
    let cheapest = results.iter().map(|result| result.total_combined).min();
    let highlight = results.len() > 1;

    let mut table = new_table();
    table.set_header(
        iter::once(Cell::new("£"))
            .chain(results.iter().map(|result| Cell::new(&result.tariff_name)))
            .collect_vec(),
    );
    table.add_row(totals_row(
        "Total annual gas",
        results.iter().map(|result| Cell::new(result.total_gas)),
    ));
    table.add_row(totals_row(
        "Total annual elec",
        results.iter().map(|result| Cell::new(result.total_electricity)),
    ));
    table.add_row(totals_row(
        "Total annual energy",
        results.iter().map(|result| {
            let cell = Cell::new(result.total_combined).add_attribute(Attribute::Bold);
            if !highlight {
                cell
            } else if Some(result.total_combined) == cheapest {
                cell.fg(Color::Green)
            } else {
                cell.fg(Color::Red)
            }
        }),
    ));
    table
}

fn totals_row(label: &str, cells: impl Iterator<Item = Cell>) -> Vec<Cell> {
    iter::once(Cell::new(label))
        .chain(cells.map(|cell| cell.set_alignment(CellAlignment::Right)))
        .collect_vec()
}

/// Base prices and the price cap schedule.
pub fn build_tariff_table(tariff: &Tariff) -> Table {
    let schedule = tariff.price_cap_schedule();
    let mut table = new_table();
    table.set_header(vec![
        "",
        "Standing charge",
        "Unit price",
        "Review 1",
        "Review 2",
        "Review 3",
        "Review 4",
        "Delay",
    ]);
    for (fuel, standing_charge, unit_price) in [
        ("Elec", tariff.electricity_standing_charge(), tariff.electricity_unit_price()),
        ("Gas", tariff.gas_standing_charge(), tariff.gas_unit_price()),
    ] {
        table.add_row(
            [
                Cell::new(fuel),
                Cell::new(standing_charge).set_alignment(CellAlignment::Right),
                Cell::new(unit_price).set_alignment(CellAlignment::Right),
            ]
            .into_iter()
            .chain(schedule.factors().map(factor_cell))
            .chain(iter::once(Cell::new(format!("{} mo", tariff.price_cap_delay().months()))))
            .collect_vec(),
        );
    }
    table
}

fn factor_cell(factor: f64) -> Cell {
    let cell = Cell::new(format!("×{factor:.3}")).set_alignment(CellAlignment::Right);
    if factor > 1.0 {
        cell.fg(Color::Red)
    } else if factor < 1.0 {
        cell.fg(Color::Green)
    } else {
        cell.add_attribute(Attribute::Dim)
    }
}

/// Month-by-month unit prices and costs.
pub fn build_monthly_table(
    tariff: &Tariff,
    result: &ForecastResult,
    months: &Monthly<Month>,
) -> Table {
    let multipliers =
        tariff.price_cap_schedule().cumulative_multipliers(tariff.price_cap_delay());
    let combined = result.monthly_combined();

    let mut table = new_table();
    table.set_header(vec!["Month", "Cap", "Elec rate", "Gas rate", "Elec", "Gas", "Total"]);
    for (index, month) in months.iter().enumerate() {
        table.add_row(vec![
            Cell::new(abbreviation(*month)),
            factor_cell(multipliers[index]),
            Cell::new(tariff.monthly_electricity_unit_prices()[index])
                .set_alignment(CellAlignment::Right),
            Cell::new(tariff.monthly_gas_unit_prices()[index]).set_alignment(CellAlignment::Right),
            Cell::new(result.monthly_electricity[index]).set_alignment(CellAlignment::Right),
            Cell::new(result.monthly_gas[index]).set_alignment(CellAlignment::Right),
            Cell::new(combined[index])
                .set_alignment(CellAlignment::Right)
                .add_attribute(Attribute::Bold),
        ]);
    }
    table
}

pub fn build_period_table(
    days: u32,
    gas_usage: KilowattHours,
    electricity_usage: KilowattHours,
    average_day: Pounds,
) -> Table {
    let mut table = new_table();
    table.set_header(vec!["Days", "Gas usage", "Elec usage", "Average day", "Whole period"]);
    table.add_row(vec![
        Cell::new(days),
        Cell::new(gas_usage).set_alignment(CellAlignment::Right),
        Cell::new(electricity_usage).set_alignment(CellAlignment::Right),
        Cell::new(average_day).set_alignment(CellAlignment::Right),
        Cell::new(average_day * f64::from(days))
            .set_alignment(CellAlignment::Right)
            .add_attribute(Attribute::Bold),
    ]);
    table
}
