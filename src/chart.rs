use chrono::Month;
use comfy_table::{Cell, Color, Table};

use crate::{
    core::{
        forecast::ForecastResult,
        month::{Monthly, abbreviation},
    },
    quantity::currency::Pounds,
    tables::new_table,
};

/// Width of the bar for the `scale` cost, in characters.
const BAR_WIDTH: usize = 32;

const ELECTRICITY_COLOR: Color = Color::Yellow;
const GAS_COLOR: Color = Color::Blue;

/// Side-by-side monthly electricity and gas bars.
///
/// Pass the same `scale` to the charts of all the compared tariffs to keep them comparable.
pub fn build_bar_chart(result: &ForecastResult, months: &Monthly<Month>, scale: Pounds) -> Table {
    let mut table = new_table();
    table.set_header(vec![
        Cell::new("Month"),
        Cell::new("Elec").fg(ELECTRICITY_COLOR),
        Cell::new("Gas").fg(GAS_COLOR),
    ]);
    for ((month, electricity), gas) in
        months.iter().zip(&result.monthly_electricity).zip(&result.monthly_gas)
    {
        table.add_row(vec![
            Cell::new(abbreviation(*month)),
            Cell::new(format!("{} {electricity}", bar(*electricity, scale))).fg(ELECTRICITY_COLOR),
            Cell::new(format!("{} {gas}", bar(*gas, scale))).fg(GAS_COLOR),
        ]);
    }
    table
}

fn bar(cost: Pounds, scale: Pounds) -> String {
    if scale <= Pounds::ZERO {
        return String::new();
    }
    #[expect(
        clippy::cast_possible_truncation,
        clippy::cast_precision_loss,
        clippy::cast_sign_loss
    )]
    let length = ((cost / scale).clamp(0.0, 1.0) * BAR_WIDTH as f64).round() as usize;
    "█".repeat(length)
}
