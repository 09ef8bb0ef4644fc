use super::ui;
use crate::core::RateTable;
use anyhow::Result;
use comfy_table::Cell;

/// Renders the effective rate table.
pub fn display_as_table(rates: &RateTable) -> String {
    let mut table = ui::new_styled_table();
    table.set_header(vec![
        ui::header_cell("From"),
        ui::header_cell("To"),
        ui::header_cell("Rate"),
    ]);

    for entry in rates.iter() {
        table.add_row(vec![
            Cell::new(entry.from.as_str()),
            Cell::new(entry.to.as_str()),
            ui::number_cell(entry.rate.normalize()),
        ]);
    }

    format!(
        "{}\n\n{}",
        ui::style_text("Exchange rates", ui::StyleType::Title),
        table
    )
}

pub fn run(rates: &RateTable) -> Result<()> {
    println!("{}", display_as_table(rates));
    Ok(())
}
