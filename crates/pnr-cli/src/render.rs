//! Report rendering for the terminal.

use std::fmt::Write as _;

use comfy_table::modifiers::{UTF8_ROUND_CORNERS, UTF8_SOLID_INNER_BORDERS};
use comfy_table::presets::{UTF8_FULL, UTF8_FULL_CONDENSED};
use comfy_table::{Attribute, Cell, CellAlignment, Color, ContentArrangement, Table};

use pnr_model::{PnrReport, PnrSummary, StatusLabel};

pub fn render_json(report: &PnrReport) -> serde_json::Result<String> {
    serde_json::to_string_pretty(report)
}

/// Plain layout with no table borders or colors.
pub fn render_text(report: &PnrReport) -> String {
    let mut out = String::new();
    let _ = writeln!(out, "PNR: {}", report.pnr_formatted);
    let _ = writeln!(out, "{}", report.train_info);
    let _ = writeln!(out, "Chart: {}", chart_text(report.chart_prepared));
    let _ = writeln!(out);
    for (index, passenger) in report.passengers.iter().enumerate() {
        let _ = writeln!(
            out,
            "{:>2}. {}  {} -> {}  {}",
            index + 1,
            passenger.formatted_name,
            passenger.booking_status,
            passenger.current_status,
            passenger.status_label
        );
    }
    let summary = &report.summary;
    let _ = writeln!(out);
    let _ = writeln!(
        out,
        "Passengers: {} (confirmed {}, waiting {}, RAC {}, cancelled {})",
        summary.total_passengers,
        summary.confirmed,
        summary.waiting,
        summary.rac,
        summary.cancelled
    );
    let _ = write!(
        out,
        "All confirmed: {} | Any waiting: {}",
        yes_no(summary.all_confirmed),
        yes_no(summary.any_waiting)
    );
    out
}

pub fn passenger_table(report: &PnrReport) -> Table {
    let mut table = Table::new();
    table.set_header(vec![
        header_cell("#"),
        header_cell("Passenger"),
        header_cell("Booking"),
        header_cell("Current"),
        header_cell("Status"),
    ]);
    apply_table_style(&mut table);
    align_column(&mut table, 0, CellAlignment::Right);
    align_column(&mut table, 4, CellAlignment::Center);
    for (index, passenger) in report.passengers.iter().enumerate() {
        table.add_row(vec![
            dim_cell(index + 1),
            Cell::new(&passenger.formatted_name),
            Cell::new(&passenger.booking_status),
            Cell::new(&passenger.current_status),
            label_cell(passenger.status_label),
        ]);
    }
    table
}

pub fn summary_table(summary: &PnrSummary, chart_prepared: bool) -> Table {
    let mut table = Table::new();
    let mut header = vec![header_cell("Total")];
    header.extend(StatusLabel::ALL.iter().map(|label| header_cell(label.as_str())));
    header.extend([header_cell("All confirmed"), header_cell("Chart")]);
    table.set_header(header);
    apply_summary_table_style(&mut table);
    for index in 0..=StatusLabel::ALL.len() {
        align_column(&mut table, index, CellAlignment::Right);
    }
    let mut row = vec![Cell::new(summary.total_passengers).add_attribute(Attribute::Bold)];
    row.extend(
        StatusLabel::ALL
            .iter()
            .map(|&label| count_cell(summary.count(label), label_color(label))),
    );
    row.extend([
        flag_cell(summary.all_confirmed),
        flag_cell(chart_prepared).add_attribute(Attribute::Bold),
    ]);
    table.add_row(row);
    table
}

pub fn print_report(report: &PnrReport) {
    println!("PNR: {}", report.pnr_formatted);
    println!("{}", report.train_info);
    println!("{}", passenger_table(report));
    println!("{}", summary_table(&report.summary, report.chart_prepared));
}

pub fn labels_table() -> Table {
    let mut table = Table::new();
    table.set_header(vec![header_cell("Label"), header_cell("Selected when")]);
    apply_table_style(&mut table);
    for label in StatusLabel::ALL {
        table.add_row(vec![label_cell(label), Cell::new(label.rule())]);
    }
    table
}

fn apply_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL_CONDENSED)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn apply_summary_table_style(table: &mut Table) {
    table
        .load_preset(UTF8_FULL)
        .apply_modifier(UTF8_ROUND_CORNERS)
        .apply_modifier(UTF8_SOLID_INNER_BORDERS)
        .set_content_arrangement(ContentArrangement::Dynamic)
        .set_width(100);
}

fn align_column(table: &mut Table, index: usize, alignment: CellAlignment) {
    if let Some(column) = table.column_mut(index) {
        column.set_cell_alignment(alignment);
    }
}

fn label_cell(label: StatusLabel) -> Cell {
    let cell = Cell::new(label.as_str()).fg(label_color(label));
    if label.is_confirmed() {
        cell.add_attribute(Attribute::Bold)
    } else {
        cell
    }
}

fn label_color(label: StatusLabel) -> Color {
    match label {
        StatusLabel::Confirmed => Color::Green,
        StatusLabel::Waiting => Color::Yellow,
        StatusLabel::Rac => Color::Magenta,
        StatusLabel::Cancelled => Color::Red,
    }
}

fn count_cell(count: usize, color: Color) -> Cell {
    if count > 0 {
        Cell::new(count).fg(color).add_attribute(Attribute::Bold)
    } else {
        dim_cell(count)
    }
}

fn flag_cell(flag: bool) -> Cell {
    if flag {
        Cell::new("yes").fg(Color::Green)
    } else {
        Cell::new("no").fg(Color::Yellow)
    }
}

fn chart_text(chart_prepared: bool) -> &'static str {
    if chart_prepared {
        "prepared"
    } else {
        "not prepared"
    }
}

fn yes_no(flag: bool) -> &'static str {
    if flag { "yes" } else { "no" }
}

fn header_cell(label: &str) -> Cell {
    Cell::new(label)
        .fg(Color::Cyan)
        .add_attribute(Attribute::Bold)
}

fn dim_cell<T: ToString>(value: T) -> Cell {
    Cell::new(value).fg(Color::DarkGrey)
}
