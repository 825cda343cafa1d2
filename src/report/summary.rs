//! Selection summary report

use comfy_table::{presets::UTF8_FULL_CONDENSED, Attribute, Cell, Color, Table};
use console::style;

use crate::pipeline::{CorrelationMatrix, DependentCorrelations, Selection};

/// One-line result: the selected variables and their total capacity.
pub fn format_plain(selection: &Selection) -> String {
    format!("[{}] {}", selection.variables.join(", "), selection.capacity())
}

/// Table of the best combination found for every evaluated size.
pub fn build_size_table(selection: &Selection, matrix: &CorrelationMatrix) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Size").add_attribute(Attribute::Bold),
        Cell::new("Best combination").add_attribute(Attribute::Bold),
        Cell::new("Capacity").add_attribute(Attribute::Bold),
        Cell::new("Evaluated").add_attribute(Attribute::Bold),
        Cell::new("Degenerate").add_attribute(Attribute::Bold),
    ]);

    for outcome in &selection.per_size {
        let is_winner = outcome
            .best
            .as_ref()
            .is_some_and(|b| b.indices == selection.best.indices);

        let (combination, capacity) = match &outcome.best {
            Some(best) => (best.names(matrix).join(", "), format!("{:.6}", best.capacity)),
            None => ("-".to_string(), "-".to_string()),
        };

        let capacity_cell = if is_winner {
            Cell::new(capacity)
                .fg(Color::Green)
                .add_attribute(Attribute::Bold)
        } else {
            Cell::new(capacity)
        };

        table.add_row(vec![
            Cell::new(outcome.size),
            Cell::new(combination),
            capacity_cell,
            Cell::new(outcome.evaluated),
            Cell::new(outcome.degenerate).fg(if outcome.degenerate == 0 {
                Color::White
            } else {
                Color::Yellow
            }),
        ]);
    }

    table
}

/// Table of the selected variables with their individual capacities.
pub fn build_member_table(selection: &Selection, dependent: &DependentCorrelations) -> Table {
    let mut table = Table::new();
    table.load_preset(UTF8_FULL_CONDENSED);
    table.set_header(vec![
        Cell::new("Variable").add_attribute(Attribute::Bold),
        Cell::new(format!("r({})", dependent.dependent())).add_attribute(Attribute::Bold),
        Cell::new("Capacity").add_attribute(Attribute::Bold),
    ]);

    for ((name, &index), capacity) in selection
        .variables
        .iter()
        .zip(selection.best.indices.iter())
        .zip(selection.best.individual.iter())
    {
        table.add_row(vec![
            Cell::new(name),
            Cell::new(format!("{:+.4}", dependent.get(index))),
            Cell::new(format!("{:.6}", capacity)),
        ]);
    }

    table
}

fn print_indented(table: &Table) {
    for line in table.to_string().lines() {
        println!("    {}", line);
    }
}

/// Print the full selection report.
pub fn display_selection(
    selection: &Selection,
    matrix: &CorrelationMatrix,
    dependent: &DependentCorrelations,
) {
    println!();
    println!(
        "    {} {}",
        style("📋").cyan(),
        style("BEST COMBINATION PER SIZE").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();
    print_indented(&build_size_table(selection, matrix));

    println!();
    println!(
        "    {} {}",
        style("🏆").cyan(),
        style("SELECTED VARIABLES").white().bold()
    );
    println!("    {}", style("─".repeat(50)).dim());
    println!();
    print_indented(&build_member_table(selection, dependent));

    println!();
    println!(
        "      Integral capacity: {}",
        style(format!("{:.6}", selection.capacity())).green().bold()
    );
    println!(
        "      Combinations evaluated: {}",
        style(selection.total_evaluated()).yellow()
    );
    if selection.total_degenerate() > 0 {
        println!(
            "      Excluded as degenerate: {}",
            style(selection.total_degenerate()).yellow()
        );
    }
}
