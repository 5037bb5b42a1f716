//! Plain-text table rendering for terminal output

use crate::domain::Table;
use std::fmt::Write;

/// Widest a single column may render before values are cut
const MAX_COLUMN_WIDTH: usize = 32;

/// Renders `table` as an aligned text table
///
/// Values longer than the column cap are cut and end in `…`.
pub fn render_table(table: &Table) -> String {
    if table.is_empty() {
        return String::from("(no data)\n");
    }

    let cells: Vec<Vec<String>> = table
        .rows()
        .map(|row| row.values().iter().map(|v| clip(v)).collect())
        .collect();
    let header: Vec<String> = table.columns().iter().map(|c| clip(c)).collect();

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            cells
                .iter()
                .map(|row| width(&row[i]))
                .chain(std::iter::once(width(&header[i])))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    push_line(&mut out, &header, &widths);

    let separator: Vec<String> = widths.iter().map(|w| "-".repeat(*w)).collect();
    push_line(&mut out, &separator, &widths);

    for row in &cells {
        push_line(&mut out, row, &widths);
    }

    out
}

fn push_line(out: &mut String, values: &[String], widths: &[usize]) {
    let line: Vec<String> = values
        .iter()
        .zip(widths)
        .map(|(value, w)| format!("{value}{}", " ".repeat(w - width(value))))
        .collect();
    let _ = writeln!(out, "{}", line.join(" | ").trim_end());
}

fn width(s: &str) -> usize {
    s.chars().count()
}

fn clip(value: &str) -> String {
    if width(value) <= MAX_COLUMN_WIDTH {
        value.to_string()
    } else {
        let mut clipped: String = value.chars().take(MAX_COLUMN_WIDTH - 1).collect();
        clipped.push('…');
        clipped
    }
}
