//! Report rendering: grid table or JSON.

use std::io::{self, Write};

use clap::ValueEnum;
use serde::Deserialize;

use crate::report::{Cell, ReportRow};

/// Output format for the report
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, ValueEnum, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum OutputFormat {
    #[default]
    Text,
    Json,
}

pub const HEADERS: [&str; 4] = ["Network", "Active Validators", "Inactive Validators", "Total"];

// Headers get at least this much slack in their column
const MIN_PADDING: usize = 2;

#[derive(Clone, Copy, PartialEq, Eq)]
enum Align {
    Left,
    Right,
}

/// Format and print the report to stdout.
pub fn print_report(format: OutputFormat, rows: &[ReportRow]) -> io::Result<()> {
    let stdout = io::stdout();
    let mut out = stdout.lock();
    write_report(&mut out, format, rows)?;
    out.flush()
}

/// Write the report to `out`. The text table is preceded by a blank line.
pub fn write_report<W: Write>(out: &mut W, format: OutputFormat, rows: &[ReportRow]) -> io::Result<()> {
    match format {
        OutputFormat::Text => {
            writeln!(out)?;
            writeln!(out, "{}", render_grid(rows))?;
        }
        OutputFormat::Json => {
            writeln!(out, "{}", render_json(rows)?)?;
        }
    }
    Ok(())
}

pub fn render_json(rows: &[ReportRow]) -> serde_json::Result<String> {
    serde_json::to_string_pretty(rows)
}

/// Render rows as a grid table.
///
/// Count columns are right-aligned while every cell holds a number; a column
/// containing an `Error` cell is left-aligned like the network names.
pub fn render_grid(rows: &[ReportRow]) -> String {
    let cells: Vec<[String; 4]> = rows
        .iter()
        .map(|row| {
            [
                row.network.clone(),
                row.active.to_string(),
                row.inactive.to_string(),
                row.total.to_string(),
            ]
        })
        .collect();

    let column = |i: usize| -> Vec<Cell> {
        rows.iter()
            .map(|row| match i {
                1 => row.active,
                2 => row.inactive,
                _ => row.total,
            })
            .collect()
    };

    let mut aligns = [Align::Left; 4];
    for (i, align) in aligns.iter_mut().enumerate().skip(1) {
        if column(i).iter().all(Cell::is_numeric) {
            *align = Align::Right;
        }
    }

    let mut widths = [0usize; 4];
    for (i, header) in HEADERS.iter().enumerate() {
        widths[i] = cells
            .iter()
            .map(|row| row[i].chars().count())
            .fold(header.chars().count() + MIN_PADDING, usize::max);
    }

    let mut lines = Vec::with_capacity(cells.len() * 2 + 3);
    lines.push(separator(&widths, '-'));
    lines.push(line(&HEADERS.map(String::from), &widths, &aligns));
    lines.push(separator(&widths, '='));
    for row in &cells {
        lines.push(line(row, &widths, &aligns));
        lines.push(separator(&widths, '-'));
    }
    lines.join("\n")
}

fn separator(widths: &[usize; 4], fill: char) -> String {
    let mut out = String::from("+");
    for width in widths {
        out.extend(std::iter::repeat(fill).take(width + 2));
        out.push('+');
    }
    out
}

fn line(cells: &[String; 4], widths: &[usize; 4], aligns: &[Align; 4]) -> String {
    let mut out = String::from("|");
    for ((cell, width), align) in cells.iter().zip(widths).zip(aligns) {
        let padded = match align {
            Align::Left => format!("{:<width$}", cell, width = width),
            Align::Right => format!("{:>width$}", cell, width = width),
        };
        out.push(' ');
        out.push_str(&padded);
        out.push_str(" |");
    }
    out
}
