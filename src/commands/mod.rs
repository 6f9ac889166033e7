//! CLI command handlers
//!
//! Pure presentation layer: each command fetches through the services,
//! transforms the result, and renders it to the terminal. Running a
//! command again is the refresh operation; nothing is cached between
//! invocations.

pub mod analytics;
pub mod bots;
pub mod subscriptions;

use colored::Colorize;

/// Render a plain-text table with padded columns and a bold header row
pub(crate) fn render_table(headers: &[&str], rows: &[Vec<String>]) -> String {
    render_table_with_footer(headers, rows, None)
}

/// Render a table with an optional bold footer row below a rule line
///
/// Rows may have more cells than the header; extra columns are sized
/// from the data alone.
pub(crate) fn render_table_with_footer(
    headers: &[&str],
    rows: &[Vec<String>],
    footer: Option<&[String]>,
) -> String {
    let mut widths: Vec<usize> = headers.iter().map(|h| h.chars().count()).collect();
    for row in rows.iter().map(|r| r.as_slice()).chain(footer) {
        for (i, cell) in row.iter().enumerate() {
            let len = cell.chars().count();
            if i >= widths.len() {
                widths.push(len);
            } else if len > widths[i] {
                widths[i] = len;
            }
        }
    }

    let mut out = String::new();

    let header_cells: Vec<String> = headers.iter().map(|h| h.to_string()).collect();
    out.push_str(&pad_row(&header_cells, &widths).bold().to_string());
    out.push('\n');

    let rule_len = widths.iter().sum::<usize>() + 2 * (widths.len().saturating_sub(1));
    out.push_str(&"-".repeat(rule_len));
    out.push('\n');

    for row in rows {
        out.push_str(&pad_row(row, &widths));
        out.push('\n');
    }

    if let Some(footer) = footer {
        out.push_str(&"-".repeat(rule_len));
        out.push('\n');
        out.push_str(&pad_row(footer, &widths).bold().to_string());
        out.push('\n');
    }

    out
}

/// Pad the cells of one row to the column widths, trimming the tail
fn pad_row(row: &[String], widths: &[usize]) -> String {
    let line: Vec<String> = row
        .iter()
        .enumerate()
        .map(|(i, cell)| {
            let width = widths.get(i).copied().unwrap_or(0);
            format!("{:<width$}", cell, width = width)
        })
        .collect();
    line.join("  ").trim_end().to_string()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_table_pads_columns() {
        colored::control::set_override(false);

        let table = render_table(
            &["ID", "NAME"],
            &[
                vec!["1".to_string(), "BotA".to_string()],
                vec!["12".to_string(), "B".to_string()],
            ],
        );

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[0], "ID  NAME");
        assert_eq!(lines[2], "1   BotA");
        assert_eq!(lines[3], "12  B");
    }

    #[test]
    fn test_footer_row_follows_rule_line() {
        colored::control::set_override(false);

        let table = render_table_with_footer(
            &["NAME", "COUNT"],
            &[vec!["a".to_string(), "1".to_string()]],
            Some(&["TOTAL".to_string(), "1".to_string()]),
        );

        let lines: Vec<&str> = table.lines().collect();
        // "TOTAL" widens the first column to 5
        assert_eq!(lines[2], "a      1");
        assert_eq!(lines[3], "-".repeat(12));
        assert_eq!(lines[4], "TOTAL  1");
    }

    #[test]
    fn test_row_wider_than_header_does_not_panic() {
        colored::control::set_override(false);

        let table = render_table(
            &["ONLY"],
            &[vec!["a".to_string(), "extra".to_string(), "cells".to_string()]],
        );

        let lines: Vec<&str> = table.lines().collect();
        assert_eq!(lines[2], "a     extra  cells");
    }
}
