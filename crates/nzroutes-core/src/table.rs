// SPDX-License-Identifier: MIT
// Copyright (c) 2026 StarTuz

use crate::report::RouteReport;
use std::collections::BTreeMap;
use std::fmt::Write;

/// Plain fixed-width text table.
#[derive(Debug, Clone, Default)]
pub struct TermTable {
    header: Vec<String>,
    rows: Vec<Vec<String>>,
}

impl TermTable {
    pub fn new<I, S>(header: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Self {
            header: header.into_iter().map(Into::into).collect(),
            rows: Vec::new(),
        }
    }

    /// Cells past the header width are dropped; missing cells render blank.
    pub fn add_row<I, S>(&mut self, row: I)
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        let mut row: Vec<String> = row.into_iter().map(Into::into).collect();
        row.resize(self.header.len(), String::new());
        self.rows.push(row);
    }

    pub fn is_empty(&self) -> bool {
        self.rows.is_empty()
    }

    fn column_widths(&self) -> Vec<usize> {
        let mut widths: Vec<usize> = self.header.iter().map(|h| h.chars().count()).collect();
        for row in &self.rows {
            for (width, cell) in widths.iter_mut().zip(row) {
                *width = (*width).max(cell.chars().count());
            }
        }
        widths
    }

    fn render_line(out: &mut String, cells: &[String], widths: &[usize]) {
        for (i, (cell, width)) in cells.iter().zip(widths).enumerate() {
            if i != 0 {
                out.push_str("| ");
            }
            let _ = write!(out, "{:<width$} ", cell, width = width);
        }
        out.push('\n');
    }

    pub fn render(&self) -> String {
        let widths = self.column_widths();
        let mut out = String::new();

        Self::render_line(&mut out, &self.header, &widths);

        // Each separator is "| " plus the pad space after the previous cell.
        let total = widths.iter().sum::<usize>() + widths.len().saturating_sub(1) * 3;
        out.push_str(&"=".repeat(total));
        out.push('\n');

        for row in &self.rows {
            Self::render_line(&mut out, row, &widths);
        }
        out
    }

    pub fn print(&self) {
        print!("{}", self.render());
    }
}

/// Route rows, showing each callsign only on the first of its consecutive rows.
pub fn route_table(reports: &[RouteReport]) -> TermTable {
    let mut table = TermTable::new([
        "Callsign",
        "Departure",
        "Arrival",
        "Route ID",
        "Route Points",
        "Remarks",
        "Valid",
    ]);

    let mut previous: Option<&str> = None;
    for report in reports {
        let callsign = if previous == Some(report.callsign.as_str()) {
            ""
        } else {
            report.callsign.as_str()
        };
        previous = Some(report.callsign.as_str());

        table.add_row([
            callsign,
            report.departure.as_str(),
            report.destination.as_str(),
            report.route_id.as_str(),
            report.formatted_waypoints.as_str(),
            report.remarks_text.as_str(),
            if report.matched { "yes" } else { "NO" },
        ]);
    }
    table
}

pub fn weather_table(metars: &BTreeMap<String, String>) -> TermTable {
    let mut table = TermTable::new(["ICAO", "METAR"]);
    for (icao, metar) in metars {
        table.add_row([icao.as_str(), metar.as_str()]);
    }
    table
}
