//! Table rendering utilities for CLI outputs.

use unicode_width::UnicodeWidthStr;

use crate::utils::formatting::truncate_ellipsis;

pub struct Column {
    pub header: String,
    pub max_width: usize,
}

impl Column {
    pub fn new(header: &str, max_width: usize) -> Self {
        Self {
            header: header.to_string(),
            max_width,
        }
    }
}

pub struct Table {
    pub columns: Vec<Column>,
    pub rows: Vec<Vec<String>>,
}

impl Table {
    pub fn new(columns: Vec<Column>) -> Self {
        Self {
            columns,
            rows: Vec::new(),
        }
    }

    pub fn add_row(&mut self, row: Vec<String>) {
        self.rows.push(row);
    }

    /// Width of each column: widest cell, capped at `max_width`.
    fn fit_widths(&self) -> Vec<usize> {
        self.columns
            .iter()
            .enumerate()
            .map(|(i, col)| {
                let widest = self
                    .rows
                    .iter()
                    .map(|r| UnicodeWidthStr::width(r[i].as_str()))
                    .chain(std::iter::once(UnicodeWidthStr::width(col.header.as_str())))
                    .max()
                    .unwrap_or(0);
                widest.min(col.max_width)
            })
            .collect()
    }

    pub fn render(&self) -> String {
        let widths = self.fit_widths();
        let mut out = String::new();

        // Header
        for (col, w) in self.columns.iter().zip(&widths) {
            push_cell(&mut out, &col.header, *w);
        }
        out.push('\n');

        // Separator
        for w in &widths {
            out.push_str(&"-".repeat(*w));
            out.push(' ');
        }
        out.push('\n');

        // Rows
        for row in &self.rows {
            for (cell, w) in row.iter().zip(&widths) {
                push_cell(&mut out, cell, *w);
            }
            out.push('\n');
        }

        out
    }
}

fn push_cell(out: &mut String, cell: &str, width: usize) {
    let cell = truncate_ellipsis(cell, width);
    let pad = width.saturating_sub(UnicodeWidthStr::width(cell.as_str()));
    out.push_str(&cell);
    out.push_str(&" ".repeat(pad));
    out.push(' ');
}
