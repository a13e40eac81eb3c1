//! Plain-text rendering of the session for the terminal.

use std::fmt::Write;

use ps_app::{BrowseSession, BulkFillOutcome, RowView};
use ps_core::{FillCompletion, Record, SelectionStore};

const MAX_CELL_WIDTH: usize = 28;
const EMPTY_CELL: &str = "-";

/// The displayed page as a table plus a status line.
pub fn render_page(session: &BrowseSession, fields: &[String]) -> String {
    let mut out = render_rows(&session.rows(), fields);
    out.push_str(&status_line(session));
    out
}

pub fn render_rows(rows: &[RowView<'_>], fields: &[String]) -> String {
    let mut columns: Vec<String> = vec!["sel".to_string(), "id".to_string()];
    columns.extend(fields.iter().cloned());

    let mut table: Vec<Vec<String>> = rows
        .iter()
        .map(|row| {
            let mut cells = vec![
                if row.selected { "[x]" } else { "[ ]" }.to_string(),
                row.record.id().to_string(),
            ];
            cells.extend(fields.iter().map(|field| cell(row.record, field)));
            cells
        })
        .collect();
    table.insert(0, columns);

    let widths: Vec<usize> = (0..table[0].len())
        .map(|col| {
            table
                .iter()
                .map(|line| line[col].chars().count())
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    for line in &table {
        let padded: Vec<String> = line
            .iter()
            .zip(&widths)
            .map(|(text, &width)| format!("{text:<width$}"))
            .collect();
        out.push_str(padded.join("  ").trim_end());
        out.push('\n');
    }
    if rows.is_empty() {
        out.push_str("(no records on this page)\n");
    }
    out
}

fn cell(record: &Record, field: &str) -> String {
    let text = record
        .field_text(field)
        .map(|text| text.replace('\n', " "))
        .unwrap_or_else(|| EMPTY_CELL.to_string());
    if text.chars().count() > MAX_CELL_WIDTH {
        let mut cut: String = text.chars().take(MAX_CELL_WIDTH - 1).collect();
        cut.push('…');
        cut
    } else {
        text
    }
}

pub fn status_line(session: &BrowseSession) -> String {
    let cursor = session.cursor();
    let mut line = format!(
        "Page {}/{} · {} records · {} per page · {} selected",
        cursor.page_number(),
        cursor.page_count(),
        cursor.total_records(),
        cursor.page_size(),
        session.selection().len()
    );
    if session.select_all_active() {
        line.push_str(" · select-all on");
    }
    line.push('\n');
    line
}

pub fn render_outcome(outcome: &BulkFillOutcome) -> String {
    let mut out = format!(
        "Selected {} of {} requested record(s)",
        outcome.records.len(),
        outcome.requested
    );
    match &outcome.completion {
        FillCompletion::Satisfied => {}
        FillCompletion::Exhausted => out.push_str(" (the collection has no more records)"),
        FillCompletion::Interrupted { page, reason } => {
            let _ = write!(out, " (stopped: page {page} failed: {reason})");
        }
    }
    out.push('\n');
    out
}

/// Selected records sorted by id, one per line with their title when present.
pub fn render_selection(selection: &SelectionStore) -> String {
    if selection.is_empty() {
        return "Nothing selected\n".to_string();
    }
    let mut records: Vec<&Record> = selection.records().collect();
    records.sort_by(|a, b| a.id().cmp(b.id()));

    let mut out = format!("{} selected:\n", selection.len());
    for record in records {
        let title = record.field_text("title").unwrap_or_default();
        let _ = writeln!(out, "  {}  {title}", record.id());
    }
    out
}
