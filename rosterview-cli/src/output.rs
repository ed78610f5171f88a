//! Text and JSON output of a rendered table.

use std::fmt::Write;

use rosterview_lib::view::FilterSelection;
use rosterview_lib::view::HeaderCheckbox;
use rosterview_lib::view::RenderedTable;
use rosterview_lib::view::TableBody;
use rosterview_lib::Record;
use unicode_width::UnicodeWidthStr;

const SKELETON: &str = "░░░░";
const GAP: &str = "  ";

fn checkbox(state: HeaderCheckbox) -> &'static str {
    match state {
        HeaderCheckbox::Unchecked => "[ ]",
        HeaderCheckbox::Indeterminate => "[-]",
        HeaderCheckbox::Checked => "[x]",
    }
}

/// Pads `text` with spaces to `width` terminal columns.
fn pad(text: &str, width: usize) -> String {
    let fill = width.saturating_sub(text.width());
    format!("{}{}", text, " ".repeat(fill))
}

fn push_line(out: &mut String, cells: &[String], widths: &[usize]) {
    let line = cells
        .iter()
        .zip(widths)
        .map(|(cell, width)| pad(cell, *width))
        .collect::<Vec<_>>()
        .join(GAP);
    out.push_str(line.trim_end());
    out.push('\n');
}

/// Draws the table as aligned text.
pub fn render_text(table: &RenderedTable) -> String {
    let selectable = table.select_all.is_some();

    let mut header: Vec<String> = table.headers.iter().map(|h| h.decorated_label()).collect();
    if let Some(state) = table.select_all {
        header.insert(0, checkbox(state).to_string());
    }

    let body: Vec<Vec<String>> = match &table.body {
        TableBody::Loading { skeleton_rows } => {
            vec![vec![SKELETON.to_string(); header.len()]; *skeleton_rows]
        }
        TableBody::Empty { .. } => Vec::new(),
        TableBody::Rows { rows } => rows
            .iter()
            .map(|row| {
                let mut cells = row.cells.clone();
                if selectable {
                    let mark = if row.selected { "[x]" } else { "[ ]" };
                    cells.insert(0, mark.to_string());
                }
                cells
            })
            .collect(),
    };

    let widths: Vec<usize> = (0..header.len())
        .map(|i| {
            body.iter()
                .map(|cells| cells[i].width())
                .chain(std::iter::once(header[i].width()))
                .max()
                .unwrap_or(0)
        })
        .collect();

    let mut out = String::new();
    if !table.query.is_empty() {
        let _ = writeln!(out, "Search: {}", table.query);
    }
    for filter in &table.filters {
        if let FilterSelection::Value(value) = &filter.selection {
            let _ = writeln!(out, "{}: {}", filter.descriptor.label, value);
        }
    }

    push_line(&mut out, &header, &widths);
    let rule: Vec<String> = widths.iter().map(|w| "─".repeat(*w)).collect();
    push_line(&mut out, &rule, &widths);

    if let TableBody::Empty { message } = &table.body {
        let _ = writeln!(out, "{}", message);
    }
    for cells in &body {
        push_line(&mut out, cells, &widths);
    }

    if let Some(footer) = &table.footer {
        let _ = writeln!(
            out,
            "{} · page {} of {}",
            footer.summary, footer.page, footer.total_pages
        );
    }
    if table.selected_count > 0 {
        let _ = writeln!(out, "{} selected", table.selected_count);
    }
    out
}

/// Serializes the visible records as a pretty JSON array.
pub fn render_json(rows: &[&Record]) -> Result<String, serde_json::Error> {
    serde_json::to_string_pretty(rows)
}
