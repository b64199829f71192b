//! Template rendering for CLI output using outstanding

use console::{measure_text_width, pad_str, Alignment, Style};
use datagridlib::{ExportReport, PageTable};
use outstanding::{render_with_output, Theme};
use serde::Serialize;

/// Include template at compile time
pub const PAGE_TABLE_TEMPLATE: &str = include_str!("../templates/page_table.jinja");

/// Re-export OutputMode for callers
pub use outstanding::OutputMode;

/// Column separator inside a rendered line
const GAP: &str = "  ";

/// Row data for template rendering (pre-formatted)
#[derive(Debug, Serialize)]
struct TemplateRow {
    id: String,
    selected: bool,
    /// Cells padded to their column width and joined
    line: String,
}

/// Data context for the page table template
#[derive(Debug, Serialize)]
pub struct PageTableContext {
    loading: bool,
    /// Pre-padded header line
    header: String,
    /// Separator line (dashes)
    separator: String,
    rows: Vec<TemplateRow>,
    showing: String,
    page: String,
    selection: String,
    rows_per_page: String,
    #[serde(skip_serializing_if = "Option::is_none")]
    export: Option<ExportReport>,
}

/// Create the theme with styles
pub fn create_theme() -> Theme {
    Theme::new()
        .add("header", Style::new().bold())
        .add("selected", Style::new().cyan())
        .add("muted", Style::new().dim())
}

/// Display width of each column: the widest of header and visible cells.
fn column_widths(table: &PageTable) -> Vec<usize> {
    table
        .headers
        .iter()
        .enumerate()
        .map(|(i, header)| {
            table
                .rows
                .iter()
                .map(|r| measure_text_width(&r.values[i]))
                .fold(measure_text_width(header), usize::max)
        })
        .collect()
}

/// Numbers are right-aligned so decimals line up.
fn column_alignments(table: &PageTable) -> Vec<Alignment> {
    (0..table.headers.len())
        .map(|i| {
            let numeric = !table.rows.is_empty()
                && table.rows.iter().all(|r| r.values[i].parse::<f64>().is_ok());
            if numeric {
                Alignment::Right
            } else {
                Alignment::Left
            }
        })
        .collect()
}

fn join_cells(cells: &[String], widths: &[usize], aligns: &[Alignment]) -> String {
    cells
        .iter()
        .zip(widths)
        .zip(aligns)
        .map(|((cell, width), align)| pad_str(cell, *width, *align, None).into_owned())
        .collect::<Vec<_>>()
        .join(GAP)
        .trim_end()
        .to_string()
}

/// Build the template context for a page table.
pub fn page_context(table: &PageTable, export: Option<ExportReport>) -> PageTableContext {
    let widths = column_widths(table);
    let aligns = column_alignments(table);

    let header = join_cells(&table.headers, &widths, &aligns);
    let separator_width =
        widths.iter().sum::<usize>() + GAP.len() * widths.len().saturating_sub(1);

    let rows = table
        .rows
        .iter()
        .map(|r| TemplateRow {
            id: r.id.clone(),
            selected: r.selected,
            line: join_cells(&r.values, &widths, &aligns),
        })
        .collect();

    PageTableContext {
        loading: table.loading,
        header,
        separator: "-".repeat(separator_width),
        rows,
        showing: table.footer.showing.clone(),
        page: table.footer.page.clone(),
        selection: table.footer.selection.clone(),
        rows_per_page: table.footer.rows_per_page.clone(),
        export,
    }
}

/// Render a page table context through the template
pub fn render_output(
    value: &serde_json::Value,
    output_mode: OutputMode,
) -> Result<String, Box<dyn std::error::Error>> {
    let theme = create_theme();
    let rendered = render_with_output(PAGE_TABLE_TEMPLATE, value, &theme, output_mode)?;
    Ok(rendered)
}
