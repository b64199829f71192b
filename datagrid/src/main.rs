//! # datagrid
//!
//! A terminal front end for the datagrid table engine.
//!
//! ## Overview
//!
//! datagrid is built on top of datagridlib. It loads a dataset, applies the
//! requested layout, sort, pagination and selection through the engine, and
//! renders the visible page. The selection (or the whole dataset, when
//! nothing is selected) can be exported as an XLSX workbook or a CSV file.
//!
//! ## Usage
//!
//! ```bash
//! # First page of the built-in demo dataset
//! datagrid
//!
//! # Sort by amount, largest first, third page of 5 rows
//! datagrid --sort amount:desc --page 3 --page-size 5
//!
//! # Load rows from a file, select two and export them
//! datagrid --data rows.json --select row-3 --select row-7 --export out/
//!
//! # Same export as CSV
//! datagrid --export out/ --export-format csv
//!
//! # Reorder and resize columns
//! datagrid --order select,avatar,amount,name,description,source,tooltip --width name=220
//!
//! # Output as JSON
//! datagrid --output json
//! ```

mod logging;
mod render;

use std::process::ExitCode;

use anyhow::{anyhow, bail, Context};
use clap::{Arg, ArgAction, ArgMatches, Command};
use datagridlib::{
    demo_rows, CsvExporter, DataSource, ExportReport, JsonFileSource, PageTable, Row,
    SheetExporter, SortDirection, TableEngine, XlsxExporter, DEMO_ROW_COUNT,
};
use outstanding::cli::{App, CommandContext, HandlerResult, Output, RunResult};
use tracing::debug;

use crate::render::PAGE_TABLE_TEMPLATE;

/// Arguments shared by the root command and `show`
fn table_args(cmd: Command) -> Command {
    cmd.arg(
        Arg::new("data")
            .short('d')
            .long("data")
            .value_name("FILE")
            .help("JSON file holding an array of rows (defaults to the demo dataset)"),
    )
    .arg(
        Arg::new("sort")
            .short('s')
            .long("sort")
            .value_name("COLUMN[:asc|desc|none]")
            .help("Sort by a column (ascending unless a direction is given)"),
    )
    .arg(
        Arg::new("page")
            .short('p')
            .long("page")
            .value_name("N")
            .value_parser(clap::value_parser!(usize))
            .help("Page to show, starting at 1"),
    )
    .arg(
        Arg::new("page-size")
            .short('n')
            .long("page-size")
            .value_name("N")
            .value_parser(clap::value_parser!(usize))
            .help("Rows per page"),
    )
    .arg(
        Arg::new("select")
            .long("select")
            .value_name("ID")
            .action(ArgAction::Append)
            .help("Select a row by id (can be specified multiple times)"),
    )
    .arg(
        Arg::new("select-all")
            .long("select-all")
            .action(ArgAction::SetTrue)
            .help("Toggle selection of every row"),
    )
    .arg(
        Arg::new("order")
            .long("order")
            .value_name("ID,...")
            .value_delimiter(',')
            .help("Column order (comma-separated, every column exactly once)"),
    )
    .arg(
        Arg::new("width")
            .short('w')
            .long("width")
            .value_name("ID=PX")
            .action(ArgAction::Append)
            .help("Set a column width (can be specified multiple times)"),
    )
    .arg(
        Arg::new("export")
            .short('e')
            .long("export")
            .value_name("DIR")
            .help("Export selected rows (or all rows) into DIR"),
    )
    .arg(
        Arg::new("export-format")
            .long("export-format")
            .value_name("FORMAT")
            .value_parser(["xlsx", "csv"])
            .default_value("xlsx")
            .help("Export file format"),
    )
    .arg(
        Arg::new("verbose")
            .short('v')
            .long("verbose")
            .action(ArgAction::Count)
            .help("Increase log verbosity (-v info, -vv debug, -vvv trace)"),
    )
}

/// Build the clap Command structure
fn build_command() -> Command {
    table_args(
        Command::new("datagrid")
            .version(env!("CARGO_PKG_VERSION"))
            .author("Arthur Debert")
            .about("Sort, page, select and export tabular data"),
    )
    .subcommand(table_args(
        Command::new("show").about("Render the visible page (default command)"),
    ))
}

/// Load rows from a JSON file
fn read_rows(path: &str) -> anyhow::Result<Vec<Row>> {
    JsonFileSource::new(path)
        .fetch()
        .with_context(|| format!("cannot load rows from '{}'", path))
}

/// Parse `COLUMN[:direction]`
fn parse_sort(spec: &str) -> anyhow::Result<(String, SortDirection)> {
    let (column, direction) = match spec.split_once(':') {
        Some((column, dir)) => (column, dir.parse::<SortDirection>().map_err(|e| anyhow!(e))?),
        None => (spec, SortDirection::Ascending),
    };
    if column.is_empty() {
        bail!("sort needs a column id");
    }
    Ok((column.to_string(), direction))
}

/// Parse `ID=PX`
fn parse_width(spec: &str) -> anyhow::Result<(String, u32)> {
    let (column, width) = spec
        .split_once('=')
        .ok_or_else(|| anyhow!("width must look like ID=PX, got '{}'", spec))?;
    let width = width
        .trim()
        .parse::<u32>()
        .with_context(|| format!("invalid width '{}' for column '{}'", width, column))?;
    Ok((column.trim().to_string(), width))
}

/// Apply the command line to a fresh engine
fn build_engine(matches: &ArgMatches) -> anyhow::Result<TableEngine> {
    let mut engine = TableEngine::new();

    let rows = match matches.get_one::<String>("data") {
        Some(path) => read_rows(path)?,
        None => demo_rows(DEMO_ROW_COUNT),
    };
    engine.load_rows(rows)?;

    if let Some(order) = matches.get_many::<String>("order") {
        engine.set_column_order(order.map(|s| s.trim().to_string()).collect())?;
    }

    if let Some(widths) = matches.get_many::<String>("width") {
        let sizing = widths
            .map(|w| parse_width(w))
            .collect::<anyhow::Result<Vec<_>>>()?;
        for (column, _) in &sizing {
            if engine.column(column).is_none() {
                bail!("unknown column '{}'", column);
            }
        }
        engine.set_column_sizing(sizing)?;
    }

    if let Some(spec) = matches.get_one::<String>("sort") {
        let (column, direction) = parse_sort(spec)?;
        if engine.column(&column).is_none() {
            bail!("unknown column '{}'", column);
        }
        engine.set_sorting(&column, direction);
    }

    if let Some(&size) = matches.get_one::<usize>("page-size") {
        let choices = &engine.options().page_size_choices;
        if !choices.contains(&size) {
            let offered: Vec<String> = choices.iter().map(|c| c.to_string()).collect();
            bail!("page size must be one of {}", offered.join(", "));
        }
        engine.set_page_size(size)?;
    }

    if let Some(&page) = matches.get_one::<usize>("page") {
        if page == 0 {
            bail!("page numbers start at 1");
        }
        engine.set_page_index(page - 1);
    }

    if let Some(ids) = matches.get_many::<String>("select") {
        for id in ids {
            engine.toggle_row_selection(id);
        }
    }
    if matches.get_flag("select-all") {
        engine.toggle_all_selection();
    }

    debug!(summary = ?engine.selection_summary(), "engine ready");
    Ok(engine)
}

/// Write the selection (or every row) into `dir`
fn export_rows(engine: &TableEngine, dir: &str, format: &str) -> anyhow::Result<ExportReport> {
    let mut exporter: Box<dyn SheetExporter> = match format {
        "csv" => Box::new(CsvExporter::new(dir)),
        _ => Box::new(XlsxExporter::new(dir)),
    };
    let report = engine
        .export_selection(exporter.as_mut())
        .with_context(|| format!("export to '{}' failed", dir))?;
    Ok(report)
}

/// Handler for the show command
fn show_handler(matches: &ArgMatches, ctx: &CommandContext) -> HandlerResult<serde_json::Value> {
    logging::init_tracing(matches.get_count("verbose"));

    let engine = build_engine(matches)?;

    let report: Option<ExportReport> = match matches.get_one::<String>("export") {
        Some(dir) => {
            let format = matches
                .get_one::<String>("export-format")
                .map(String::as_str)
                .unwrap_or("xlsx");
            Some(export_rows(&engine, dir, format)?)
        }
        None => None,
    };

    // For JSON mode, return the engine snapshot
    if ctx.output_mode.is_structured() {
        let mut value = serde_json::to_value(engine.snapshot())?;
        if let Some(report) = &report {
            value["export"] = serde_json::to_value(report)?;
        }
        return Ok(Output::Render(value));
    }

    let table = PageTable::from_engine(&engine);
    let context = render::page_context(&table, report);
    Ok(Output::Render(serde_json::to_value(&context)?))
}

fn main() -> ExitCode {
    let cmd = build_command();
    let theme = render::create_theme();

    let result = App::builder()
        .theme(theme)
        .command("show", show_handler, PAGE_TABLE_TEMPLATE)
        .run_to_string(cmd, std::env::args());

    match result {
        RunResult::Handled(output) => {
            if !output.is_empty() {
                if output.starts_with("Error:") {
                    eprintln!("{}", output);
                    return ExitCode::FAILURE;
                }
                print!("{}", output);
            }
            ExitCode::SUCCESS
        }
        RunResult::Binary(_, _) => ExitCode::SUCCESS,
        RunResult::NoMatch(matches) => {
            // Root command (no subcommand) behaves like `show`
            let output_mode = matches
                .get_one::<String>("_output_mode")
                .map(|s| match s.as_str() {
                    "json" => render::OutputMode::Json,
                    "text" => render::OutputMode::Text,
                    "term-debug" => render::OutputMode::TermDebug,
                    "term" => render::OutputMode::Term,
                    _ => render::OutputMode::Auto,
                })
                .unwrap_or(render::OutputMode::Auto);

            let ctx = CommandContext {
                output_mode,
                command_path: vec![],
            };

            match show_handler(&matches, &ctx) {
                Ok(Output::Render(value)) => {
                    if output_mode.is_structured() {
                        // JSON mode - print raw JSON
                        println!(
                            "{}",
                            serde_json::to_string_pretty(&value).unwrap_or_default()
                        );
                        return ExitCode::SUCCESS;
                    }
                    match render::render_output(&value, output_mode) {
                        Ok(output) => {
                            print!("{}", output);
                            ExitCode::SUCCESS
                        }
                        Err(e) => {
                            eprintln!("Error: {e}");
                            ExitCode::FAILURE
                        }
                    }
                }
                Ok(Output::Silent) => ExitCode::SUCCESS,
                Ok(Output::Binary { .. }) => ExitCode::SUCCESS,
                Err(e) => {
                    eprintln!("Error: {e}");
                    ExitCode::FAILURE
                }
            }
        }
    }
}
