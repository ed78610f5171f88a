mod cli;
mod error;
mod output;
mod paths;

use std::fs;
use std::fs::File;
use std::path::Path;
use std::sync::Arc;
use std::sync::Mutex;

use clap::Parser;
use rosterview_lib::Record;
use rosterview_lib::RecordId;
use rosterview_lib::TableConfig;
use rosterview_lib::TableView;
use rosterview_lib::view::SortState;
use simplelog::{Config, LevelFilter, WriteLogger};

use crate::cli::Cli;
use crate::cli::Format;
use crate::error::CliError;

/// Starts logging to the cache directory. Runs without a logger when the
/// directory cannot be determined or created.
fn init_logging(verbose: bool) {
    let Some(path) = paths::log_file() else { return };
    if path.parent().is_some_and(|dir| fs::create_dir_all(dir).is_err()) {
        return;
    }
    let level = if verbose {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };
    if let Ok(file) = File::create(&path) {
        let _ = WriteLogger::init(level, Config::default(), file);
    }
}

fn load_records(path: &Path) -> Result<Vec<Record>, CliError> {
    let json = fs::read_to_string(path).map_err(|e| CliError::read(path, e))?;
    let records: Vec<Record> =
        serde_json::from_str(&json).map_err(|e| CliError::records(path, e))?;
    log::info!("loaded {} records from {}", records.len(), path.display());
    Ok(records)
}

fn load_config(cli: &Cli, records: &[Record]) -> Result<TableConfig, CliError> {
    let config = match cli.config.clone().or_else(paths::default_view_config) {
        Some(path) => {
            log::info!("using view config {}", path.display());
            TableConfig::from_file(path)?
        }
        None => {
            log::info!("no view config, deriving columns from records");
            TableConfig::from_records(records)
        }
    };
    if (cli.select_all || cli.bulk.is_some()) && !config.selectable {
        log::info!("enabling row selection for --select-all/--bulk");
        return Ok(config.with_selectable(true));
    }
    Ok(config)
}

fn check_sortable(config: &TableConfig, sort: &SortState) -> Result<(), CliError> {
    let SortState::By { key, .. } = sort else {
        return Ok(());
    };
    if config.columns.iter().any(|column| &column.key == key && column.sortable) {
        Ok(())
    } else {
        Err(CliError::NotSortable(key.clone()))
    }
}

fn bulk_line(action: &str, ids: &[RecordId]) -> String {
    let ids: Vec<&str> = ids.iter().map(RecordId::as_str).collect();
    format!("{} -> {}", action, ids.join(", "))
}

/// Loads the inputs, drives a view from the arguments and returns
/// everything to print: dispatched bulk actions first, then the table.
fn execute(cli: &Cli) -> Result<String, CliError> {
    let records = load_records(&cli.records)?;
    let config = load_config(cli, &records)?;

    let dispatched: Arc<Mutex<Vec<String>>> = Arc::default();
    let sink = Arc::clone(&dispatched);
    let mut view = TableView::new(config)
        .with_records(records)
        .on_bulk_action(move |action, ids| {
            if let Ok(mut lines) = sink.lock() {
                lines.push(bulk_line(action, ids));
            }
        });

    if let Some(query) = &cli.search {
        view.set_search(query.as_str());
    }
    for (key, selection) in &cli.filters {
        view.set_filter(key.as_str(), selection.clone());
    }
    if let Some(sort) = &cli.sort {
        check_sortable(view.config(), sort)?;
        view.set_sort(sort.clone());
    }
    view.set_page(cli.page);
    view.set_loading(cli.loading);

    if cli.select_all {
        view.select_all(true);
    }
    if let Some(action) = &cli.bulk {
        if !view.trigger_bulk_action(action) {
            log::warn!("bulk action '{}' dispatched nothing", action);
        }
    }

    let mut out = String::new();
    if let Ok(lines) = dispatched.lock() {
        for line in lines.iter() {
            out.push_str(line);
            out.push('\n');
        }
    }
    match cli.format {
        Format::Table => out.push_str(&output::render_text(&view.render())),
        Format::Json => {
            out.push_str(&output::render_json(&view.visible_rows())?);
            out.push('\n');
        }
    }
    Ok(out)
}

fn main() {
    let cli = Cli::parse();
    init_logging(cli.verbose);

    match execute(&cli) {
        Ok(out) => print!("{}", out),
        Err(e) => {
            log::error!("{}", e);
            eprintln!("Error: {}", e);
            std::process::exit(1);
        }
    }
}
