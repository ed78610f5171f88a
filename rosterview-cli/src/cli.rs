//! Command-line arguments.

use std::path::PathBuf;

use clap::Parser;
use clap::ValueEnum;
use rosterview_lib::view::Direction;
use rosterview_lib::view::FilterSelection;
use rosterview_lib::view::SortState;

use crate::error::CliError;

/// Search, filter, sort and page a JSON record collection.
#[derive(Debug, Parser)]
#[command(name = "rosterview")]
#[command(about = "Tabular view over a JSON array of records", long_about = None)]
#[command(version)]
pub struct Cli {
    /// JSON file holding an array of record objects
    #[arg(short, long, value_name = "FILE")]
    pub records: PathBuf,

    /// View config file (defaults to view.json in the config directory)
    #[arg(short, long, value_name = "FILE")]
    pub config: Option<PathBuf>,

    /// Free-text search across all columns
    #[arg(short, long, value_name = "QUERY")]
    pub search: Option<String>,

    /// Filter on a field, may be repeated
    #[arg(short, long = "filter", value_name = "KEY=VALUE", value_parser = parse_filter)]
    pub filters: Vec<(String, FilterSelection)>,

    /// Sort column with an optional direction
    #[arg(long, value_name = "KEY[:asc|:desc]", value_parser = parse_sort)]
    pub sort: Option<SortState>,

    /// Page to show, starting at 1
    #[arg(short, long, default_value_t = 1)]
    pub page: usize,

    /// Select every row on the shown page
    #[arg(long)]
    pub select_all: bool,

    /// Run a bulk action on the selected rows
    #[arg(long, value_name = "ACTION")]
    pub bulk: Option<String>,

    /// Render loading placeholders instead of rows
    #[arg(long)]
    pub loading: bool,

    #[arg(long, value_enum, default_value_t = Format::Table)]
    pub format: Format,

    /// Log at debug level
    #[arg(short, long)]
    pub verbose: bool,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, ValueEnum)]
pub enum Format {
    /// Aligned text table with a pagination footer
    Table,
    /// Visible rows as a JSON array
    Json,
}

fn parse_filter(arg: &str) -> Result<(String, FilterSelection), CliError> {
    match arg.split_once('=') {
        Some((key, value)) if !key.is_empty() => {
            Ok((key.to_string(), FilterSelection::parse(value)))
        }
        _ => Err(CliError::BadFilter(arg.to_string())),
    }
}

fn parse_sort(arg: &str) -> Result<SortState, CliError> {
    let (key, direction) = match arg.split_once(':') {
        Some((key, direction)) => {
            let direction =
                Direction::parse(direction).ok_or_else(|| CliError::BadSort(arg.to_string()))?;
            (key, direction)
        }
        None => (arg, Direction::Asc),
    };
    if key.is_empty() {
        return Err(CliError::BadSort(arg.to_string()));
    }
    Ok(match direction {
        Direction::Asc => SortState::asc(key),
        Direction::Desc => SortState::desc(key),
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    fn parse(args: &[&str]) -> Cli {
        Cli::try_parse_from(std::iter::once("rosterview").chain(args.iter().copied())).unwrap()
    }

    #[test]
    fn test_defaults() {
        let cli = parse(&["--records", "rows.json"]);
        assert_eq!(cli.records, PathBuf::from("rows.json"));
        assert_eq!(cli.page, 1);
        assert_eq!(cli.format, Format::Table);
        assert!(cli.filters.is_empty());
        assert!(cli.sort.is_none());
        assert!(!cli.select_all);
    }

    #[test]
    fn test_repeated_filters() {
        let cli = parse(&["-r", "rows.json", "-f", "status=Open", "--filter", "section=all"]);
        assert_eq!(
            cli.filters,
            vec![
                ("status".to_string(), FilterSelection::Value("Open".into())),
                ("section".to_string(), FilterSelection::All),
            ]
        );
    }

    #[test]
    fn test_sort_argument() {
        let cli = parse(&["-r", "rows.json", "--sort", "amount:desc"]);
        assert_eq!(cli.sort, Some(SortState::desc("amount")));

        let cli = parse(&["-r", "rows.json", "--sort", "name"]);
        assert_eq!(cli.sort, Some(SortState::asc("name")));
    }

    #[test]
    fn test_rejects_bad_arguments() {
        let base = ["rosterview", "-r", "rows.json"];
        for bad in [["--sort", "amount:sideways"], ["--sort", ":asc"], ["--filter", "status"]] {
            let args = base.iter().chain(bad.iter()).copied();
            assert!(Cli::try_parse_from(args).is_err(), "{bad:?} should be rejected");
        }
    }

    #[test]
    fn test_json_format() {
        let cli = parse(&["-r", "rows.json", "--format", "json", "--select-all", "--bulk", "delete"]);
        assert_eq!(cli.format, Format::Json);
        assert!(cli.select_all);
        assert_eq!(cli.bulk.as_deref(), Some("delete"));
    }
}
