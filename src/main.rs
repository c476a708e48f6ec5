use std::collections::BTreeSet;

use anyhow::Result;
use serde::Serialize;

use rowpick::config::Config;
use rowpick::error::{self, CliError, CliResult, RowpickError};
use rowpick::log;
use rowpick::{SelectionDirection, SelectionEvent, try_find_next_selectable_row};

const USAGE: &str = "Usage: rowpick --rows <N> [--selectable <i,j,..>] [--from <ROW>] \
[--direction up|down] [--wrap | --no-wrap] [--json] [--log]";

/// Parsed command-line arguments
#[derive(Debug, Clone, PartialEq, Eq)]
struct Args {
    rows: i64,
    /// Selectable rows, `None` meaning every row
    selectable: Option<BTreeSet<usize>>,
    from: isize,
    direction: SelectionDirection,
    wrap: Option<bool>,
    json: bool,
    log: Option<bool>,
    help: bool,
}

/// JSON output for `--json`
#[derive(Debug, Serialize)]
struct Outcome {
    row: Option<usize>,
    direction: SelectionDirection,
    from: isize,
    wrap: bool,
}

fn parse_number<T: std::str::FromStr>(flag: &str, value: &str) -> CliResult<T> {
    value.trim().parse().map_err(|_| CliError::InvalidNumber {
        flag: flag.to_string(),
        value: value.to_string(),
    })
}

fn parse_row_set(flag: &str, value: &str) -> CliResult<BTreeSet<usize>> {
    value
        .split(',')
        .map(str::trim)
        .filter(|part| !part.is_empty())
        .map(|part| parse_number(flag, part))
        .collect()
}

fn parse_args(args: &[String]) -> CliResult<Args> {
    let mut rows = None;
    let mut parsed = Args {
        rows: 0,
        selectable: None,
        from: -1,
        direction: SelectionDirection::Down,
        wrap: None,
        json: false,
        log: None,
        help: false,
    };

    let mut i = 0;
    while i < args.len() {
        let flag = args[i].as_str();
        match flag {
            "--rows" | "-n" | "--selectable" | "-s" | "--from" | "-f" | "--direction" | "-d" => {
                let value = args
                    .get(i + 1)
                    .ok_or_else(|| CliError::MissingValue(flag.to_string()))?;
                match flag {
                    "--rows" | "-n" => rows = Some(parse_number(flag, value)?),
                    "--selectable" | "-s" => parsed.selectable = Some(parse_row_set(flag, value)?),
                    "--from" | "-f" => parsed.from = parse_number(flag, value)?,
                    _ => {
                        parsed.direction = value
                            .parse()
                            .map_err(CliError::InvalidDirection)?;
                    }
                }
                i += 2;
                continue;
            }
            "--wrap" => parsed.wrap = Some(true),
            "--no-wrap" => parsed.wrap = Some(false),
            "--json" => parsed.json = true,
            "--log" => parsed.log = Some(true),
            "--help" | "-h" => parsed.help = true,
            other => return Err(CliError::UnknownFlag(other.to_string())),
        }
        i += 1;
    }

    if parsed.help {
        return Ok(parsed);
    }
    parsed.rows = rows.ok_or(CliError::MissingRowCount)?;
    Ok(parsed)
}

fn run(args: &Args, config: &Config) -> error::Result<Outcome> {
    let wrap = config.wrap();
    let event = SelectionEvent::new(args.direction, args.from);

    let row = try_find_next_selectable_row(
        args.rows,
        |row| args.selectable.as_ref().is_none_or(|rows| rows.contains(&row)),
        event,
        wrap,
    )?;

    log::log_event(&format!(
        "{} rows, {} from {} (wrap: {}) -> {:?}",
        args.rows,
        args.direction.as_str(),
        args.from,
        wrap,
        row
    ));

    Ok(Outcome {
        row,
        direction: args.direction,
        from: args.from,
        wrap,
    })
}

fn main() -> Result<()> {
    let argv: Vec<String> = std::env::args().skip(1).collect();
    let args = match parse_args(&argv) {
        Ok(args) => args,
        Err(e) => {
            eprintln!("{}", USAGE);
            return Err(RowpickError::from(e).into());
        }
    };

    if args.help {
        println!("{}", USAGE);
        return Ok(());
    }

    let config = Config::load().with_overrides(args.wrap, args.log);

    if config.log_enabled() {
        match log::init() {
            Ok(log_path) => log::log(&format!("Log file: {}", log_path.display())),
            Err(e) => eprintln!("Warning: Failed to open log file: {}", e),
        }
    }

    let outcome = run(&args, &config)?;

    if args.json {
        println!("{}", serde_json::to_string(&outcome)?);
    } else {
        match outcome.row {
            Some(row) => println!("{}", row),
            None => println!("none"),
        }
    }

    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn argv(line: &str) -> Vec<String> {
        line.split_whitespace().map(String::from).collect()
    }

    fn config(wrap: bool) -> Config {
        Config::default().with_overrides(Some(wrap), None)
    }

    #[test]
    fn test_parse_defaults() {
        let args = parse_args(&argv("--rows 3")).unwrap();
        assert_eq!(args.rows, 3);
        assert_eq!(args.selectable, None);
        assert_eq!(args.from, -1);
        assert_eq!(args.direction, SelectionDirection::Down);
        assert_eq!(args.wrap, None);
        assert!(!args.json);
    }

    #[test]
    fn test_parse_full() {
        let args = parse_args(&argv("-n 5 -s 0,3 -f 1 -d UP --no-wrap --json --log")).unwrap();
        assert_eq!(args.rows, 5);
        assert_eq!(args.selectable, Some(BTreeSet::from([0, 3])));
        assert_eq!(args.from, 1);
        assert_eq!(args.direction, SelectionDirection::Up);
        assert_eq!(args.wrap, Some(false));
        assert!(args.json);
        assert_eq!(args.log, Some(true));
    }

    #[test]
    fn test_parse_errors() {
        assert_eq!(parse_args(&argv("")), Err(CliError::MissingRowCount));
        assert_eq!(
            parse_args(&argv("--rows")),
            Err(CliError::MissingValue("--rows".to_string()))
        );
        assert_eq!(
            parse_args(&argv("--rows 3 -d left")),
            Err(CliError::InvalidDirection("left".to_string()))
        );
        assert_eq!(
            parse_args(&argv("--rows x")),
            Err(CliError::InvalidNumber {
                flag: "--rows".to_string(),
                value: "x".to_string()
            })
        );
        assert_eq!(
            parse_args(&argv("--rows 3 --verbose")),
            Err(CliError::UnknownFlag("--verbose".to_string()))
        );
    }

    #[test]
    fn test_help_skips_row_requirement() {
        assert!(parse_args(&argv("--help")).unwrap().help);
    }

    #[test]
    fn test_run_skips_to_selectable_row() {
        let args = parse_args(&argv("--rows 5 --selectable 3 --from 1")).unwrap();
        let outcome = run(&args, &config(true)).unwrap();
        assert_eq!(outcome.row, Some(3));
    }

    #[test]
    fn test_run_respects_wrap() {
        let args = parse_args(&argv("--rows 3 --from 2")).unwrap();
        assert_eq!(run(&args, &config(true)).unwrap().row, Some(0));
        assert_eq!(run(&args, &config(false)).unwrap().row, None);
    }

    #[test]
    fn test_run_rejects_negative_rows() {
        let args = parse_args(&argv("--rows -2")).unwrap();
        let err = run(&args, &config(true)).unwrap_err();
        assert!(err.to_string().contains("negative"));
    }

    #[test]
    fn test_outcome_json() {
        let args = parse_args(&argv("--rows 3 --from 0 -d up -s 2")).unwrap();
        let outcome = run(&args, &config(true)).unwrap();
        let json = serde_json::to_string(&outcome).unwrap();
        assert_eq!(json, r#"{"row":2,"direction":"up","from":0,"wrap":true}"#);
    }
}
