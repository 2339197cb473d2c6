// src/cli.rs
use std::{env, error::Error, io, path::PathBuf};

use crate::chart::text::TextRenderer;
use crate::config::options::{parse_timeout_secs, AppOptions, Source};
use crate::progress::Progress;
use crate::runner::{self, RunReport};

pub type CliResult<T> = Result<T, Box<dyn Error + Send + Sync>>;

#[derive(Debug, PartialEq)]
pub enum Command {
    Run(AppOptions),
    Help,
}

pub const HELP: &str = include_str!("cli_help.txt");

/// Prints row-level progress to stderr so stdout stays clean for charts.
#[derive(Default)]
pub struct CliProgress {
    total: usize,
}

impl Progress for CliProgress {
    fn begin(&mut self, total: usize) {
        self.total = total;
        eprintln!("Extracting {total} row(s)…");
    }
    fn log(&mut self, msg: &str) {
        eprintln!("{msg}");
    }
    fn item_failed(&mut self, row: usize, reason: &str) {
        eprintln!("  skipped row {row}/{}: {reason}", self.total);
    }
}

pub fn run() -> CliResult<()> {
    let opts = match parse_args(env::args().skip(1))? {
        Command::Help => {
            println!("{HELP}");
            return Ok(());
        }
        Command::Run(opts) => opts,
    };

    let mut progress = CliProgress::default();
    let stdout = io::stdout();
    let mut renderer = TextRenderer::new(stdout.lock(), opts.chart.width);

    let report = runner::run(&opts, Some(&mut progress), Some(&mut renderer))?;
    print_report(&report);

    if let Some(e) = report.export_error {
        return Err(e.into());
    }
    Ok(())
}

fn print_report(report: &RunReport) {
    eprintln!("{}", report.build.summary());
    for f in &report.build.failures {
        eprintln!("  {f}");
    }
    if let Some(path) = &report.exported {
        eprintln!("Wrote {}", path.display());
    }
    if let Some(charts) = &report.charts {
        if !charts.skipped_empty.is_empty() {
            eprintln!("Empty chart page(s): {:?}", charts.skipped_empty);
        }
        for e in &charts.failed {
            eprintln!("Chart {e}");
        }
    }
}

pub fn parse_args<I>(args: I) -> CliResult<Command>
where
    I: IntoIterator<Item = String>,
{
    let mut opts = AppOptions::default();
    let mut args = args.into_iter();

    while let Some(a) = args.next() {
        let mut value = |flag: &str| args.next().ok_or_else(|| format!("Missing value for {flag}"));
        match a.as_str() {
            "--url" => opts.fetch.source = Source::Remote(value("--url")?),
            "--input" => opts.fetch.source = Source::LocalFile(PathBuf::from(value("--input")?)),
            "--connect-timeout" => {
                opts.fetch.connect_timeout = parse_timeout_secs("connect", &value("--connect-timeout")?)?
            }
            "--read-timeout" => opts.fetch.read_timeout = parse_timeout_secs("read", &value("--read-timeout")?)?,
            "--on-error" => opts.extract.on_failure = value("--on-error")?.parse()?,
            "-o" | "--out" => opts.export.set_path(&value("--out")?),
            "--format" => opts.export.format = value("--format")?.parse()?,
            "--no-headers" => opts.export.include_headers = false,
            "--no-bom" => opts.export.bom = false,
            "--no-export" => opts.export.enabled = false,
            "--pages" => {
                let v = value("--pages")?;
                let n: usize = v.trim().parse().map_err(|_| format!("Invalid page count: {v}"))?;
                opts.chart.set_page_count(n)?;
            }
            "--chart-width" => {
                let v = value("--chart-width")?;
                opts.chart.width = v.trim().parse().map_err(|_| format!("Invalid chart width: {v}"))?;
            }
            "--no-chart" => opts.chart.enabled = false,
            "-h" | "--help" => return Ok(Command::Help),
            _ => return Err(format!("Unknown arg: {a}").into()),
        }
    }

    opts.fetch.validate()?;
    Ok(Command::Run(opts))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::options::{ExportFormat, FailurePolicy};
    use std::time::Duration;

    fn parse(args: &[&str]) -> CliResult<Command> {
        parse_args(args.iter().map(|s| s.to_string()))
    }

    fn opts(args: &[&str]) -> AppOptions {
        match parse(args).unwrap() {
            Command::Run(o) => o,
            Command::Help => panic!("unexpected help"),
        }
    }

    #[test]
    fn no_args_gives_defaults() {
        assert_eq!(opts(&[]), AppOptions::default());
    }

    #[test]
    fn flags_map_onto_options() {
        let o = opts(&[
            "--input", "saved.html", "--on-error", "skip", "--format", "tsv", "-o", "data/top",
            "--pages", "10", "--read-timeout", "2.5", "--no-bom",
        ]);
        assert_eq!(o.fetch.source, Source::LocalFile(PathBuf::from("saved.html")));
        assert_eq!(o.extract.on_failure, FailurePolicy::Skip);
        assert_eq!(o.export.format, ExportFormat::Tsv);
        assert!(o.export.out_path().to_string_lossy().ends_with("top.tsv"));
        assert_eq!(o.chart.page_count.get(), 10);
        assert_eq!(o.fetch.read_timeout, Duration::from_millis(2500));
        assert!(!o.export.bom);
    }

    #[test]
    fn bad_values_are_rejected() {
        assert!(parse(&["--pages", "0"]).is_err());
        assert!(parse(&["--pages", "many"]).is_err());
        assert!(parse(&["--format", "xlsx"]).is_err());
        assert!(parse(&["--on-error", "ignore"]).is_err());
        assert!(parse(&["--connect-timeout", "0"]).is_err());
        assert!(parse(&["--url"]).is_err());
        assert!(parse(&["--bogus"]).is_err());
    }

    #[test]
    fn help_short_circuits() {
        assert_eq!(parse(&["--pages", "3", "-h"]).unwrap(), Command::Help);
    }
}
