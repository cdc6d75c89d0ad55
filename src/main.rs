mod amount;
mod cli;
mod config;
mod error;
mod ledger;
mod parse;
mod report;
mod terminal;

use anyhow::Result;
use clap::Parser;
use std::fs::File;
use std::io::{self, BufRead, BufReader, Write};

use crate::cli::Cli;
use crate::config::{config_dir, load_config};
use crate::error::BudError;
use crate::parse::accumulate;
use crate::report::Report;
use crate::terminal::{chart_width, terminal_width};

fn main() {
    env_logger::init();

    let cli = match Cli::try_parse() {
        Ok(cli) => cli,
        // Help and version go to stdout with status 0; real argument errors exit with 1.
        Err(err) if err.use_stderr() => {
            let _ = err.print();
            std::process::exit(1);
        }
        Err(err) => err.exit(),
    };

    if let Err(err) = run(&cli) {
        eprintln!("{err:#}");
        std::process::exit(1);
    }
}

fn run(cli: &Cli) -> Result<()> {
    let dir = config_dir(cli.home.as_deref())?;
    let settings = load_config(&dir)?.with_flags(cli);
    log::debug!("settings: {settings:?}");

    let input = open_input(cli)?;
    let stdout = io::stdout();
    let mut out = stdout.lock();

    let ledger = accumulate(input, settings.inverse, &mut out)?;
    if ledger.is_empty() {
        log::debug!("no entries read");
    }
    let totals = ledger.totals();
    log::debug!("{} categories, totals {totals:?}", ledger.len());

    let chart_width = chart_width(terminal_width(cli.width), settings.max_chart_width);
    log::debug!("chart width {chart_width}");

    let report = Report {
        ledger: &ledger,
        order: settings.order,
        totals,
        options: settings.display,
        chart_width,
    };
    report.write_to(&mut out).map_err(BudError::WriteOutput)?;
    out.flush().map_err(BudError::WriteOutput)?;
    Ok(())
}

fn open_input(cli: &Cli) -> Result<Box<dyn BufRead>, BudError> {
    match cli.input_path() {
        Some(path) => {
            log::debug!("reading {}", path.display());
            let file = File::open(path).map_err(|source| BudError::OpenInput {
                path: path.to_path_buf(),
                source,
            })?;
            Ok(Box::new(BufReader::new(file)))
        }
        None => {
            log::debug!("reading stdin");
            Ok(Box::new(BufReader::new(io::stdin())))
        }
    }
}
