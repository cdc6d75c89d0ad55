use crate::ledger::Order;
use clap::Parser;
use std::path::PathBuf;

#[derive(Debug, Parser)]
#[command(name = "bud", version)]
#[command(
    about = "Bud is a simple budget manager based on plain text files.\nIf no input FILE is given, it reads from STDIN.",
    long_about = None
)]
#[command(override_usage = "bud [--inverse] [--noheader] [--color] [--nochart] [--nototal] [FILE]")]
pub struct Cli {
    /// Transaction file with lines like `2024-01-31 food 12.50`. Use `-` for stdin.
    pub file: Option<PathBuf>,

    /// Inverse the sign of all input.
    #[arg(long, short = 'i')]
    pub inverse: bool,

    /// Display with colors.
    #[arg(long, short = 'c')]
    pub color: bool,

    /// Hide the chart and print the percentage instead.
    #[arg(long)]
    pub nochart: bool,

    /// Hide the header.
    #[arg(long)]
    pub noheader: bool,

    /// Hide the total.
    #[arg(long)]
    pub nototal: bool,

    /// Terminal width used to size the chart. Falls back to `$COLUMNS`, then the terminal size.
    #[arg(long, value_name = "COLUMNS")]
    pub width: Option<u16>,

    /// Category order in the report.
    #[arg(long, value_enum)]
    pub order: Option<Order>,

    /// Override Bud home directory (the config file is read from `<home>/config/bud.json`).
    #[arg(long, env = "BUD_HOME")]
    pub home: Option<PathBuf>,
}

impl Cli {
    /// Input path, or `None` when reading from stdin.
    pub fn input_path(&self) -> Option<&std::path::Path> {
        self.file
            .as_deref()
            .filter(|p| p.as_os_str() != "-")
    }
}
