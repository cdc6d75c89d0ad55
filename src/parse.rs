use crate::amount::cents_from_parts;
use crate::error::BudError;
use crate::ledger::Ledger;
use std::io::{BufRead, Write};

pub const FIELD_SEPARATORS: &[char] = &[' ', '\t'];
pub const CURRENCY_SEPARATORS: &[char] = &[',', '.'];
const BLANK: &[char] = &[' ', '\r', '\n', '\t'];

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Entry<'a> {
    /// Read but not used for any computation.
    pub date: &'a str,
    pub category: &'a str,
    pub cents: i64,
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Line<'a> {
    Entry(Entry<'a>),
    Blank,
    Malformed,
}

/// Splits a line field by field where every field may use its own separator set.
/// Runs of separators before a field are skipped; one separator after it is consumed.
struct Fields<'a> {
    rest: &'a str,
}

impl<'a> Fields<'a> {
    fn new(line: &'a str) -> Self {
        Self { rest: line }
    }

    fn next(&mut self, separators: &[char]) -> Option<&'a str> {
        let start = self.rest.trim_start_matches(separators);
        if start.is_empty() {
            self.rest = start;
            return None;
        }

        match start.find(separators) {
            Some(end) => {
                let sep_len = start[end..].chars().next().map_or(0, char::len_utf8);
                self.rest = &start[end + sep_len..];
                Some(&start[..end])
            }
            None => {
                self.rest = "";
                Some(start)
            }
        }
    }
}

/// Classifies one input line.
///
/// Layout: `<date> <category> <major>[,.]<minor> [anything]`. The major part
/// runs from after the category up to the first comma or period.
pub fn parse_line(line: &str) -> Line<'_> {
    let mut fields = Fields::new(line);
    let date = fields.next(FIELD_SEPARATORS);
    let category = fields.next(FIELD_SEPARATORS);
    let major = fields.next(CURRENCY_SEPARATORS);
    let minor = fields.next(FIELD_SEPARATORS);

    match (date, category, major, minor) {
        (Some(date), Some(category), Some(major), Some(minor)) => Line::Entry(Entry {
            date,
            category,
            cents: cents_from_parts(major, minor),
        }),
        _ if line.trim_matches(BLANK).is_empty() => Line::Blank,
        _ => Line::Malformed,
    }
}

pub fn malformed_warning(lineno: usize) -> String {
    format!("WARNING: Entry ignored. Parsing error in line {lineno}.")
}

/// Reads every line of `input` into a fresh ledger.
///
/// Malformed lines are reported on `warnings` and skipped; blank lines are dropped.
pub fn accumulate<R: BufRead, W: Write>(
    mut input: R,
    inverse: bool,
    warnings: &mut W,
) -> Result<Ledger, BudError> {
    let mut ledger = Ledger::new();
    let mut raw = Vec::new();
    let mut lineno = 0usize;

    loop {
        raw.clear();
        // The trailing newline stays on the line: `10.\n` has an empty minor part, not a missing one.
        let read = input
            .read_until(b'\n', &mut raw)
            .map_err(BudError::ReadInput)?;
        if read == 0 {
            break;
        }
        lineno += 1;
        let line = String::from_utf8_lossy(&raw);

        match parse_line(&line) {
            Line::Entry(entry) => {
                let cents = if inverse {
                    entry.cents.saturating_neg()
                } else {
                    entry.cents
                };
                log::debug!(
                    "line {lineno}: {} {} {cents}",
                    entry.date,
                    entry.category
                );
                ledger.add_entry(entry.category, cents);
            }
            Line::Blank => log::debug!("line {lineno}: blank"),
            Line::Malformed => {
                log::warn!("line {lineno}: malformed entry {line:?}");
                writeln!(warnings, "{}", malformed_warning(lineno))
                    .map_err(BudError::WriteOutput)?;
            }
        }
    }

    Ok(ledger)
}
