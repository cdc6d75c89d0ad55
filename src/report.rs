use crate::ledger::{Ledger, Order, Totals};
use crate::terminal::{CHART_OFFSET, glyphs};
use rust_decimal::Decimal;
use std::io::{self, Write};

const ANSI_COLOR_RED: &str = "\x1b[31m";
const ANSI_COLOR_GREEN: &str = "\x1b[32m";
const ANSI_COLOR_RESET: &str = "\x1b[0m";

/// Width of the numeric percentage column.
const PERCENT_WIDTH: u16 = 8;

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct DisplayOptions {
    pub color: bool,
    pub chart: bool,
    pub header: bool,
    pub total: bool,
}

impl Default for DisplayOptions {
    fn default() -> Self {
        Self {
            color: false,
            chart: true,
            header: true,
            total: true,
        }
    }
}

/// Share of `cents` in the positive total, as an absolute percentage.
///
/// No guard for a zero positive total: the result is then `NaN` or infinite.
pub fn percentage(cents: i64, positive_cents: i64) -> f64 {
    (cents as f64 * 100.0 / positive_cents as f64).abs()
}

/// Number of filled chart segments. Percentages above 100 fill the whole chart,
/// `NaN` fills nothing.
pub fn filled_segments(percentage: f64, chart_width: u16) -> usize {
    let capped = if percentage > 100.0 { 100.0 } else { percentage };
    let filled = (capped * f64::from(chart_width) / 100.0).floor();
    // `as` saturates: NaN and negatives become 0.
    (filled as usize).min(usize::from(chart_width))
}

pub fn format_cents(cents: i64) -> String {
    Decimal::new(cents, 2).to_string()
}

pub struct Report<'a> {
    pub ledger: &'a Ledger,
    pub order: Order,
    pub totals: Totals,
    pub options: DisplayOptions,
    pub chart_width: u16,
}

impl Report<'_> {
    fn line_width(&self) -> usize {
        let tail = if self.options.chart {
            self.chart_width + 2
        } else {
            PERCENT_WIDTH
        };
        usize::from(CHART_OFFSET) + usize::from(tail)
    }

    pub fn write_to<W: Write>(&self, out: &mut W) -> io::Result<()> {
        if self.options.header {
            writeln!(out, "{:<15.15} {:>9} {:>8}", "CATEGORY", "EXPENSE", "PERCENT")?;
            self.write_separator(out)?;
        }

        for bucket in self.ledger.buckets(self.order) {
            let color = match bucket.total_cents {
                c if !self.options.color || c == 0 => None,
                c if c > 0 => Some(ANSI_COLOR_GREEN),
                _ => Some(ANSI_COLOR_RED),
            };
            if let Some(code) = color {
                write!(out, "{code}")?;
            }

            let pct = percentage(bucket.total_cents, self.totals.positive_cents);
            self.write_row(out, &bucket.category, bucket.total_cents, pct)?;

            if color.is_some() {
                write!(out, "{ANSI_COLOR_RESET}")?;
            }
            writeln!(out)?;
        }

        if self.options.total {
            self.write_separator(out)?;
            // Share of losses against income, not of the net.
            let pct = percentage(self.totals.negative_cents, self.totals.positive_cents);
            self.write_row(out, "TOTAL", self.totals.net_cents(), pct)?;
            writeln!(out)?;
        }

        if self.options.color {
            write!(out, "{ANSI_COLOR_RESET}")?;
        }
        Ok(())
    }

    fn write_row<W: Write>(&self, out: &mut W, label: &str, cents: i64, pct: f64) -> io::Result<()> {
        write!(out, "{:<15.15} {:>9} ", label, format_cents(cents))?;
        if self.options.chart {
            self.write_chart(out, pct)
        } else {
            write!(out, "{pct:8.2}")
        }
    }

    fn write_chart<W: Write>(&self, out: &mut W, pct: f64) -> io::Result<()> {
        let width = usize::from(self.chart_width);
        let filled = filled_segments(pct, self.chart_width);
        write!(
            out,
            "{}{}{}{}",
            glyphs::CHART_BORDER_LEFT,
            glyphs::CHART_FILLER.repeat(filled),
            " ".repeat(width - filled),
            glyphs::CHART_BORDER_RIGHT
        )
    }

    fn write_separator<W: Write>(&self, out: &mut W) -> io::Result<()> {
        writeln!(out, "{}", glyphs::HORIZONTAL_LINE.repeat(self.line_width()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ledger(entries: &[(&str, i64)]) -> Ledger {
        let mut ledger = Ledger::new();
        for (cat, cents) in entries {
            ledger.add_entry(cat, *cents);
        }
        ledger
    }

    fn render(ledger: &Ledger, options: DisplayOptions, chart_width: u16) -> String {
        let report = Report {
            ledger,
            order: Order::FirstSeen,
            totals: ledger.totals(),
            options,
            chart_width,
        };
        let mut out = Vec::new();
        report.write_to(&mut out).unwrap();
        String::from_utf8(out).unwrap()
    }

    fn numeric() -> DisplayOptions {
        DisplayOptions {
            chart: false,
            ..DisplayOptions::default()
        }
    }

    #[test]
    fn amounts_keep_two_decimals() {
        assert_eq!(format_cents(1550), "15.50");
        assert_eq!(format_cents(-50), "-0.50");
        assert_eq!(format_cents(0), "0.00");
        assert_eq!(format_cents(-80000), "-800.00");
    }

    #[test]
    fn single_category_is_one_hundred_percent() {
        let out = render(&ledger(&[("Food", 1550)]), numeric(), 50);
        let rows: Vec<&str> = out.lines().collect();
        assert_eq!(rows[0], "CATEGORY          EXPENSE  PERCENT");
        assert_eq!(rows[2], "Food                15.50   100.00");
    }

    #[test]
    fn total_row_shows_net_and_loss_share() {
        let out = render(&ledger(&[("Salary", 10000), ("Rent", -5000)]), numeric(), 50);
        let last = out.lines().last().unwrap();
        assert_eq!(last, "TOTAL               50.00    50.00");
        assert!(out.contains("Rent               -50.00    50.00"));
    }

    #[test]
    fn header_and_total_can_be_hidden() {
        let options = DisplayOptions {
            header: false,
            total: false,
            ..numeric()
        };
        let out = render(&ledger(&[("Food", 100)]), options, 50);
        assert_eq!(out, "Food                 1.00   100.00\n");
    }

    #[test]
    fn long_category_is_truncated() {
        let options = DisplayOptions {
            header: false,
            total: false,
            ..numeric()
        };
        let out = render(&ledger(&[("Entertainment and leisure", 100)]), options, 50);
        assert!(out.starts_with("Entertainment a "));
    }

    #[test]
    fn separator_spans_the_table() {
        let out = render(&ledger(&[("Food", 100)]), numeric(), 50);
        let sep = out.lines().nth(1).unwrap();
        assert_eq!(sep.chars().count(), 34);

        let out = render(&ledger(&[("Food", 100)]), DisplayOptions::default(), 50);
        let sep = out.lines().nth(1).unwrap();
        assert_eq!(sep.chars().count(), 26 + 50 + 2);
    }

    #[test]
    fn chart_fill_is_proportional() {
        let options = DisplayOptions {
            header: false,
            total: false,
            ..DisplayOptions::default()
        };
        let out = render(&ledger(&[("A", 7500), ("B", 2500)]), options, 20);
        let rows: Vec<&str> = out.lines().collect();
        let filler = glyphs::CHART_FILLER;
        assert_eq!(rows[0].matches(filler).count(), 15);
        assert_eq!(rows[1].matches(filler).count(), 5);
        assert!(rows[0].ends_with(glyphs::CHART_BORDER_RIGHT));
    }

    #[test]
    fn chart_never_overflows() {
        assert_eq!(filled_segments(250.0, 40), 40);
        assert_eq!(filled_segments(100.0, 52), 52);
        assert_eq!(filled_segments(50.0, 52), 26);
        assert_eq!(filled_segments(0.0, 52), 0);
        assert_eq!(filled_segments(50.0, 0), 0);
    }

    #[test]
    fn zero_positive_total_is_not_guarded() {
        assert!(percentage(0, 0).is_nan());
        assert!(percentage(-500, 0).is_infinite());
        assert_eq!(filled_segments(f64::NAN, 10), 0);
        assert_eq!(filled_segments(f64::INFINITY, 10), 10);

        let out = render(&ledger(&[("Rent", -500)]), numeric(), 50);
        assert!(out.contains("Rent                -5.00      inf"));
        assert!(out.contains("TOTAL               -5.00      inf"));
    }

    #[test]
    fn color_wraps_signed_rows_and_resets_at_end() {
        let options = DisplayOptions {
            color: true,
            ..numeric()
        };
        let out = render(&ledger(&[("Salary", 100), ("Rent", -50), ("Even", 0)]), options, 50);
        assert!(out.contains(&format!("{ANSI_COLOR_GREEN}Salary")));
        assert!(out.contains(&format!("{ANSI_COLOR_RED}Rent")));
        assert!(out.contains("\nEven "));
        assert!(out.ends_with(ANSI_COLOR_RESET));
    }

    #[test]
    fn no_escape_codes_without_color() {
        let out = render(&ledger(&[("Salary", 100), ("Rent", -50)]), numeric(), 50);
        assert!(!out.contains('\x1b'));
    }
}
