/// Width of the category column, the amount column and their separators.
pub const CHART_OFFSET: u16 = 15 + 1 + 9 + 1;
const CHART_BORDERS: u16 = 2;
const FALLBACK_WIDTH: u16 = 80;

#[cfg(windows)]
pub mod glyphs {
    pub const HORIZONTAL_LINE: &str = "-";
    pub const CHART_FILLER: &str = "#";
    pub const CHART_BORDER_LEFT: &str = "|";
    pub const CHART_BORDER_RIGHT: &str = "|";
}

#[cfg(not(windows))]
pub mod glyphs {
    pub const HORIZONTAL_LINE: &str = "─";
    pub const CHART_FILLER: &str = "▆";
    pub const CHART_BORDER_LEFT: &str = "▕";
    pub const CHART_BORDER_RIGHT: &str = "▏";
}

/// Terminal width in columns: the explicit value, else a usable `$COLUMNS`,
/// else the probed size.
pub fn terminal_width(explicit: Option<u16>) -> u16 {
    if let Some(cols) = explicit {
        return cols;
    }
    let env = std::env::var("COLUMNS").ok();
    if let Some(cols) = columns_from_env(env.as_deref()) {
        return cols;
    }
    match crossterm::terminal::size() {
        Ok((cols, _rows)) if cols > 0 => cols,
        Ok(_) => FALLBACK_WIDTH,
        Err(err) => {
            log::debug!("terminal size unavailable ({err}), assuming {FALLBACK_WIDTH} columns");
            FALLBACK_WIDTH
        }
    }
}

/// `$COLUMNS` is only a hint: anything that is not a positive `u16` is ignored.
pub fn columns_from_env(raw: Option<&str>) -> Option<u16> {
    let raw = raw?;
    match raw.trim().parse::<u16>() {
        Ok(cols) if cols > 0 => Some(cols),
        _ => {
            log::debug!("ignoring COLUMNS={raw:?}");
            None
        }
    }
}

/// Number of fillable chart segments for a terminal of `width` columns.
pub fn chart_width(width: u16, max_chart_width: u16) -> u16 {
    width
        .saturating_sub(CHART_OFFSET + CHART_BORDERS)
        .min(max_chart_width)
}
