use crate::cli::Cli;
use crate::error::BudError;
use crate::ledger::Order;
use crate::report::DisplayOptions;
use anyhow::{Context, Result};
use directories::ProjectDirs;
use serde::Deserialize;
use std::fs;
use std::path::{Path, PathBuf};

pub const CONFIG_FILE: &str = "bud.json";
pub const DEFAULT_MAX_CHART_WIDTH: u16 = 100;

/// Defaults read from `bud.json`. Every field is optional.
#[derive(Debug, Clone, Deserialize, PartialEq, Eq)]
#[serde(default, deny_unknown_fields)]
pub struct AppConfig {
    pub color: bool,
    pub inverse: bool,
    pub chart: bool,
    pub header: bool,
    pub total: bool,
    pub order: Order,
    pub max_chart_width: u16,
}

impl Default for AppConfig {
    fn default() -> Self {
        Self {
            color: false,
            inverse: false,
            chart: true,
            header: true,
            total: true,
            order: Order::default(),
            max_chart_width: DEFAULT_MAX_CHART_WIDTH,
        }
    }
}

/// Effective settings for one run: config file defaults with command-line flags on top.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Settings {
    pub inverse: bool,
    pub order: Order,
    pub max_chart_width: u16,
    pub display: DisplayOptions,
}

impl AppConfig {
    pub fn with_flags(&self, cli: &Cli) -> Settings {
        Settings {
            inverse: self.inverse || cli.inverse,
            order: cli.order.unwrap_or(self.order),
            max_chart_width: self.max_chart_width,
            display: DisplayOptions {
                color: self.color || cli.color,
                chart: self.chart && !cli.nochart,
                header: self.header && !cli.noheader,
                total: self.total && !cli.nototal,
            },
        }
    }
}

pub fn config_dir(override_home: Option<&Path>) -> Result<PathBuf> {
    if let Some(home) = override_home {
        return Ok(home.join("config"));
    }

    let proj = ProjectDirs::from("com", "bud", "bud")
        .context("Failed to resolve platform directories")?;
    Ok(proj.config_dir().to_path_buf())
}

/// Loads the config file if one exists. Nothing is written back.
pub fn load_config(dir: &Path) -> Result<AppConfig, BudError> {
    let path = dir.join(CONFIG_FILE);
    if !path.exists() {
        log::debug!("no config at {}, using defaults", path.display());
        return Ok(AppConfig::default());
    }

    let raw = fs::read_to_string(&path).map_err(|source| BudError::ReadConfig {
        path: path.clone(),
        source,
    })?;
    let cfg = serde_json::from_str(&raw).map_err(|source| BudError::ParseConfig {
        path: path.clone(),
        source,
    })?;
    log::debug!("loaded config from {}", path.display());
    Ok(cfg)
}
